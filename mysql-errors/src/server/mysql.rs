use crate::macros::define_codes;

define_codes!(
    /// MySQL-specific server error codes, outside the common range.
    pub enum MysqlServerErrc: u16 in crate::ErrorDomain::VendorServer(crate::Vendor::Mysql) => {
        ErQueryTimeout = 3024 => "ER_QUERY_TIMEOUT",
            "Query execution was interrupted, maximum statement execution time exceeded",
        ErInvalidJsonText = 3140 => "ER_INVALID_JSON_TEXT", "Invalid JSON text",
        ErLockNowait = 3572 => "ER_LOCK_NOWAIT",
            "Statement aborted because lock(s) could not be acquired immediately and NOWAIT is set",
        ErCheckConstraintViolated = 3819 => "ER_CHECK_CONSTRAINT_VIOLATED",
            "Check constraint is violated",
        ErClientInteractionTimeout = 4031 => "ER_CLIENT_INTERACTION_TIMEOUT",
            "The client was disconnected by the server because of inactivity",
    }
);
