use crate::macros::define_codes;

define_codes!(
    /// MariaDB-specific server error codes, outside the common range.
    pub enum MariadbServerErrc: u16 in crate::ErrorDomain::VendorServer(crate::Vendor::Mariadb) => {
        ErQueryExceededRowsExaminedLimit = 1931 => "ER_QUERY_EXCEEDED_ROWS_EXAMINED_LIMIT",
            "Query execution was interrupted. The query examined more rows than LIMIT ROWS EXAMINED allows",
        ErStatementTimeout = 1969 => "ER_STATEMENT_TIMEOUT",
            "Query execution was interrupted (max_statement_time exceeded)",
        ErConstraintFailed = 4025 => "ER_CONSTRAINT_FAILED", "CONSTRAINT failed",
    }
);
