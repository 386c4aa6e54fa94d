use crate::macros::define_codes;

define_codes!(
    /// Server error codes defined by the wire protocol and shared by every
    /// server dialect.
    ///
    /// This is not the complete table: it covers every code that says
    /// something about connection health, plus the query-level failures a
    /// client most often needs to match on.
    pub enum CommonServerErrc: u16 in crate::ErrorDomain::CommonServer => {
        ErConCountError = 1040 => "ER_CON_COUNT_ERROR", "Too many connections",
        ErDbaccessDeniedError = 1044 => "ER_DBACCESS_DENIED_ERROR",
            "Access denied for user to database",
        ErAccessDeniedError = 1045 => "ER_ACCESS_DENIED_ERROR", "Access denied for user",
        ErNoDbError = 1046 => "ER_NO_DB_ERROR", "No database selected",
        ErUnknownComError = 1047 => "ER_UNKNOWN_COM_ERROR", "Unknown command",
        ErBadNullError = 1048 => "ER_BAD_NULL_ERROR", "Column cannot be null",
        ErBadDbError = 1049 => "ER_BAD_DB_ERROR", "Unknown database",
        ErTableExistsError = 1050 => "ER_TABLE_EXISTS_ERROR", "Table already exists",
        ErBadTableError = 1051 => "ER_BAD_TABLE_ERROR", "Unknown table",
        ErServerShutdown = 1053 => "ER_SERVER_SHUTDOWN", "Server shutdown in progress",
        ErBadFieldError = 1054 => "ER_BAD_FIELD_ERROR", "Unknown column",
        ErDupEntry = 1062 => "ER_DUP_ENTRY", "Duplicate entry for key",
        ErParseError = 1064 => "ER_PARSE_ERROR", "You have an error in your SQL syntax",
        ErEmptyQuery = 1065 => "ER_EMPTY_QUERY", "Query was empty",
        ErNoSuchThread = 1094 => "ER_NO_SUCH_THREAD", "Unknown thread id",
        ErUnknownCharacterSet = 1115 => "ER_UNKNOWN_CHARACTER_SET", "Unknown character set",
        ErWrongValueCountOnRow = 1136 => "ER_WRONG_VALUE_COUNT_ON_ROW",
            "Column count doesn't match value count",
        ErNoSuchTable = 1146 => "ER_NO_SUCH_TABLE", "Table doesn't exist",
        ErSyntaxError = 1149 => "ER_SYNTAX_ERROR", "You have an error in your SQL syntax",
        ErAbortingConnection = 1152 => "ER_ABORTING_CONNECTION", "Aborted connection",
        ErNetPacketTooLarge = 1153 => "ER_NET_PACKET_TOO_LARGE",
            "Got a packet bigger than 'max_allowed_packet' bytes",
        ErNetReadErrorFromPipe = 1154 => "ER_NET_READ_ERROR_FROM_PIPE",
            "Got a read error from the connection pipe",
        ErNetFcntlError = 1155 => "ER_NET_FCNTL_ERROR", "Got an error from fcntl()",
        ErNetPacketsOutOfOrder = 1156 => "ER_NET_PACKETS_OUT_OF_ORDER", "Got packets out of order",
        ErNetUncompressError = 1157 => "ER_NET_UNCOMPRESS_ERROR",
            "Couldn't uncompress communication packet",
        ErNetReadError = 1158 => "ER_NET_READ_ERROR", "Got an error reading communication packets",
        ErNetReadInterrupted = 1159 => "ER_NET_READ_INTERRUPTED",
            "Got timeout reading communication packets",
        ErNetErrorOnWrite = 1160 => "ER_NET_ERROR_ON_WRITE",
            "Got an error writing communication packets",
        ErNetWriteInterrupted = 1161 => "ER_NET_WRITE_INTERRUPTED",
            "Got timeout writing communication packets",
        ErUnknownSystemVariable = 1193 => "ER_UNKNOWN_SYSTEM_VARIABLE", "Unknown system variable",
        ErLockWaitTimeout = 1205 => "ER_LOCK_WAIT_TIMEOUT",
            "Lock wait timeout exceeded; try restarting transaction",
        ErLockDeadlock = 1213 => "ER_LOCK_DEADLOCK",
            "Deadlock found when trying to get lock; try restarting transaction",
        ErUnknownStmtHandler = 1243 => "ER_UNKNOWN_STMT_HANDLER",
            "Unknown prepared statement handler",
        ErNotSupportedAuthMode = 1251 => "ER_NOT_SUPPORTED_AUTH_MODE",
            "Client does not support authentication protocol requested by server",
        ErZlibZMemError = 1257 => "ER_ZLIB_Z_MEM_ERROR", "ZLIB: Not enough memory",
        ErZlibZBufError = 1258 => "ER_ZLIB_Z_BUF_ERROR",
            "ZLIB: Not enough room in the output buffer",
        ErZlibZDataError = 1259 => "ER_ZLIB_Z_DATA_ERROR", "ZLIB: Input data corrupted",
        ErTruncatedWrongValue = 1292 => "ER_TRUNCATED_WRONG_VALUE", "Truncated incorrect value",
        ErSpDoesNotExist = 1305 => "ER_SP_DOES_NOT_EXIST", "Stored routine does not exist",
        ErQueryInterrupted = 1317 => "ER_QUERY_INTERRUPTED", "Query execution was interrupted",
        ErDataTooLong = 1406 => "ER_DATA_TOO_LONG", "Data too long for column",
        ErRowIsReferenced2 = 1451 => "ER_ROW_IS_REFERENCED_2",
            "Cannot delete or update a parent row: a foreign key constraint fails",
        ErNoReferencedRow2 = 1452 => "ER_NO_REFERENCED_ROW_2",
            "Cannot add or update a child row: a foreign key constraint fails",
        ErSignalException = 1644 => "ER_SIGNAL_EXCEPTION",
            "Unhandled user-defined exception condition",
        ErMalformedPacket = 1835 => "ER_MALFORMED_PACKET", "Malformed communication packet",
    }
);
