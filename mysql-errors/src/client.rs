use crate::macros::define_codes;

define_codes!(
    /// Errors detected by the client itself, either while parsing what the
    /// server sent or while validating what the caller asked for.
    pub enum ClientErrc: u16 in crate::ErrorDomain::ClientProtocol => {
        /// The server closed the message before all of its declared bytes arrived.
        IncompleteMessage = 1 => "incomplete_message",
            "An incomplete message was received from the server",
        ExtraBytes = 2 => "extra_bytes",
            "Unexpected extra bytes at the end of a message were received",
        SequenceNumberMismatch = 3 => "sequence_number_mismatch",
            "Mismatched sequence numbers",
        /// The server is missing capabilities this client requires.
        ServerUnsupported = 4 => "server_unsupported",
            "The server does not implement the minimum features to be supported",
        ProtocolValueError = 5 => "protocol_value_error",
            "An unexpected value was found in a server-received message",
        UnknownAuthPlugin = 6 => "unknown_auth_plugin",
            "The user employs an authentication plugin not known to this library",
        AuthPluginRequiresTls = 7 => "auth_plugin_requires_tls",
            "The authentication plugin requires the connection to use TLS",
        WrongNumParams = 8 => "wrong_num_params",
            "The provided parameter count does not match the prepared statement parameter count",
        ServerDoesntSupportTls = 9 => "server_doesnt_support_tls",
            "The connection is configured to require TLS, but the server doesn't allow TLS connections",
        /// Typed rows declared by the caller do not match the result metadata.
        MetadataCheckFailed = 10 => "metadata_check_failed",
            "A mismatch was detected between the declared row types and the metadata returned by the server",
        NumResultsetsMismatch = 11 => "num_resultsets_mismatch",
            "The number of declared row types does not match the number of resultsets returned by the query",
        RowTypeMismatch = 12 => "row_type_mismatch",
            "The row type passed to a read operation does not correspond to the resultset being read",
        StaticRowParsingError = 13 => "static_row_parsing_error",
            "An error occurred while parsing a field into a typed row",
        PoolNotRunning = 14 => "pool_not_running",
            "The connection pool is not running",
        InvalidEncoding = 15 => "invalid_encoding",
            "A string passed to a formatting function contains invalid characters",
        UnformattableValue = 16 => "unformattable_value",
            "A formatting operation could not format one of its arguments",
        FormatStringInvalidSyntax = 17 => "format_string_invalid_syntax",
            "A format string containing invalid syntax was provided to a SQL formatting function",
        FormatStringInvalidEncoding = 18 => "format_string_invalid_encoding",
            "A format string with an invalid byte sequence was provided to a SQL formatting function",
        FormatStringManualAutoMix = 19 => "format_string_manual_auto_mix",
            "A format string mixes manual (e.g. {0}) and automatic (e.g. {}) argument indexing",
        FormatStringInvalidSpecifier = 20 => "format_string_invalid_specifier",
            "A format string contains an unsupported format specifier",
        FormatArgNotFound = 21 => "format_arg_not_found",
            "A format argument referenced by a format string was not found",
        UnknownCharacterSet = 22 => "unknown_character_set",
            "The character set used by the connection is not known to the client",
        /// A single message would not fit in the configured read or write buffer.
        MaxBufferSizeExceeded = 23 => "max_buffer_size_exceeded",
            "An operation attempted to read or write data larger than the buffer size limit",
    }
);
