//! Decides whether an error leaves its connection usable.
//!
//! A fatal error means the connection may no longer be aligned with the
//! protocol's framing, so it must be closed and re-established. Anything
//! else is reported to the caller while the connection stays open.
//!
//! Every match here is exhaustive: adding a domain or a registered code
//! fails to compile until it is given a verdict.

use crate::{ClientErrc, CommonServerErrc, ErrorValue};

/// Returns `true` if the connection that produced `e` must be discarded.
pub const fn is_fatal_error(e: ErrorValue) -> bool {
    match e {
        ErrorValue::None => false,
        // Transport and TLS failures leave the byte stream in an unknown
        // position relative to message boundaries.
        ErrorValue::Transport(_) => true,
        ErrorValue::TlsStream(_) => true,
        ErrorValue::TlsLibrary(_) => true,
        ErrorValue::ClientProtocol(code) => is_fatal_client(code),
        ErrorValue::CommonServer(code) => is_fatal_server(code),
        // The server reported a query-level failure over a healthy connection.
        ErrorValue::VendorServer(..) => false,
    }
}

/// Verdict for errors detected by the client.
pub const fn is_fatal_client(code: ClientErrc) -> bool {
    use ClientErrc::*;
    match code {
        // Lost track of message framing.
        IncompleteMessage
        | ProtocolValueError
        | ExtraBytes
        | SequenceNumberMismatch
        | MaxBufferSizeExceeded => true,

        // Typed rows diverged from the resultsets the server is sending.
        MetadataCheckFailed | NumResultsetsMismatch | RowTypeMismatch | StaticRowParsingError => {
            true
        }

        // The handshake did not complete.
        ServerUnsupported | UnknownAuthPlugin | AuthPluginRequiresTls | ServerDoesntSupportTls => {
            true
        }

        // Rejected before anything was written.
        WrongNumParams
        | InvalidEncoding
        | UnformattableValue
        | FormatStringInvalidSyntax
        | FormatStringInvalidEncoding
        | FormatStringManualAutoMix
        | FormatStringInvalidSpecifier
        | FormatArgNotFound
        | UnknownCharacterSet => false,

        // Pool state, not connection state.
        PoolNotRunning => false,
    }
}

/// Verdict for server errors shared by every dialect.
pub const fn is_fatal_server(code: CommonServerErrc) -> bool {
    use CommonServerErrc::*;
    match code {
        // The server observed the connection breaking down.
        ErUnknownComError
        | ErAbortingConnection
        | ErNetPacketTooLarge
        | ErNetReadErrorFromPipe
        | ErNetFcntlError
        | ErNetPacketsOutOfOrder
        | ErNetUncompressError
        | ErNetReadError
        | ErNetReadInterrupted
        | ErNetErrorOnWrite
        | ErNetWriteInterrupted
        | ErMalformedPacket
        | ErZlibZMemError
        | ErZlibZBufError
        | ErZlibZDataError => true,

        ErConCountError
        | ErDbaccessDeniedError
        | ErAccessDeniedError
        | ErNoDbError
        | ErBadNullError
        | ErBadDbError
        | ErTableExistsError
        | ErBadTableError
        | ErServerShutdown
        | ErBadFieldError
        | ErDupEntry
        | ErParseError
        | ErEmptyQuery
        | ErNoSuchThread
        | ErUnknownCharacterSet
        | ErWrongValueCountOnRow
        | ErNoSuchTable
        | ErSyntaxError
        | ErUnknownSystemVariable
        | ErLockWaitTimeout
        | ErLockDeadlock
        | ErUnknownStmtHandler
        | ErNotSupportedAuthMode
        | ErTruncatedWrongValue
        | ErSpDoesNotExist
        | ErQueryInterrupted
        | ErDataTooLong
        | ErRowIsReferenced2
        | ErNoReferencedRow2
        | ErSignalException => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_partition() {
        let fatal: Vec<&str> = ClientErrc::ALL
            .iter()
            .filter(|c| is_fatal_client(**c))
            .map(|c| c.name())
            .collect();
        assert_eq!(
            fatal,
            [
                "incomplete_message",
                "extra_bytes",
                "sequence_number_mismatch",
                "server_unsupported",
                "protocol_value_error",
                "unknown_auth_plugin",
                "auth_plugin_requires_tls",
                "server_doesnt_support_tls",
                "metadata_check_failed",
                "num_resultsets_mismatch",
                "row_type_mismatch",
                "static_row_parsing_error",
                "max_buffer_size_exceeded",
            ]
        );
    }

    #[test]
    fn test_server_partition() {
        let fatal: Vec<&str> = CommonServerErrc::ALL
            .iter()
            .filter(|c| is_fatal_server(**c))
            .map(|c| c.name())
            .collect();
        assert_eq!(
            fatal,
            [
                "ER_UNKNOWN_COM_ERROR",
                "ER_ABORTING_CONNECTION",
                "ER_NET_PACKET_TOO_LARGE",
                "ER_NET_READ_ERROR_FROM_PIPE",
                "ER_NET_FCNTL_ERROR",
                "ER_NET_PACKETS_OUT_OF_ORDER",
                "ER_NET_UNCOMPRESS_ERROR",
                "ER_NET_READ_ERROR",
                "ER_NET_READ_INTERRUPTED",
                "ER_NET_ERROR_ON_WRITE",
                "ER_NET_WRITE_INTERRUPTED",
                "ER_ZLIB_Z_MEM_ERROR",
                "ER_ZLIB_Z_BUF_ERROR",
                "ER_ZLIB_Z_DATA_ERROR",
                "ER_MALFORMED_PACKET",
            ]
        );
    }

    #[test]
    fn test_const_evaluable() {
        const NONE: bool = is_fatal_error(ErrorValue::None);
        const TLS: bool = is_fatal_error(ErrorValue::TlsLibrary(0));
        assert!(!NONE);
        assert!(TLS);
    }
}
