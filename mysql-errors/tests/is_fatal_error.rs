use std::io;

use mysql_errors::{
    is_fatal_error, ClientErrc, CommonServerErrc, ErrorDomain, ErrorValue, MariadbServerErrc,
    MysqlServerErrc, TlsStreamErrc, TransportCode, Vendor,
};
use rstest::rstest;

fn mysql(code: u16) -> ErrorValue {
    ErrorValue::VendorServer(Vendor::Mysql, code)
}

fn mariadb(code: u16) -> ErrorValue {
    ErrorValue::VendorServer(Vendor::Mariadb, code)
}

#[rstest]
// No error
#[case::success(ErrorValue::None, false)]
// Network errors
#[case::net_eof(io::ErrorKind::ConnectionAborted.into(), true)]
#[case::net_cancelled(io::ErrorKind::Interrupted.into(), true)]
#[case::net_reset(io::ErrorKind::ConnectionReset.into(), true)]
#[case::net_unexpected_eof(io::ErrorKind::UnexpectedEof.into(), true)]
// TLS session layer
#[case::tls_stream(TlsStreamErrc::StreamTruncated.into(), true)]
// TLS library: any numeric value may be produced
#[case::tls_library(ErrorValue::TlsLibrary(1623), true)]
// Other system errors
#[case::system(io::ErrorKind::BrokenPipe.into(), true)]
// Client errors affecting frame parsing
#[case::incomplete_message(ClientErrc::IncompleteMessage.into(), true)]
#[case::protocol_value_error(ClientErrc::ProtocolValueError.into(), true)]
#[case::extra_bytes(ClientErrc::ExtraBytes.into(), true)]
#[case::sequence_number_mismatch(ClientErrc::SequenceNumberMismatch.into(), true)]
#[case::max_buffer_size_exceeded(ClientErrc::MaxBufferSizeExceeded.into(), true)]
// Client errors affecting typed rows
#[case::metadata_check_failed(ClientErrc::MetadataCheckFailed.into(), true)]
#[case::num_resultsets_mismatch(ClientErrc::NumResultsetsMismatch.into(), true)]
#[case::row_type_mismatch(ClientErrc::RowTypeMismatch.into(), true)]
#[case::static_row_parsing_error(ClientErrc::StaticRowParsingError.into(), true)]
// Client errors affecting the handshake
#[case::server_unsupported(ClientErrc::ServerUnsupported.into(), true)]
#[case::unknown_auth_plugin(ClientErrc::UnknownAuthPlugin.into(), true)]
#[case::auth_plugin_requires_tls(ClientErrc::AuthPluginRequiresTls.into(), true)]
#[case::server_doesnt_support_tls(ClientErrc::ServerDoesntSupportTls.into(), true)]
// Other client errors
#[case::wrong_num_params(ClientErrc::WrongNumParams.into(), false)]
#[case::pool_not_running(ClientErrc::PoolNotRunning.into(), false)]
#[case::invalid_encoding(ClientErrc::InvalidEncoding.into(), false)]
#[case::unformattable_value(ClientErrc::UnformattableValue.into(), false)]
#[case::format_string_invalid_syntax(ClientErrc::FormatStringInvalidSyntax.into(), false)]
#[case::format_string_invalid_encoding(ClientErrc::FormatStringInvalidEncoding.into(), false)]
#[case::format_string_manual_auto_mix(ClientErrc::FormatStringManualAutoMix.into(), false)]
#[case::format_string_invalid_specifier(ClientErrc::FormatStringInvalidSpecifier.into(), false)]
#[case::format_arg_not_found(ClientErrc::FormatArgNotFound.into(), false)]
#[case::unknown_character_set(ClientErrc::UnknownCharacterSet.into(), false)]
// Fatal server errors
#[case::er_unknown_com_error(CommonServerErrc::ErUnknownComError.into(), true)]
#[case::er_aborting_connection(CommonServerErrc::ErAbortingConnection.into(), true)]
#[case::er_net_packet_too_large(CommonServerErrc::ErNetPacketTooLarge.into(), true)]
#[case::er_net_read_error_from_pipe(CommonServerErrc::ErNetReadErrorFromPipe.into(), true)]
#[case::er_net_fcntl_error(CommonServerErrc::ErNetFcntlError.into(), true)]
#[case::er_net_packets_out_of_order(CommonServerErrc::ErNetPacketsOutOfOrder.into(), true)]
#[case::er_net_uncompress_error(CommonServerErrc::ErNetUncompressError.into(), true)]
#[case::er_net_read_error(CommonServerErrc::ErNetReadError.into(), true)]
#[case::er_net_read_interrupted(CommonServerErrc::ErNetReadInterrupted.into(), true)]
#[case::er_net_error_on_write(CommonServerErrc::ErNetErrorOnWrite.into(), true)]
#[case::er_net_write_interrupted(CommonServerErrc::ErNetWriteInterrupted.into(), true)]
#[case::er_malformed_packet(CommonServerErrc::ErMalformedPacket.into(), true)]
#[case::er_zlib_z_mem_error(CommonServerErrc::ErZlibZMemError.into(), true)]
#[case::er_zlib_z_buf_error(CommonServerErrc::ErZlibZBufError.into(), true)]
#[case::er_zlib_z_data_error(CommonServerErrc::ErZlibZDataError.into(), true)]
// Non-fatal server errors
#[case::er_no_such_table(CommonServerErrc::ErNoSuchTable.into(), false)]
#[case::er_bad_db_error(CommonServerErrc::ErBadDbError.into(), false)]
// Server-specific or user-defined errors
#[case::mysql_specific(mysql(MysqlServerErrc::ErInvalidJsonText.value()), false)]
#[case::mariadb_specific(mariadb(MariadbServerErrc::ErStatementTimeout.value()), false)]
#[case::mysql_user_defined(mysql(9812), false)]
#[case::mariadb_user_defined(mariadb(9812), false)]
fn test_is_fatal_error(#[case] input: ErrorValue, #[case] expected: bool) {
    assert_eq!(is_fatal_error(input), expected, "{input:?}");
    // Same input, same answer.
    assert_eq!(is_fatal_error(input), is_fatal_error(input));
    assert_eq!(input.is_fatal(), expected);
}

#[rstest]
fn test_os_errors_are_fatal(#[values(0, 1, 32, 104, 1623, -1, i32::MIN, i32::MAX)] code: i32) {
    assert!(is_fatal_error(ErrorValue::Transport(
        TransportCode::from_raw_os_error(code)
    )));
    assert!(is_fatal_error(ErrorValue::from(io::Error::from_raw_os_error(code))));
}

#[rstest]
fn test_tls_library_is_fatal(#[values(0, 1, 1623, -1, i64::MIN, i64::MAX)] code: i64) {
    assert!(is_fatal_error(ErrorValue::TlsLibrary(code)));
}

#[test]
fn test_named_tls_stream_is_fatal() {
    for code in TlsStreamErrc::ALL {
        assert!(is_fatal_error((*code).into()));
    }
}

#[rstest]
fn test_tls_stream_is_fatal(#[values(0, 1, 4, 1623, -1, i64::MIN, i64::MAX)] code: i64) {
    let value = ErrorValue::from_parts(ErrorDomain::TlsStream, code).unwrap();
    assert_eq!(value, ErrorValue::TlsStream(code));
    assert!(is_fatal_error(value));
}

#[rstest]
fn test_vendor_errors_are_not_fatal(
    #[values(Vendor::Mysql, Vendor::Mariadb)] vendor: Vendor,
    #[values(0, 1146, 1969, 3024, 4025, 9812, u16::MAX)] code: u16,
) {
    assert!(!is_fatal_error(ErrorValue::VendorServer(vendor, code)));
}

/// Vendor verdicts agree across dialects for the same number.
#[test]
fn test_vendor_independence() {
    for code in 0..=u16::MAX {
        assert_eq!(is_fatal_error(mysql(code)), is_fatal_error(mariadb(code)));
    }
}

/// Every server code has a verdict whatever its routing.
#[rstest]
fn test_server_code_space(#[values(Vendor::Mysql, Vendor::Mariadb)] vendor: Vendor) {
    let fatal = (0..=u16::MAX)
        .filter(|code| is_fatal_error(ErrorValue::from_server_code(vendor, *code)))
        .count();
    let expected = CommonServerErrc::ALL
        .iter()
        .filter(|code| mysql_errors::is_fatal_server(**code))
        .count();
    assert_eq!(fatal, expected);
    assert_eq!(fatal, 15);
}

/// Every registered client code appears in exactly one group.
#[test]
fn test_client_code_space() {
    let fatal = ClientErrc::ALL
        .iter()
        .filter(|code| mysql_errors::is_fatal_client(**code))
        .count();
    assert_eq!(fatal, 13);
    assert_eq!(ClientErrc::ALL.len() - fatal, 10);
}

#[rstest]
#[case(ErrorDomain::Transport, 32, true)]
#[case(ErrorDomain::TlsLibrary, 1623, true)]
#[case(ErrorDomain::TlsStream, 1623, true)]
#[case(ErrorDomain::ClientProtocol, ClientErrc::IncompleteMessage.value().into(), true)]
#[case(ErrorDomain::ClientProtocol, ClientErrc::WrongNumParams.value().into(), false)]
#[case(ErrorDomain::CommonServer, 1835, true)]
#[case(ErrorDomain::CommonServer, 1146, false)]
#[case(ErrorDomain::VendorServer(Vendor::Mysql), 9812, false)]
#[case(ErrorDomain::VendorServer(Vendor::Mariadb), 4025, false)]
#[case(ErrorDomain::None, 0, false)]
fn test_from_parts(#[case] domain: ErrorDomain, #[case] code: i64, #[case] expected: bool) {
    let value = ErrorValue::from_parts(domain, code).unwrap();
    assert_eq!(value.domain(), domain);
    assert_eq!(is_fatal_error(value), expected);
}

#[test]
fn test_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                ClientErrc::ALL
                    .iter()
                    .map(|code| is_fatal_error((*code).into()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let expected: Vec<_> = ClientErrc::ALL
        .iter()
        .map(|code| is_fatal_error((*code).into()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
