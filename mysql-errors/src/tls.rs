use crate::macros::define_codes;

define_codes!(
    /// Failures of the TLS session layer itself, independent of the TLS
    /// library's own error codes.
    pub enum TlsStreamErrc: u8 in crate::ErrorDomain::TlsStream => {
        /// The peer closed the transport without sending `close_notify`.
        StreamTruncated = 1 => "stream_truncated", "Stream truncated",
        UnspecifiedSystemError = 2 => "unspecified_system_error", "Unspecified system error",
        UnexpectedResult = 3 => "unexpected_result", "Unexpected result",
    }
);

impl TlsStreamErrc {
    /// Looks up a raw TLS stream code. Unnamed codes return `None`.
    pub fn lookup(code: i64) -> Option<Self> {
        u8::try_from(code).ok().and_then(|code| Self::try_from(code).ok())
    }
}

#[cfg(feature = "openssl")]
mod openssl_impl {
    use super::TlsStreamErrc;
    use crate::ErrorValue;
    use openssl::error::ErrorStack;
    use openssl::ssl::ErrorCode;

    impl From<&ErrorStack> for ErrorValue {
        fn from(stack: &ErrorStack) -> Self {
            let code = stack
                .errors()
                .first()
                .map(|err| i64::try_from(err.code()).unwrap_or(i64::MAX))
                .unwrap_or(0);
            ErrorValue::TlsLibrary(code)
        }
    }

    impl From<&openssl::ssl::Error> for ErrorValue {
        fn from(err: &openssl::ssl::Error) -> Self {
            if let Some(io) = err.io_error() {
                return ErrorValue::from(io);
            }
            if let Some(stack) = err.ssl_error() {
                return ErrorValue::from(stack);
            }
            let code = err.code();
            if code == ErrorCode::ZERO_RETURN || code == ErrorCode::SYSCALL {
                TlsStreamErrc::StreamTruncated.into()
            } else {
                TlsStreamErrc::UnexpectedResult.into()
            }
        }
    }
}
