use std::fmt;

use crate::{is_fatal_error, ClientErrc, CommonServerErrc, ErrorValue};

/// Text attached to an error.
///
/// Only for humans. Whether a connection survives is decided from the
/// [`ErrorValue`] alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    server_message: Option<String>,
    client_message: Option<String>,
}

impl Diagnostics {
    /// The message sent by the server in an ERR packet.
    pub fn server(message: impl Into<String>) -> Self {
        Self {
            server_message: Some(message.into()),
            client_message: None,
        }
    }

    /// Extra context produced by the client.
    pub fn client(message: impl Into<String>) -> Self {
        Self {
            server_message: None,
            client_message: Some(message.into()),
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        self.server_message.as_deref()
    }

    pub fn client_message(&self) -> Option<&str> {
        self.client_message.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.server_message.is_none() && self.client_message.is_none()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.server_message {
            write!(f, ": {message}")?;
        }
        if let Some(message) = &self.client_message {
            write!(f, " ({message})")?;
        }
        Ok(())
    }
}

/// What the connection owner should do after an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum Disposition {
    /// Close the connection and establish a new one.
    #[display("discard")]
    Discard,
    /// Report the error and keep using the connection.
    #[display("reuse")]
    Reuse,
}

impl Disposition {
    pub const fn of(value: &ErrorValue) -> Self {
        if is_fatal_error(*value) {
            Disposition::Discard
        } else {
            Disposition::Reuse
        }
    }
}

/// An error with its classification value, diagnostics and underlying cause.
#[derive(Debug, derive_more::Display)]
#[display("{value}{diagnostics}")]
pub struct Error {
    value: ErrorValue,
    diagnostics: Diagnostics,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    pub fn new(value: impl Into<ErrorValue>) -> Self {
        Self {
            value: value.into(),
            diagnostics: Diagnostics::default(),
            source: None,
        }
    }

    pub fn with_diagnostics(value: impl Into<ErrorValue>, diagnostics: Diagnostics) -> Self {
        Self {
            value: value.into(),
            diagnostics,
            source: None,
        }
    }

    pub fn with_source(
        value: impl Into<ErrorValue>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            value: value.into(),
            diagnostics: Diagnostics::default(),
            source: Some(Box::new(source)),
        }
    }

    /// An error reported by the server in an ERR packet.
    pub fn server(vendor: crate::Vendor, code: u16, message: impl Into<String>) -> Self {
        Self::with_diagnostics(
            ErrorValue::from_server_code(vendor, code),
            Diagnostics::server(message),
        )
    }

    pub fn value(&self) -> ErrorValue {
        self.value
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn is_fatal(&self) -> bool {
        is_fatal_error(self.value)
    }

    /// Classifies this error for the connection that produced it.
    pub fn disposition(&self) -> Disposition {
        let disposition = Disposition::of(&self.value);
        match disposition {
            Disposition::Discard => tracing::debug!(
                domain = %self.value.domain(),
                code = ?self.value.code(),
                error = %self,
                "Fatal error, discarding connection"
            ),
            Disposition::Reuse => tracing::trace!(
                domain = %self.value.domain(),
                code = ?self.value.code(),
                error = %self,
                "Non-fatal error, connection remains usable"
            ),
        }
        disposition
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorValue::from(&err), err)
    }
}

impl From<ErrorValue> for Error {
    fn from(value: ErrorValue) -> Self {
        Self::new(value)
    }
}

impl From<ClientErrc> for Error {
    fn from(code: ClientErrc) -> Self {
        Self::new(code)
    }
}

impl From<CommonServerErrc> for Error {
    fn from(code: CommonServerErrc) -> Self {
        Self::new(code)
    }
}

#[cfg(feature = "openssl")]
impl From<openssl::ssl::Error> for Error {
    fn from(err: openssl::ssl::Error) -> Self {
        Self::with_source(ErrorValue::from(&err), err)
    }
}

#[cfg(feature = "openssl")]
impl From<openssl::error::ErrorStack> for Error {
    fn from(err: openssl::error::ErrorStack) -> Self {
        Self::with_source(ErrorValue::from(&err), err)
    }
}
