use std::{fmt, io};

use crate::{server, ClientErrc, CommonServerErrc, TlsStreamErrc};

/// A server dialect.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vendor {
    #[display("MySQL")]
    Mysql,
    #[display("MariaDB")]
    Mariadb,
}

/// The subsystem that produced an error.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorDomain {
    /// No error occurred.
    #[display("no error")]
    None,
    /// Socket and other OS-level failures.
    #[display("transport")]
    Transport,
    /// TLS session framing, independent of the TLS library.
    #[display("TLS stream")]
    TlsStream,
    /// Opaque numeric codes from the TLS library.
    #[display("TLS library")]
    TlsLibrary,
    /// Errors detected by the client.
    #[display("client protocol")]
    ClientProtocol,
    /// Server errors shared by every dialect.
    #[display("common server")]
    CommonServer,
    /// Server errors specific to one dialect, including user-defined codes.
    #[display("{_0} server")]
    VendorServer(Vendor),
}

/// A `(domain, code)` pair could not be turned into an [`ErrorValue`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown code {code} in the {domain} domain")]
pub struct UnknownCodeError {
    pub domain: ErrorDomain,
    pub code: i64,
}

impl UnknownCodeError {
    pub const fn new(domain: ErrorDomain, code: i64) -> Self {
        Self { domain, code }
    }
}

/// An OS-level transport failure.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TransportCode {
    kind: io::ErrorKind,
    raw_os_error: Option<i32>,
}

impl TransportCode {
    pub fn from_raw_os_error(code: i32) -> Self {
        Self {
            kind: io::Error::from_raw_os_error(code).kind(),
            raw_os_error: Some(code),
        }
    }

    pub const fn from_kind(kind: io::ErrorKind) -> Self {
        Self {
            kind,
            raw_os_error: None,
        }
    }

    pub const fn kind(&self) -> io::ErrorKind {
        self.kind
    }

    pub const fn raw_os_error(&self) -> Option<i32> {
        self.raw_os_error
    }
}

impl From<&io::Error> for TransportCode {
    fn from(err: &io::Error) -> Self {
        Self {
            kind: err.kind(),
            raw_os_error: err.raw_os_error(),
        }
    }
}

impl fmt::Display for TransportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.raw_os_error {
            Some(code) => fmt::Display::fmt(&io::Error::from_raw_os_error(code), f),
            None => fmt::Display::fmt(&self.kind, f),
        }
    }
}

/// An error observed on a connection, tagged with the domain that produced it.
///
/// Each domain carries its own code type, so a value can only hold codes
/// that exist in that domain. Text attached to an error lives in
/// [`Diagnostics`](crate::Diagnostics), never here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum ErrorValue {
    #[default]
    None,
    Transport(TransportCode),
    /// Named codes are listed in [`TlsStreamErrc`]; any other value is
    /// still a TLS stream failure.
    TlsStream(i64),
    /// Any value is possible; the TLS library's code space is not enumerated.
    TlsLibrary(i64),
    ClientProtocol(ClientErrc),
    CommonServer(CommonServerErrc),
    VendorServer(Vendor, u16),
}

impl ErrorValue {
    pub const fn domain(&self) -> ErrorDomain {
        match self {
            ErrorValue::None => ErrorDomain::None,
            ErrorValue::Transport(_) => ErrorDomain::Transport,
            ErrorValue::TlsStream(_) => ErrorDomain::TlsStream,
            ErrorValue::TlsLibrary(_) => ErrorDomain::TlsLibrary,
            ErrorValue::ClientProtocol(_) => ErrorDomain::ClientProtocol,
            ErrorValue::CommonServer(_) => ErrorDomain::CommonServer,
            ErrorValue::VendorServer(vendor, _) => ErrorDomain::VendorServer(*vendor),
        }
    }

    /// The numeric code, if this domain has one.
    ///
    /// Transport errors that did not come from the OS have no code.
    pub const fn code(&self) -> Option<i64> {
        match self {
            ErrorValue::None => None,
            ErrorValue::Transport(code) => match code.raw_os_error {
                Some(raw) => Some(raw as i64),
                None => None,
            },
            ErrorValue::TlsStream(code) => Some(*code),
            ErrorValue::TlsLibrary(code) => Some(*code),
            ErrorValue::ClientProtocol(code) => Some(code.value() as i64),
            ErrorValue::CommonServer(code) => Some(code.value() as i64),
            ErrorValue::VendorServer(_, code) => Some(*code as i64),
        }
    }

    /// Returns `true` unless this is [`ErrorValue::None`].
    pub const fn is_err(&self) -> bool {
        !matches!(self, ErrorValue::None)
    }

    /// Whether the connection that produced this error must be discarded.
    pub const fn is_fatal(&self) -> bool {
        crate::is_fatal_error(*self)
    }

    /// Builds a value from a raw `(domain, code)` pair.
    ///
    /// Client and common server codes must be registered. Codes that do not
    /// fit the domain's numeric width are rejected. TLS codes are never
    /// rejected. The code is ignored for [`ErrorDomain::None`].
    pub fn from_parts(domain: ErrorDomain, code: i64) -> Result<Self, UnknownCodeError> {
        Ok(match domain {
            ErrorDomain::None => ErrorValue::None,
            ErrorDomain::Transport => {
                ErrorValue::Transport(TransportCode::from_raw_os_error(narrow(domain, code)?))
            }
            ErrorDomain::TlsStream => ErrorValue::TlsStream(code),
            ErrorDomain::TlsLibrary => ErrorValue::TlsLibrary(code),
            ErrorDomain::ClientProtocol => {
                ErrorValue::ClientProtocol(ClientErrc::try_from(narrow::<u16>(domain, code)?)?)
            }
            ErrorDomain::CommonServer => {
                ErrorValue::CommonServer(CommonServerErrc::try_from(narrow::<u16>(domain, code)?)?)
            }
            ErrorDomain::VendorServer(vendor) => {
                ErrorValue::VendorServer(vendor, narrow(domain, code)?)
            }
        })
    }
}

fn narrow<T: TryFrom<i64>>(domain: ErrorDomain, code: i64) -> Result<T, UnknownCodeError> {
    T::try_from(code).map_err(|_| UnknownCodeError::new(domain, code))
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorValue::None => f.write_str("No error"),
            ErrorValue::Transport(code) => fmt::Display::fmt(code, f),
            ErrorValue::TlsStream(code) => match TlsStreamErrc::lookup(*code) {
                Some(known) => fmt::Display::fmt(&known, f),
                None => write!(f, "TLS stream error {code}"),
            },
            ErrorValue::TlsLibrary(code) => write!(f, "TLS library error {code}"),
            ErrorValue::ClientProtocol(code) => fmt::Display::fmt(code, f),
            ErrorValue::CommonServer(code) => {
                write!(f, "{} [{}]: {}", code.name(), code.value(), code.message())
            }
            ErrorValue::VendorServer(vendor, code) => match server::name_of(*vendor, *code) {
                Some(name) => write!(f, "{name} [{code}]"),
                None => write!(f, "{vendor} server error {code}"),
            },
        }
    }
}

impl From<&io::Error> for ErrorValue {
    fn from(err: &io::Error) -> Self {
        ErrorValue::Transport(err.into())
    }
}

impl From<io::Error> for ErrorValue {
    fn from(err: io::Error) -> Self {
        ErrorValue::from(&err)
    }
}

impl From<io::ErrorKind> for ErrorValue {
    fn from(kind: io::ErrorKind) -> Self {
        ErrorValue::Transport(TransportCode::from_kind(kind))
    }
}

impl From<ClientErrc> for ErrorValue {
    fn from(code: ClientErrc) -> Self {
        ErrorValue::ClientProtocol(code)
    }
}

impl From<CommonServerErrc> for ErrorValue {
    fn from(code: CommonServerErrc) -> Self {
        ErrorValue::CommonServer(code)
    }
}

impl From<TlsStreamErrc> for ErrorValue {
    fn from(code: TlsStreamErrc) -> Self {
        ErrorValue::TlsStream(code.value().into())
    }
}

/// Serialized as the `(domain, code)` pair.
#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct RawErrorValue {
        domain: ErrorDomain,
        code: Option<i64>,
    }

    impl Serialize for ErrorValue {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            RawErrorValue {
                domain: self.domain(),
                code: self.code(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for ErrorValue {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawErrorValue::deserialize(deserializer)?;
            match (raw.domain, raw.code) {
                (ErrorDomain::None, _) => Ok(ErrorValue::None),
                // OS-less transport errors lose their kind on the wire.
                (ErrorDomain::Transport, None) => Ok(io::ErrorKind::Other.into()),
                (domain, Some(code)) => {
                    ErrorValue::from_parts(domain, code).map_err(serde::de::Error::custom)
                }
                (domain, None) => Err(serde::de::Error::custom(format!(
                    "missing code for the {domain} domain"
                ))),
            }
        }
    }
}
