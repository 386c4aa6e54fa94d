#![doc = include_str!("../README.md")]

mod client;
mod diagnostics;
mod fatal;
mod macros;
pub mod server;
mod tls;
mod value;

pub use client::ClientErrc;
pub use diagnostics::{Diagnostics, Disposition, Error};
pub use fatal::{is_fatal_client, is_fatal_error, is_fatal_server};
pub use server::{CommonServerErrc, MariadbServerErrc, MysqlServerErrc};
pub use tls::TlsStreamErrc;
pub use value::{ErrorDomain, ErrorValue, TransportCode, UnknownCodeError, Vendor};
