//! Error codes reported by the server in ERR packets.
//!
//! MySQL and MariaDB share the numeric space below
//! [`COMMON_SERVER_CODES`]'s upper bound. Above it, each dialect assigns its
//! own meanings, so the same number can name unrelated conditions depending
//! on which server sent it.

use std::ops::RangeInclusive;

use crate::{ErrorValue, Vendor};

mod common;
mod mariadb;
mod mysql;

pub use common::CommonServerErrc;
pub use mariadb::MariadbServerErrc;
pub use mysql::MysqlServerErrc;

/// Server error codes shared by every dialect.
pub const COMMON_SERVER_CODES: RangeInclusive<u16> = 1000..=1880;

/// Looks up the name of a code reported by a server of the given dialect.
///
/// Returns `None` for codes that are unassigned or user-defined (for
/// example, raised with `SIGNAL SQLSTATE ... SET MYSQL_ERRNO = ...`).
pub fn name_of(vendor: Vendor, code: u16) -> Option<&'static str> {
    if let Some(common) = common_code(code) {
        return Some(common.name());
    }
    match vendor {
        Vendor::Mysql => MysqlServerErrc::try_from(code).ok().map(MysqlServerErrc::name),
        Vendor::Mariadb => MariadbServerErrc::try_from(code).ok().map(MariadbServerErrc::name),
    }
}

fn common_code(code: u16) -> Option<CommonServerErrc> {
    if COMMON_SERVER_CODES.contains(&code) {
        CommonServerErrc::try_from(code).ok()
    } else {
        None
    }
}

impl ErrorValue {
    /// Builds the value for a code received in an ERR packet.
    ///
    /// Registered codes in the common range map to
    /// [`ErrorValue::CommonServer`]; everything else is attributed to the
    /// dialect that sent it.
    ///
    /// [`CommonServerErrc`] lists only part of the common range. An
    /// unlisted common code such as 1001 is reported with
    /// [`ErrorDomain::VendorServer`](crate::ErrorDomain::VendorServer) as its
    /// domain. Its verdict is the same either way: non-fatal.
    pub fn from_server_code(vendor: Vendor, code: u16) -> Self {
        match common_code(code) {
            Some(common) => ErrorValue::CommonServer(common),
            None => ErrorValue::VendorServer(vendor, code),
        }
    }
}
