//! User roles.

use std::{fmt, str::FromStr};

use super::{Enumeration, UNDEFINED_NAME};
use crate::server::error::enumeration::EnumDecodeError;

/// Role held by a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Undefined = 0,
    Administrator = 1,
    Employee = 2,
    Driver = 3,
}

impl Enumeration for Role {
    const KIND: &'static str = "role";
    const UNDEFINED: Self = Self::Undefined;
    const MEMBERS: &'static [Self] = &[Self::Administrator, Self::Employee, Self::Driver];

    fn code(self) -> i64 {
        self as i64
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Undefined => UNDEFINED_NAME,
            Self::Administrator => "ADMINISTRATOR",
            Self::Employee => "EMPLOYEE",
            Self::Driver => "DRIVER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Role {
    type Err = EnumDecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}
