//! Vehicle licensing status.

use std::{fmt, str::FromStr};

use super::{Enumeration, UNDEFINED_NAME};
use crate::server::error::enumeration::EnumDecodeError;

/// Licensing situation of a vehicle with the traffic authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LicensingStatus {
    #[default]
    Undefined = 0,
    Regular = 1,
    Late = 2,
    Blocked = 3,
    Seized = 4,
    Stolen = 5,
}

impl Enumeration for LicensingStatus {
    const KIND: &'static str = "licensing status";
    const UNDEFINED: Self = Self::Undefined;
    const MEMBERS: &'static [Self] = &[
        Self::Regular,
        Self::Late,
        Self::Blocked,
        Self::Seized,
        Self::Stolen,
    ];

    fn code(self) -> i64 {
        self as i64
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Undefined => UNDEFINED_NAME,
            Self::Regular => "REGULAR",
            Self::Late => "LATE",
            Self::Blocked => "BLOCKED",
            Self::Seized => "SEIZED",
            Self::Stolen => "STOLEN",
        }
    }
}

impl fmt::Display for LicensingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for LicensingStatus {
    type Err = EnumDecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}
