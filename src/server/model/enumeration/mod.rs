//! Closed enumerations persisted as upper-case display strings.
//!
//! Every enumeration reserves code `0` for `Undefined`, a sentinel that is never a
//! legitimate stored value. Lookup by name is case-insensitive and never yields
//! `Undefined`; changing a value goes through [`Enumeration::transition`].

pub mod brazilian_state;
pub mod licensing_status;
pub mod role;

pub use brazilian_state::BrazilianState;
pub use licensing_status::LicensingStatus;
pub use role::Role;

use crate::server::error::enumeration::{EnumDecodeError, EnumTransitionError};

/// Display name shared by the `Undefined` member of every enumeration.
pub const UNDEFINED_NAME: &str = "UNDEFINED";

/// Shared contract of the closed enumerations.
///
/// Implementors provide the member table and an exhaustive `display_name`; lookup,
/// code translation and guarded transitions are derived from those.
pub trait Enumeration: Copy + Eq + 'static {
    /// Human-readable enumeration name used in error messages.
    const KIND: &'static str;

    /// The code-`0` sentinel.
    const UNDEFINED: Self;

    /// Every legitimate member in code order, `Undefined` excluded.
    const MEMBERS: &'static [Self];

    /// Numeric code of the value.
    fn code(self) -> i64;

    /// Canonical persisted name.
    fn display_name(self) -> &'static str;

    /// Finds the member whose display name matches `name`, ignoring case.
    ///
    /// # Returns
    /// - `Ok(Self)` - Matching member, never `Undefined`
    /// - `Err(EnumDecodeError)` - No member matches; carries `name` unchanged
    fn lookup(name: &str) -> Result<Self, EnumDecodeError> {
        let wanted = name.to_uppercase();

        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| member.display_name() == wanted)
            .ok_or_else(|| EnumDecodeError {
                kind: Self::KIND,
                value: name.to_string(),
            })
    }

    /// Like [`Enumeration::lookup`] but also accepts `"UNDEFINED"`.
    ///
    /// Used for proposed transition targets, so an explicit undefined target is
    /// reported by [`Enumeration::transition`] instead of as an unknown name.
    fn lookup_proposed(name: &str) -> Result<Self, EnumDecodeError> {
        if name.to_uppercase() == UNDEFINED_NAME {
            return Ok(Self::UNDEFINED);
        }

        Self::lookup(name)
    }

    /// Value for a numeric code; `0` maps to `Undefined`, codes outside the set to `None`.
    fn from_code(code: i64) -> Option<Self> {
        if code == 0 {
            return Some(Self::UNDEFINED);
        }

        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| member.code() == code)
    }

    /// Display name for a raw code. Unknown codes fall back to `"UNDEFINED"`.
    fn display_name_of_code(code: i64) -> &'static str {
        Self::from_code(code)
            .map(Self::display_name)
            .unwrap_or(UNDEFINED_NAME)
    }

    /// Validates a change from `self` to `proposed` and returns the new value.
    ///
    /// Pure validation; nothing is written.
    ///
    /// # Returns
    /// - `Ok(Self)` - `proposed`, when it is a defined member different from `self`
    /// - `Err(EnumTransitionError::Undefined)` - `proposed` is `Undefined`
    /// - `Err(EnumTransitionError::Unchanged)` - `proposed` equals `self`
    fn transition(self, proposed: Self) -> Result<Self, EnumTransitionError> {
        if proposed == Self::UNDEFINED {
            return Err(EnumTransitionError::Undefined { kind: Self::KIND });
        }

        if proposed == self {
            return Err(EnumTransitionError::Unchanged {
                kind: Self::KIND,
                current: self.display_name(),
            });
        }

        Ok(proposed)
    }

    /// Like [`Enumeration::transition`] but takes a raw code.
    ///
    /// # Returns
    /// - `Err(EnumTransitionError::NotMember)` - `code` names no value of the enumeration
    fn transition_to_code(self, code: i64) -> Result<Self, EnumTransitionError> {
        let proposed = Self::from_code(code).ok_or(EnumTransitionError::NotMember {
            kind: Self::KIND,
            code,
        })?;

        self.transition(proposed)
    }
}
