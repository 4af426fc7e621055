//! Closed set of privileged roles.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;

/// A role recognized by the dashboard. Anything else is unprivileged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Store/attendance operator.
    Admin,
    /// Operator who additionally manages admins and attendance histories.
    SuperAdmin,
}

impl Role {
    /// Case-insensitive parse of a role tag. Unknown tags yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_uppercase().as_str() {
            "ADMIN" => Some(Self::Admin),
            "SUPERADMIN" => Some(Self::SuperAdmin),
            _ => None,
        }
    }

    /// Canonical wire tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::SuperAdmin => "SUPERADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
