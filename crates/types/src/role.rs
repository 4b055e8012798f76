//! Dashboard roles.
//!
//! The dashboard recognises a closed set of roles. A signed-in user carries
//! one of these, and the sidebar menu is derived from it. Role strings are
//! never invented by the system; they arrive from the session environment and
//! are matched against this set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing a role string.
#[derive(Debug, thiserror::Error)]
pub enum RoleError {
    /// The input did not name a known role
    #[error("Unknown role: '{0}'")]
    Unknown(String),
}

/// A dashboard role.
///
/// Determines which navigation menu a user sees. The wire form is the
/// lowercase role name (`clinician`, `receptionist`, `pharmacist`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Clinical staff: record access and the clinician dashboard.
    Clinician,
    /// Front desk: patient admission and appointments.
    Receptionist,
    /// Pharmacy staff: inventory and purchase orders.
    Pharmacist,
}

impl Role {
    /// All roles, in menu-definition order.
    pub const ALL: [Role; 3] = [Role::Clinician, Role::Receptionist, Role::Pharmacist];

    /// Returns the wire form of this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Clinician => "clinician",
            Role::Receptionist => "receptionist",
            Role::Pharmacist => "pharmacist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clinician" => Ok(Role::Clinician),
            "receptionist" => Ok(Role::Receptionist),
            "pharmacist" => Ok(Role::Pharmacist),
            other => Err(RoleError::Unknown(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_wire_form() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn parse_rejects_unknown_and_differently_cased_roles() {
        for input in ["admin", "Clinician", "CLINICIAN", ""] {
            let err = input.parse::<Role>().expect_err("expected rejection");
            assert!(matches!(err, RoleError::Unknown(_)), "input: {input}");
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Role::Receptionist).unwrap();
        assert_eq!(json, "\"receptionist\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Receptionist);
    }
}
