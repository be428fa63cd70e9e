// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canonical roles and boundary normalization of raw role strings.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRoleError(pub String);

/// The three canonical roles a principal can hold on a wedding.
///
/// Roles are ordered such that "higher" roles hold more privilege:
///
/// Assistant < Planner < Owner
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    Planner,
    Owner,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Owner, Role::Planner, Role::Assistant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Planner => "planner",
            Role::Assistant => "assistant",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "owner" => Ok(Role::Owner),
            "planner" => Ok(Role::Planner),
            "assistant" => Ok(Role::Assistant),
            other => Err(UnknownRoleError(other.to_string())),
        }
    }
}

/// Result of normalizing a raw role string at the system boundary.
///
/// Stored role strings predate the closed role set and may contain legacy
/// aliases or free-form values. Normalization resolves aliases to a
/// canonical [`Role`]; anything unrecognized passes through verbatim
/// (trimmed and lowercased) so that callers can log it as a data-integrity
/// problem instead of silently granting a fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleName {
    Known(Role),
    Unknown(String),
}

impl RoleName {
    /// Return the canonical role, if one was recognized.
    pub fn role(&self) -> Option<Role> {
        match self {
            RoleName::Known(role) => Some(*role),
            RoleName::Unknown(_) => None,
        }
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, RoleName::Known(_))
    }
}

impl Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleName::Known(role) => f.write_str(role.as_str()),
            RoleName::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// Legacy aliases still present in stored wedding and invitation documents.
const ROLE_ALIASES: [(&str, Role); 9] = [
    ("owner", Role::Owner),
    ("pareja", Role::Owner),
    ("propietario", Role::Owner),
    ("partner", Role::Owner),
    ("planner", Role::Planner),
    ("wedding-planner", Role::Planner),
    ("weddingplanner", Role::Planner),
    ("assistant", Role::Assistant),
    ("asistente", Role::Assistant),
];

/// Normalize a raw role string against the alias table.
///
/// Missing or empty input yields `fallback`. Unrecognized non-empty input
/// passes through as [`RoleName::Unknown`]; it will not match any row of
/// the permission matrix and strict callers should treat it as a
/// configuration error. Never fails.
pub fn normalize_role(raw: Option<&str>, fallback: Role) -> RoleName {
    let Some(raw) = raw else {
        return RoleName::Known(fallback);
    };

    let trimmed = raw.trim().to_lowercase();
    if trimmed.is_empty() {
        return RoleName::Known(fallback);
    }

    for (alias, role) in ROLE_ALIASES {
        if alias == trimmed {
            return RoleName::Known(role);
        }
    }

    RoleName::Unknown(trimmed)
}

#[cfg(test)]
mod tests {
    use super::{Role, RoleName, normalize_role};

    #[test]
    fn role_privilege_ordering() {
        assert!(Role::Owner > Role::Planner);
        assert!(Role::Planner > Role::Assistant);
    }

    #[test]
    fn canonical_names_parse_strictly() {
        assert_eq!("owner".parse(), Ok(Role::Owner));
        assert_eq!("planner".parse(), Ok(Role::Planner));
        assert_eq!("assistant".parse(), Ok(Role::Assistant));

        // The strict parser does not apply the alias table.
        assert!("pareja".parse::<Role>().is_err());
        assert!("Owner".parse::<Role>().is_err());
    }

    #[test]
    fn aliases_resolve_to_canonical_roles() {
        for (raw, expected) in [
            ("pareja", Role::Owner),
            ("propietario", Role::Owner),
            ("partner", Role::Owner),
            ("wedding-planner", Role::Planner),
            ("weddingplanner", Role::Planner),
            ("asistente", Role::Assistant),
        ] {
            assert_eq!(
                normalize_role(Some(raw), Role::Owner),
                RoleName::Known(expected)
            );
        }
    }

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(
            normalize_role(Some("  Wedding-Planner  "), Role::Owner),
            RoleName::Known(Role::Planner)
        );
        assert_eq!(
            normalize_role(Some("PAREJA"), Role::Assistant),
            RoleName::Known(Role::Owner)
        );
    }

    #[test]
    fn missing_or_empty_input_yields_fallback() {
        assert_eq!(normalize_role(None, Role::Owner), RoleName::Known(Role::Owner));
        assert_eq!(
            normalize_role(Some(""), Role::Planner),
            RoleName::Known(Role::Planner)
        );
        assert_eq!(
            normalize_role(Some("   "), Role::Assistant),
            RoleName::Known(Role::Assistant)
        );
    }

    #[test]
    fn unrecognized_input_passes_through() {
        let name = normalize_role(Some("  Caterer "), Role::Owner);
        assert_eq!(name, RoleName::Unknown("caterer".to_string()));
        assert_eq!(name.role(), None);
        assert!(!name.is_canonical());
    }
}
