// SPDX-License-Identifier: MIT OR Apache-2.0

//! The authorization decision function.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::membership::WeddingMembership;
use crate::permission::PermissionSet;
use crate::role::Role;

/// Requested operation kind. Reads check a `view*` capability, writes a
/// `manage*` one; there is no separate rule machinery per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Read,
    Write,
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Read => f.write_str("read"),
            Operation::Write => f.write_str("write"),
        }
    }
}

/// Subcollections of a wedding document.
///
/// Items in these collections carry no ACL of their own; access derives
/// entirely from the parent wedding's membership lists plus the capability
/// selected here. The seating plan is guest arrangement data and shares the
/// guest capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Subcollection {
    Guests,
    Tasks,
    SeatingPlan,
    Suppliers,
}

impl Subcollection {
    pub const ALL: [Subcollection; 4] = [
        Subcollection::Guests,
        Subcollection::Tasks,
        Subcollection::SeatingPlan,
        Subcollection::Suppliers,
    ];

    /// The collection name as it appears in document paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Subcollection::Guests => "guests",
            Subcollection::Tasks => "tasks",
            Subcollection::SeatingPlan => "seatingPlan",
            Subcollection::Suppliers => "suppliers",
        }
    }

    /// The capability gating the given operation on this subcollection.
    pub fn capability(&self, operation: Operation) -> Capability {
        match (self, operation) {
            (Subcollection::Guests | Subcollection::SeatingPlan, Operation::Read) => {
                Capability::ViewGuests
            }
            (Subcollection::Guests | Subcollection::SeatingPlan, Operation::Write) => {
                Capability::ManageGuests
            }
            (Subcollection::Tasks, Operation::Read) => Capability::ViewTasks,
            (Subcollection::Tasks, Operation::Write) => Capability::ManageTasks,
            (Subcollection::Suppliers, Operation::Read) => Capability::ViewProviders,
            (Subcollection::Suppliers, Operation::Write) => Capability::ManageProviders,
        }
    }
}

impl Display for Subcollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide whether a principal may exercise a capability on a wedding.
///
/// Total and pure: an absent principal, a non-member principal or a
/// capability the resolved role lacks all surface as `false`. Callers map
/// the boolean onto their own failure channel (401/403, redirect, rule
/// denial); the engine never raises and does not distinguish "denied" from
/// "resource unknown".
pub fn authorize(
    principal: Option<&str>,
    wedding: &WeddingMembership,
    capability: Capability,
) -> bool {
    let Some(principal) = principal else {
        return false;
    };
    let Some(role) = wedding.role_of(principal) else {
        return false;
    };
    PermissionSet::for_role(role).allows(capability)
}

/// Decide a read or write on a subcollection item via the parent wedding.
pub fn authorize_subcollection(
    principal: Option<&str>,
    wedding: &WeddingMembership,
    subcollection: Subcollection,
    operation: Operation,
) -> bool {
    authorize(principal, wedding, subcollection.capability(operation))
}

/// A principal's resolved standing on one wedding, for UI gating.
///
/// This mirrors what route guards consume to decide which affordances to
/// render. It is a UX optimization only; the authoritative decision is
/// always re-checked server-side through [`authorize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeddingAccess {
    pub role: Role,
    pub permissions: PermissionSet,
}

/// Resolve role and full permission set for a principal, `None` for
/// non-members.
pub fn access_metadata(
    principal: Option<&str>,
    wedding: &WeddingMembership,
) -> Option<WeddingAccess> {
    let role = wedding.role_of(principal?)?;
    Some(WeddingAccess {
        role,
        permissions: PermissionSet::for_role(role),
    })
}

/// Whether a principal may mutate the membership lists themselves.
///
/// Adding or removing owners, planners and assistants is reserved to
/// holders of `manageAssistants` or `inviteCollaborators`; the storage
/// layer performs the mutation but must consult this guard first.
pub fn can_modify_membership(principal: Option<&str>, wedding: &WeddingMembership) -> bool {
    authorize(principal, wedding, Capability::ManageAssistants)
        || authorize(principal, wedding, Capability::InviteCollaborators)
}
