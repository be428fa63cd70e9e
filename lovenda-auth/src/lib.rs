// SPDX-License-Identifier: MIT OR Apache-2.0

//! Role-based authorization for the Lovenda wedding data tree.
//!
//! A wedding document carries three membership lists (`ownerIds`,
//! `plannerIds`, `assistantIds`). Every access decision is a pure function
//! of a principal id, a membership snapshot and the requested capability:
//! callers fetch the snapshot, ask [`authorize`] and map the boolean onto
//! their own failure channel (HTTP 403, UI redirect, rule denial).

mod capability;
mod diagnostic;
mod engine;
mod membership;
mod permission;
mod role;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use capability::{Capability, UnknownCapabilityError};
pub use diagnostic::{DIAGNOSTIC_COLLECTIONS, authorize_diagnostic, is_diagnostic_collection};
pub use engine::{
    Operation, Subcollection, WeddingAccess, access_metadata, authorize, authorize_subcollection,
    can_modify_membership,
};
pub use membership::WeddingMembership;
pub use permission::{PartialPermissions, PermissionSet, merge_permissions};
pub use role::{Role, RoleName, UnknownRoleError, normalize_role};
