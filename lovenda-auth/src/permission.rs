// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed role → capability policy table and permission-object healing.

use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::role::{Role, RoleName};

/// The complete capability set resolved for one role.
///
/// Always carries all 17 capability flags; partial permission objects only
/// exist as [`PartialPermissions`] and are healed by [`merge_permissions`]
/// before use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    pub view_guests: bool,
    pub manage_guests: bool,
    pub view_tasks: bool,
    pub manage_tasks: bool,
    pub view_finance: bool,
    pub manage_finance: bool,
    pub view_providers: bool,
    pub manage_providers: bool,
    pub view_communications: bool,
    pub manage_communications: bool,
    pub view_settings: bool,
    pub manage_settings: bool,
    pub view_analytics: bool,
    pub manage_assistants: bool,
    pub invite_collaborators: bool,
    pub archive_wedding: bool,
    pub create_wedding: bool,
}

impl PermissionSet {
    /// The all-false template every merge and lookup starts from.
    pub const fn none() -> Self {
        Self {
            view_guests: false,
            manage_guests: false,
            view_tasks: false,
            manage_tasks: false,
            view_finance: false,
            manage_finance: false,
            view_providers: false,
            manage_providers: false,
            view_communications: false,
            manage_communications: false,
            view_settings: false,
            manage_settings: false,
            view_analytics: false,
            manage_assistants: false,
            invite_collaborators: false,
            archive_wedding: false,
            create_wedding: false,
        }
    }

    /// The fixed policy table. This is the single source of truth; the
    /// declarative rules document is generated from it.
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Owner => Self {
                view_guests: true,
                manage_guests: true,
                view_tasks: true,
                manage_tasks: true,
                view_finance: true,
                manage_finance: true,
                view_providers: true,
                manage_providers: true,
                view_communications: true,
                manage_communications: true,
                view_settings: true,
                manage_settings: true,
                view_analytics: true,
                manage_assistants: true,
                invite_collaborators: true,
                archive_wedding: true,
                create_wedding: false,
            },
            Role::Planner => Self {
                view_guests: true,
                manage_guests: true,
                view_tasks: true,
                manage_tasks: true,
                view_finance: true,
                manage_finance: false,
                view_providers: true,
                manage_providers: true,
                view_communications: true,
                manage_communications: true,
                view_settings: true,
                manage_settings: true,
                view_analytics: true,
                manage_assistants: false,
                invite_collaborators: false,
                archive_wedding: true,
                create_wedding: true,
            },
            Role::Assistant => Self {
                view_guests: true,
                manage_guests: false,
                view_tasks: true,
                manage_tasks: false,
                view_finance: true,
                manage_finance: false,
                view_providers: true,
                manage_providers: false,
                view_communications: true,
                manage_communications: false,
                view_settings: false,
                manage_settings: false,
                view_analytics: false,
                manage_assistants: false,
                invite_collaborators: false,
                archive_wedding: false,
                create_wedding: false,
            },
        }
    }

    /// Resolve permissions for a normalized role name.
    ///
    /// Unrecognized role strings indicate upstream data corruption: they
    /// are logged as a data-integrity warning and resolve to the all-false
    /// set, so the caller denies rather than grants.
    pub fn for_name(name: &RoleName) -> Self {
        match name {
            RoleName::Known(role) => Self::for_role(*role),
            RoleName::Unknown(raw) => {
                tracing::warn!(role = %raw, "role string not in canonical set, denying all capabilities");
                Self::none()
            }
        }
    }

    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewGuests => self.view_guests,
            Capability::ManageGuests => self.manage_guests,
            Capability::ViewTasks => self.view_tasks,
            Capability::ManageTasks => self.manage_tasks,
            Capability::ViewFinance => self.view_finance,
            Capability::ManageFinance => self.manage_finance,
            Capability::ViewProviders => self.view_providers,
            Capability::ManageProviders => self.manage_providers,
            Capability::ViewCommunications => self.view_communications,
            Capability::ManageCommunications => self.manage_communications,
            Capability::ViewSettings => self.view_settings,
            Capability::ManageSettings => self.manage_settings,
            Capability::ViewAnalytics => self.view_analytics,
            Capability::ManageAssistants => self.manage_assistants,
            Capability::InviteCollaborators => self.invite_collaborators,
            Capability::ArchiveWedding => self.archive_wedding,
            Capability::CreateWedding => self.create_wedding,
        }
    }

    /// All capabilities this set grants.
    pub fn granted(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|capability| self.allows(*capability))
            .collect()
    }
}

/// A persisted permission object as read back from storage.
///
/// Stored objects may predate capability additions and miss keys; every
/// field is optional and missing keys deserialize to `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialPermissions {
    pub view_guests: Option<bool>,
    pub manage_guests: Option<bool>,
    pub view_tasks: Option<bool>,
    pub manage_tasks: Option<bool>,
    pub view_finance: Option<bool>,
    pub manage_finance: Option<bool>,
    pub view_providers: Option<bool>,
    pub manage_providers: Option<bool>,
    pub view_communications: Option<bool>,
    pub manage_communications: Option<bool>,
    pub view_settings: Option<bool>,
    pub manage_settings: Option<bool>,
    pub view_analytics: Option<bool>,
    pub manage_assistants: Option<bool>,
    pub invite_collaborators: Option<bool>,
    pub archive_wedding: Option<bool>,
    pub create_wedding: Option<bool>,
}

impl From<PermissionSet> for PartialPermissions {
    fn from(set: PermissionSet) -> Self {
        Self {
            view_guests: Some(set.view_guests),
            manage_guests: Some(set.manage_guests),
            view_tasks: Some(set.view_tasks),
            manage_tasks: Some(set.manage_tasks),
            view_finance: Some(set.view_finance),
            manage_finance: Some(set.manage_finance),
            view_providers: Some(set.view_providers),
            manage_providers: Some(set.manage_providers),
            view_communications: Some(set.view_communications),
            manage_communications: Some(set.manage_communications),
            view_settings: Some(set.view_settings),
            manage_settings: Some(set.manage_settings),
            view_analytics: Some(set.view_analytics),
            manage_assistants: Some(set.manage_assistants),
            invite_collaborators: Some(set.invite_collaborators),
            archive_wedding: Some(set.archive_wedding),
            create_wedding: Some(set.create_wedding),
        }
    }
}

/// Heal partial or stale permission objects to the full 17-key shape.
///
/// Starts from the all-false template, layers `current`, then `overrides`.
/// The result is always complete regardless of which keys the inputs
/// carried.
pub fn merge_permissions(
    current: &PartialPermissions,
    overrides: &PartialPermissions,
) -> PermissionSet {
    fn layer(current: Option<bool>, overrides: Option<bool>) -> bool {
        overrides.or(current).unwrap_or(false)
    }

    PermissionSet {
        view_guests: layer(current.view_guests, overrides.view_guests),
        manage_guests: layer(current.manage_guests, overrides.manage_guests),
        view_tasks: layer(current.view_tasks, overrides.view_tasks),
        manage_tasks: layer(current.manage_tasks, overrides.manage_tasks),
        view_finance: layer(current.view_finance, overrides.view_finance),
        manage_finance: layer(current.manage_finance, overrides.manage_finance),
        view_providers: layer(current.view_providers, overrides.view_providers),
        manage_providers: layer(current.manage_providers, overrides.manage_providers),
        view_communications: layer(current.view_communications, overrides.view_communications),
        manage_communications: layer(
            current.manage_communications,
            overrides.manage_communications,
        ),
        view_settings: layer(current.view_settings, overrides.view_settings),
        manage_settings: layer(current.manage_settings, overrides.manage_settings),
        view_analytics: layer(current.view_analytics, overrides.view_analytics),
        manage_assistants: layer(current.manage_assistants, overrides.manage_assistants),
        invite_collaborators: layer(current.invite_collaborators, overrides.invite_collaborators),
        archive_wedding: layer(current.archive_wedding, overrides.archive_wedding),
        create_wedding: layer(current.create_wedding, overrides.create_wedding),
    }
}
