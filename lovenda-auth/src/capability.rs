// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability names gating actions on the wedding data tree.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown capability: {0}")]
pub struct UnknownCapabilityError(pub String);

/// One allowed action on a wedding, keyed by the persisted camelCase name.
///
/// `View*` capabilities gate reads, everything else gates writes; there is
/// no separate read/write rule machinery beyond picking the right
/// capability for the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    ViewGuests,
    ManageGuests,
    ViewTasks,
    ManageTasks,
    ViewFinance,
    ManageFinance,
    ViewProviders,
    ManageProviders,
    ViewCommunications,
    ManageCommunications,
    ViewSettings,
    ManageSettings,
    ViewAnalytics,
    ManageAssistants,
    InviteCollaborators,
    ArchiveWedding,
    CreateWedding,
}

impl Capability {
    pub const ALL: [Capability; 17] = [
        Capability::ViewGuests,
        Capability::ManageGuests,
        Capability::ViewTasks,
        Capability::ManageTasks,
        Capability::ViewFinance,
        Capability::ManageFinance,
        Capability::ViewProviders,
        Capability::ManageProviders,
        Capability::ViewCommunications,
        Capability::ManageCommunications,
        Capability::ViewSettings,
        Capability::ManageSettings,
        Capability::ViewAnalytics,
        Capability::ManageAssistants,
        Capability::InviteCollaborators,
        Capability::ArchiveWedding,
        Capability::CreateWedding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ViewGuests => "viewGuests",
            Capability::ManageGuests => "manageGuests",
            Capability::ViewTasks => "viewTasks",
            Capability::ManageTasks => "manageTasks",
            Capability::ViewFinance => "viewFinance",
            Capability::ManageFinance => "manageFinance",
            Capability::ViewProviders => "viewProviders",
            Capability::ManageProviders => "manageProviders",
            Capability::ViewCommunications => "viewCommunications",
            Capability::ManageCommunications => "manageCommunications",
            Capability::ViewSettings => "viewSettings",
            Capability::ManageSettings => "manageSettings",
            Capability::ViewAnalytics => "viewAnalytics",
            Capability::ManageAssistants => "manageAssistants",
            Capability::InviteCollaborators => "inviteCollaborators",
            Capability::ArchiveWedding => "archiveWedding",
            Capability::CreateWedding => "createWedding",
        }
    }

    /// Capability gates a read on the wedding data tree.
    pub fn is_view(&self) -> bool {
        matches!(
            self,
            Capability::ViewGuests
                | Capability::ViewTasks
                | Capability::ViewFinance
                | Capability::ViewProviders
                | Capability::ViewCommunications
                | Capability::ViewSettings
                | Capability::ViewAnalytics
        )
    }

    /// Capability gates a write (mutation, invitation or lifecycle change).
    pub fn is_manage(&self) -> bool {
        !self.is_view()
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = UnknownCapabilityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .iter()
            .find(|capability| capability.as_str() == value)
            .copied()
            .ok_or_else(|| UnknownCapabilityError(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Capability;

    #[test]
    fn all_names_are_distinct() {
        let names: HashSet<_> = Capability::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names.len(), 17);
    }

    #[test]
    fn parse_roundtrip() {
        for capability in Capability::ALL {
            assert_eq!(capability.as_str().parse(), Ok(capability));
        }
        assert!("manage_guests".parse::<Capability>().is_err());
        assert!("viewEverything".parse::<Capability>().is_err());
    }

    #[test]
    fn view_and_manage_partition() {
        let views = Capability::ALL.iter().filter(|c| c.is_view()).count();
        assert_eq!(views, 7);

        for capability in Capability::ALL {
            assert_ne!(capability.is_view(), capability.is_manage());
        }

        assert!(Capability::ViewFinance.is_view());
        assert!(Capability::ManageFinance.is_manage());
        assert!(Capability::ArchiveWedding.is_manage());
        assert!(Capability::InviteCollaborators.is_manage());
    }

    #[test]
    fn serde_uses_persisted_key_names() {
        let json = serde_json::to_string(&Capability::ManageAssistants).unwrap();
        assert_eq!(json, "\"manageAssistants\"");

        let parsed: Capability = serde_json::from_str("\"viewAnalytics\"").unwrap();
        assert_eq!(parsed, Capability::ViewAnalytics);
    }
}
