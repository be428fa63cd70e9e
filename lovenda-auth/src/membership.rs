// SPDX-License-Identifier: MIT OR Apache-2.0

//! Membership snapshot of a wedding document.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The membership lists of one wedding document, as fetched by the caller.
///
/// This is a point-in-time snapshot: the resolver performs no fetches of
/// its own, so snapshot consistency (one document read, one row read in a
/// transaction) is the caller's responsibility. Absent arrays deserialize
/// as empty, meaning "no members". The id sets are not required to be
/// disjoint; a principal appearing in several lists resolves to the
/// most-privileged role.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeddingMembership {
    pub id: String,
    #[serde(default)]
    pub owner_ids: Vec<String>,
    #[serde(default)]
    pub planner_ids: Vec<String>,
    #[serde(default)]
    pub assistant_ids: Vec<String>,
}

impl WeddingMembership {
    /// A wedding with no members at all.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner_ids: Vec::new(),
            planner_ids: Vec::new(),
            assistant_ids: Vec::new(),
        }
    }

    pub fn with_owners<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.owner_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_planners<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.planner_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_assistants<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assistant_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Resolve the role a principal holds on this wedding.
    ///
    /// Lists are checked in dominance order (owners, then planners, then
    /// assistants) and the first match wins, so a principal present in
    /// several lists resolves to the most-privileged role. `None` means the
    /// principal is not a member.
    pub fn role_of(&self, principal: &str) -> Option<Role> {
        if self.owner_ids.iter().any(|id| id == principal) {
            return Some(Role::Owner);
        }
        if self.planner_ids.iter().any(|id| id == principal) {
            return Some(Role::Planner);
        }
        if self.assistant_ids.iter().any(|id| id == principal) {
            return Some(Role::Assistant);
        }
        None
    }

    pub fn is_member(&self, principal: &str) -> bool {
        self.role_of(principal).is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::role::Role;

    use super::WeddingMembership;

    #[test]
    fn role_resolution_per_list() {
        let wedding = WeddingMembership::new("w1")
            .with_owners(["owner1"])
            .with_planners(["planner1"])
            .with_assistants(["assistant1"]);

        assert_eq!(wedding.role_of("owner1"), Some(Role::Owner));
        assert_eq!(wedding.role_of("planner1"), Some(Role::Planner));
        assert_eq!(wedding.role_of("assistant1"), Some(Role::Assistant));
        assert_eq!(wedding.role_of("stranger"), None);

        assert!(wedding.is_member("planner1"));
        assert!(!wedding.is_member("stranger"));
    }

    #[test]
    fn most_privileged_role_wins() {
        let wedding = WeddingMembership::new("w1")
            .with_owners(["dual"])
            .with_planners(["dual", "both"])
            .with_assistants(["dual", "both"]);

        assert_eq!(wedding.role_of("dual"), Some(Role::Owner));
        assert_eq!(wedding.role_of("both"), Some(Role::Planner));
    }

    #[test]
    fn empty_lists_mean_no_members() {
        let wedding = WeddingMembership::new("orphaned");
        assert_eq!(wedding.role_of("anyone"), None);
        assert!(!wedding.is_member("anyone"));
    }

    #[test]
    fn absent_arrays_deserialize_as_empty() {
        let wedding: WeddingMembership =
            serde_json::from_str(r#"{"id":"w1","ownerIds":["owner1"]}"#).unwrap();
        assert_eq!(wedding.owner_ids, vec!["owner1"]);
        assert!(wedding.planner_ids.is_empty());
        assert!(wedding.assistant_ids.is_empty());
    }

    #[test]
    fn business_fields_are_ignored() {
        let wedding: WeddingMembership = serde_json::from_str(
            r#"{"id":"w1","name":"June wedding","ownerIds":["owner1"],"plannerIds":[],"assistantIds":[],"progress":40}"#,
        )
        .unwrap();
        assert_eq!(wedding.id, "w1");
        assert_eq!(wedding.role_of("owner1"), Some(Role::Owner));
    }
}
