// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compiles the canonical authorization tables into a Firestore security
//! rules document.
//!
//! The deployed rules file and the in-process decision engine historically
//! drifted because they were maintained by hand as two artifacts. Here the
//! rules are generated: every role list in every `allow` clause is computed
//! from [`PermissionSet::for_role`] and [`Subcollection::capability`], so a
//! policy change in `lovenda-auth` lands in both evaluation modes at once.
//! Writing the output to disk is the caller's concern.

use lovenda_auth::{
    Capability, DIAGNOSTIC_COLLECTIONS, Operation, PermissionSet, Role, Subcollection,
};

/// Roles whose permission set grants the given capability, in dominance
/// order.
fn roles_allowing(capability: Capability) -> Vec<Role> {
    Role::ALL
        .into_iter()
        .filter(|role| PermissionSet::for_role(*role).allows(capability))
        .collect()
}

/// Roles granted at least one view capability, in dominance order.
fn roles_with_any_view() -> Vec<Role> {
    Role::ALL
        .into_iter()
        .filter(|role| {
            let perms = PermissionSet::for_role(*role);
            Capability::ALL
                .into_iter()
                .any(|capability| capability.is_view() && perms.allows(capability))
        })
        .collect()
}

/// Render a role list as a rules-language list literal.
fn rules_list(roles: &[Role]) -> String {
    let quoted: Vec<String> = roles
        .iter()
        .map(|role| format!("'{}'", role.as_str()))
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Generate the complete `firestore.rules` document.
pub fn generate_rules() -> String {
    let mut out = String::new();

    out.push_str("rules_version = '2';\n\n");
    out.push_str("// Generated from the lovenda-auth policy tables. Do not edit by hand.\n");
    out.push_str("service cloud.firestore {\n");
    out.push_str("  match /databases/{database}/documents {\n");
    out.push_str("    function signedIn() {\n");
    out.push_str("      return request.auth != null;\n");
    out.push_str("    }\n\n");

    // Membership lists are checked in dominance order so a principal in
    // several lists resolves to the most-privileged role, matching the
    // engine's resolver.
    out.push_str("    function roleOf(data) {\n");
    out.push_str("      return !signedIn() ? null\n");
    out.push_str("        : data.get('ownerIds', []).hasAny([request.auth.uid]) ? 'owner'\n");
    out.push_str("        : data.get('plannerIds', []).hasAny([request.auth.uid]) ? 'planner'\n");
    out.push_str(
        "        : data.get('assistantIds', []).hasAny([request.auth.uid]) ? 'assistant'\n",
    );
    out.push_str("        : null;\n");
    out.push_str("    }\n\n");
    out.push_str("    function weddingRole(weddingId) {\n");
    out.push_str(
        "      return roleOf(get(/databases/$(database)/documents/weddings/$(weddingId)).data);\n",
    );
    out.push_str("    }\n\n");

    out.push_str("    match /weddings/{weddingId} {\n");
    out.push_str(&format!(
        "      allow read: if roleOf(resource.data) in {};\n",
        rules_list(&roles_with_any_view())
    ));
    out.push_str(&format!(
        "      allow create: if roleOf(request.resource.data) in {};\n",
        rules_list(&roles_allowing(Capability::CreateWedding))
    ));
    out.push_str(&format!(
        "      allow update: if roleOf(resource.data) in {};\n",
        rules_list(&roles_allowing(Capability::ManageSettings))
    ));
    out.push_str(&format!(
        "      allow delete: if roleOf(resource.data) in {};\n",
        rules_list(&roles_allowing(Capability::ArchiveWedding))
    ));

    for subcollection in Subcollection::ALL {
        let read_roles = roles_allowing(subcollection.capability(Operation::Read));
        let write_roles = roles_allowing(subcollection.capability(Operation::Write));

        out.push('\n');
        out.push_str(&format!(
            "      match /{}/{{itemId}} {{\n",
            subcollection.as_str()
        ));
        out.push_str(&format!(
            "        allow read: if weddingRole(weddingId) in {};\n",
            rules_list(&read_roles)
        ));
        out.push_str(&format!(
            "        allow write: if weddingRole(weddingId) in {};\n",
            rules_list(&write_roles)
        ));
        out.push_str("      }\n");
    }

    out.push_str("    }\n");

    // Connectivity-test collections stay readable without authentication;
    // writes only require a signed-in principal, no role.
    for collection in DIAGNOSTIC_COLLECTIONS {
        out.push('\n');
        out.push_str(&format!("    match /{collection}/{{document}} {{\n"));
        out.push_str("      allow read: if true;\n");
        out.push_str("      allow write: if signedIn();\n");
        out.push_str("    }\n");
    }

    out.push_str("  }\n");
    out.push_str("}\n");

    out
}

#[cfg(test)]
mod tests {
    use super::generate_rules;

    #[test]
    fn document_preamble() {
        let rules = generate_rules();
        assert!(rules.starts_with("rules_version = '2';\n"));
        assert!(rules.contains("service cloud.firestore {"));
        assert!(rules.contains("match /databases/{database}/documents {"));
    }

    #[test]
    fn membership_helper_checks_lists_in_dominance_order() {
        let rules = generate_rules();
        let owner_check = rules.find("data.get('ownerIds', [])").unwrap();
        let planner_check = rules.find("data.get('plannerIds', [])").unwrap();
        let assistant_check = rules.find("data.get('assistantIds', [])").unwrap();
        assert!(owner_check < planner_check);
        assert!(planner_check < assistant_check);
    }

    #[test]
    fn wedding_document_clauses() {
        let rules = generate_rules();
        assert!(
            rules.contains(
                "allow read: if roleOf(resource.data) in ['owner', 'planner', 'assistant'];"
            )
        );
        // createWedding is granted to planners only in the policy table.
        assert!(rules.contains("allow create: if roleOf(request.resource.data) in ['planner'];"));
        assert!(rules.contains("allow update: if roleOf(resource.data) in ['owner', 'planner'];"));
        assert!(rules.contains("allow delete: if roleOf(resource.data) in ['owner', 'planner'];"));
    }

    #[test]
    fn every_subcollection_has_a_match_block() {
        let rules = generate_rules();
        for name in ["guests", "tasks", "seatingPlan", "suppliers"] {
            assert!(
                rules.contains(&format!("match /{name}/{{itemId}}")),
                "{name}"
            );
        }
    }

    #[test]
    fn subcollection_reads_admit_assistants_writes_do_not() {
        let rules = generate_rules();
        assert!(
            rules.contains(
                "allow read: if weddingRole(weddingId) in ['owner', 'planner', 'assistant'];"
            )
        );
        assert!(rules.contains("allow write: if weddingRole(weddingId) in ['owner', 'planner'];"));

        // No write clause anywhere admits assistants.
        for line in rules.lines() {
            if line.contains("allow write") {
                assert!(!line.contains("assistant"), "{line}");
            }
        }
    }

    #[test]
    fn diagnostic_collections_are_open_for_read() {
        let rules = generate_rules();
        for collection in ["_conexion_prueba", "_test_connection"] {
            let block_start = rules
                .find(&format!("match /{collection}/{{document}}"))
                .unwrap_or_else(|| panic!("missing block for {collection}"));
            let block = &rules[block_start..];
            assert!(block.contains("allow read: if true;"));
            assert!(block.contains("allow write: if signedIn();"));
        }
    }
}
