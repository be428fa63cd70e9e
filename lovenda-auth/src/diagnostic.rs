// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connectivity-test collections exempt from the wedding policy.

use crate::engine::Operation;

/// Collections used by client diagnostics to probe database connectivity.
pub const DIAGNOSTIC_COLLECTIONS: [&str; 2] = ["_conexion_prueba", "_test_connection"];

pub fn is_diagnostic_collection(name: &str) -> bool {
    DIAGNOSTIC_COLLECTIONS.contains(&name)
}

/// Decide access to a diagnostic collection.
///
/// Reads are open to everyone, including unauthenticated principals, so
/// connectivity probes work before sign-in. Writes require authentication
/// but no role: any signed-in principal may write. This is intentionally
/// looser than the wedding tree and must stay that way.
pub fn authorize_diagnostic(principal: Option<&str>, operation: Operation) -> bool {
    match operation {
        Operation::Read => true,
        Operation::Write => principal.is_some(),
    }
}
