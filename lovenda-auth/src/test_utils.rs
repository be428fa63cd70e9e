// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::membership::WeddingMembership;

pub const OWNER: &str = "owner1";
pub const PLANNER: &str = "planner1";
pub const ASSISTANT: &str = "assistant1";

/// A wedding with one member per role, matching the seed data used by the
/// rules test suites.
pub fn seeded_wedding() -> WeddingMembership {
    WeddingMembership::new("w1")
        .with_owners([OWNER])
        .with_planners([PLANNER])
        .with_assistants([ASSISTANT])
}

#[cfg(feature = "test_utils")]
pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}
