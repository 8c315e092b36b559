//! Shared test utilities for `wgraph-core`.

use proptest::test_runner::Config as ProptestConfig;
use wgraph_test_support::ci::property_test_profile::ProptestRunProfile;

/// Builds a proptest configuration from the shared run profile so every
/// property suite honours the same `PROGTEST_CASES` and `WGRAPH_PBT_FORK`
/// overrides.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
