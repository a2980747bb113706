//! Benchmark inputs for the Micrograph model loader.
//!
//! Re-exports the fixture buffers used by the `load_ops` bench so the
//! benchmarks and any profiling harness agree on the exact input.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use micrograph_test_utils::{palm_detection_model, tiny_model};

use micrograph_arena::ArenaConfig;
use micrograph_runtime::{load_model, LoadedModel};

/// Load the palm-detection fixture with the default arena budget.
///
/// Panics on failure; benchmark setup treats a non-loading fixture as
/// a broken build.
pub fn load_palm_fixture() -> LoadedModel {
    load_model(&palm_detection_model(), &ArenaConfig::default())
        .expect("palm fixture loads with the default arena")
}
