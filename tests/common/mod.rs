#![allow(dead_code, unused_imports)]

use std::collections::BTreeMap;

pub use procrun_test_utils::builders;
pub use procrun_test_utils::scripts;
pub use procrun_test_utils::{init_tracing, with_timeout};

/// Build an environment map from string pairs.
pub fn env_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
