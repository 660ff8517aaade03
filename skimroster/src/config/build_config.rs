use serde::{Deserialize, Serialize};

/// controls how the one-time roster build runs
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct BuildConfig {
    /// load independent skim files on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
        }
    }
}
