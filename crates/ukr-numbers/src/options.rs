// Engine configuration

use serde::{Deserialize, Serialize};

/// Options fixed at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumbersOptions {
    /// Accept `-1` as "the last one": ordinals become "останній", cardinals
    /// have no such word and convert to `None`.
    pub negative_one_is_last: bool,

    /// Degrade recognised failures to the digit string instead of returning
    /// an error. Negative numbers are rejected regardless.
    pub graceful_failure: bool,
}

impl Default for NumbersOptions {
    fn default() -> Self {
        Self {
            negative_one_is_last: true,
            graceful_failure: false,
        }
    }
}

impl NumbersOptions {
    /// Default options with graceful failure turned on.
    pub fn graceful() -> Self {
        Self {
            graceful_failure: true,
            ..Self::default()
        }
    }
}
