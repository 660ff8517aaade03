use serde::{Deserialize, Serialize};
use skimroster_core::model::constants::DEFAULT_VALUE;

/// result of an impedance query. `blend_variable` is the distance the value
/// was blended with, or -1 when the entry has no blend variable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SkimValue {
    pub variable: f64,
    pub blend_variable: f64,
}

impl SkimValue {
    pub fn new(variable: f64, blend_variable: f64) -> SkimValue {
        SkimValue {
            variable,
            blend_variable,
        }
    }

    /// returned for entries backed by a deferred (empty) matrix
    pub fn zero() -> SkimValue {
        SkimValue::new(0.0, 0.0)
    }

    pub fn unblended(variable: f64) -> SkimValue {
        SkimValue::new(variable, DEFAULT_VALUE)
    }

    pub fn has_blend(&self) -> bool {
        self.blend_variable != DEFAULT_VALUE
    }
}
