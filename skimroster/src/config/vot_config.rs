use serde::{Deserialize, Serialize};

/// value-of-time thresholds separating the five vot groups, in currency
/// units per hour. a vot equal to a threshold falls in the lower group.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct VotConfig {
    #[serde(default = "default_very_low_low")]
    pub very_low_low: f64,
    #[serde(default = "default_low_medium")]
    pub low_medium: f64,
    #[serde(default = "default_medium_high")]
    pub medium_high: f64,
    #[serde(default = "default_high_very_high")]
    pub high_very_high: f64,
}

fn default_very_low_low() -> f64 {
    3.75
}

fn default_low_medium() -> f64 {
    15.0
}

fn default_medium_high() -> f64 {
    22.5
}

fn default_high_very_high() -> f64 {
    30.0
}

impl Default for VotConfig {
    fn default() -> Self {
        Self {
            very_low_low: default_very_low_low(),
            low_medium: default_low_medium(),
            medium_high: default_medium_high(),
            high_very_high: default_high_very_high(),
        }
    }
}

impl VotConfig {
    pub fn thresholds(&self) -> [f64; 4] {
        [
            self.very_low_low,
            self.low_medium,
            self.medium_high,
            self.high_very_high,
        ]
    }

    /// thresholds must be finite and strictly ascending
    pub fn validate(&self) -> Result<(), String> {
        let thresholds = self.thresholds();
        if thresholds.iter().any(|t| !t.is_finite()) {
            return Err(format!("vot thresholds must be finite: {thresholds:?}"));
        }
        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(format!(
                "vot thresholds must be strictly ascending: {thresholds:?}"
            ));
        }
        Ok(())
    }
}
