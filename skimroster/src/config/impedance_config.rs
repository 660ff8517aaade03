use serde::{Deserialize, Serialize};

/// spatial resolution of simulated trip ends
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DestinationScale {
    /// trip ends are zones. intrazonal zero skims are replaced with fixed values.
    #[default]
    Zone,
    /// trip ends are parcels. blend variables pivot network values toward
    /// point-to-point distances for short trips.
    Parcel,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ImpedanceConfig {
    #[serde(default)]
    pub destination_scale: DestinationScale,
    /// network distance at and beyond which the blend uses network distance only
    #[serde(default = "default_maximum_blending_distance")]
    pub maximum_blending_distance: f64,
    /// distance skim units per mile
    #[serde(default = "default_distance_units_per_mile")]
    pub distance_units_per_mile: f64,
}

fn default_maximum_blending_distance() -> f64 {
    3.0
}

fn default_distance_units_per_mile() -> f64 {
    1.0
}

impl Default for ImpedanceConfig {
    fn default() -> Self {
        Self {
            destination_scale: DestinationScale::default(),
            maximum_blending_distance: default_maximum_blending_distance(),
            distance_units_per_mile: default_distance_units_per_mile(),
        }
    }
}

impl ImpedanceConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.maximum_blending_distance.is_nan() || self.maximum_blending_distance <= 0.0 {
            return Err(format!(
                "maximum_blending_distance must be positive, found {}",
                self.maximum_blending_distance
            ));
        }
        if self.distance_units_per_mile.is_nan() || self.distance_units_per_mile <= 0.0 {
            return Err(format!(
                "distance_units_per_mile must be positive, found {}",
                self.distance_units_per_mile
            ));
        }
        Ok(())
    }
}
