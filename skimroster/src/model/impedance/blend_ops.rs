//! distance blending for point-level trip ends. short trips pivot network
//! skim values toward a point-to-point distance, weighted by how far the
//! network distance is from the maximum blending distance.
use skimroster_core::model::{
    constants::{DEFAULT_VALUE, EPSILON},
    Mode,
};

/// share of the blend taken from the network distance, in [0, 1].
/// intrazonal trips use no network share.
pub fn network_fraction(network_distance: f64, maximum_blending_distance: f64, intrazonal: bool) -> f64 {
    if intrazonal {
        0.0
    } else {
        (network_distance / maximum_blending_distance).clamp(0.0, 1.0)
    }
}

/// the point-to-point distance to blend with.
///
/// # Arguments
///
/// * `network_fraction` - result of [`network_fraction`]
/// * `network_distance` - used as-is once the network share is complete
/// * `circuity` - caller-supplied circuity-adjusted distance, if known
/// * `manhattan` - rectilinear distance between the two points, in miles
pub fn xy_distance(
    network_fraction: f64,
    network_distance: f64,
    circuity: Option<f64>,
    manhattan: f64,
) -> f64 {
    if network_fraction >= 1.0 {
        return network_distance;
    }
    match circuity {
        Some(d) if d > DEFAULT_VALUE + EPSILON => d,
        _ => manhattan,
    }
}

/// weighted average of the network and xy distances. a side that is
/// effectively zero is dropped from the average.
pub fn blended_distance(network_fraction: f64, network_distance: f64, xy_distance: f64) -> f64 {
    match (network_distance > EPSILON, xy_distance > EPSILON) {
        (true, true) => {
            network_fraction * network_distance + (1.0 - network_fraction) * xy_distance
        }
        (true, false) => network_distance,
        (false, true) => xy_distance,
        (false, false) => 0.0,
    }
}

/// rescales a network value to the blended distance. with no network
/// distance to pivot from, the value is rebuilt from a per-mode speed.
pub fn pivot(value: f64, network_distance: f64, blended_distance: f64, mode: Mode) -> f64 {
    if network_distance >= EPSILON {
        value * blended_distance / network_distance
    } else {
        blended_distance * mode.minutes_per_mile()
    }
}
