use crate::model::constants::FEET_PER_MILE;
use geo::Coord;

/// rectilinear distance between two planar coordinates given in feet,
/// reported in miles.
///
/// # Arguments
///
/// * `a` - first coordinate, in feet
/// * `b` - second coordinate, in feet
///
/// # Returns
///
/// * the sum of absolute x and y offsets, converted to miles
pub fn manhattan_distance_miles(a: &Coord<f64>, b: &Coord<f64>) -> f64 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) / FEET_PER_MILE
}
