//! numeric constants shared by the roster, the query engine and its callers.

/// values below this are treated as zero by impedance comparisons
pub const EPSILON: f64 = 1e-6;

/// sentinel for "not set" impedance values, such as the blend value of
/// an entry with no blend variable
pub const DEFAULT_VALUE: f64 = -1.0;

/// length of the roster minute clock. minutes run from 1 to this value.
pub const MINUTES_IN_DAY: usize = 1440;

/// clock minutes after midnight at which the roster day begins (03:00)
pub const DAY_START_MINUTES: usize = 180;

pub const FEET_PER_MILE: f64 = 5280.0;

/// distance substituted for an intrazonal trip whose network distance is zero
pub const INTRAZONAL_DISTANCE_MILES: f64 = 0.25;
