use geo::Coord;
use serde::{Deserialize, Serialize};

/// a point-level trip end, such as a parcel or micro-zone, that the roster
/// can resolve to a dense matrix index and place in planar coordinates.
pub trait SkimLocation {
    /// identity used to detect intrazonal (same point) trips
    fn id(&self) -> i64;
    /// dense index of the zone containing this location
    fn zone_index(&self) -> usize;
    /// planar coordinates in feet
    fn coord(&self) -> Coord<f64>;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ParcelLocation {
    pub id: i64,
    pub zone_index: usize,
    pub coord: Coord<f64>,
}

impl ParcelLocation {
    pub fn new(id: i64, zone_index: usize, x: f64, y: f64) -> ParcelLocation {
        ParcelLocation {
            id,
            zone_index,
            coord: Coord { x, y },
        }
    }
}

impl SkimLocation for ParcelLocation {
    fn id(&self) -> i64 {
        self.id
    }

    fn zone_index(&self) -> usize {
        self.zone_index
    }

    fn coord(&self) -> Coord<f64> {
        self.coord
    }
}
