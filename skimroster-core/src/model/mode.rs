use super::VocabularyError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// travel modes known to the roster. the discriminant is the dense id used
/// to address roster combinations and the roster index.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    None = 0,
    Walk = 1,
    Bike = 2,
    Sov = 3,
    Hov2 = 4,
    Hov3 = 5,
    Transit = 6,
    ParkAndRide = 7,
    SchoolBus = 8,
    PaidRideShare = 9,
    Other = 10,
}

impl Mode {
    pub const TOTAL_MODES: usize = 11;

    pub const ALL: [Mode; Mode::TOTAL_MODES] = [
        Mode::None,
        Mode::Walk,
        Mode::Bike,
        Mode::Sov,
        Mode::Hov2,
        Mode::Hov3,
        Mode::Transit,
        Mode::ParkAndRide,
        Mode::SchoolBus,
        Mode::PaidRideShare,
        Mode::Other,
    ];

    /// the modes that carry a column in the roster combinations file,
    /// in column order (walk through the last mode).
    pub fn roster_modes() -> impl Iterator<Item = Mode> {
        Mode::ALL.into_iter().skip(1)
    }

    pub fn id(&self) -> usize {
        *self as usize
    }

    pub fn from_id(id: usize) -> Result<Mode, VocabularyError> {
        Mode::ALL
            .get(id)
            .copied()
            .ok_or_else(|| VocabularyError::InvalidMode(id.to_string()))
    }

    /// fixed travel time in minutes assumed for an intrazonal trip when the
    /// skim reports zero. auto modes (between bike and transit) get one minute.
    pub fn intrazonal_minutes(&self) -> f64 {
        match self {
            Mode::Walk => 5.0,
            Mode::Bike => 2.0,
            m if *m > Mode::Bike && *m < Mode::Transit => 1.0,
            _ => 0.0,
        }
    }

    /// travel time per mile used when a blended distance has no network
    /// distance to pivot from.
    pub fn minutes_per_mile(&self) -> f64 {
        match self {
            Mode::Walk => 20.0,
            Mode::Bike => 6.0,
            _ => 3.0,
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mode::None => "none",
            Mode::Walk => "walk",
            Mode::Bike => "bike",
            Mode::Sov => "sov",
            Mode::Hov2 => "hov2",
            Mode::Hov3 => "hov3",
            Mode::Transit => "transit",
            Mode::ParkAndRide => "park-and-ride",
            Mode::SchoolBus => "school-bus",
            Mode::PaidRideShare => "paid-ride-share",
            Mode::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// accepts either a mode name or its numeric id.
impl FromStr for Mode {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        if let Ok(id) = token.parse::<usize>() {
            return Mode::from_id(id);
        }
        Mode::ALL
            .into_iter()
            .find(|m| m.to_string() == token)
            .ok_or_else(|| VocabularyError::InvalidMode(s.to_string()))
    }
}
