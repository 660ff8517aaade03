use super::VocabularyError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// network variants that a skim was built over. orthogonal to mode.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum PathType {
    None = 0,
    FullNetwork = 1,
    NoTolls = 2,
    LocalBus = 3,
    LightRail = 4,
    PremiumBus = 5,
    CommuterRail = 6,
    Ferry = 7,
}

impl PathType {
    pub const TOTAL_PATH_TYPES: usize = 8;

    pub const ALL: [PathType; PathType::TOTAL_PATH_TYPES] = [
        PathType::None,
        PathType::FullNetwork,
        PathType::NoTolls,
        PathType::LocalBus,
        PathType::LightRail,
        PathType::PremiumBus,
        PathType::CommuterRail,
        PathType::Ferry,
    ];

    pub fn id(&self) -> usize {
        *self as usize
    }
}

impl Display for PathType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PathType::None => "none",
            PathType::FullNetwork => "full-network",
            PathType::NoTolls => "no-tolls",
            PathType::LocalBus => "local-bus",
            PathType::LightRail => "light-rail",
            PathType::PremiumBus => "premium-bus",
            PathType::CommuterRail => "commuter-rail",
            PathType::Ferry => "ferry",
        };
        write!(f, "{s}")
    }
}

/// only the named network variants parse. "none" is reserved for the
/// absent blend path type and is written as an empty token.
impl FromStr for PathType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        PathType::ALL
            .into_iter()
            .skip(1)
            .find(|p| p.to_string() == token)
            .ok_or_else(|| VocabularyError::InvalidPathType(s.to_string()))
    }
}
