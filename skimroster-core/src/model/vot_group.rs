use super::VocabularyError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// ordinal value-of-time buckets. a roster entry without a group applies
/// to all of them; that case is written "default" in the roster file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum VotGroup {
    VeryLow = 1,
    Low = 2,
    Medium = 3,
    High = 4,
    VeryHigh = 5,
}

impl VotGroup {
    /// size of the vot dimension of the roster index. slot 0 is unused.
    pub const TOTAL_VOT_GROUPS: usize = 6;

    pub const ALL: [VotGroup; 5] = [
        VotGroup::VeryLow,
        VotGroup::Low,
        VotGroup::Medium,
        VotGroup::High,
        VotGroup::VeryHigh,
    ];

    pub fn id(&self) -> usize {
        *self as usize
    }

    pub fn from_id(id: usize) -> Result<VotGroup, VocabularyError> {
        VotGroup::ALL
            .into_iter()
            .find(|g| g.id() == id)
            .ok_or_else(|| VocabularyError::InvalidVotGroup(id.to_string()))
    }

    /// parses a roster vot-group token, where "default" means all groups.
    pub fn parse_roster_token(token: &str) -> Result<Option<VotGroup>, VocabularyError> {
        if token.trim().eq_ignore_ascii_case("default") {
            Ok(None)
        } else {
            VotGroup::from_str(token).map(Some)
        }
    }
}

impl Display for VotGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VotGroup::VeryLow => "very-low",
            VotGroup::Low => "low",
            VotGroup::Medium => "medium",
            VotGroup::High => "high",
            VotGroup::VeryHigh => "very-high",
        };
        write!(f, "{s}")
    }
}

impl FromStr for VotGroup {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        if let Ok(id) = token.parse::<usize>() {
            return VotGroup::from_id(id);
        }
        VotGroup::ALL
            .into_iter()
            .find(|g| g.to_string() == token)
            .ok_or_else(|| VocabularyError::InvalidVotGroup(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::VotGroup;

    #[test]
    fn test_roster_token() {
        assert_eq!(VotGroup::parse_roster_token("default"), Ok(None));
        assert_eq!(VotGroup::parse_roster_token("DEFAULT"), Ok(None));
        assert_eq!(VotGroup::parse_roster_token("low"), Ok(Some(VotGroup::Low)));
        assert_eq!(VotGroup::parse_roster_token("5"), Ok(Some(VotGroup::VeryHigh)));
        assert!(VotGroup::parse_roster_token("0").is_err());
        assert!(VotGroup::parse_roster_token("stingy").is_err());
    }
}
