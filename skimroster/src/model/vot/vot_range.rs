use serde::Serialize;
use skimroster_core::model::VotGroup;

/// the values of time assigned to one vot group, open below and closed above
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct VotRange {
    pub vot_group: VotGroup,
    pub min: f64,
    pub max: f64,
}

impl VotRange {
    pub fn contains(&self, vot: f64) -> bool {
        self.min < vot && vot <= self.max
    }
}
