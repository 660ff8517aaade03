use crate::model::{impedance::ImpedanceRoster, vot::VotRange};
use serde::Serialize;
use skimroster_core::model::{Mode, PathType};

/// an overview of a built roster, printed by the summary command
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RosterSummary {
    pub variables: Vec<String>,
    pub entries: usize,
    pub matrices: usize,
    pub zones: usize,
    pub transit_stops: Option<usize>,
    pub combinations: Vec<(Mode, PathType)>,
    pub vot_ranges: Vec<VotRange>,
}

impl From<&ImpedanceRoster> for RosterSummary {
    fn from(roster: &ImpedanceRoster) -> Self {
        RosterSummary {
            variables: roster.variables().to_vec(),
            entries: roster.entries().len(),
            matrices: roster.matrix_count(),
            zones: roster.mappings().zones.len(),
            transit_stops: roster.mappings().transit_stops.as_ref().map(|m| m.len()),
            combinations: roster.table().combinations().actual_combinations(),
            vot_ranges: roster.vot_ranges().to_vec(),
        }
    }
}
