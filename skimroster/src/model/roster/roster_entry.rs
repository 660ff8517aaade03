use crate::model::matrix::{MatrixKey, SkimFileType};
use ordered_float::OrderedFloat;
use serde::Serialize;
use skimroster_core::model::{constants::MINUTES_IN_DAY, Mode, PathType, VotGroup};
use std::ops::RangeInclusive;

/// one configured impedance source: a variable for a mode, path type,
/// vot group and time window, backed by one field of a skim file.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub variable: String,
    pub mode: Mode,
    pub path_type: PathType,
    /// None applies the entry to every vot group
    pub vot_group: Option<VotGroup>,
    /// first minute on the roster clock, in 1..=1440
    pub start_minute: usize,
    /// last minute on the roster clock. less than start_minute when the
    /// window wraps past the end of the roster day.
    pub end_minute: usize,
    /// sub-entity selector, such as "zone" or "transitstop"
    pub length: String,
    pub file_type: SkimFileType,
    pub name: String,
    pub field: usize,
    /// read the matrix at (destination, origin)
    pub transpose: bool,
    pub blend_variable: Option<String>,
    /// None blends on the entry's own path type
    pub blend_path_type: Option<PathType>,
    pub factor: f64,
    pub scaling: f64,
    pub variable_index: usize,
    pub matrix_index: usize,
}

impl RosterEntry {
    pub fn matrix_key(&self) -> MatrixKey {
        MatrixKey {
            name: self.name.clone(),
            field: self.field,
            file_type: self.file_type,
            scaling: OrderedFloat(self.scaling),
            length: self.length.clone(),
        }
    }

    /// the groups this entry covers, expanding the default to all of them
    pub fn vot_groups(&self) -> Vec<VotGroup> {
        match self.vot_group {
            Some(group) => vec![group],
            None => VotGroup::ALL.to_vec(),
        }
    }

    /// the minutes this entry covers, split in two when the window wraps
    pub fn minute_ranges(&self) -> Vec<RangeInclusive<usize>> {
        if self.start_minute <= self.end_minute {
            vec![self.start_minute..=self.end_minute]
        } else {
            vec![1..=self.end_minute, self.start_minute..=MINUTES_IN_DAY]
        }
    }

    pub fn covers_minute(&self, minute: usize) -> bool {
        self.minute_ranges().iter().any(|r| r.contains(&minute))
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::RosterEntry;
    use crate::model::matrix::SkimFileType;
    use skimroster_core::model::{Mode, PathType, VotGroup};

    /// an all-day default-group sov entry reading field 3 of "skim.txt"
    pub(crate) fn entry(variable: &str) -> RosterEntry {
        RosterEntry {
            variable: variable.to_string(),
            mode: Mode::Sov,
            path_type: PathType::FullNetwork,
            vot_group: None,
            start_minute: 1,
            end_minute: 1440,
            length: "zone".to_string(),
            file_type: SkimFileType::Text,
            name: "skim.txt".to_string(),
            field: 3,
            transpose: false,
            blend_variable: None,
            blend_path_type: None,
            factor: 1.0,
            scaling: 1.0,
            variable_index: 0,
            matrix_index: 0,
        }
    }

    #[test]
    fn test_wrapping_window() {
        let e = RosterEntry {
            start_minute: 1200,
            end_minute: 100,
            ..entry("ivtime")
        };
        assert_eq!(e.minute_ranges(), vec![1..=100, 1200..=1440]);
        assert!(e.covers_minute(1));
        assert!(e.covers_minute(1440));
        assert!(!e.covers_minute(101));
        assert!(!e.covers_minute(1199));
    }

    #[test]
    fn test_vot_group_expansion() {
        let all = entry("ivtime");
        assert_eq!(all.vot_groups().len(), 5);
        let one = RosterEntry {
            vot_group: Some(VotGroup::High),
            ..entry("ivtime")
        };
        assert_eq!(one.vot_groups(), vec![VotGroup::High]);
    }

    #[test]
    fn test_matrix_key_ignores_factor_and_transpose() {
        let a = entry("ivtime");
        let b = RosterEntry {
            factor: 2.0,
            transpose: true,
            variable: "time".to_string(),
            ..entry("ivtime")
        };
        assert_eq!(a.matrix_key(), b.matrix_key());
        let c = RosterEntry {
            scaling: 100.0,
            ..entry("ivtime")
        };
        assert_ne!(a.matrix_key(), c.matrix_key());
    }
}
