use super::RosterEntry;
use skimroster_core::model::{constants::MINUTES_IN_DAY, Mode, PathType, VotGroup};

/// marks a cell with no roster entry
const EMPTY_SLOT: u32 = u32::MAX;

const MINUTE_SLOTS: usize = MINUTES_IN_DAY + 1;

/// the 5-d lookup from (variable, mode, path type, vot group, minute) to a
/// position in the roster's entry list, flattened into one allocation.
/// minute 0 and vot group 0 are allocated but never written.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterIndex {
    n_variables: usize,
    slots: Box<[u32]>,
}

impl RosterIndex {
    pub fn new(n_variables: usize) -> RosterIndex {
        let len = n_variables
            * Mode::TOTAL_MODES
            * PathType::TOTAL_PATH_TYPES
            * VotGroup::TOTAL_VOT_GROUPS
            * MINUTE_SLOTS;
        RosterIndex {
            n_variables,
            slots: vec![EMPTY_SLOT; len].into_boxed_slice(),
        }
    }

    pub fn n_variables(&self) -> usize {
        self.n_variables
    }

    fn offset(
        variable_index: usize,
        mode: Mode,
        path_type: PathType,
        vot_group: VotGroup,
        minute: usize,
    ) -> usize {
        let outer = ((variable_index * Mode::TOTAL_MODES + mode.id())
            * PathType::TOTAL_PATH_TYPES
            + path_type.id())
            * VotGroup::TOTAL_VOT_GROUPS
            + vot_group.id();
        outer * MINUTE_SLOTS + minute
    }

    /// writes `position` into every cell covered by the entry's vot groups
    /// and minutes. cells already holding an entry are overwritten.
    ///
    /// # Returns
    ///
    /// the number of cells that previously held a different entry
    pub fn insert(&mut self, entry: &RosterEntry, position: u32) -> usize {
        let mut overwritten = 0;
        for vot_group in entry.vot_groups() {
            for range in entry.minute_ranges() {
                let start = RosterIndex::offset(
                    entry.variable_index,
                    entry.mode,
                    entry.path_type,
                    vot_group,
                    *range.start(),
                );
                let end = start + (range.end() - range.start());
                if let Some(cells) = self.slots.get_mut(start..=end) {
                    for cell in cells.iter_mut() {
                        if *cell != EMPTY_SLOT && *cell != position {
                            overwritten += 1;
                        }
                        *cell = position;
                    }
                }
            }
        }
        overwritten
    }

    /// entry position for a fully resolved key, or None if nothing covers it.
    /// minute must already be validated against the roster day.
    pub fn get(
        &self,
        variable_index: usize,
        mode: Mode,
        path_type: PathType,
        vot_group: VotGroup,
        minute: usize,
    ) -> Option<usize> {
        if variable_index >= self.n_variables || minute > MINUTES_IN_DAY {
            return None;
        }
        let offset = RosterIndex::offset(variable_index, mode, path_type, vot_group, minute);
        match self.slots.get(offset) {
            Some(&slot) if slot != EMPTY_SLOT => Some(slot as usize),
            _ => None,
        }
    }
}
