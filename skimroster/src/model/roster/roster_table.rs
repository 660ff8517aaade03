use super::{
    read_roster_entries, read_roster_entries_from_csv, RosterCombinations, RosterEntry,
    RosterError, RosterIndex,
};
use crate::model::matrix::MatrixKey;
use itertools::Itertools;
use skimroster_core::model::{constants::MINUTES_IN_DAY, Mode, PathType, VotGroup};
use std::{collections::HashMap, io::Read, path::Path};

/// the parsed roster: every entry, the distinct variables and matrices they
/// reference, and the index resolving a query key to its entry.
#[derive(Debug, Clone)]
pub struct RosterTable {
    combinations: RosterCombinations,
    entries: Vec<RosterEntry>,
    variables: Vec<String>,
    variable_lookup: HashMap<String, usize>,
    matrix_keys: Vec<MatrixKey>,
    index: RosterIndex,
}

impl RosterTable {
    /// reads the combinations file, then the roster file validated against it
    pub fn from_files(
        combinations_file: &Path,
        roster_file: &Path,
    ) -> Result<RosterTable, RosterError> {
        let mut combinations = RosterCombinations::from_csv(combinations_file)?;
        let entries = read_roster_entries_from_csv(roster_file, &mut combinations)?;
        RosterTable::new(combinations, entries)
    }

    pub fn from_readers<C: Read, R: Read>(
        combinations_reader: C,
        roster_reader: R,
    ) -> Result<RosterTable, RosterError> {
        let mut combinations =
            RosterCombinations::from_reader(combinations_reader, "roster combinations")?;
        let entries = read_roster_entries(roster_reader, "roster", &mut combinations)?;
        RosterTable::new(combinations, entries)
    }

    /// assigns variable and matrix indices from the sorted distinct variable
    /// names and matrix keys, then builds the index. later entries take
    /// precedence where entries overlap.
    pub fn new(
        combinations: RosterCombinations,
        entries: Vec<RosterEntry>,
    ) -> Result<RosterTable, RosterError> {
        let variables = entries
            .iter()
            .map(|e| e.variable.clone())
            .sorted()
            .dedup()
            .collect_vec();
        let variable_lookup: HashMap<String, usize> = variables
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        let matrix_keys = entries
            .iter()
            .map(|e| e.matrix_key())
            .sorted()
            .dedup()
            .collect_vec();
        let matrix_lookup: HashMap<&MatrixKey, usize> = matrix_keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k, i))
            .collect();

        let mut indexed = Vec::with_capacity(entries.len());
        for entry in entries.into_iter() {
            if let Some(blend) = &entry.blend_variable {
                if !variable_lookup.contains_key(blend) {
                    return Err(RosterError::UnknownBlendVariable {
                        variable: entry.variable.clone(),
                        blend_variable: blend.clone(),
                    });
                }
            }
            let variable_index = lookup(&variable_lookup, &entry.variable)?;
            let matrix_index = matrix_lookup
                .get(&entry.matrix_key())
                .copied()
                .ok_or_else(|| {
                    RosterError::InternalError(format!(
                        "matrix key {} missing from the roster's matrix keys",
                        entry.matrix_key()
                    ))
                })?;
            indexed.push(RosterEntry {
                variable_index,
                matrix_index,
                ..entry
            });
        }

        let mut index = RosterIndex::new(variables.len());
        let mut overwritten = 0;
        for (position, entry) in indexed.iter().enumerate() {
            let position = u32::try_from(position).map_err(|_| {
                RosterError::InternalError(format!(
                    "roster has {} entries, more than the index can address",
                    indexed.len()
                ))
            })?;
            overwritten += index.insert(entry, position);
        }
        if overwritten > 0 {
            log::warn!(
                "{overwritten} roster index cells were covered by more than one entry; the later entry was kept"
            );
        }
        log::info!(
            "roster has {} entries over {} variables and {} matrices",
            indexed.len(),
            variables.len(),
            matrix_keys.len()
        );

        Ok(RosterTable {
            combinations,
            entries: indexed,
            variables,
            variable_lookup,
            matrix_keys,
            index,
        })
    }

    pub fn combinations(&self) -> &RosterCombinations {
        &self.combinations
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// distinct variable names in index order
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// distinct matrix keys in matrix index order
    pub fn matrix_keys(&self) -> &[MatrixKey] {
        &self.matrix_keys
    }

    pub fn variable_index(&self, variable: &str) -> Result<usize, RosterError> {
        lookup(&self.variable_lookup, variable)
    }

    /// the entry configured for a query key
    pub fn get_entry(
        &self,
        variable: &str,
        mode: Mode,
        path_type: PathType,
        vot_group: VotGroup,
        minute: usize,
    ) -> Result<&RosterEntry, RosterError> {
        let variable_index = self.variable_index(variable)?;
        self.get_entry_by_index(variable_index, mode, path_type, vot_group, minute)
    }

    pub fn get_entry_by_index(
        &self,
        variable_index: usize,
        mode: Mode,
        path_type: PathType,
        vot_group: VotGroup,
        minute: usize,
    ) -> Result<&RosterEntry, RosterError> {
        if !(1..=MINUTES_IN_DAY).contains(&minute) {
            return Err(RosterError::MinuteOutOfRange(minute));
        }
        self.index
            .get(variable_index, mode, path_type, vot_group, minute)
            .and_then(|position| self.entries.get(position))
            .ok_or_else(|| RosterError::RosterEntryNotFound {
                variable: self
                    .variables
                    .get(variable_index)
                    .cloned()
                    .unwrap_or_default(),
                mode,
                path_type,
                vot_group,
                minute,
            })
    }
}

fn lookup(variables: &HashMap<String, usize>, variable: &str) -> Result<usize, RosterError> {
    variables
        .get(variable)
        .copied()
        .ok_or_else(|| RosterError::VariableNotFound(variable.to_string()))
}
