use super::RosterError;
use skimroster_core::{
    model::{Mode, PathType},
    util::token_ops,
};
use std::{fs::File, io::Read, path::Path, str::FromStr};

type CombinationGrid = [[bool; PathType::TOTAL_PATH_TYPES]; Mode::TOTAL_MODES];

/// which (mode, path type) pairs may be configured in a roster, and which
/// of those the loaded roster actually uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterCombinations {
    possible: CombinationGrid,
    actual: CombinationGrid,
}

impl Default for RosterCombinations {
    fn default() -> Self {
        Self {
            possible: [[false; PathType::TOTAL_PATH_TYPES]; Mode::TOTAL_MODES],
            actual: [[false; PathType::TOTAL_PATH_TYPES]; Mode::TOTAL_MODES],
        }
    }
}

impl RosterCombinations {
    pub fn from_csv(path: &Path) -> Result<RosterCombinations, RosterError> {
        let filename = path.display().to_string();
        let file = File::open(path).map_err(|e| RosterError::ReadError {
            filepath: filename.clone(),
            error: e.to_string(),
        })?;
        RosterCombinations::from_reader(file, &filename)
    }

    /// reads rows of `path-type, walk, bike, ...` with one boolean per mode.
    /// lines starting with '#' and blank lines are skipped.
    pub fn from_reader<R: Read>(
        reader: R,
        filename: &str,
    ) -> Result<RosterCombinations, RosterError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .comment(Some(b'#'))
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let n_modes = Mode::roster_modes().count();
        let mut combinations = RosterCombinations::default();

        for row in csv_reader.records() {
            let record = row.map_err(|e| RosterError::InvalidRosterRow {
                filename: filename.to_string(),
                line: e.position().map(|p| p.line()).unwrap_or_default(),
                message: e.to_string(),
            })?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let tokens: Vec<&str> = record.iter().collect();
            let n_tokens = tokens
                .iter()
                .rposition(|t| !t.is_empty())
                .map(|last| last + 1)
                .unwrap_or_default();
            if n_tokens == 0 {
                continue;
            }
            let path_type =
                PathType::from_str(tokens[0]).map_err(|_| RosterError::InvalidPathType {
                    filename: filename.to_string(),
                    line,
                    token: tokens[0].to_string(),
                })?;
            if n_tokens != n_modes + 1 {
                return Err(RosterError::InvalidRosterRow {
                    filename: filename.to_string(),
                    line,
                    message: format!(
                        "expected a path type and {} mode flags, found {} values",
                        n_modes, n_tokens
                    ),
                });
            }
            for (mode, token) in Mode::roster_modes().zip(tokens[1..].iter()) {
                let flag =
                    token_ops::parse_bool(token).map_err(|e| RosterError::InvalidRosterRow {
                        filename: filename.to_string(),
                        line,
                        message: format!("mode {mode}: {e}"),
                    })?;
                combinations.possible[mode.id()][path_type.id()] = flag;
            }
        }
        Ok(combinations)
    }

    pub fn set_possible(&mut self, mode: Mode, path_type: PathType, possible: bool) {
        self.possible[mode.id()][path_type.id()] = possible;
    }

    pub fn is_possible_combination(&self, mode: Mode, path_type: PathType) -> bool {
        self.possible[mode.id()][path_type.id()]
    }

    pub fn is_actual_combination(&self, mode: Mode, path_type: PathType) -> bool {
        self.actual[mode.id()][path_type.id()]
    }

    /// checks a roster entry's pair against the possible combinations and
    /// records it as used. `context` locates the entry for the error message.
    pub fn use_combination<F>(
        &mut self,
        mode: Mode,
        path_type: PathType,
        context: F,
    ) -> Result<(), RosterError>
    where
        F: FnOnce() -> String,
    {
        if !self.is_possible_combination(mode, path_type) {
            return Err(RosterError::InvalidCombination {
                mode,
                path_type,
                context: context(),
            });
        }
        self.actual[mode.id()][path_type.id()] = true;
        Ok(())
    }

    /// (mode, path type) pairs referenced by at least one roster entry
    pub fn actual_combinations(&self) -> Vec<(Mode, PathType)> {
        Mode::ALL
            .into_iter()
            .flat_map(|m| PathType::ALL.into_iter().map(move |p| (m, p)))
            .filter(|(m, p)| self.is_actual_combination(*m, *p))
            .collect()
    }
}
