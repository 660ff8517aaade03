use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// input files consumed by the roster build
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RosterFilesConfig {
    /// which (mode, path type) pairs may appear in the roster
    pub combinations_file: PathBuf,
    /// roster definition rows
    pub roster_file: PathBuf,
    /// directory holding the skim files named by roster rows
    pub skim_directory: PathBuf,
    /// zone ids in dense index order
    pub zone_file: PathBuf,
    /// transit stop ids in dense index order, for "transitstop" roster rows
    #[serde(default)]
    pub transit_stop_file: Option<PathBuf>,
}

impl RosterFilesConfig {
    /// re-roots relative paths at `base`. absolute paths are unchanged.
    pub fn resolve_relative_to(self, base: &Path) -> RosterFilesConfig {
        RosterFilesConfig {
            combinations_file: base.join(self.combinations_file),
            roster_file: base.join(self.roster_file),
            skim_directory: base.join(self.skim_directory),
            zone_file: base.join(self.zone_file),
            transit_stop_file: self.transit_stop_file.map(|f| base.join(f)),
        }
    }
}
