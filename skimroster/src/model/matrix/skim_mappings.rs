use super::{IdMapping, SkimReaderError};
use crate::config::RosterFilesConfig;

/// roster entries with this length are indexed by transit stop instead of zone
pub const TRANSIT_STOP_LENGTH: &str = "transitstop";

/// the id mappings a roster's matrices are indexed by
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkimMappings {
    pub zones: IdMapping,
    pub transit_stops: Option<IdMapping>,
}

impl SkimMappings {
    pub fn new(zones: IdMapping, transit_stops: Option<IdMapping>) -> SkimMappings {
        SkimMappings {
            zones,
            transit_stops,
        }
    }

    pub fn from_config(files: &RosterFilesConfig) -> Result<SkimMappings, SkimReaderError> {
        let zones = IdMapping::from_csv(&files.zone_file)?;
        let transit_stops = files
            .transit_stop_file
            .as_ref()
            .map(|f| IdMapping::from_csv(f))
            .transpose()?;
        Ok(SkimMappings::new(zones, transit_stops))
    }

    /// picks the mapping used by entries of the given length category
    pub fn for_length(&self, length: &str) -> Result<&IdMapping, SkimReaderError> {
        if length.eq_ignore_ascii_case(TRANSIT_STOP_LENGTH) {
            self.transit_stops
                .as_ref()
                .ok_or_else(|| SkimReaderError::MissingMapping(length.to_string()))
        } else {
            Ok(&self.zones)
        }
    }
}
