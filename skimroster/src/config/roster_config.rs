use super::{
    BuildConfig, ImpedanceConfig, RosterConfigError, RosterFilesConfig, TextSkimConfig,
    VotConfig,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// environment variables with this prefix override file values, using "__"
/// between section and key, e.g. SKIMROSTER_BUILD__PARALLEL=false
pub const ENV_PREFIX: &str = "SKIMROSTER";

/// everything needed to build an impedance roster
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RosterConfiguration {
    pub files: RosterFilesConfig,
    #[serde(default)]
    pub text_skim: TextSkimConfig,
    #[serde(default)]
    pub vot: VotConfig,
    #[serde(default)]
    pub impedance: ImpedanceConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

impl RosterConfiguration {
    pub fn validate(&self) -> Result<(), RosterConfigError> {
        self.vot
            .validate()
            .map_err(RosterConfigError::InvalidConfiguration)?;
        self.impedance
            .validate()
            .map_err(RosterConfigError::InvalidConfiguration)?;
        if self.text_skim.delimiter_byte().is_none() {
            return Err(RosterConfigError::InvalidConfiguration(format!(
                "text skim delimiter must be a single ASCII character, found '{}'",
                self.text_skim.delimiter
            )));
        }
        Ok(())
    }
}

/// reads a TOML or JSON configuration file (by extension), applies
/// environment overrides, and resolves file paths against the directory
/// containing the configuration file.
impl TryFrom<&Path> for RosterConfiguration {
    type Error = RosterConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let source = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|source| RosterConfigError::ConfigReadError {
                msg: format!("failure reading {}", path.display()),
                source,
            })?;
        let conf: RosterConfiguration =
            source
                .try_deserialize()
                .map_err(|source| RosterConfigError::ConfigReadError {
                    msg: format!("failure decoding {}", path.display()),
                    source,
                })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let resolved = RosterConfiguration {
            files: conf.files.resolve_relative_to(base),
            ..conf
        };
        resolved.validate()?;
        Ok(resolved)
    }
}
