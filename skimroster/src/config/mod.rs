mod build_config;
mod files_config;
mod impedance_config;
mod roster_config;
mod roster_config_error;
mod text_skim_config;
mod vot_config;

pub use build_config::BuildConfig;
pub use files_config::RosterFilesConfig;
pub use impedance_config::{DestinationScale, ImpedanceConfig};
pub use roster_config::RosterConfiguration;
pub use roster_config_error::RosterConfigError;
pub use text_skim_config::TextSkimConfig;
pub use vot_config::VotConfig;
