use crate::{config::RosterConfigError, model::roster::RosterError};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] RosterConfigError),
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error("zone id {0} is not in the zone mapping")]
    UnknownZone(i64),
    #[error("failure writing output: {0}")]
    OutputError(#[from] serde_json::Error),
}
