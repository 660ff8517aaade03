#[derive(thiserror::Error, Debug)]
pub enum RosterConfigError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("invalid roster configuration: {0}")]
    InvalidConfiguration(String),
}
