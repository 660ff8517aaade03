#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum VocabularyError {
    #[error("invalid mode '{0}'")]
    InvalidMode(String),
    #[error("invalid path type '{0}', expected one of full-network, no-tolls, local-bus, light-rail, premium-bus, commuter-rail, ferry")]
    InvalidPathType(String),
    #[error("invalid vot group '{0}'")]
    InvalidVotGroup(String),
    #[error("invalid boolean '{0}', expected 'true' or 'false'")]
    InvalidBoolean(String),
    #[error("invalid clock time '{0}': {1}")]
    InvalidClockTime(String, String),
}
