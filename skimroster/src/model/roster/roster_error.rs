use crate::model::matrix::SkimReaderError;
use skimroster_core::model::{Mode, PathType, VotGroup};

#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    #[error("failed reading '{filepath}': {error}")]
    ReadError { filepath: String, error: String },
    #[error("invalid path type '{token}' in '{filename}' at line {line}")]
    InvalidPathType {
        filename: String,
        line: u64,
        token: String,
    },
    #[error("invalid row in '{filename}' at line {line}: {message}")]
    InvalidRosterRow {
        filename: String,
        line: u64,
        message: String,
    },
    #[error("mode {mode} and path type {path_type} is not a possible combination ({context})")]
    InvalidCombination {
        mode: Mode,
        path_type: PathType,
        context: String,
    },
    #[error("unsupported skim file type '{file_type}': {context}")]
    UnsupportedFileType { file_type: String, context: String },
    #[error("roster variable '{variable}' blends with '{blend_variable}', which has no roster entries")]
    UnknownBlendVariable {
        variable: String,
        blend_variable: String,
    },
    #[error("variable '{0}' not found in the roster")]
    VariableNotFound(String),
    #[error("no vot group contains value of time {0}")]
    VotGroupNotFound(f64),
    #[error("minute {0} is outside the roster day of 1 to 1440")]
    MinuteOutOfRange(usize),
    #[error("no roster entry for variable '{variable}', mode {mode}, path type {path_type}, vot group {vot_group}, minute {minute}")]
    RosterEntryNotFound {
        variable: String,
        mode: Mode,
        path_type: PathType,
        vot_group: VotGroup,
        minute: usize,
    },
    #[error("skim matrix {matrix_index} referenced by variable '{variable}' was never loaded")]
    SkimMatrixNotFound {
        variable: String,
        matrix_index: usize,
    },
    #[error("location pair ({origin}, {destination}) is outside the {size}x{size} matrix for variable '{variable}'")]
    LocationOutOfRange {
        variable: String,
        origin: usize,
        destination: usize,
        size: usize,
    },
    #[error(transparent)]
    SkimReader(#[from] SkimReaderError),
    #[error("{0}")]
    InternalError(String),
}
