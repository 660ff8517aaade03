#[derive(thiserror::Error, Debug)]
pub enum SkimReaderError {
    #[error("skim file '{0}' not found")]
    SkimFileNotFound(String),
    #[error("failed reading '{filename}': {error}")]
    ReadError { filename: String, error: String },
    #[error("invalid skim row in '{filename}' at line {line}: {message}")]
    InvalidSkimRow {
        filename: String,
        line: u64,
        message: String,
    },
    #[error("error reading skim file '{filename}': row {row} has unmapped id {id} ({content})")]
    ErrorReadingSkimFile {
        filename: String,
        row: usize,
        id: i64,
        content: String,
    },
    #[error("field {field} of '{filename}' is not a value column; row has {columns} columns and the first two are ids")]
    InvalidSkimField {
        filename: String,
        field: usize,
        columns: usize,
    },
    #[error("text skim delimiter must be a single ASCII character, found '{0}'")]
    InvalidDelimiter(char),
    #[error("failure reading id mapping '{filename}' at line {line}: {message}")]
    MappingFileError {
        filename: String,
        line: u64,
        message: String,
    },
    #[error("id {0} appears more than once in an id mapping")]
    DuplicateId(i64),
    #[error("no id mapping configured for length '{0}'")]
    MissingMapping(String),
}
