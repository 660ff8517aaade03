pub mod constants;
mod mode;
mod path_type;
mod skim_location;
mod vocabulary_error;
mod vot_group;

pub use mode::Mode;
pub use path_type::PathType;
pub use skim_location::{ParcelLocation, SkimLocation};
pub use vocabulary_error::VocabularyError;
pub use vot_group::VotGroup;
