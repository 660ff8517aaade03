mod id_mapping;
mod matrix_key;
mod matrix_loader;
mod quantized_matrix;
mod skim_file_type;
mod skim_mappings;
mod skim_reader;
mod skim_reader_error;
pub(crate) mod text_skim_reader;

pub use id_mapping::IdMapping;
pub use matrix_key::MatrixKey;
pub use matrix_loader::MatrixLoader;
pub use quantized_matrix::QuantizedMatrix;
pub use skim_file_type::SkimFileType;
pub use skim_mappings::{SkimMappings, TRANSIT_STOP_LENGTH};
pub use skim_reader::{SkimFileReader, SkimReaderBuilder};
pub use skim_reader_error::SkimReaderError;
pub use text_skim_reader::{TextSkimReader, TextSkimReaderBuilder};
