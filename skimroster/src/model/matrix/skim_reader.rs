use super::{IdMapping, QuantizedMatrix, SkimReaderError};
use std::path::Path;

/// reads one value column of a skim file into a quantized matrix.
///
/// a reader is used only while a roster is being built. implementations may
/// keep state across calls, such as rows of files already parsed.
pub trait SkimFileReader: Send {
    /// # Arguments
    ///
    /// * `filename` - skim file path
    /// * `field`    - 1-based column of the value to read, counting the two leading id columns
    /// * `scale`    - multiplier applied to source values before quantization
    /// * `mapping`  - external id to dense index mapping for the matrix rows and columns
    ///
    /// # Returns
    ///
    /// * a dense matrix sized to the mapping, or an error
    fn read(
        &mut self,
        filename: &Path,
        field: usize,
        scale: f64,
        mapping: &IdMapping,
    ) -> Result<QuantizedMatrix, SkimReaderError>;
}

/// creates readers for one skim file type. every reader returned starts
/// with no cached state.
pub trait SkimReaderBuilder: Send + Sync {
    fn build(&self) -> Box<dyn SkimFileReader>;
}
