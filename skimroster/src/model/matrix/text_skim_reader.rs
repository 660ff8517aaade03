use super::{IdMapping, QuantizedMatrix, SkimFileReader, SkimReaderBuilder, SkimReaderError};
use crate::config::TextSkimConfig;
use itertools::Itertools;
use std::{
    collections::{hash_map::Entry, HashMap},
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

/// number of leading id columns (origin, destination) on every skim row
const ID_COLUMNS: usize = 2;

/// reads delimited text skims of the form `origin, destination, v1, v2, ...`.
///
/// parsed rows are cached by file path so that several roster entries
/// reading different fields of one file only parse it once. the cache lives
/// as long as the reader, which is dropped at the end of the roster build.
pub struct TextSkimReader {
    config: TextSkimConfig,
    cache: HashMap<PathBuf, Vec<Box<[f64]>>>,
}

impl TextSkimReader {
    pub fn new(config: TextSkimConfig) -> TextSkimReader {
        TextSkimReader {
            config,
            cache: HashMap::new(),
        }
    }

    /// number of files currently held in the row cache
    pub fn cached_files(&self) -> usize {
        self.cache.len()
    }
}

impl SkimFileReader for TextSkimReader {
    fn read(
        &mut self,
        filename: &Path,
        field: usize,
        scale: f64,
        mapping: &IdMapping,
    ) -> Result<QuantizedMatrix, SkimReaderError> {
        let rows = match self.cache.entry(filename.to_path_buf()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                log::debug!("parsing text skim {}", filename.display());
                e.insert(read_text_skim_file(filename, &self.config)?)
            }
        };
        fill_matrix(rows, &filename.display().to_string(), field, scale, mapping)
    }
}

pub struct TextSkimReaderBuilder {
    config: TextSkimConfig,
}

impl TextSkimReaderBuilder {
    pub fn new(config: TextSkimConfig) -> TextSkimReaderBuilder {
        TextSkimReaderBuilder { config }
    }
}

impl SkimReaderBuilder for TextSkimReaderBuilder {
    fn build(&self) -> Box<dyn SkimFileReader> {
        Box::new(TextSkimReader::new(self.config.clone()))
    }
}

fn read_text_skim_file(
    filename: &Path,
    config: &TextSkimConfig,
) -> Result<Vec<Box<[f64]>>, SkimReaderError> {
    let name = filename.display().to_string();
    if !filename.is_file() {
        return Err(SkimReaderError::SkimFileNotFound(name));
    }
    let file = File::open(filename).map_err(|e| SkimReaderError::ReadError {
        filename: name.clone(),
        error: e.to_string(),
    })?;
    read_text_rows(file, &name, config)
}

/// parses every non-blank line into numeric fields. with a whitespace
/// delimiter, blank fields produced by repeated delimiters are skipped so
/// space-aligned files parse cleanly; with any other delimiter a blank field
/// is an error.
pub(crate) fn read_text_rows<R: Read>(
    reader: R,
    filename: &str,
    config: &TextSkimConfig,
) -> Result<Vec<Box<[f64]>>, SkimReaderError> {
    let delimiter = config
        .delimiter_byte()
        .ok_or(SkimReaderError::InvalidDelimiter(config.delimiter))?;
    let collapse_blanks = config.delimiter.is_ascii_whitespace();
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(config.has_header)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = vec![];
    for result in csv_reader.records() {
        let record = result.map_err(|e| SkimReaderError::InvalidSkimRow {
            filename: filename.to_string(),
            line: e.position().map(|p| p.line()).unwrap_or_default(),
            message: e.to_string(),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        if record.iter().all(|token| token.is_empty()) {
            continue;
        }
        let row = record
            .iter()
            .filter(|token| !(collapse_blanks && token.is_empty()))
            .map(|token| {
                if token.is_empty() {
                    return Err(SkimReaderError::InvalidSkimRow {
                        filename: filename.to_string(),
                        line,
                        message: String::from("empty field"),
                    });
                }
                token
                    .parse::<f64>()
                    .map_err(|e| SkimReaderError::InvalidSkimRow {
                        filename: filename.to_string(),
                        line,
                        message: format!("'{token}' is not a number: {e}"),
                    })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        if row.len() <= ID_COLUMNS {
            return Err(SkimReaderError::InvalidSkimRow {
                filename: filename.to_string(),
                line,
                message: format!(
                    "expected origin, destination and at least one value, found {} columns",
                    row.len()
                ),
            });
        }
        rows.push(row.into_boxed_slice());
    }
    Ok(rows)
}

/// writes one field of the parsed rows into a new matrix sized to `mapping`
pub(crate) fn fill_matrix(
    rows: &[Box<[f64]>],
    filename: &str,
    field: usize,
    scale: f64,
    mapping: &IdMapping,
) -> Result<QuantizedMatrix, SkimReaderError> {
    let mut matrix = QuantizedMatrix::new_dense(mapping.len());
    for (row_index, row) in rows.iter().enumerate() {
        let value = match field.checked_sub(1) {
            Some(column) if column >= ID_COLUMNS => row.get(column).copied(),
            _ => None,
        }
        .ok_or_else(|| SkimReaderError::InvalidSkimField {
            filename: filename.to_string(),
            field,
            columns: row.len(),
        })?;
        let origin = remap(row, 0, row_index, filename, mapping)?;
        let destination = remap(row, 1, row_index, filename, mapping)?;
        if let Some(cell) = matrix.get_mut(origin, destination) {
            *cell = QuantizedMatrix::quantize(value, scale);
        }
    }
    Ok(matrix)
}

fn remap(
    row: &[f64],
    column: usize,
    row_index: usize,
    filename: &str,
    mapping: &IdMapping,
) -> Result<usize, SkimReaderError> {
    let value = row.get(column).copied().unwrap_or(f64::NAN);
    let id = value as i64;
    let unmapped = || SkimReaderError::ErrorReadingSkimFile {
        filename: filename.to_string(),
        row: row_index,
        id,
        content: row.iter().join(","),
    };
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(unmapped());
    }
    mapping.get_index(id).ok_or_else(unmapped)
}
