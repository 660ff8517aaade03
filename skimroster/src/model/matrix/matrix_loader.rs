use super::{
    MatrixKey, QuantizedMatrix, SkimFileReader, SkimFileType, SkimMappings, SkimReaderBuilder,
    TextSkimReaderBuilder,
};
use crate::{config::TextSkimConfig, model::roster::RosterError};
use itertools::Itertools;
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use std::{
    collections::{hash_map::Entry, HashMap},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

/// readers in use during one load, at most one per file type
type ReaderSet = HashMap<SkimFileType, Box<dyn SkimFileReader>>;

/// builds every distinct matrix named by a roster, in matrix index order.
///
/// text skims are supported out of the box. other file types are read by
/// builders registered with [`MatrixLoader::with_reader_builder`].
pub struct MatrixLoader {
    skim_directory: PathBuf,
    builders: HashMap<SkimFileType, Arc<dyn SkimReaderBuilder>>,
    parallel: bool,
}

impl MatrixLoader {
    pub fn new(skim_directory: &Path, text_config: TextSkimConfig, parallel: bool) -> MatrixLoader {
        let mut builders: HashMap<SkimFileType, Arc<dyn SkimReaderBuilder>> = HashMap::new();
        builders.insert(
            SkimFileType::Text,
            Arc::new(TextSkimReaderBuilder::new(text_config)),
        );
        MatrixLoader {
            skim_directory: skim_directory.to_path_buf(),
            builders,
            parallel,
        }
    }

    pub fn with_reader_builder(
        mut self,
        file_type: SkimFileType,
        builder: Arc<dyn SkimReaderBuilder>,
    ) -> MatrixLoader {
        self.builders.insert(file_type, builder);
        self
    }

    /// loads one matrix per key. the result is indexed like `keys`.
    ///
    /// sequential loads share one reader per file type across all keys. parallel
    /// loads group keys by source file and give each group its own readers, so
    /// each file is still parsed once and every group fills disjoint slots.
    pub fn load(
        &self,
        keys: &[MatrixKey],
        mappings: &SkimMappings,
    ) -> Result<Vec<QuantizedMatrix>, RosterError> {
        self.check_readers(keys)?;
        let bar = Bar::builder()
            .desc("load skim matrices")
            .total(keys.len())
            .build()
            .map_err(RosterError::InternalError)?;
        let bar = Mutex::new(bar);
        let result = if self.parallel {
            self.load_parallel(keys, mappings, &bar)
        } else {
            self.load_sequential(keys, mappings, &bar)
        };
        eprintln!();
        result
    }

    /// fails before any file is read when a key needs an unregistered reader
    fn check_readers(&self, keys: &[MatrixKey]) -> Result<(), RosterError> {
        match keys
            .iter()
            .find(|k| !k.file_type.is_deferred() && !self.builders.contains_key(&k.file_type))
        {
            Some(key) => Err(RosterError::UnsupportedFileType {
                file_type: key.file_type.to_string(),
                context: format!("no reader registered, needed for matrix {key}"),
            }),
            None => Ok(()),
        }
    }

    fn load_sequential(
        &self,
        keys: &[MatrixKey],
        mappings: &SkimMappings,
        bar: &Mutex<Bar>,
    ) -> Result<Vec<QuantizedMatrix>, RosterError> {
        let mut readers = ReaderSet::new();
        keys.iter()
            .map(|key| {
                let matrix = self.load_one(key, mappings, &mut readers)?;
                tick(bar);
                Ok(matrix)
            })
            .collect()
    }

    fn load_parallel(
        &self,
        keys: &[MatrixKey],
        mappings: &SkimMappings,
        bar: &Mutex<Bar>,
    ) -> Result<Vec<QuantizedMatrix>, RosterError> {
        let groups = keys
            .iter()
            .enumerate()
            .into_group_map_by(|(_, key)| (key.file_type, key.name.clone()));
        let loaded = groups
            .into_par_iter()
            .map(|(_, members)| {
                let mut readers = ReaderSet::new();
                members
                    .into_iter()
                    .map(|(index, key)| {
                        let matrix = self.load_one(key, mappings, &mut readers)?;
                        tick(bar);
                        Ok((index, matrix))
                    })
                    .collect::<Result<Vec<_>, RosterError>>()
            })
            .collect::<Result<Vec<_>, RosterError>>()?;
        let matrices = loaded
            .into_iter()
            .flatten()
            .sorted_by_key(|(index, _)| *index)
            .map(|(_, matrix)| matrix)
            .collect_vec();
        Ok(matrices)
    }

    fn load_one(
        &self,
        key: &MatrixKey,
        mappings: &SkimMappings,
        readers: &mut ReaderSet,
    ) -> Result<QuantizedMatrix, RosterError> {
        if key.file_type.is_deferred() {
            return Ok(QuantizedMatrix::Empty);
        }
        let reader = match readers.entry(key.file_type) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                let builder = self.builders.get(&key.file_type).ok_or_else(|| {
                    RosterError::UnsupportedFileType {
                        file_type: key.file_type.to_string(),
                        context: format!("no reader registered, needed for matrix {key}"),
                    }
                })?;
                e.insert(builder.build())
            }
        };
        let mapping = mappings.for_length(&key.length)?;
        let path = self.skim_directory.join(&key.name);
        let matrix = reader.read(&path, key.field, key.scaling.into_inner(), mapping)?;
        log::debug!("loaded matrix {key} with size {}", matrix.size());
        Ok(matrix)
    }
}

fn tick(bar: &Mutex<Bar>) {
    if let Ok(mut b) = bar.lock() {
        let _ = b.update(1);
    }
}
