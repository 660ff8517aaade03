use crate::{
    config::RosterConfiguration,
    model::{
        impedance::ImpedanceRoster,
        matrix::{MatrixLoader, SkimFileType, SkimMappings, SkimReaderBuilder},
        roster::{RosterError, RosterTable},
        vot::VotGroupResolver,
    },
};
use std::{sync::Arc, time::Instant};

/// builds an [`ImpedanceRoster`] from configuration: combinations, then
/// roster entries, then id mappings, then every distinct matrix. readers and
/// their row caches are dropped once the roster is returned.
pub struct RosterBuilder {
    config: RosterConfiguration,
    reader_builders: Vec<(SkimFileType, Arc<dyn SkimReaderBuilder>)>,
}

impl RosterBuilder {
    pub fn new(config: RosterConfiguration) -> RosterBuilder {
        RosterBuilder {
            config,
            reader_builders: vec![],
        }
    }

    /// registers a reader for a skim format not read by default
    pub fn with_reader_builder(
        mut self,
        file_type: SkimFileType,
        builder: Arc<dyn SkimReaderBuilder>,
    ) -> RosterBuilder {
        self.reader_builders.push((file_type, builder));
        self
    }

    pub fn build(self) -> Result<ImpedanceRoster, RosterError> {
        let start = Instant::now();
        let files = &self.config.files;
        log::info!(
            "reading roster {} with combinations {}",
            files.roster_file.display(),
            files.combinations_file.display()
        );
        let table = RosterTable::from_files(&files.combinations_file, &files.roster_file)?;
        let vot = VotGroupResolver::new(&self.config.vot);
        let mappings = SkimMappings::from_config(files)?;
        log::info!(
            "zone mapping has {} zones{}",
            mappings.zones.len(),
            mappings
                .transit_stops
                .as_ref()
                .map(|m| format!(", transit stop mapping has {} stops", m.len()))
                .unwrap_or_default()
        );

        let loader = self.reader_builders.into_iter().fold(
            MatrixLoader::new(
                &files.skim_directory,
                self.config.text_skim.clone(),
                self.config.build.parallel,
            ),
            |loader, (file_type, builder)| loader.with_reader_builder(file_type, builder),
        );
        let load_start = Instant::now();
        let matrices = loader.load(table.matrix_keys(), &mappings)?;
        log::info!(
            "loaded {} matrices in {:?}",
            matrices.len(),
            load_start.elapsed()
        );

        let roster = ImpedanceRoster::new(
            table,
            matrices,
            vot,
            self.config.impedance.clone(),
            mappings,
        );
        log::info!("roster built in {:?}", start.elapsed());
        Ok(roster)
    }
}
