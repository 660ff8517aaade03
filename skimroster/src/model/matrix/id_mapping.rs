use super::SkimReaderError;
use std::{collections::HashMap, fs::File, io::Read, path::Path};

/// maps external entity ids (zone or stop numbers) to dense matrix indices.
/// indices follow the order in which ids were supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdMapping {
    lookup: HashMap<i64, usize>,
    ids: Vec<i64>,
}

impl IdMapping {
    /// builds a mapping from ids in dense order. repeated ids are rejected.
    pub fn new<I>(ids: I) -> Result<IdMapping, SkimReaderError>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut mapping = IdMapping::default();
        for id in ids {
            mapping.push(id).map_err(SkimReaderError::DuplicateId)?;
        }
        Ok(mapping)
    }

    /// reads a CSV with a header row whose first column holds external ids
    pub fn from_csv(path: &Path) -> Result<IdMapping, SkimReaderError> {
        let filename = path.display().to_string();
        let file = File::open(path).map_err(|e| SkimReaderError::ReadError {
            filename: filename.clone(),
            error: e.to_string(),
        })?;
        IdMapping::from_reader(file, &filename)
    }

    pub fn from_reader<R: Read>(reader: R, filename: &str) -> Result<IdMapping, SkimReaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut mapping = IdMapping::default();
        for row in csv_reader.records() {
            let record = row.map_err(|e| SkimReaderError::MappingFileError {
                filename: filename.to_string(),
                line: e.position().map(|p| p.line()).unwrap_or_default(),
                message: e.to_string(),
            })?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let token = record.get(0).unwrap_or_default();
            let id = token
                .parse::<i64>()
                .map_err(|e| SkimReaderError::MappingFileError {
                    filename: filename.to_string(),
                    line,
                    message: format!("id '{token}' is not an integer: {e}"),
                })?;
            mapping
                .push(id)
                .map_err(|dup| SkimReaderError::MappingFileError {
                    filename: filename.to_string(),
                    line,
                    message: format!("duplicate id {dup}"),
                })?;
        }
        Ok(mapping)
    }

    fn push(&mut self, id: i64) -> Result<(), i64> {
        if self.lookup.contains_key(&id) {
            return Err(id);
        }
        self.lookup.insert(id, self.ids.len());
        self.ids.push(id);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get_index(&self, id: i64) -> Option<usize> {
        self.lookup.get(&id).copied()
    }

    pub fn get_id(&self, index: usize) -> Option<i64> {
        self.ids.get(index).copied()
    }
}

#[cfg(test)]
mod test {
    use super::IdMapping;

    #[test]
    fn test_dense_order() {
        let mapping = IdMapping::new([101, 7, 55]).expect("unique ids");
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.get_index(101), Some(0));
        assert_eq!(mapping.get_index(55), Some(2));
        assert_eq!(mapping.get_index(8), None);
        assert_eq!(mapping.get_id(1), Some(7));
    }

    #[test]
    fn test_from_reader_skips_header_and_extra_columns() {
        let data = "zone_id,district\n10,a\n20,b\n 30 ,c\n";
        let mapping = IdMapping::from_reader(data.as_bytes(), "zones.csv").expect("valid file");
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.get_index(30), Some(2));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let data = "zone_id\n10\n20\n10\n";
        let err = IdMapping::from_reader(data.as_bytes(), "zones.csv").unwrap_err();
        assert!(err.to_string().contains("duplicate id 10"));
    }

    #[test]
    fn test_non_integer_id_is_rejected() {
        let data = "zone_id\n10\nten\n";
        let err = IdMapping::from_reader(data.as_bytes(), "zones.csv").unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }
}
