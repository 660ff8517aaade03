use super::SkimFileType;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::fmt::Display;

/// identity of one stored matrix. roster entries with equal keys share a
/// single matrix; entries differing only in factor, transpose or time
/// window still read the same stored values.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatrixKey {
    pub name: String,
    pub field: usize,
    pub file_type: SkimFileType,
    pub scaling: OrderedFloat<f64>,
    pub length: String,
}

impl Display for MatrixKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} ({}, scaling {}, {})",
            self.name, self.field, self.file_type, self.scaling, self.length
        )
    }
}
