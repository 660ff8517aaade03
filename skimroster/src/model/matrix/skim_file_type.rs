use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// source format of a roster entry's skim. parsed once from the roster
/// file; each non-deferred type needs a reader registered with the
/// matrix loader.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SkimFileType {
    /// no backing file, the matrix is empty and reads as zero
    Deferred,
    /// delimited text rows of origin, destination, values...
    Text,
    Binary,
    Hdf5,
    Emme,
    Cube,
}

impl SkimFileType {
    pub fn is_deferred(&self) -> bool {
        matches!(self, SkimFileType::Deferred)
    }
}

impl Display for SkimFileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SkimFileType::Deferred => "deferred",
            SkimFileType::Text => "text_ij",
            SkimFileType::Binary => "bin",
            SkimFileType::Hdf5 => "hdf5",
            SkimFileType::Emme => "emme",
            SkimFileType::Cube => "cube",
        };
        write!(f, "{s}")
    }
}

impl FromStr for SkimFileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "deferred" => Ok(SkimFileType::Deferred),
            "text_ij" | "text" => Ok(SkimFileType::Text),
            "bin" | "binary" => Ok(SkimFileType::Binary),
            "hdf5" | "h5" => Ok(SkimFileType::Hdf5),
            "emme" => Ok(SkimFileType::Emme),
            "cube" => Ok(SkimFileType::Cube),
            other => Err(format!("unsupported skim file type '{other}'")),
        }
    }
}
