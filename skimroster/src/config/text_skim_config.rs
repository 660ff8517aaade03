use serde::{Deserialize, Serialize};

/// layout of plain-text origin-destination skim files
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TextSkimConfig {
    /// single ASCII character separating columns
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// when true, the first line of each file is skipped
    #[serde(default)]
    pub has_header: bool,
}

fn default_delimiter() -> char {
    ','
}

impl Default for TextSkimConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_header: false,
        }
    }
}

impl TextSkimConfig {
    /// the delimiter as the single byte expected by the csv reader
    pub fn delimiter_byte(&self) -> Option<u8> {
        if self.delimiter.is_ascii() {
            u8::try_from(self.delimiter).ok()
        } else {
            None
        }
    }
}
