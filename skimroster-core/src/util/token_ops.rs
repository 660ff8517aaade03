use crate::model::VocabularyError;

/// parses a boolean token from a roster or combinations file.
/// accepts true/false in any case, and 1/0.
pub fn parse_bool(token: &str) -> Result<bool, VocabularyError> {
    match token.trim().to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(VocabularyError::InvalidBoolean(token.to_string())),
    }
}
