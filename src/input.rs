use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a molecular formula.")]
    Empty,
    #[error("Formulas must be written in capital letters, e.g. {}", .0.to_ascii_uppercase())]
    Lowercase(String),
}

/// Trims and upper-cases user input so it can be classified.
pub fn normalize(input: &str) -> Result<String, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Trims user input and rejects any lowercase letters instead of fixing them.
pub fn normalize_strict(input: &str) -> Result<String, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if trimmed.chars().any(|c| c.is_lowercase()) {
        warn!(input = trimmed, "rejecting lowercase formula");
        return Err(InputError::Lowercase(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}
