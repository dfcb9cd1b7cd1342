use thiserror::Error;
use tracing::debug;

use crate::{try_generate_prefix, CompoundDescriptor, PrefixError, MAX_CARBONS};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingError {
    #[error("Structure too complex for current naming logic.")]
    TooComplex { carbon_count: u64 },
    #[error("Invalid structure")]
    InvalidStructure,
}

/// Builds the systematic name for a classified compound.
///
/// The carbon ceiling is checked before the group, so an unreadable formula
/// with too many carbons is reported as too complex rather than invalid.
/// A chain without carbons is an invalid structure whatever its group.
pub fn try_name(descriptor: &CompoundDescriptor) -> Result<String, NamingError> {
    let carbon_count = descriptor.carbon_count();
    if carbon_count > MAX_CARBONS {
        return Err(NamingError::TooComplex { carbon_count });
    }
    let suffix = descriptor
        .group()
        .suffix()
        .ok_or(NamingError::InvalidStructure)?;

    let mut name = try_generate_prefix(carbon_count).map_err(|e| match e {
        PrefixError::Zero => NamingError::InvalidStructure,
        PrefixError::OutOfRange(carbon_count) => NamingError::TooComplex { carbon_count },
    })?;
    name.push_str(suffix);
    if let Some(locant) = descriptor.position_marker() {
        name = format!("{}-{}", locant, name);
    }
    Ok(capitalize_first(&name))
}

/// Total form of [`try_name`]: failures come back as their diagnostic text.
pub fn name(descriptor: &CompoundDescriptor) -> String {
    try_name(descriptor).unwrap_or_else(|e| {
        debug!(?descriptor, "{}", e);
        e.to_string()
    })
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The message shown to a user for a naming result.
pub fn reply_text(result: &str) -> String {
    format!("IUPAC Name: {}", result)
}
