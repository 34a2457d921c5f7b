use std::path::PathBuf;

use crate::violation::ValidationReport;

/// Errors produced while assembling the message set.
#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    /// One or more validation rules failed; nothing was written.
    #[error("message set failed validation:\n{0}")]
    Invalid(ValidationReport),

    /// The sink could not write the artifact.
    #[error("failed to write artifact: {0}")]
    Sink(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors loading a bus profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The profile file could not be read.
    #[error("failed to read profile {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The profile is not valid JSON or does not match the profile shape.
    #[error("profile is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The embedded profile schema failed to compile.
    #[error("failed to compile profile schema: {0}")]
    CompileFailed(String),

    /// The profile document violates the profile schema.
    #[error("profile failed validation: {0}")]
    ValidationFailed(String),

    /// A reserved range ends before it starts.
    #[error("reserved range {label} is inverted ({start} > {end})")]
    InvertedRange { label: String, start: u32, end: u32 },
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
