use std::path::PathBuf;

/// Errors that can occur while rendering or writing a DBC file.
#[derive(Debug, thiserror::Error)]
pub enum DbcError {
    /// A message, signal or node name is not a valid DBC identifier.
    #[error("{kind} name {name:?} is not a valid DBC identifier")]
    InvalidIdentifier { kind: &'static str, name: String },

    /// A cycle time does not fit the declared `GenMsgCycleTime` range.
    #[error("message {message} cycle time {cycle_ms} ms exceeds the {max} ms attribute maximum")]
    CycleTimeOutOfRange {
        message: String,
        cycle_ms: u32,
        max: u32,
    },

    /// The artifact could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DbcError>;
