use std::path::{Path, PathBuf};

use crate::set::MessageSet;

/// Destination for a validated message set.
///
/// Implementations own the artifact format and must write it durably. The
/// set has already passed validation and is not re-checked.
pub trait ArtifactSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Write `set` to `path`, returning the path actually written.
    fn write(&self, set: &MessageSet, path: &Path) -> Result<PathBuf, Self::Error>;
}
