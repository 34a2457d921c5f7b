use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use febcan_assembler::{ArtifactSink, MessageSet};
use tracing::{debug, info};

use crate::config::DbcConfig;
use crate::error::{DbcError, Result};
use crate::render::render;

/// Writes message sets as DBC files.
///
/// Output goes to a sibling temp file that is renamed over the target, so a
/// failed write never leaves a truncated database behind.
#[derive(Debug, Clone, Default)]
pub struct DbcWriter {
    config: DbcConfig,
}

impl DbcWriter {
    /// Create a writer with default config.
    pub fn new() -> Self {
        Self::with_config(DbcConfig::default())
    }

    /// Create a writer with explicit config.
    pub fn with_config(config: DbcConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DbcConfig {
        &self.config
    }

    /// Render and write `set` to `path`.
    pub fn write_file(&self, set: &MessageSet, path: &Path) -> Result<PathBuf> {
        let text = render(set, &self.config)?;
        let io_err = |source| DbcError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let tmp = temp_path(path);
        debug!(tmp = %tmp.display(), bytes = text.len(), "writing dbc");
        let result = File::create(&tmp)
            .and_then(|mut file| {
                file.write_all(text.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| std::fs::rename(&tmp, path));
        if let Err(err) = result {
            let _ = std::fs::remove_file(&tmp);
            return Err(io_err(err));
        }

        info!(path = %path.display(), messages = set.len(), "dbc written");
        Ok(path.to_path_buf())
    }
}

impl ArtifactSink for DbcWriter {
    type Error = DbcError;

    fn write(&self, set: &MessageSet, path: &Path) -> Result<PathBuf> {
        self.write_file(set, path)
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use febcan_assembler::{Assembler, AssemblyError};
    use febcan_model::MessageDefinition;
    use febcan_registry::MessageSlot;

    use super::*;

    fn res_state(id: u32) -> MessageDefinition {
        MessageDefinition::new(id, "res_state", 0).sender("RES")
    }

    fn make_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "febcan-dbc-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn writes_file_and_creates_parent_dirs() {
        let dir = make_temp_dir("write");
        let path = dir.join("gen").join("FEB_CAN.dbc");
        let set = Assembler::default()
            .build(&[MessageSlot::new(res_state, 11, "res")])
            .unwrap();

        let written = DbcWriter::new().write_file(&set, &path).unwrap();
        assert_eq!(written, path);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("BO_ 11 res_state: 0 RES"));
        assert!(!temp_path(&path).exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn overwrites_existing_artifact() {
        let dir = make_temp_dir("overwrite");
        let path = dir.join("FEB_CAN.dbc");
        std::fs::write(&path, "stale").unwrap();

        let set = Assembler::default().build_registry().unwrap();
        DbcWriter::new().write_file(&set, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("VERSION"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn assembler_writes_through_sink() {
        let dir = make_temp_dir("sink");
        let path = dir.join("FEB_CAN.dbc");

        let written = Assembler::default()
            .assemble_and_write(febcan_registry::entries(), &DbcWriter::new(), &path)
            .unwrap();
        assert_eq!(written, path);
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn invalid_table_leaves_no_file() {
        let dir = make_temp_dir("invalid");
        let path = dir.join("FEB_CAN.dbc");

        let result = Assembler::default().assemble_and_write(
            &[MessageSlot::new(res_state, 0, "res")],
            &DbcWriter::new(),
            &path,
        );
        assert!(matches!(result, Err(AssemblyError::Invalid(_))));
        assert!(!path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unwritable_target_is_io_error() {
        let dir = make_temp_dir("unwritable");
        let blocker = dir.join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();
        let set = Assembler::default()
            .build(&[MessageSlot::new(res_state, 11, "res")])
            .unwrap();

        let result = DbcWriter::new().write_file(&set, &blocker.join("out.dbc"));
        assert!(matches!(result, Err(DbcError::Io { .. })));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn temp_path_is_a_sibling() {
        let tmp = temp_path(Path::new("gen/FEB_CAN.dbc"));
        assert_eq!(tmp.parent(), Some(Path::new("gen")));
        assert!(tmp.to_string_lossy().ends_with(".tmp"));
    }
}
