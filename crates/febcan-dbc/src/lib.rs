//! DBC output for febcan.
//!
//! [`DbcWriter`] is the default [`ArtifactSink`](febcan_assembler::ArtifactSink):
//! it renders a validated message set as DBC text and replaces the target
//! file atomically.

pub mod config;
pub mod error;
pub mod render;
pub mod writer;

pub use config::DbcConfig;
pub use error::{DbcError, Result};
pub use render::render;
pub use writer::DbcWriter;
