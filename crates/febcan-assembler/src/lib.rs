//! Assemble the registry table into a validated message set.
//!
//! The [`Assembler`] invokes every producer with its assigned arbitration ID,
//! then checks the accumulated definitions against a [`BusProfile`]:
//! IDs are unique, outside the profile's reserved ranges, and within its
//! addressing width. Every violation is collected into one
//! [`ValidationReport`] so the table can be fixed in a single pass.
//!
//! A successful build yields a [`MessageSet`] that an [`ArtifactSink`] can
//! write without re-validating.

pub mod assembler;
pub mod config;
pub mod error;
pub mod profile;
pub mod set;
pub mod sink;
pub mod violation;

pub use assembler::Assembler;
pub use config::{AssemblerConfig, ContractPolicy};
pub use error::{AssemblyError, ProfileError, Result};
pub use profile::{Addressing, BusProfile, ReservedRange};
pub use set::MessageSet;
pub use sink::ArtifactSink;
pub use violation::{SlotRef, ValidationReport, Violation};
