//! CAN message and signal definitions.
//!
//! This is the data layer of febcan. Producers return a [`MessageDefinition`]
//! for an assigned arbitration ID, the assembler validates a sequence of them,
//! and sinks render them into a definitions artifact.
//!
//! Bit positions follow DBC numbering: bit `n` lives in byte `n / 8` at bit
//! `n % 8`, for both byte orders.

pub mod error;
pub mod message;
pub mod signal;

pub use error::{ModelError, Result};
pub use message::{MessageDefinition, MAX_DLC};
pub use signal::{ByteOrder, Signal};
