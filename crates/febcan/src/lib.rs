//! CAN message database compiler for the low-voltage power distribution bus.
//!
//! febcan pairs every subsystem's message producer with an arbitration ID,
//! validates the assembled set against a bus profile (unique IDs, CANopen
//! NMT and Emergency left free, addressing width respected) and writes a
//! single DBC database.
//!
//! # Crate Structure
//!
//! - [`model`]: Message and signal definitions
//! - [`registry`]: The registry table and per-subsystem producers
//! - [`assembler`]: Assembly, validation and bus profiles
//! - [`dbc`]: DBC rendering and atomic file output

/// Re-export model types.
pub mod model {
    pub use febcan_model::*;
}

/// Re-export registry types.
pub mod registry {
    pub use febcan_registry::*;
}

/// Re-export assembler types.
pub mod assembler {
    pub use febcan_assembler::*;
}

/// Re-export DBC output types.
pub mod dbc {
    pub use febcan_dbc::*;
}
