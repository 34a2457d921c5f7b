//! Message producers, one module per subsystem.
//!
//! Each producer is a plain `fn(u32) -> MessageDefinition` so it can be
//! placed directly in a [`MessageSlot`](crate::MessageSlot).

pub mod bms;
pub mod common;
pub mod dart;
pub mod dash;
pub mod dcu;
pub mod lvpdb;
pub mod pcu;
pub mod ping_pong;
pub mod res;
pub mod sensor_nodes;

/// Node names used as senders and receivers.
pub mod nodes {
    pub const RES: &str = "RES";
    pub const BMS: &str = "BMS";
    pub const PCU: &str = "PCU";
    pub const DASH: &str = "DASH";
    pub const LVPDB: &str = "LVPDB";
    pub const DCU: &str = "DCU";
    pub const FRONT_SENSOR: &str = "FRONT_SENSOR";
    pub const REAR_SENSOR: &str = "REAR_SENSOR";
    pub const DART: &str = "DART";
    pub const RMS: &str = "RMS";
}
