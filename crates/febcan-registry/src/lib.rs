//! Registry table for the vehicle CAN database.
//!
//! Every message the bus carries is declared once here as a [`MessageSlot`]:
//! the producer that builds it, the arbitration ID it is assigned, and a
//! priority-group label for readers of the table.
//!
//! The table is static configuration. It does not check itself; ID
//! uniqueness and reserved-range avoidance are enforced by the assembler.

pub mod producers;
pub mod slot;
pub mod table;

pub use slot::{MessageSlot, Producer};
pub use table::{entries, REGISTRY};
