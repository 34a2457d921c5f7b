//! Bus round-trip test frames: a little-endian `int32` counter the pong side
//! echoes back incremented.

use febcan_model::{MessageDefinition, Signal};

use super::nodes::LVPDB;

fn counter(id: u32, channel: u8) -> MessageDefinition {
    MessageDefinition::new(id, format!("ping_pong_counter{channel}"), 8)
        .sender(LVPDB)
        .signal(Signal::new("counter", 0, 32).signed())
}

pub fn get_ping_pong_counter1(id: u32) -> MessageDefinition {
    counter(id, 1)
}

pub fn get_ping_pong_counter2(id: u32) -> MessageDefinition {
    counter(id, 2)
}

pub fn get_ping_pong_counter3(id: u32) -> MessageDefinition {
    counter(id, 3)
}

pub fn get_ping_pong_counter4(id: u32) -> MessageDefinition {
    counter(id, 4)
}
