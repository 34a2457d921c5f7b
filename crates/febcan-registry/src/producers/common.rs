//! Layouts shared by several boards.

use febcan_model::{MessageDefinition, Signal};

/// TPS2482 power monitor report: bus voltage and shunt current.
pub fn tps_voltage_current(id: u32, node: &str) -> MessageDefinition {
    MessageDefinition::new(id, format!("{}_tps", node.to_ascii_lowercase()), 4)
        .sender(node)
        .signal(
            Signal::new("bus_voltage", 0, 16)
                .unit("mV")
                .range(0.0, 65535.0),
        )
        .signal(
            Signal::new("current", 16, 16)
                .signed()
                .unit("mA")
                .range(-32768.0, 32767.0),
        )
        .comment(format!("{node} low-voltage rail monitor"))
}

/// Periodic liveness frame sent by every low-voltage board.
pub fn heartbeat(id: u32, node: &str) -> MessageDefinition {
    MessageDefinition::new(id, format!("{}_heartbeat", node.to_ascii_lowercase()), 3)
        .sender(node)
        .signal(Signal::new("state", 0, 8))
        .signal(Signal::new("fault_flags", 8, 16))
        .cycle_time(100)
}
