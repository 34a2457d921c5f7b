use febcan_model::{MessageDefinition, Signal};

use super::common;
use super::nodes::{DASH, PCU};

pub fn get_dash_buttons(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "dash_buttons", 1)
        .sender(DASH)
        .signal(Signal::new("ready_to_drive", 0, 1).receivers(&[PCU]))
        .signal(Signal::new("mode_button", 1, 1))
        .signal(Signal::new("data_log_button", 2, 1))
        .signal(Signal::new("switch_1", 3, 1))
        .signal(Signal::new("switch_2", 4, 1))
        .signal(Signal::new("switch_3", 5, 1))
}

pub fn get_tps_voltage_current(id: u32) -> MessageDefinition {
    common::tps_voltage_current(id, DASH)
}

pub fn get_dash_heartbeat(id: u32) -> MessageDefinition {
    common::heartbeat(id, DASH)
}
