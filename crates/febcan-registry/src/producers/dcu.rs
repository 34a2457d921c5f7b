use febcan_model::MessageDefinition;

use super::common;
use super::nodes::DCU;

pub fn get_tps_voltage_current(id: u32) -> MessageDefinition {
    common::tps_voltage_current(id, DCU)
}

pub fn get_dcu_heartbeat(id: u32) -> MessageDefinition {
    common::heartbeat(id, DCU)
}
