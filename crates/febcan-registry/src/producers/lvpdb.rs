use febcan_model::{MessageDefinition, Signal};

use super::common;
use super::nodes::{DASH, LVPDB};

fn rail_current(name: &str, start: u16) -> Signal {
    Signal::new(name, start, 16).signed().unit("mA")
}

pub fn get_lvpdb_flag_bus_voltage_lv_current(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "lvpdb_flags_bus_voltage_lv_current", 8)
        .sender(LVPDB)
        .signal(Signal::new("flags", 0, 32).comment("Per-rail alert bits"))
        .signal(
            Signal::new("bus_voltage", 32, 16)
                .unit("mV")
                .receivers(&[DASH]),
        )
        .signal(rail_current("lv_current", 48))
}

pub fn get_lvpdb_cp_af_rf_sh_current(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "lvpdb_cp_af_rf_sh_current", 8)
        .sender(LVPDB)
        .signal(rail_current("cp_current", 0))
        .signal(rail_current("af_current", 16))
        .signal(rail_current("rf_current", 32))
        .signal(rail_current("sh_current", 48))
}

pub fn get_lvpdb_l_as_ab_current(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "lvpdb_l_as_ab_current", 6)
        .sender(LVPDB)
        .signal(rail_current("l_current", 0))
        .signal(rail_current("as_current", 16))
        .signal(rail_current("ab_current", 32))
}

pub fn get_lvpdb_heartbeat(id: u32) -> MessageDefinition {
    common::heartbeat(id, LVPDB)
}
