use febcan_model::{MessageDefinition, Signal};

use super::common;
use super::nodes::{BMS, DASH, PCU};

pub fn get_bms_state(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "bms_state", 3)
        .sender(BMS)
        .signal(
            Signal::new("bms_state", 0, 5)
                .receivers(&[PCU, DASH])
                .choice(0, "BOOT")
                .choice(1, "ORIGIN")
                .choice(2, "LV_POWER")
                .choice(3, "BUS_HEALTH_CHECK")
                .choice(4, "PRECHARGE")
                .choice(5, "ENERGIZED")
                .choice(6, "DRIVE")
                .choice(7, "FAULT")
                .choice(8, "CHARGING")
                .choice(9, "BATTERY_FREE")
                .choice(10, "BALANCE"),
        )
        .signal(Signal::new("relay_state", 5, 3))
        .signal(Signal::new("gpio_sense", 8, 8))
        .signal(Signal::new("ping_lv_nodes", 16, 8))
        .cycle_time(100)
}

pub fn get_bms_cell_data(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "bms_cell_data", 5)
        .sender(BMS)
        .signal(Signal::new("bank", 0, 4))
        .signal(Signal::new("cell", 4, 4))
        .signal(
            Signal::new("voltage", 8, 16)
                .scaled(0.0001, 0.0)
                .unit("V"),
        )
        .signal(
            Signal::new("temperature", 24, 16)
                .signed()
                .scaled(0.1, 0.0)
                .unit("C"),
        )
}

pub fn get_accumulator_voltage(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "bms_accumulator_voltage", 6)
        .sender(BMS)
        .signal(
            Signal::new("pack_voltage", 0, 16)
                .scaled(0.01, 0.0)
                .unit("V")
                .receivers(&[DASH]),
        )
        .signal(
            Signal::new("min_cell_voltage", 16, 16)
                .scaled(0.001, 0.0)
                .unit("V")
                .receivers(&[DASH]),
        )
        .signal(
            Signal::new("max_cell_voltage", 32, 16)
                .scaled(0.001, 0.0)
                .unit("V"),
        )
}

pub fn get_accumulator_temperature(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "bms_accumulator_temperature", 6)
        .sender(BMS)
        .signal(
            Signal::new("avg_cell_temp", 0, 16)
                .signed()
                .scaled(0.1, 0.0)
                .unit("C"),
        )
        .signal(
            Signal::new("min_cell_temp", 16, 16)
                .signed()
                .scaled(0.1, 0.0)
                .unit("C"),
        )
        .signal(
            Signal::new("max_cell_temp", 32, 16)
                .signed()
                .scaled(0.1, 0.0)
                .unit("C")
                .receivers(&[DASH]),
        )
}

pub fn get_accumulator_faults(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "bms_accumulator_faults", 1)
        .sender(BMS)
        .signal(Signal::new("bms_fault", 0, 1).receivers(&[PCU, DASH]))
        .signal(Signal::new("imd_fault", 1, 1).receivers(&[PCU, DASH]))
}

pub fn get_tps_voltage_current(id: u32) -> MessageDefinition {
    common::tps_voltage_current(id, BMS)
}
