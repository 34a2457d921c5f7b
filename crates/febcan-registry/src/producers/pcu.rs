use febcan_model::{MessageDefinition, Signal};

use super::common;
use super::nodes::{BMS, DASH, PCU, RMS};

pub fn normalized_brake(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "pcu_normalized_brake", 2)
        .sender(PCU)
        .signal(
            Signal::new("brake_position", 0, 8)
                .unit("%")
                .range(0.0, 100.0),
        )
        .signal(Signal::new("brake_pressed", 8, 1).receivers(&[DASH]))
}

pub fn bspd(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "pcu_bspd", 1)
        .sender(PCU)
        .signal(
            Signal::new("bspd_state", 0, 1)
                .receivers(&[BMS])
                .choice(0, "OK")
                .choice(1, "TRIPPED"),
        )
        .signal(Signal::new("bspd_reset", 1, 1))
}

pub fn get_tps_voltage_current(id: u32) -> MessageDefinition {
    common::tps_voltage_current(id, PCU)
}

/// Inverter command frame.
pub fn rms_command_msg(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "rms_command", 8)
        .sender(PCU)
        .signal(
            Signal::new("torque_command", 0, 16)
                .signed()
                .scaled(0.1, 0.0)
                .unit("Nm")
                .receivers(&[RMS]),
        )
        .signal(
            Signal::new("speed_command", 16, 16)
                .signed()
                .unit("rpm")
                .receivers(&[RMS]),
        )
        .signal(
            Signal::new("direction_command", 32, 1)
                .receivers(&[RMS])
                .choice(0, "REVERSE")
                .choice(1, "FORWARD"),
        )
        .signal(Signal::new("inverter_enable", 40, 1).receivers(&[RMS]))
        .signal(Signal::new("inverter_discharge", 41, 1).receivers(&[RMS]))
        .signal(Signal::new("speed_mode_enable", 42, 1).receivers(&[RMS]))
        .signal(
            Signal::new("torque_limit", 48, 16)
                .signed()
                .scaled(0.1, 0.0)
                .unit("Nm")
                .receivers(&[RMS]),
        )
}

/// Inverter EEPROM parameter read/write request.
pub fn rms_param_msg(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "rms_param", 8)
        .sender(PCU)
        .signal(Signal::new("param_address", 0, 16).receivers(&[RMS]))
        .signal(
            Signal::new("rw_command", 16, 1)
                .receivers(&[RMS])
                .choice(0, "READ")
                .choice(1, "WRITE"),
        )
        .signal(Signal::new("param_data", 32, 16).receivers(&[RMS]))
}

pub fn get_pcu_heartbeat(id: u32) -> MessageDefinition {
    common::heartbeat(id, PCU)
}

/// Unfiltered accelerator pedal sensor readings.
pub fn get_raw_acc(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "pcu_raw_acc", 4)
        .sender(PCU)
        .signal(Signal::new("acc_position_1_raw", 0, 16).unit("counts"))
        .signal(Signal::new("acc_position_2_raw", 16, 16).unit("counts"))
}

pub fn get_ebs_pressure_status(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "pcu_ebs_pressure_status", 5)
        .sender(PCU)
        .signal(
            Signal::new("ebs_pressure_1", 0, 16)
                .scaled(0.01, 0.0)
                .unit("bar"),
        )
        .signal(
            Signal::new("ebs_pressure_2", 16, 16)
                .scaled(0.01, 0.0)
                .unit("bar"),
        )
        .signal(Signal::new("ebs_ready", 32, 1))
}
