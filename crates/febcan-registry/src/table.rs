//! The vehicle's arbitration ID allocation.
//!
//! Lower IDs win arbitration. Groups are spaced so a subsystem can grow
//! without renumbering its neighbours. IDs 0 and 255 are left free for
//! CANopen NMT and Emergency.

use crate::producers::{bms, dart, dash, dcu, lvpdb, pcu, ping_pong, res, sensor_nodes};
use crate::slot::MessageSlot;

/// Every message on the bus, in declaration order.
pub static REGISTRY: &[MessageSlot] = &[
    // RES, moved off 0 (NMT)
    MessageSlot::new(res::get_res_state, 11, "res"),
    // 0x01-0x05
    MessageSlot::new(bms::get_bms_state, 1, "bms"),
    MessageSlot::new(bms::get_bms_cell_data, 2, "bms"),
    MessageSlot::new(bms::get_accumulator_voltage, 3, "bms"),
    MessageSlot::new(bms::get_accumulator_temperature, 4, "bms"),
    MessageSlot::new(bms::get_accumulator_faults, 5, "bms"),
    // 0x09-0x0A
    MessageSlot::new(pcu::normalized_brake, 9, "pcu"),
    MessageSlot::new(pcu::bspd, 10, "pcu"),
    // 0x10
    MessageSlot::new(dash::get_dash_buttons, 16, "dash"),
    // 0x16-0x18
    MessageSlot::new(lvpdb::get_lvpdb_flag_bus_voltage_lv_current, 22, "lvpdb-tps"),
    MessageSlot::new(lvpdb::get_lvpdb_cp_af_rf_sh_current, 23, "lvpdb-tps"),
    MessageSlot::new(lvpdb::get_lvpdb_l_as_ab_current, 24, "lvpdb-tps"),
    // 0x1E-0x28
    MessageSlot::new(sensor_nodes::get_steering_data, 30, "sensor-node"),
    MessageSlot::new(sensor_nodes::get_rear_left_tire_temp_data, 31, "sensor-node"),
    MessageSlot::new(sensor_nodes::get_rear_right_tire_temp_data, 32, "sensor-node"),
    MessageSlot::new(sensor_nodes::get_front_left_tire_temp_data, 33, "sensor-node"),
    MessageSlot::new(sensor_nodes::get_front_right_tire_temp_data, 34, "sensor-node"),
    MessageSlot::new(sensor_nodes::get_imu_data, 35, "sensor-node"),
    MessageSlot::new(sensor_nodes::get_wss_data_front, 36, "sensor-node"),
    MessageSlot::new(sensor_nodes::get_wss_data_rear, 37, "sensor-node"),
    MessageSlot::new(sensor_nodes::get_linpot_front, 38, "sensor-node"),
    MessageSlot::new(sensor_nodes::get_linpot_rear, 39, "sensor-node"),
    MessageSlot::new(sensor_nodes::get_coolant_pressure, 40, "sensor-node"),
    // 0x2D-0x2E
    MessageSlot::new(dart::get_measured_fan_speeds_1234, 45, "dart"),
    MessageSlot::new(dart::get_measured_fan_speeds_5, 46, "dart"),
    // 0x34-0x37, LVPDB reports its own above
    MessageSlot::new(bms::get_tps_voltage_current, 52, "tps"),
    MessageSlot::new(pcu::get_tps_voltage_current, 53, "tps"),
    MessageSlot::new(dash::get_tps_voltage_current, 54, "tps"),
    MessageSlot::new(dcu::get_tps_voltage_current, 55, "tps"),
    // 0xA5-0xA7 are transmitted by the inverter itself.
    // 0xC0-0xC1
    MessageSlot::new(pcu::rms_command_msg, 192, "rms"),
    MessageSlot::new(pcu::rms_param_msg, 193, "rms"),
    // 0xD0-0xD5
    MessageSlot::new(pcu::get_pcu_heartbeat, 208, "heartbeat"),
    MessageSlot::new(dash::get_dash_heartbeat, 209, "heartbeat"),
    MessageSlot::new(lvpdb::get_lvpdb_heartbeat, 210, "heartbeat"),
    MessageSlot::new(dcu::get_dcu_heartbeat, 211, "heartbeat"),
    MessageSlot::new(sensor_nodes::get_front_sensor_heartbeat, 212, "heartbeat"),
    MessageSlot::new(sensor_nodes::get_rear_sensor_heartbeat, 213, "heartbeat"),
    // 0xE0-0xE3
    MessageSlot::new(ping_pong::get_ping_pong_counter1, 224, "ping-pong"),
    MessageSlot::new(ping_pong::get_ping_pong_counter2, 225, "ping-pong"),
    MessageSlot::new(ping_pong::get_ping_pong_counter3, 226, "ping-pong"),
    MessageSlot::new(ping_pong::get_ping_pong_counter4, 227, "ping-pong"),
    // Raw accelerator, moved off 0xFF (Emergency)
    MessageSlot::new(pcu::get_raw_acc, 56, "pcu"),
    // 0x500
    MessageSlot::new(pcu::get_ebs_pressure_status, 1280, "ebs"),
];

/// The full table in declaration order.
pub fn entries() -> &'static [MessageSlot] {
    REGISTRY
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_has_one_slot_per_message() {
        assert_eq!(entries().len(), 43);
    }

    #[test]
    fn assigned_ids_are_distinct() {
        let ids: HashSet<u32> = entries().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), entries().len());
    }

    #[test]
    fn canopen_ids_are_left_free() {
        assert!(entries().iter().all(|s| s.id != 0 && s.id != 255));
    }

    #[test]
    fn every_producer_honours_its_slot() {
        for slot in entries() {
            let msg = slot.produce();
            assert_eq!(msg.id, slot.id, "{} ignored its assigned id", msg.name);
            assert!(msg.validate_layout().is_ok(), "{} has a bad layout", msg.name);
        }
    }

    #[test]
    fn message_names_are_distinct() {
        let names: HashSet<String> = entries().iter().map(|s| s.produce().name).collect();
        assert_eq!(names.len(), entries().len());
    }
}
