use febcan_model::{MessageDefinition, Signal};

use super::common;
use super::nodes::{FRONT_SENSOR, REAR_SENSOR};

fn tire_temp(id: u32, corner: &str, node: &str) -> MessageDefinition {
    let temp = |name: &str, start: u16| {
        Signal::new(name, start, 16)
            .signed()
            .scaled(0.1, 0.0)
            .unit("C")
    };
    MessageDefinition::new(id, format!("{corner}_tire_temp"), 6)
        .sender(node)
        .signal(temp("inner", 0))
        .signal(temp("middle", 16))
        .signal(temp("outer", 32))
}

fn wheel_speeds(id: u32, axle: &str, node: &str) -> MessageDefinition {
    MessageDefinition::new(id, format!("wss_{axle}"), 4)
        .sender(node)
        .signal(Signal::new("left_wheel_speed", 0, 16).scaled(0.1, 0.0).unit("rpm"))
        .signal(Signal::new("right_wheel_speed", 16, 16).scaled(0.1, 0.0).unit("rpm"))
}

fn linear_potentiometers(id: u32, axle: &str, node: &str) -> MessageDefinition {
    MessageDefinition::new(id, format!("linpot_{axle}"), 4)
        .sender(node)
        .signal(Signal::new("left_travel", 0, 16).scaled(0.01, 0.0).unit("mm"))
        .signal(Signal::new("right_travel", 16, 16).scaled(0.01, 0.0).unit("mm"))
}

pub fn get_steering_data(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "steering_data", 4)
        .sender(FRONT_SENSOR)
        .signal(
            Signal::new("steering_angle", 0, 16)
                .signed()
                .scaled(0.1, 0.0)
                .unit("deg"),
        )
        .signal(Signal::new("encoder_raw", 16, 16))
}

pub fn get_rear_left_tire_temp_data(id: u32) -> MessageDefinition {
    tire_temp(id, "rear_left", REAR_SENSOR)
}

pub fn get_rear_right_tire_temp_data(id: u32) -> MessageDefinition {
    tire_temp(id, "rear_right", REAR_SENSOR)
}

pub fn get_front_left_tire_temp_data(id: u32) -> MessageDefinition {
    tire_temp(id, "front_left", FRONT_SENSOR)
}

pub fn get_front_right_tire_temp_data(id: u32) -> MessageDefinition {
    tire_temp(id, "front_right", FRONT_SENSOR)
}

pub fn get_imu_data(id: u32) -> MessageDefinition {
    let accel = |name: &str, start: u16| {
        Signal::new(name, start, 16)
            .signed()
            .scaled(0.001, 0.0)
            .unit("g")
    };
    MessageDefinition::new(id, "imu_data", 6)
        .sender(FRONT_SENSOR)
        .signal(accel("accel_x", 0))
        .signal(accel("accel_y", 16))
        .signal(accel("accel_z", 32))
}

pub fn get_wss_data_front(id: u32) -> MessageDefinition {
    wheel_speeds(id, "front", FRONT_SENSOR)
}

pub fn get_wss_data_rear(id: u32) -> MessageDefinition {
    wheel_speeds(id, "rear", REAR_SENSOR)
}

pub fn get_linpot_front(id: u32) -> MessageDefinition {
    linear_potentiometers(id, "front", FRONT_SENSOR)
}

pub fn get_linpot_rear(id: u32) -> MessageDefinition {
    linear_potentiometers(id, "rear", REAR_SENSOR)
}

pub fn get_coolant_pressure(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "coolant_pressure", 4)
        .sender(REAR_SENSOR)
        .signal(Signal::new("pressure_in", 0, 16).scaled(0.01, 0.0).unit("psi"))
        .signal(Signal::new("pressure_out", 16, 16).scaled(0.01, 0.0).unit("psi"))
}

pub fn get_front_sensor_heartbeat(id: u32) -> MessageDefinition {
    common::heartbeat(id, FRONT_SENSOR)
}

pub fn get_rear_sensor_heartbeat(id: u32) -> MessageDefinition {
    common::heartbeat(id, REAR_SENSOR)
}
