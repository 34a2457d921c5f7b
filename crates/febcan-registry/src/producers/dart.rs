use febcan_model::{MessageDefinition, Signal};

use super::nodes::DART;

fn fan_speed(index: u8, start: u16) -> Signal {
    Signal::new(format!("fan_{index}_speed"), start, 16).unit("rpm")
}

pub fn get_measured_fan_speeds_1234(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "dart_fan_speeds_1234", 8)
        .sender(DART)
        .signal(fan_speed(1, 0))
        .signal(fan_speed(2, 16))
        .signal(fan_speed(3, 32))
        .signal(fan_speed(4, 48))
}

pub fn get_measured_fan_speeds_5(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "dart_fan_speeds_5", 2)
        .sender(DART)
        .signal(fan_speed(5, 0))
}
