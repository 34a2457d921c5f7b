use febcan_model::{MessageDefinition, Signal};

use super::nodes::{PCU, RES};

/// Remote emergency stop receiver state.
pub fn get_res_state(id: u32) -> MessageDefinition {
    MessageDefinition::new(id, "res_state", 2)
        .sender(RES)
        .signal(
            Signal::new("estop", 0, 1)
                .receivers(&[PCU])
                .choice(0, "RELEASED")
                .choice(1, "PRESSED"),
        )
        .signal(Signal::new("go", 1, 1).receivers(&[PCU]))
        .signal(
            Signal::new("radio_quality", 8, 8)
                .unit("%")
                .range(0.0, 100.0),
        )
}
