use std::collections::HashMap;

use crate::error::{ModelError, Result};
use crate::signal::Signal;

/// Maximum payload length of a classic CAN frame.
pub const MAX_DLC: u8 = 8;

/// A named CAN message with its signal layout.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDefinition {
    pub id: u32,
    pub name: String,
    /// Payload length in bytes.
    pub length: u8,
    pub senders: Vec<String>,
    pub signals: Vec<Signal>,
    pub comment: Option<String>,
    pub cycle_time_ms: Option<u32>,
}

impl MessageDefinition {
    pub fn new(id: u32, name: impl Into<String>, length: u8) -> Self {
        Self {
            id,
            name: name.into(),
            length,
            senders: Vec::new(),
            signals: Vec::new(),
            comment: None,
            cycle_time_ms: None,
        }
    }

    pub fn sender(mut self, node: impl Into<String>) -> Self {
        self.senders.push(node.into());
        self
    }

    pub fn signal(mut self, signal: Signal) -> Self {
        self.signals.push(signal);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn cycle_time(mut self, ms: u32) -> Self {
        self.cycle_time_ms = Some(ms);
        self
    }

    /// Look up a signal by name.
    pub fn find_signal(&self, name: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.name == name)
    }

    /// Check the payload layout, returning the first problem found.
    pub fn validate_layout(&self) -> Result<()> {
        match self.layout_errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every layout problem in this message, in signal declaration order.
    pub fn layout_errors(&self) -> Vec<ModelError> {
        let mut errors = Vec::new();

        if self.length > MAX_DLC {
            errors.push(ModelError::DlcTooLarge {
                message: self.name.clone(),
                length: self.length,
            });
        }

        let payload_bits = u32::from(self.length.min(MAX_DLC)) * 8;
        let mut owners: HashMap<u32, &str> = HashMap::new();

        for signal in &self.signals {
            if signal.length == 0 {
                errors.push(ModelError::ZeroLengthSignal {
                    message: self.name.clone(),
                    signal: signal.name.clone(),
                });
                continue;
            }

            for bit in signal.occupied_bits() {
                if bit >= payload_bits {
                    errors.push(ModelError::SignalOutOfBounds {
                        message: self.name.clone(),
                        signal: signal.name.clone(),
                        bit,
                        length: self.length,
                    });
                    break;
                }
                if let Some(first) = owners.insert(bit, &signal.name) {
                    errors.push(ModelError::SignalOverlap {
                        message: self.name.clone(),
                        first: first.to_string(),
                        second: signal.name.clone(),
                        bit,
                    });
                    break;
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tps_message() -> MessageDefinition {
        MessageDefinition::new(52, "BMS_TPS", 4)
            .sender("BMS")
            .signal(Signal::new("bus_voltage", 0, 16).unit("mV"))
            .signal(Signal::new("current", 16, 16).signed().unit("mA"))
    }

    #[test]
    fn well_formed_layout_passes() {
        let msg = tps_message();
        assert!(msg.validate_layout().is_ok());
        assert!(msg.find_signal("current").is_some_and(|s| s.signed));
    }

    #[test]
    fn overlapping_signals_are_reported() {
        let msg = tps_message().signal(Signal::new("flags", 12, 4));
        let errors = msg.layout_errors();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ModelError::SignalOverlap { first, second, bit: 12, .. }
                if first == "bus_voltage" && second == "flags"
        ));
    }

    #[test]
    fn signal_past_payload_is_reported() {
        let msg = MessageDefinition::new(1, "SHORT", 1).signal(Signal::new("wide", 4, 8));
        assert!(matches!(
            msg.validate_layout(),
            Err(ModelError::SignalOutOfBounds { bit: 8, length: 1, .. })
        ));
    }

    #[test]
    fn oversized_dlc_and_empty_signal_are_both_reported() {
        let msg = MessageDefinition::new(1, "FD", 12).signal(Signal::new("nothing", 0, 0));
        let errors = msg.layout_errors();
        assert!(matches!(errors[0], ModelError::DlcTooLarge { length: 12, .. }));
        assert!(matches!(errors[1], ModelError::ZeroLengthSignal { .. }));
    }

    #[test]
    fn big_endian_signal_spanning_two_bytes_fits() {
        let msg = MessageDefinition::new(3, "BE", 2).signal(Signal::new("word", 7, 16).big_endian());
        assert!(msg.validate_layout().is_ok());
    }
}
