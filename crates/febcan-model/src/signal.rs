use std::collections::BTreeMap;

/// Bit ordering of a signal within the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Intel order; `start` is the least significant bit.
    #[default]
    LittleEndian,
    /// Motorola order; `start` is the most significant bit.
    BigEndian,
}

/// One signal within a CAN message payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub name: String,
    pub start: u16,
    pub length: u16,
    pub byte_order: ByteOrder,
    pub signed: bool,
    pub scale: f64,
    pub offset: f64,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub unit: Option<String>,
    pub receivers: Vec<String>,
    pub choices: BTreeMap<i64, String>,
    pub comment: Option<String>,
}

impl Signal {
    /// Create an unsigned little-endian signal with identity scaling.
    pub fn new(name: impl Into<String>, start: u16, length: u16) -> Self {
        Self {
            name: name.into(),
            start,
            length,
            byte_order: ByteOrder::LittleEndian,
            signed: false,
            scale: 1.0,
            offset: 0.0,
            minimum: None,
            maximum: None,
            unit: None,
            receivers: Vec::new(),
            choices: BTreeMap::new(),
            comment: None,
        }
    }

    pub fn signed(mut self) -> Self {
        self.signed = true;
        self
    }

    pub fn big_endian(mut self) -> Self {
        self.byte_order = ByteOrder::BigEndian;
        self
    }

    /// Set the raw-to-physical conversion `physical = raw * scale + offset`.
    pub fn scaled(mut self, scale: f64, offset: f64) -> Self {
        self.scale = scale;
        self.offset = offset;
        self
    }

    pub fn range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn receivers(mut self, receivers: &[&str]) -> Self {
        self.receivers = receivers.iter().map(|r| (*r).to_string()).collect();
        self
    }

    /// Add a named raw value to the signal's value table.
    pub fn choice(mut self, raw: i64, label: impl Into<String>) -> Self {
        self.choices.insert(raw, label.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Payload bit positions claimed by this signal, LSB-first for Intel and
    /// MSB-first for Motorola.
    pub fn occupied_bits(&self) -> Vec<u32> {
        let mut bits = Vec::with_capacity(usize::from(self.length));
        let mut bit = u32::from(self.start);
        for _ in 0..self.length {
            bits.push(bit);
            bit = match self.byte_order {
                ByteOrder::LittleEndian => bit + 1,
                // Motorola bits walk toward bit 0 of a byte, then jump to bit 7 of the next.
                ByteOrder::BigEndian if bit % 8 == 0 => bit + 15,
                ByteOrder::BigEndian => bit - 1,
            };
        }
        bits
    }
}
