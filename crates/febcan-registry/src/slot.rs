use febcan_model::MessageDefinition;

/// Builds a message definition for the arbitration ID it is given.
///
/// Producers are expected to place the argument in [`MessageDefinition::id`].
pub type Producer = fn(u32) -> MessageDefinition;

/// One registry entry: a producer paired with its assigned ID.
#[derive(Clone, Copy, Debug)]
pub struct MessageSlot {
    pub producer: Producer,
    pub id: u32,
    /// Priority-group annotation. Documentation only.
    pub group: &'static str,
}

impl MessageSlot {
    pub const fn new(producer: Producer, id: u32, group: &'static str) -> Self {
        Self {
            producer,
            id,
            group,
        }
    }

    /// Invoke the producer with this slot's assigned ID.
    pub fn produce(&self) -> MessageDefinition {
        (self.producer)(self.id)
    }
}
