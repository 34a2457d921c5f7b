use febcan_model::MessageDefinition;

use crate::profile::Addressing;

/// A validated, ordered sequence of message definitions.
///
/// Only the [`Assembler`](crate::Assembler) constructs sets, so holding one
/// means every ID is unique, unreserved and within `addressing`.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageSet {
    messages: Vec<MessageDefinition>,
    addressing: Addressing,
    profile: String,
}

impl MessageSet {
    pub(crate) fn new(
        messages: Vec<MessageDefinition>,
        addressing: Addressing,
        profile: String,
    ) -> Self {
        Self {
            messages,
            addressing,
            profile,
        }
    }

    pub fn messages(&self) -> &[MessageDefinition] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageDefinition> {
        self.messages.iter()
    }

    /// IDs in registry order.
    pub fn ids(&self) -> Vec<u32> {
        self.messages.iter().map(|m| m.id).collect()
    }

    pub fn get(&self, id: u32) -> Option<&MessageDefinition> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Addressing mode the set was validated against.
    pub fn addressing(&self) -> Addressing {
        self.addressing
    }

    /// Name of the bus profile the set was validated against.
    pub fn profile_name(&self) -> &str {
        &self.profile
    }

    pub fn into_messages(self) -> Vec<MessageDefinition> {
        self.messages
    }
}

impl<'a> IntoIterator for &'a MessageSet {
    type Item = &'a MessageDefinition;
    type IntoIter = std::slice::Iter<'a, MessageDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
