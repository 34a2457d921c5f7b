use std::fmt;

use febcan_model::ModelError;

/// Identifies the registry entry a violation came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRef {
    /// Position in the registry table.
    pub index: usize,
    pub name: String,
    pub group: &'static str,
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} [{}]", self.index, self.name, self.group)
    }
}

/// A single broken rule in an assembled message set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    /// Two or more definitions share an arbitration ID.
    #[error("duplicate id {id} (0x{id:X}) used by {}", join_slots(.slots))]
    DuplicateId { id: u32, slots: Vec<SlotRef> },

    /// An ID falls in a protocol-reserved range.
    #[error("reserved id {id} (0x{id:X}) used by {slot}: collides with {label}")]
    ReservedId {
        id: u32,
        slot: SlotRef,
        label: String,
    },

    /// An ID does not fit the bus addressing width.
    #[error("id {id} (0x{id:X}) used by {slot} exceeds bus maximum {max} (0x{max:X})")]
    IdOutOfRange { id: u32, slot: SlotRef, max: u32 },

    /// A producer returned a definition whose ID differs from its assignment.
    #[error("producer for {slot} was assigned id {assigned} but returned id {actual}")]
    ProducerContract {
        assigned: u32,
        actual: u32,
        slot: SlotRef,
    },

    /// Two or more definitions share a message name.
    #[error("duplicate message name {name} used by {}", join_slots(.slots))]
    DuplicateName { name: String, slots: Vec<SlotRef> },

    /// A definition's signal layout does not fit its payload.
    #[error("invalid layout in {slot}: {error}")]
    SignalLayout { slot: SlotRef, error: ModelError },
}

impl Violation {
    /// Short rule name, stable for machine-readable output.
    pub fn rule(&self) -> &'static str {
        match self {
            Violation::DuplicateId { .. } => "duplicate-id",
            Violation::ReservedId { .. } => "reserved-id",
            Violation::IdOutOfRange { .. } => "id-out-of-range",
            Violation::ProducerContract { .. } => "producer-contract",
            Violation::DuplicateName { .. } => "duplicate-name",
            Violation::SignalLayout { .. } => "signal-layout",
        }
    }

    /// The arbitration IDs this violation concerns.
    pub fn ids(&self) -> Vec<u32> {
        match self {
            Violation::DuplicateId { id, .. }
            | Violation::ReservedId { id, .. }
            | Violation::IdOutOfRange { id, .. } => vec![*id],
            Violation::ProducerContract {
                assigned, actual, ..
            } => vec![*assigned, *actual],
            Violation::DuplicateName { .. } | Violation::SignalLayout { .. } => Vec::new(),
        }
    }

    /// Registry indices involved.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Violation::DuplicateId { slots, .. } | Violation::DuplicateName { slots, .. } => {
                slots.iter().map(|s| s.index).collect()
            }
            Violation::ReservedId { slot, .. }
            | Violation::IdOutOfRange { slot, .. }
            | Violation::ProducerContract { slot, .. }
            | Violation::SignalLayout { slot, .. } => vec![slot.index],
        }
    }
}

fn join_slots(slots: &[SlotRef]) -> String {
    slots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every violation found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Violations of one rule, by [`Violation::rule`] name.
    pub fn by_rule<'a>(&'a self, rule: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.rule() == rule)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, violation) in self.violations.iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            write!(f, "  [{}] {violation}", violation.rule())?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
