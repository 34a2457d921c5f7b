/// How to treat a producer that returns a different ID than it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContractPolicy {
    /// Report a [`Violation::ProducerContract`](crate::Violation::ProducerContract).
    #[default]
    Enforce,
    /// Log a warning and keep the definition's own ID.
    Warn,
    /// Skip the comparison.
    Off,
}

/// Controls assembler behaviour independent of the target bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblerConfig {
    pub contract: ContractPolicy,
    /// When true, signal layout problems are reported as violations.
    pub check_layout: bool,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            contract: ContractPolicy::Enforce,
            check_layout: true,
        }
    }
}
