/// Controls DBC rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbcConfig {
    /// Value written to the `VERSION` line.
    pub version: String,
    /// Emit `GenMsgCycleTime` attributes for messages that declare a cycle time.
    pub cycle_time_attributes: bool,
    /// Nodes listed in `BU_` even when no message references them.
    pub extra_nodes: Vec<String>,
}

impl Default for DbcConfig {
    fn default() -> Self {
        Self {
            version: String::new(),
            cycle_time_attributes: true,
            extra_nodes: Vec::new(),
        }
    }
}
