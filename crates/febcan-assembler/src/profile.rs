use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProfileError;

/// JSON Schema every profile document must satisfy before it is deserialized.
pub const PROFILE_SCHEMA: &str = r#"{
    "type": "object",
    "properties": {
        "name": { "type": "string", "minLength": 1 },
        "addressing": { "enum": ["standard", "extended"] },
        "reserved": {
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "start": { "type": "integer", "minimum": 0, "maximum": 536870911 },
                    "end": { "type": "integer", "minimum": 0, "maximum": 536870911 },
                    "label": { "type": "string" }
                },
                "required": ["start", "end", "label"],
                "additionalProperties": false
            }
        }
    },
    "required": ["name"],
    "additionalProperties": false
}"#;

/// Arbitration ID width of the target bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Addressing {
    /// 11-bit identifiers.
    #[default]
    Standard,
    /// 29-bit identifiers.
    Extended,
}

impl Addressing {
    /// Largest arbitration ID representable in this mode.
    pub const fn max_id(self) -> u32 {
        match self {
            Addressing::Standard => 0x7FF,
            Addressing::Extended => 0x1FFF_FFFF,
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            Addressing::Standard => 11,
            Addressing::Extended => 29,
        }
    }
}

/// An inclusive span of IDs that messages must not use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedRange {
    pub start: u32,
    pub end: u32,
    pub label: String,
}

impl ReservedRange {
    pub fn single(id: u32, label: impl Into<String>) -> Self {
        Self {
            start: id,
            end: id,
            label: label.into(),
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        (self.start..=self.end).contains(&id)
    }
}

/// Addressing and reserved IDs for one target bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusProfile {
    pub name: String,
    #[serde(default)]
    pub addressing: Addressing,
    #[serde(default)]
    pub reserved: Vec<ReservedRange>,
}

impl BusProfile {
    /// Standard-ID bus shared with CANopen nodes: NMT (0) and Emergency (255)
    /// are reserved.
    pub fn canopen() -> Self {
        Self {
            name: "canopen".to_string(),
            addressing: Addressing::Standard,
            reserved: vec![
                ReservedRange::single(0, "CANopen NMT"),
                ReservedRange::single(255, "CANopen Emergency"),
            ],
        }
    }

    /// A profile with no reserved IDs.
    pub fn unreserved(name: impl Into<String>, addressing: Addressing) -> Self {
        Self {
            name: name.into(),
            addressing,
            reserved: Vec::new(),
        }
    }

    pub fn with_addressing(mut self, addressing: Addressing) -> Self {
        self.addressing = addressing;
        self
    }

    pub fn reserve(mut self, range: ReservedRange) -> Self {
        self.reserved.push(range);
        self
    }

    /// The first reserved range containing `id`, if any.
    pub fn reserved_by(&self, id: u32) -> Option<&ReservedRange> {
        self.reserved.iter().find(|range| range.contains(id))
    }

    pub fn max_id(&self) -> u32 {
        self.addressing.max_id()
    }

    /// Parse and validate a profile from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ProfileError> {
        let value: Value = serde_json::from_str(json)?;
        validate_document(&value)?;

        let profile: BusProfile = serde_json::from_value(value)?;
        for range in &profile.reserved {
            if range.start > range.end {
                return Err(ProfileError::InvertedRange {
                    label: range.label.clone(),
                    start: range.start,
                    end: range.end,
                });
            }
        }

        Ok(profile)
    }

    /// Load and validate a profile from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}

impl Default for BusProfile {
    fn default() -> Self {
        Self::canopen()
    }
}

fn validate_document(value: &Value) -> Result<(), ProfileError> {
    let schema: Value = serde_json::from_str(PROFILE_SCHEMA)?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|err| ProfileError::CompileFailed(err.to_string()))?;

    let mut errors = validator.iter_errors(value);
    if let Some(first) = errors.next() {
        let mut message = first.to_string();
        for err in errors.take(3) {
            message.push_str("; ");
            message.push_str(&err.to_string());
        }
        return Err(ProfileError::ValidationFailed(message));
    }

    Ok(())
}
