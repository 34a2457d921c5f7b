use std::fmt;

use febcan_assembler::{Addressing, MessageSet};
use febcan_model::{ByteOrder, MessageDefinition, Signal};

use crate::config::DbcConfig;
use crate::error::{DbcError, Result};

/// Placeholder node name for signals and messages without a known peer.
pub const NO_NODE: &str = "Vector__XXX";

/// Bit 31 of a `BO_` ID marks an extended frame.
const EXTENDED_FLAG: u32 = 0x8000_0000;

const CYCLE_TIME_ATTRIBUTE: &str = "GenMsgCycleTime";

/// Upper bound of the declared `GenMsgCycleTime` attribute range.
pub const MAX_CYCLE_TIME_MS: u32 = 65535;

/// Render `set` as DBC text.
pub fn render(set: &MessageSet, config: &DbcConfig) -> Result<String> {
    for msg in set {
        check_identifier("message", &msg.name)?;
        if config.cycle_time_attributes {
            check_cycle_time(msg)?;
        }
        for node in &msg.senders {
            check_identifier("node", node)?;
        }
        for signal in &msg.signals {
            check_identifier("signal", &signal.name)?;
            for node in &signal.receivers {
                check_identifier("node", node)?;
            }
        }
    }
    for node in &config.extra_nodes {
        check_identifier("node", node)?;
    }

    Ok(Database { set, config }.to_string())
}

fn check_cycle_time(msg: &MessageDefinition) -> Result<()> {
    match msg.cycle_time_ms {
        Some(cycle_ms) if cycle_ms > MAX_CYCLE_TIME_MS => Err(DbcError::CycleTimeOutOfRange {
            message: msg.name.clone(),
            cycle_ms,
            max: MAX_CYCLE_TIME_MS,
        }),
        _ => Ok(()),
    }
}

fn check_identifier(kind: &'static str, name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(DbcError::InvalidIdentifier {
            kind,
            name: name.to_string(),
        })
    }
}

struct Database<'a> {
    set: &'a MessageSet,
    config: &'a DbcConfig,
}

impl<'a> Database<'a> {
    fn frame_id(&self, msg: &MessageDefinition) -> u32 {
        match self.set.addressing() {
            Addressing::Standard => msg.id,
            Addressing::Extended => msg.id | EXTENDED_FLAG,
        }
    }

    /// Nodes in first-reference order.
    fn nodes(&self) -> Vec<&'a str> {
        let mut nodes: Vec<&str> = Vec::new();
        let referenced = self.set.iter().flat_map(|msg| {
            msg.senders
                .iter()
                .chain(msg.signals.iter().flat_map(|s| s.receivers.iter()))
        });
        for node in self.config.extra_nodes.iter().chain(referenced) {
            if !nodes.contains(&node.as_str()) {
                nodes.push(node);
            }
        }
        nodes
    }

    fn write_message(&self, f: &mut fmt::Formatter<'_>, msg: &MessageDefinition) -> fmt::Result {
        let sender = msg.senders.first().map_or(NO_NODE, String::as_str);
        writeln!(
            f,
            "BO_ {} {}: {} {}",
            self.frame_id(msg),
            msg.name,
            msg.length,
            sender
        )?;
        for signal in &msg.signals {
            write_signal(f, signal)?;
        }
        writeln!(f)
    }

    fn write_comments(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for msg in self.set {
            let id = self.frame_id(msg);
            if let Some(comment) = &msg.comment {
                writeln!(f, "CM_ BO_ {id} \"{}\";", escape(comment))?;
            }
            for signal in &msg.signals {
                if let Some(comment) = &signal.comment {
                    writeln!(f, "CM_ SG_ {id} {} \"{}\";", signal.name, escape(comment))?;
                }
            }
        }
        Ok(())
    }

    fn write_attributes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timed: Vec<(&MessageDefinition, u32)> = self
            .set
            .iter()
            .filter_map(|msg| msg.cycle_time_ms.map(|ms| (msg, ms)))
            .collect();
        if !self.config.cycle_time_attributes || timed.is_empty() {
            return Ok(());
        }

        writeln!(
            f,
            "BA_DEF_ BO_  \"{CYCLE_TIME_ATTRIBUTE}\" INT 0 {MAX_CYCLE_TIME_MS};"
        )?;
        writeln!(f, "BA_DEF_DEF_  \"{CYCLE_TIME_ATTRIBUTE}\" 0;")?;
        for (msg, ms) in timed {
            writeln!(
                f,
                "BA_ \"{CYCLE_TIME_ATTRIBUTE}\" BO_ {} {ms};",
                self.frame_id(msg)
            )?;
        }
        Ok(())
    }

    fn write_value_tables(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for msg in self.set {
            for signal in msg.signals.iter().filter(|s| !s.choices.is_empty()) {
                write!(f, "VAL_ {} {}", self.frame_id(msg), signal.name)?;
                for (raw, label) in signal.choices.iter().rev() {
                    write!(f, " {raw} \"{}\"", escape(label))?;
                }
                writeln!(f, " ;")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Database<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VERSION \"{}\"", escape(&self.config.version))?;
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "NS_ :")?;
        for section in ["NS_DESC_", "CM_", "BA_DEF_", "BA_", "VAL_", "BA_DEF_DEF_"] {
            writeln!(f, "\t{section}")?;
        }
        writeln!(f)?;
        writeln!(f, "BS_:")?;
        writeln!(f)?;

        write!(f, "BU_:")?;
        for node in self.nodes() {
            write!(f, " {node}")?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f)?;

        for msg in self.set {
            self.write_message(f, msg)?;
        }
        writeln!(f)?;

        self.write_comments(f)?;
        self.write_attributes(f)?;
        self.write_value_tables(f)
    }
}

fn write_signal(f: &mut fmt::Formatter<'_>, signal: &Signal) -> fmt::Result {
    let order = match signal.byte_order {
        ByteOrder::LittleEndian => 1,
        ByteOrder::BigEndian => 0,
    };
    let sign = if signal.signed { '-' } else { '+' };
    let (raw_min, raw_max) = physical_range(signal);
    let receivers = if signal.receivers.is_empty() {
        NO_NODE.to_string()
    } else {
        signal.receivers.join(",")
    };

    writeln!(
        f,
        " SG_ {} : {}|{}@{}{} ({},{}) [{}|{}] \"{}\" {}",
        signal.name,
        signal.start,
        signal.length,
        order,
        sign,
        number(signal.scale),
        number(signal.offset),
        number(signal.minimum.unwrap_or(raw_min)),
        number(signal.maximum.unwrap_or(raw_max)),
        escape(signal.unit.as_deref().unwrap_or("")),
        receivers
    )
}

/// Physical span of the signal's raw integer range.
fn physical_range(signal: &Signal) -> (f64, f64) {
    let bits = i32::from(signal.length);
    let (raw_min, raw_max) = if signal.signed {
        let half = 2f64.powi(bits - 1);
        (-half, half - 1.0)
    } else {
        (0.0, 2f64.powi(bits) - 1.0)
    };
    let a = raw_min * signal.scale + signal.offset;
    let b = raw_max * signal.scale + signal.offset;
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Format without float noise: integers bare, fractions to nine places.
fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let text = format!("{value:.9}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
