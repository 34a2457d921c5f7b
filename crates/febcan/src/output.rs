use std::io::IsTerminal;
use std::path::Path;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use febcan_assembler::{BusProfile, ValidationReport, Violation};
use febcan_registry::MessageSlot;
use serde::Serialize;

const SCHEMA_BASE: &str = "https://schemas.febcan.dev/cli/v1";

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Serialize)]
struct ViolationOutput {
    rule: &'static str,
    ids: Vec<u32>,
    indices: Vec<usize>,
    message: String,
}

impl From<&Violation> for ViolationOutput {
    fn from(violation: &Violation) -> Self {
        Self {
            rule: violation.rule(),
            ids: violation.ids(),
            indices: violation.indices(),
            message: violation.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    schema_id: String,
    ok: bool,
    profile: &'a str,
    violations: Vec<ViolationOutput>,
}

pub fn print_report(report: &ValidationReport, profile: &BusProfile, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&ReportOutput {
            schema_id: format!("{SCHEMA_BASE}/validation-report.schema.json"),
            ok: false,
            profile: &profile.name,
            violations: report.iter().map(ViolationOutput::from).collect(),
        }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["RULE", "IDS", "INDICES", "DETAIL"]);
            for violation in report {
                table.add_row(vec![
                    violation.rule().to_string(),
                    join(&violation.ids()),
                    join(&violation.indices()),
                    violation.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "{} violation(s) against profile {}:",
                report.len(),
                profile.name
            );
            println!("{report}");
        }
    }
}

#[derive(Serialize)]
struct ProfileOutput<'a> {
    schema_id: String,
    #[serde(flatten)]
    profile: &'a BusProfile,
}

#[derive(Serialize)]
struct SummaryOutput<'a> {
    schema_id: String,
    ok: bool,
    profile: &'a str,
    messages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

/// Report a successful build, with the artifact path when one was written.
pub fn print_summary(profile: &str, messages: usize, path: Option<&Path>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&SummaryOutput {
            schema_id: format!("{SCHEMA_BASE}/build-summary.schema.json"),
            ok: true,
            profile,
            messages,
            path: path.map(|p| p.display().to_string()),
        }),
        OutputFormat::Table | OutputFormat::Pretty => match path {
            Some(path) => println!("wrote {messages} messages to {}", path.display()),
            None => println!("{messages} messages valid against profile {profile}"),
        },
    }
}

#[derive(Serialize)]
struct SlotOutput {
    index: usize,
    id: u32,
    group: &'static str,
    message: String,
    length: u8,
    signals: usize,
}

#[derive(Serialize)]
struct ListOutput {
    schema_id: String,
    slots: Vec<SlotOutput>,
}

pub fn print_slots(slots: &[MessageSlot], format: OutputFormat) {
    let rows: Vec<SlotOutput> = slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let msg = slot.produce();
            SlotOutput {
                index,
                id: slot.id,
                group: slot.group,
                message: msg.name,
                length: msg.length,
                signals: msg.signals.len(),
            }
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&ListOutput {
            schema_id: format!("{SCHEMA_BASE}/registry.schema.json"),
            slots: rows,
        }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["#", "ID", "HEX", "GROUP", "MESSAGE", "DLC", "SIGNALS"]);
            for row in &rows {
                table.add_row(vec![
                    row.index.to_string(),
                    row.id.to_string(),
                    format!("0x{:03X}", row.id),
                    row.group.to_string(),
                    row.message.clone(),
                    row.length.to_string(),
                    row.signals.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in &rows {
                println!(
                    "{:>3} 0x{:03X} {:<12} {}",
                    row.index, row.id, row.group, row.message
                );
            }
        }
    }
}

pub fn print_profile(profile: &BusProfile, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&ProfileOutput {
            schema_id: format!("{SCHEMA_BASE}/bus-profile.schema.json"),
            profile,
        }),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("profile:    {}", profile.name);
            println!(
                "addressing: {:?} ({}-bit, max 0x{:X})",
                profile.addressing,
                profile.addressing.bits(),
                profile.max_id()
            );
            if profile.reserved.is_empty() {
                println!("reserved:   none");
            }
            for range in &profile.reserved {
                if range.start == range.end {
                    println!("reserved:   {} ({})", range.start, range.label);
                } else {
                    println!(
                        "reserved:   {}-{} ({})",
                        range.start, range.end, range.label
                    );
                }
            }
        }
    }
}
