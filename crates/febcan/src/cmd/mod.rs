use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use febcan_assembler::{
    Addressing, Assembler, AssemblerConfig, BusProfile, ContractPolicy, ReservedRange,
};

use crate::exit::{profile_error, CliResult};
use crate::output::OutputFormat;

pub mod check;
pub mod generate;
pub mod list;
pub mod profile;
pub mod version;

pub const DEFAULT_OUTPUT: &str = "gen/FEB_CAN.dbc";

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the registry and write the DBC database.
    Generate(GenerateArgs),
    /// Build and validate the registry without writing anything.
    Check(CheckArgs),
    /// Print the registry table.
    List(ListArgs),
    /// Print the effective bus profile.
    Profile(ProfileArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Generate(args) => generate::run(args, format),
        Command::Check(args) => check::run(args, format),
        Command::List(args) => list::run(args, format),
        Command::Profile(args) => profile::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum ContractArg {
    #[default]
    Enforce,
    Warn,
    Off,
}

impl From<ContractArg> for ContractPolicy {
    fn from(arg: ContractArg) -> Self {
        match arg {
            ContractArg::Enforce => ContractPolicy::Enforce,
            ContractArg::Warn => ContractPolicy::Warn,
            ContractArg::Off => ContractPolicy::Off,
        }
    }
}

/// Target bus selection shared by commands that assemble the registry.
#[derive(Args, Debug, Default)]
pub struct BusArgs {
    /// Bus profile JSON file. Default: CANopen-shared standard-ID bus.
    #[arg(long, value_name = "FILE", env = "FEBCAN_PROFILE")]
    pub profile: Option<PathBuf>,
    /// Use 29-bit extended arbitration IDs.
    #[arg(long)]
    pub extended: bool,
    /// Additional reserved IDs (comma-separated, decimal or 0x hex).
    #[arg(long, value_delimiter = ',', value_parser = parse_id)]
    pub reserve: Vec<u32>,
    /// What to do when a producer ignores its assigned ID.
    #[arg(long, value_enum, default_value = "enforce")]
    pub contract: ContractArg,
    /// Skip signal layout checks.
    #[arg(long)]
    pub no_layout_check: bool,
}

impl BusArgs {
    /// Resolve the bus profile: file (or default), then command-line overrides.
    pub fn bus_profile(&self) -> CliResult<BusProfile> {
        let mut profile = match &self.profile {
            Some(path) => {
                BusProfile::from_file(path).map_err(|err| profile_error("load profile", err))?
            }
            None => BusProfile::default(),
        };

        if self.extended {
            profile = profile.with_addressing(Addressing::Extended);
        }
        for id in &self.reserve {
            profile = profile.reserve(ReservedRange::single(*id, "command line"));
        }
        Ok(profile)
    }

    pub fn assembler(&self) -> CliResult<Assembler> {
        let config = AssemblerConfig {
            contract: self.contract.into(),
            check_layout: !self.no_layout_check,
        };
        Ok(Assembler::with_config(self.bus_profile()?, config))
    }
}

/// Parse an arbitration ID in decimal or `0x` hex.
pub fn parse_id(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse::<u32>(),
    };
    parsed.map_err(|err| format!("invalid arbitration id {value:?}: {err}"))
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output DBC path.
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Value for the DBC VERSION line.
    #[arg(long, default_value = "")]
    pub dbc_version: String,
    #[command(flatten)]
    pub bus: BusArgs,
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub bus: BusArgs,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {}

#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub bus: BusArgs,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
