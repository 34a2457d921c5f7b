use febcan_assembler::AssemblyError;
use febcan_dbc::{DbcConfig, DbcWriter};
use tracing::debug;

use crate::cmd::GenerateArgs;
use crate::exit::{assembly_error, CliResult, SUCCESS};
use crate::output::{print_report, print_summary, OutputFormat};

pub fn run(args: GenerateArgs, format: OutputFormat) -> CliResult<i32> {
    let assembler = args.bus.assembler()?;
    let writer = DbcWriter::with_config(DbcConfig {
        version: args.dbc_version,
        ..DbcConfig::default()
    });
    let slots = febcan_registry::entries();

    debug!(output = %args.output.display(), slots = slots.len(), "generating dbc");
    match assembler.assemble_and_write(slots, &writer, &args.output) {
        // A validated set has exactly one message per slot.
        Ok(written) => {
            print_summary(&assembler.profile().name, slots.len(), Some(&written), format);
            Ok(SUCCESS)
        }
        Err(err) => {
            if let AssemblyError::Invalid(report) = &err {
                print_report(report, assembler.profile(), format);
            }
            Err(assembly_error("generate", err))
        }
    }
}
