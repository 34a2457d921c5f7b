use febcan_assembler::AssemblyError;

use crate::cmd::CheckArgs;
use crate::exit::{assembly_error, CliResult, SUCCESS};
use crate::output::{print_report, print_summary, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let assembler = args.bus.assembler()?;

    match assembler.build_registry() {
        Ok(set) => {
            print_summary(set.profile_name(), set.len(), None, format);
            Ok(SUCCESS)
        }
        Err(err) => {
            if let AssemblyError::Invalid(report) = &err {
                print_report(report, assembler.profile(), format);
            }
            Err(assembly_error("check", err))
        }
    }
}
