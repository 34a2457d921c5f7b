use crate::cmd::ListArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_slots, OutputFormat};

pub fn run(_args: ListArgs, format: OutputFormat) -> CliResult<i32> {
    print_slots(febcan_registry::entries(), format);
    Ok(SUCCESS)
}
