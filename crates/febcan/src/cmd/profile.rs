use crate::cmd::ProfileArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_profile, OutputFormat};

pub fn run(args: ProfileArgs, format: OutputFormat) -> CliResult<i32> {
    let profile = args.bus.bus_profile()?;
    print_profile(&profile, format);
    Ok(SUCCESS)
}
