//! Offline date conversion.

use pantry_core::{CoreError, normalize_date};

use crate::cli::DateArgs;
use crate::error::CliError;
use crate::output;

pub fn handle(args: &DateArgs, quiet: bool) -> Result<(), CliError> {
    let converted = normalize_date(&args.input, args.strip_time).map_err(CoreError::from)?;
    output::print_output(&converted, quiet);
    Ok(())
}
