//! Registration command handler.

use pantry_core::{Pantry, UserRegistration};

use crate::cli::RegisterArgs;
use crate::error::CliError;
use crate::output;

use super::OutputOpts;

pub async fn handle(pantry: &Pantry, args: RegisterArgs, out: &OutputOpts) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(&args.from_file)?;
    let payload: UserRegistration = serde_json::from_str(&raw)?;

    let created = pantry.registration().create(payload).await?;

    let rendered = output::render_single(
        out.format,
        &created,
        |r| {
            let id = r.id.map_or_else(|| "-".into(), |id| id.to_string());
            format!("Registered {} (id {id})", r.full_name)
        },
        |r| r.id.map(|id| id.to_string()).unwrap_or_default(),
    )?;
    output::print_output(&rendered, out.quiet);
    Ok(())
}
