//! Session flag handlers: `logout` and `status`.

use std::path::PathBuf;

use serde::Serialize;

use pantry_core::Pantry;

use crate::error::CliError;
use crate::output;

use super::OutputOpts;

#[derive(Serialize)]
struct SessionStatus {
    base_url: String,
    logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_file: Option<PathBuf>,
}

pub fn logout(pantry: &Pantry, out: &OutputOpts) -> Result<(), CliError> {
    pantry.registration().logout()?;
    if !out.quiet {
        eprintln!("Logged out");
    }
    Ok(())
}

pub fn status(pantry: &Pantry, out: &OutputOpts) -> Result<(), CliError> {
    let status = SessionStatus {
        base_url: pantry.config().base_url.to_string(),
        logged_in: pantry.is_logged_in(),
        session_file: pantry.config().session_file.clone(),
    };

    let rendered = output::render_single(
        out.format,
        &status,
        |s| {
            let flag = if s.logged_in { "logged in" } else { "logged out" };
            let mut lines = vec![
                format!("API:      {}", s.base_url),
                format!("Session:  {}", output::paint_flag(flag, s.logged_in)),
            ];
            if let Some(path) = &s.session_file {
                lines.push(format!("Storage:  {}", path.display()));
            }
            lines.join("\n")
        },
        |s| s.logged_in.to_string(),
    )?;
    output::print_output(&rendered, out.quiet);
    Ok(())
}
