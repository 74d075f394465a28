//! Command dispatch: bridges CLI args -> core stores -> output formatting.

pub mod config_cmd;
pub mod date;
pub mod recipes;
pub mod register;
pub mod session;
pub mod users;

use clap::ValueEnum;

use pantry_config::Config;
use pantry_core::Pantry;

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Resolved output settings shared by every handler.
#[derive(Debug, Clone, Copy)]
pub struct OutputOpts {
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Dispatch a session-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, pantry: &Pantry, out: &OutputOpts) -> Result<(), CliError> {
    match cmd {
        Command::Recipes(args) => recipes::handle(pantry, args, out).await,
        Command::Users(args) => users::handle(pantry, args, out).await,
        Command::Register(args) => register::handle(pantry, args, out).await,
        Command::Logout => session::logout(pantry, out),
        Command::Status => session::status(pantry, out),
        // Offline commands are handled before a session exists
        Command::Date(_) | Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}

/// Load the config file and layer CLI flag overrides on top.
pub fn resolve_config(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = pantry_config::load_config()?;
    if let Some(url) = &global.base_url {
        cfg.base_url.clone_from(url);
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout = timeout;
    }
    Ok(cfg)
}

/// `--output` wins; otherwise the configured default format.
pub fn output_opts(global: &GlobalOpts, cfg: &Config) -> Result<OutputOpts, CliError> {
    let format = match global.output {
        Some(format) => format,
        None => OutputFormat::from_str(&cfg.output, true).map_err(|_| CliError::Validation {
            field: "output".into(),
            reason: format!(
                "unknown output format '{}' in config. Valid: table, json, json-compact, yaml, plain",
                cfg.output
            ),
        })?,
    };
    Ok(OutputOpts {
        format,
        quiet: global.quiet,
    })
}
