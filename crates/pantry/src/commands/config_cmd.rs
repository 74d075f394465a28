//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = &super::resolve_config(global)?;
            let out = super::output_opts(global, cfg)?;
            let rendered = output::render_single(
                out.format,
                cfg,
                |c| {
                    let session = c
                        .session_file
                        .clone()
                        .unwrap_or_else(pantry_config::default_session_path);
                    format!(
                        "Config file:  {}\n\
                         base_url:     {}\n\
                         timeout:      {}s\n\
                         session_file: {}\n\
                         output:       {}",
                        pantry_config::config_path().display(),
                        c.base_url,
                        c.timeout,
                        session.display(),
                        c.output,
                    )
                },
                |c| c.base_url.clone(),
            )?;
            output::print_output(&rendered, out.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&pantry_config::config_path().display().to_string(), false);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let cfg = &super::resolve_config(global)?;
            let path = pantry_config::config_path();
            if path.exists() && !force {
                return Err(CliError::Validation {
                    field: "config".into(),
                    reason: format!(
                        "{} already exists. Re-run with --force to overwrite",
                        path.display()
                    ),
                });
            }
            // Reject invalid values before writing.
            cfg.to_pantry_config()?;
            pantry_config::save_config(cfg)?;
            if !global.quiet {
                eprintln!("✓ Wrote {}", path.display());
            }
            Ok(())
        }
    }
}
