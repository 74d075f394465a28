//! User command handlers.

use tabled::Tabled;

use pantry_core::{Pantry, User};

use crate::cli::{UsersArgs, UsersCommand};
use crate::error::CliError;
use crate::output;

use super::OutputOpts;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "City")]
    city: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            name: u.full_name(),
            username: u.username.clone(),
            email: u.email.clone(),
            role: u.role.to_string(),
            city: u.address.city.clone(),
        }
    }
}

pub async fn handle(pantry: &Pantry, args: UsersArgs, out: &OutputOpts) -> Result<(), CliError> {
    let store = pantry.users();
    let page = match args.command {
        UsersCommand::List => store.fetch_all().await?,
        UsersCommand::Search { query } => store.search(query.as_deref()).await?,
    };
    tracing::debug!(shown = page.items.len(), total = page.total, "users fetched");

    let snap = store.items();
    let rendered = output::render_list(
        out.format,
        snap.as_slice(),
        |u| UserRow::from(u),
        |u| u.username.clone(),
    )?;
    output::print_output(&rendered, out.quiet);
    Ok(())
}
