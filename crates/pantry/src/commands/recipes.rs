//! Recipe command handlers.

use tabled::Tabled;

use pantry_core::{Pantry, Recipe};

use crate::cli::{RecipesArgs, RecipesCommand};
use crate::error::CliError;
use crate::output;

use super::OutputOpts;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct RecipeRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Cuisine")]
    cuisine: String,
    #[tabled(rename = "Difficulty")]
    difficulty: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&Recipe> for RecipeRow {
    fn from(r: &Recipe) -> Self {
        Self {
            id: r.id,
            name: output::truncate(&r.name, 40),
            cuisine: r.cuisine.clone(),
            difficulty: r.difficulty.to_string(),
            time: format!("{} min", r.total_time_minutes()),
            rating: format!("{:.1}", r.rating),
            tags: output::truncate(&r.tags.join(", "), 32),
        }
    }
}

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "Tag")]
    tag: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(pantry: &Pantry, args: RecipesArgs, out: &OutputOpts) -> Result<(), CliError> {
    let store = pantry.recipes();

    let snap = match args.command {
        RecipesCommand::List => {
            store.fetch_all().await?;
            store.items()
        }
        RecipesCommand::Tagged { tag } => {
            store.fetch_by_tag(&tag).await?;
            store.tagged()
        }
        RecipesCommand::Tags => {
            store.fetch_tags().await?;
            let tags = store.tags();
            let rendered = output::render_list(
                out.format,
                tags.as_slice(),
                |t| TagRow { tag: t.clone() },
                String::clone,
            )?;
            output::print_output(&rendered, out.quiet);
            return Ok(());
        }
    };

    let rendered = output::render_list(
        out.format,
        snap.as_slice(),
        |r| RecipeRow::from(r),
        |r| r.id.to_string(),
    )?;
    output::print_output(&rendered, out.quiet);
    Ok(())
}
