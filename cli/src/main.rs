mod search;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use recipenote_core::{
    decode, encode, split_lines, Category, Criteria, FileStore, Notebook, NotebookConfig, Recipe,
    RecipeDraft, SortKey, Status,
};
use std::io::{self, Write};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "recipenote")]
#[command(about = "Personal recipe notebook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a recipe
    Add {
        #[arg(long)]
        title: String,
        /// Category: main, side, soup, noodle, don or dessert
        #[arg(long, default_value = "main")]
        category: String,
        /// Status: want or cooked
        #[arg(long, default_value = "want")]
        status: String,
        /// Ingredient; repeat the flag or pass newline-separated lines
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        /// Step; repeat the flag or pass newline-separated lines
        #[arg(long = "step")]
        steps: Vec<String>,
        /// Cook time in minutes
        #[arg(long)]
        cook_time: Option<String>,
        #[arg(long)]
        servings: Option<f64>,
        #[arg(long)]
        source_url: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List recipes, optionally filtered and sorted
    List {
        /// Free-text search over title, ingredients and notes
        #[arg(long, short)]
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        status: Option<String>,
        /// Sort: created-desc, created-asc, time-asc or time-desc
        #[arg(long)]
        sort: Option<String>,
        /// Restore filters from a shared query string, e.g. "q=egg&cat=main"
        #[arg(long)]
        url: Option<String>,
    },
    /// Show one recipe
    Show {
        id: String,
    },
    /// Delete a recipe
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Search interactively; results refresh once typing settles
    Search,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = NotebookConfig::from_env();
    tracing::debug!(data_dir = %config.data_dir.display(), "opening notebook");
    let mut notebook = Notebook::open(FileStore::new(&config.data_dir));

    match cli.command {
        Commands::Add {
            title,
            category,
            status,
            ingredients,
            steps,
            cook_time,
            servings,
            source_url,
            notes,
        } => {
            let draft = RecipeDraft {
                title,
                category: parse_category(&category)?,
                status: parse_status(&status)?,
                ingredients: collect_lines(&ingredients),
                steps: collect_lines(&steps),
                cook_time: parse_cook_time(cook_time.as_deref()),
                servings,
                source_url,
                notes,
            };
            add(&mut notebook, draft)?;
        }
        Commands::List {
            query,
            category,
            status,
            sort,
            url,
        } => {
            let mut criteria = url.as_deref().map(decode).unwrap_or_default();
            if let Some(q) = query {
                criteria.query = q;
            }
            if let Some(raw) = category {
                criteria.category = Some(parse_category(&raw)?);
            }
            if let Some(raw) = status {
                criteria.status = Some(parse_status(&raw)?);
            }
            if let Some(raw) = sort {
                criteria.sort = parse_sort(&raw)?;
            }
            list(&notebook, &criteria);
        }
        Commands::Show { id } => {
            show(&notebook, &id)?;
        }
        Commands::Delete { id, yes } => {
            delete(&mut notebook, &id, yes)?;
        }
        Commands::Search => {
            search::run(&notebook, config.debounce).await?;
        }
    }

    Ok(())
}

fn add(notebook: &mut Notebook<FileStore>, draft: RecipeDraft) -> Result<()> {
    match notebook.add(draft) {
        Ok(recipe) => {
            println!("Added \"{}\" ({})", recipe.title, recipe.id);
            Ok(())
        }
        Err(report) => {
            for (field, message) in report.iter() {
                eprintln!("{field}: {message}");
            }
            bail!("recipe not added");
        }
    }
}

fn list(notebook: &Notebook<FileStore>, criteria: &Criteria) {
    let visible = notebook.visible(criteria);

    if visible.is_empty() {
        println!("No recipes found");
    } else {
        for recipe in &visible {
            println!("{}", summary_line(recipe));
        }
    }

    // Non-default criteria get a shareable query string
    let share = encode(criteria);
    if !share.is_empty() {
        println!();
        println!("share: {share}");
    }
}

fn show(notebook: &Notebook<FileStore>, raw_id: &str) -> Result<()> {
    let id = Uuid::parse_str(raw_id).context("invalid recipe id")?;

    let Some(recipe) = notebook.get(id) else {
        println!("Recipe not found");
        return Ok(());
    };

    println!("{}", recipe.title);
    println!(
        "category: {}  status: {}",
        recipe.category.as_str(),
        recipe.status.as_str()
    );
    if let Some(minutes) = recipe.cook_time {
        println!("cook time: {minutes} min");
    }
    if let Some(servings) = recipe.servings {
        println!("servings: {servings}");
    }
    if let Some(url) = &recipe.source_url {
        println!("source: {url}");
    }

    if !recipe.ingredients.is_empty() {
        println!();
        println!("Ingredients:");
        for ingredient in &recipe.ingredients {
            println!("- {ingredient}");
        }
    }

    if !recipe.steps.is_empty() {
        println!();
        println!("Steps:");
        for (n, step) in recipe.steps.iter().enumerate() {
            println!("{}. {step}", n + 1);
        }
    }

    if let Some(notes) = &recipe.notes {
        println!();
        println!("Notes: {notes}");
    }

    println!();
    println!("added: {}", recipe.created_at.format("%Y-%m-%d %H:%M"));
    Ok(())
}

fn delete(notebook: &mut Notebook<FileStore>, raw_id: &str, yes: bool) -> Result<()> {
    let id = Uuid::parse_str(raw_id).context("invalid recipe id")?;

    if !yes && !confirm("Delete this recipe?")? {
        println!("Cancelled");
        return Ok(());
    }

    if notebook.delete(id) {
        println!("Deleted {raw_id}");
    } else {
        println!("Recipe not found");
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn summary_line(recipe: &Recipe) -> String {
    let time = recipe
        .cook_time
        .map(|minutes| format!("{minutes} min"))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}  {:<20}  [{}/{}]  {}",
        recipe.id,
        recipe.title,
        recipe.category.as_str(),
        recipe.status.as_str(),
        time
    )
}

/// Flatten repeated flags, splitting any newline-separated values into
/// trimmed non-empty lines.
fn collect_lines(values: &[String]) -> Vec<String> {
    values.iter().flat_map(|value| split_lines(value)).collect()
}

/// Empty input means "unspecified"; non-numeric input becomes NaN so
/// validation reports it as a per-field error instead of a flag-parse
/// failure.
fn parse_cook_time(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.parse().unwrap_or(f64::NAN))
}

fn parse_category(raw: &str) -> Result<Category> {
    Category::from_str(raw).ok_or_else(|| {
        let known: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        anyhow!("unknown category \"{raw}\" (expected one of: {})", known.join(", "))
    })
}

fn parse_status(raw: &str) -> Result<Status> {
    Status::from_str(raw).ok_or_else(|| {
        let known: Vec<_> = Status::ALL.iter().map(|s| s.as_str()).collect();
        anyhow!("unknown status \"{raw}\" (expected one of: {})", known.join(", "))
    })
}

fn parse_sort(raw: &str) -> Result<SortKey> {
    SortKey::from_str(raw)
        .ok_or_else(|| anyhow!("unknown sort \"{raw}\" (expected created-desc, created-asc, time-asc or time-desc)"))
}
