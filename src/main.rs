mod config;
mod controller;
mod db;
mod error;
mod export;
mod models;
mod run;
mod summary;
mod ui;
mod validate;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    config::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let db_path = config::get_db_path()?;

    // Reset must work on stores that fail the schema check.
    if args.get(1).map(String::as_str) == Some("reset") {
        return run::cli_reset(&args[2..], &db_path);
    }

    let db = db::Database::open(&db_path)
        .with_context(|| format!("Failed to open expense store: {}", db_path.display()))?;

    match args.len() {
        1 => run::as_tui(db),
        _ => run::as_cli(&args, db),
    }
}
