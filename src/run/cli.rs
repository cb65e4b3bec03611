use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

use crate::controller::{Action, Controller, Outcome};
use crate::db::Database;
use crate::error::ExpenseError;
use crate::models::Window;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn as_cli(args: &[String], db: Database) -> Result<()> {
    let mut controller = Controller::new(db, Local::now().date_naive())?;
    match args[1].as_str() {
        "add" | "a" => cli_add(&args[2..], &mut controller),
        "edit" | "e" => cli_edit(&args[2..], &mut controller),
        "delete" | "rm" => cli_delete(&args[2..], &mut controller),
        "list" | "ls" => cli_list(&args[2..], &controller),
        "summary" | "s" => cli_summary(&args[2..], &controller),
        "export" => cli_export(&args[2..], &controller),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendlog {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Spendlog — local-only expense tracker");
    println!();
    println!("Usage: spendlog [command]");
    println!();
    println!("Commands:");
    println!("  (none)                            Launch interactive TUI");
    println!("  add <amount> <category> [note]    Record an expense dated today");
    println!("  edit <id>                         Change an expense (date is kept)");
    println!("    --amount <n> --category <c> --note <text>");
    println!("  delete <id>                       Delete an expense");
    println!("  list [all|week|month]             List expenses, newest first");
    println!("  summary [all|week|month]          Total and per-category spending");
    println!("  export <file.csv>                 Export expenses to CSV");
    println!("    --window <all|week|month>       Window to export (default: all)");
    println!("  reset --yes                       Drop and recreate the expenses table");
    println!("  --help, -h                        Show this help");
    println!("  --version, -V                     Show version");
    println!();
    println!(
        "The database lives in the platform data directory unless {} is set.",
        crate::config::DB_ENV_VAR
    );
}

fn cli_add(args: &[String], controller: &mut Controller<Database>) -> Result<()> {
    if args.len() < 2 {
        anyhow::bail!("Usage: spendlog add <amount> <category> [note...]");
    }
    let form = controller.form_mut();
    form.amount = args[0].clone();
    form.category = args[1].clone();
    form.note = args[2..].join(" ");

    if let Outcome::Created(id) = controller.dispatch(Action::Submit)? {
        if let Some(expense) = controller.state().record(id) {
            println!(
                "Added #{id}: {} {} on {}",
                format_amount(expense.amount),
                expense.category,
                expense.date
            );
        }
    }
    Ok(())
}

fn cli_edit(args: &[String], controller: &mut Controller<Database>) -> Result<()> {
    let id = parse_id(args.first())?;
    controller.dispatch(Action::Select(id))?;

    let form = controller.form_mut();
    if let Some(amount) = flag_value(args, "--amount") {
        form.amount = amount.to_string();
    }
    if let Some(category) = flag_value(args, "--category") {
        form.category = category.to_string();
    }
    if let Some(note) = flag_value(args, "--note") {
        form.note = note.to_string();
    }

    controller.dispatch(Action::Submit)?;
    if let Some(expense) = controller.state().record(id) {
        println!(
            "Saved #{id}: {} {} on {}",
            format_amount(expense.amount),
            expense.category,
            expense.date
        );
    }
    Ok(())
}

fn cli_delete(args: &[String], controller: &mut Controller<Database>) -> Result<()> {
    let id = parse_id(args.first())?;
    if controller.state().record(id).is_none() {
        return Err(ExpenseError::UnknownRecord(id).into());
    }
    controller.dispatch(Action::Delete(id))?;
    println!("Deleted #{id}");
    Ok(())
}

fn cli_list(args: &[String], controller: &Controller<Database>) -> Result<()> {
    let window = parse_window(args.first().map(String::as_str))?;
    let summary = controller.state().summary_for(window);
    if summary.records.is_empty() {
        println!("No expenses ({window})");
        return Ok(());
    }

    println!(
        "{:<5} {:<10} {:<20} {:>12}  Note",
        "ID", "Date", "Category", "Amount"
    );
    println!("{}", "─".repeat(60));
    for expense in &summary.records {
        println!(
            "{:<5} {:<10} {:<20} {:>12}  {}",
            expense.id,
            expense.date,
            truncate(&expense.category, 20),
            format_amount(expense.amount),
            expense.note_or_empty(),
        );
    }
    Ok(())
}

fn cli_summary(args: &[String], controller: &Controller<Database>) -> Result<()> {
    let window = parse_window(args.first().map(String::as_str))?;
    let summary = controller.state().summary_for(window);
    let totals = summary.totals.clone()?;

    println!("Spendlog — {window}");
    println!("{}", "─".repeat(40));
    println!("  Expenses:   {}", summary.records.len());
    println!("  Total:      {}", format_amount(totals.total));

    if !totals.by_category.is_empty() {
        println!();
        println!("By Category:");
        for (name, amount) in &totals.by_category {
            println!("  {:<24} {:>12}", truncate(name, 24), format_amount(*amount));
        }
    }
    Ok(())
}

fn cli_export(args: &[String], controller: &Controller<Database>) -> Result<()> {
    let window = parse_window(flag_value(args, "--window"))?;
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| expand_home(a))
        .unwrap_or_else(|| {
            let stamp = Local::now().format("%Y-%m-%d");
            PathBuf::from(format!("spendlog-export-{stamp}.csv"))
        });

    let summary = controller.state().summary_for(window);
    let count = crate::export::write_csv(&output_path, &summary.records)?;
    println!(
        "Exported {count} expense{} ({window}) to {}",
        if count == 1 { "" } else { "s" },
        output_path.display()
    );
    Ok(())
}

pub(crate) fn cli_reset(args: &[String], db_path: &Path) -> Result<()> {
    if !args.iter().any(|a| a == "--yes") {
        println!(
            "This drops and recreates the expenses table in {} and deletes every record.",
            db_path.display()
        );
        println!("Run `spendlog reset --yes` to proceed.");
        return Ok(());
    }
    Database::reset(db_path)
        .with_context(|| format!("Failed to reset expense store: {}", db_path.display()))?;
    println!("Recreated expenses table in {}", db_path.display());
    Ok(())
}

fn parse_id(arg: Option<&String>) -> Result<i64> {
    let arg = arg.ok_or_else(|| anyhow::anyhow!("Missing expense id"))?;
    arg.parse()
        .with_context(|| format!("Invalid expense id: {arg}"))
}

fn parse_window(arg: Option<&str>) -> Result<Window> {
    match arg {
        None => Ok(Window::All),
        Some(s) => Window::parse(s)
            .ok_or_else(|| anyhow::anyhow!("Unknown window '{s}' (use all, week or month)")),
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(rest)
        }
        None => PathBuf::from(path),
    }
}
