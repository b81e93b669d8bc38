use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::application::{AppError, ExpenseService};
use crate::domain::{format_cents, parse_cents, Cents, Month};

/// Spesa - Expense Tracker
#[derive(Parser)]
#[command(name = "spesa")]
#[command(about = "A local-first expense tracker backed by SQLite")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "spesa.db")]
    pub database: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and seed default categories
    Init,

    /// Record an expense
    Add {
        /// Amount spent (e.g., "42.50" or "42")
        amount: String,

        /// Category id (see `category list`)
        #[arg(short, long)]
        category: i64,

        /// Date of the expense (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Description of the expense
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },

    /// List expenses, newest first
    List {
        /// Only show expenses in this category id
        #[arg(short, long)]
        category: Option<i64>,
    },

    /// Per-category spending totals for a month
    Summary {
        /// Month to summarize (YYYY-MM)
        month: String,
    },

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Export ledger data to CSV or JSON
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Format: csv, json
        #[arg(short, long, default_value = "csv")]
        format: String,
    },
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a new category
    Add {
        /// Category name (must be unique)
        name: String,
    },

    /// List all categories
    List,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Initialization is idempotent, so every command goes through it.
        let service = ExpenseService::open(&self.database).await?;

        match self.command {
            Commands::Init => {
                println!("Database initialized: {}", self.database);
            }

            Commands::Add {
                amount,
                category,
                date,
                description,
            } => {
                let amount_cents = parse_amount(&amount)?;
                let date = parse_date_or_today(date.as_deref())?;

                let expense = service
                    .add_expense(amount_cents, category, date, description)
                    .await?;

                println!(
                    "Recorded expense #{}: {} on {}",
                    expense.id,
                    format_cents(expense.amount_cents),
                    expense.date.format("%Y-%m-%d")
                );
            }

            Commands::List { category } => {
                run_list_command(&service, category).await?;
            }

            Commands::Summary { month } => {
                let month: Month = month
                    .parse()
                    .map_err(|e| AppError::MalformedInput(format!("{}: '{}'", e, month)))?;
                run_summary_command(&service, month).await?;
            }

            Commands::Category(category_cmd) => {
                run_category_command(&service, category_cmd).await?;
            }

            Commands::Export { output, format } => {
                run_export_command(&service, output.as_deref(), &format).await?;
            }
        }

        Ok(())
    }
}

async fn run_category_command(service: &ExpenseService, cmd: CategoryCommands) -> Result<()> {
    match cmd {
        CategoryCommands::Add { name } => {
            let category = service.add_category(&name).await?;
            println!("Created category #{}: {}", category.id, category.name);
        }

        CategoryCommands::List => {
            let categories = service.list_categories().await?;
            if categories.is_empty() {
                println!("No categories found.");
            } else {
                println!("{:<4} NAME", "ID");
                println!("{}", "-".repeat(30));
                for category in categories {
                    println!("{:<4} {}", category.id, category.name);
                }
            }
        }
    }
    Ok(())
}

async fn run_list_command(service: &ExpenseService, category: Option<i64>) -> Result<()> {
    let expenses = match category {
        Some(id) => service.list_expenses_by_category(id).await?,
        None => service.list_all_expenses().await?,
    };

    if expenses.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    println!(
        "{:<4} {:<12} {:>10} {:<15} DESCRIPTION",
        "ID", "DATE", "AMOUNT", "CATEGORY"
    );
    println!("{}", "-".repeat(70));

    let mut total: Cents = 0;
    for expense in &expenses {
        println!(
            "{:<4} {:<12} {:>10} {:<15} {}",
            expense.id,
            expense.date.format("%Y-%m-%d"),
            format_cents(expense.amount_cents),
            truncate(&expense.category, 15),
            truncate(&expense.description, 30)
        );
        total += expense.amount_cents;
    }

    println!("{}", "-".repeat(70));
    println!("{:<4} {:<12} {:>10}", "", "TOTAL", format_cents(total));
    Ok(())
}

async fn run_summary_command(service: &ExpenseService, month: Month) -> Result<()> {
    let totals = service.monthly_summary(month).await?;

    if totals.is_empty() {
        println!("No expenses recorded for {}.", month);
        return Ok(());
    }

    println!("Expense summary for {}", month);
    println!();
    println!("{:<15} {:>12}", "CATEGORY", "TOTAL");
    println!("{}", "-".repeat(28));

    let mut grand_total: Cents = 0;
    for entry in &totals {
        println!(
            "{:<15} {:>12}",
            truncate(&entry.category, 15),
            format_cents(entry.total_cents)
        );
        grand_total += entry.total_cents;
    }

    println!("{}", "-".repeat(28));
    println!("{:<15} {:>12}", "TOTAL", format_cents(grand_total));
    Ok(())
}

async fn run_export_command(
    service: &ExpenseService,
    output: Option<&str>,
    format: &str,
) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;
    use std::io::{stdout, Write};

    let exporter = Exporter::new(service);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    match format {
        "csv" => {
            let count = exporter.export_expenses_csv(writer).await?;
            if output.is_some() {
                eprintln!("Exported {} expenses", count);
            }
        }
        "json" => {
            let snapshot = exporter.export_json(writer).await?;
            if output.is_some() {
                eprintln!(
                    "Exported {} categories, {} expenses",
                    snapshot.categories.len(),
                    snapshot.expenses.len()
                );
            }
        }
        _ => {
            anyhow::bail!("Invalid export format '{}'. Valid formats: csv, json", format);
        }
    }

    Ok(())
}

fn parse_amount(input: &str) -> Result<Cents, AppError> {
    parse_cents(input).map_err(|e| AppError::MalformedInput(format!("{}: '{}'", e, input)))
}

/// Parse a YYYY-MM-DD date, or default to today's local calendar date.
fn parse_date_or_today(date: Option<&str>) -> Result<NaiveDate, AppError> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            AppError::MalformedInput(format!("date must be in YYYY-MM-DD format: '{}'", s))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
