mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use planner_core::PlannerError;
use std::process;

use commands::plan::PlanArgs;
use commands::portfolio::PortfolioArgs;
use commands::projection::{ContributionsArgs, FutureValueArgs};

/// Investment allocation and growth projections
#[derive(Parser)]
#[command(
    name = "invest",
    version,
    about = "Investment allocation and growth projections",
    long_about = "Turns a lump-sum amount and a risk preference into a target asset \
                  allocation and multi-year compound-growth projections, optionally \
                  including recurring monthly contributions. All arithmetic is \
                  decimal-precise."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Ticker-level plan: allocation, horizon projections, optional monthly contributions
    Plan(PlanArgs),
    /// Category-level portfolio: allocation and timeline-clamped projections
    Portfolio(PortfolioArgs),
    /// Compound future value of a lump sum
    FutureValue(FutureValueArgs),
    /// Future value of a principal plus monthly contributions
    Contributions(ContributionsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Plan(args) => commands::plan::run_plan(args),
        Commands::Portfolio(args) => commands::portfolio::run_portfolio(args),
        Commands::FutureValue(args) => commands::projection::run_future_value(args),
        Commands::Contributions(args) => commands::projection::run_contributions(args),
        Commands::Version => {
            println!("invest {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            // Validation errors exit 2, internal/config errors exit 1
            let code = match e.downcast_ref::<PlannerError>() {
                Some(pe) if pe.is_validation() => 2,
                _ => 1,
            };
            process::exit(code);
        }
    }
}
