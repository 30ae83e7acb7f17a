use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use planner_core::allocation::RiskTier;
use planner_core::portfolio::{self, PortfolioRequest};

use crate::input;

/// Arguments for the category-level portfolio
#[derive(Args)]
pub struct PortfolioArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Investment amount in dollars
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Risk level: Low, Moderate, or High (case-sensitive)
    #[arg(long)]
    pub risk_level: Option<String>,

    /// Expected annual return as a percentage; defaults by risk level
    #[arg(long)]
    pub expected_return: Option<Decimal>,

    /// Projection window in years: 1, 2, 5, or 10
    #[arg(long)]
    pub timeline: Option<u32>,
}

fn parse_tier(s: &str) -> Result<RiskTier, Box<dyn std::error::Error>> {
    match s {
        "Low" => Ok(RiskTier::Low),
        "Moderate" => Ok(RiskTier::Moderate),
        "High" => Ok(RiskTier::High),
        _ => Err(format!("Unknown risk level '{s}'. Use: Low, Moderate, High").into()),
    }
}

pub fn run_portfolio(args: PortfolioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: PortfolioRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(request) = input::stdin::read_json()? {
        request
    } else {
        match (args.amount, args.risk_level.as_deref(), args.timeline) {
            (Some(investment_amount), Some(risk_level), Some(timeline)) => PortfolioRequest {
                investment_amount,
                risk_level: parse_tier(risk_level)?,
                expected_return: args.expected_return,
                timeline,
            },
            _ => {
                return Err("--input <file.json>, piped stdin, or --amount, --risk-level and \
                            --timeline required"
                    .into())
            }
        }
    };
    let result = portfolio::calculate_portfolio(&request)?;
    Ok(serde_json::to_value(result)?)
}
