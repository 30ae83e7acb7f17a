use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use planner_core::plan::{self, PlanRequest};

use crate::input;

/// Arguments for the ticker-level plan
#[derive(Args)]
pub struct PlanArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Lump-sum investment amount in dollars
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Risk questionnaire score (1-10)
    #[arg(long)]
    pub risk_score: Option<i64>,

    /// Monthly contribution; requires --expected-return and --time-horizon
    #[arg(long)]
    pub monthly_contribution: Option<Decimal>,

    /// Expected annual return as a percentage (0-100)
    #[arg(long)]
    pub expected_return: Option<Decimal>,

    /// Contribution horizon in years (1-50)
    #[arg(long)]
    pub time_horizon: Option<i64>,
}

pub fn run_plan(args: PlanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: PlanRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(request) = input::stdin::read_json()? {
        request
    } else {
        match (args.amount, args.risk_score) {
            (Some(amount), Some(risk_score)) => PlanRequest {
                amount,
                risk_score,
                monthly_contribution: args.monthly_contribution,
                expected_return: args.expected_return,
                time_horizon: args.time_horizon,
            },
            _ => {
                return Err(
                    "--input <file.json>, piped stdin, or --amount and --risk-score required"
                        .into(),
                )
            }
        }
    };
    let response = plan::calculate_plan(&request)?;
    Ok(serde_json::to_value(response)?)
}
