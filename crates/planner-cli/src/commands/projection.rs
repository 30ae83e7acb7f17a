use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use planner_core::projection;

/// Arguments for compound future value
#[derive(Args)]
pub struct FutureValueArgs {
    /// Initial principal in dollars
    #[arg(long)]
    pub principal: Decimal,

    /// Annual return rate as a decimal (e.g. 0.09 for 9%)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Decimal,

    /// Number of years
    #[arg(long)]
    pub years: u32,
}

/// Arguments for the monthly-contribution projection
#[derive(Args)]
pub struct ContributionsArgs {
    /// Initial principal in dollars
    #[arg(long)]
    pub principal: Decimal,

    /// Monthly contribution in dollars
    #[arg(long)]
    pub monthly: Decimal,

    /// Annual return rate as a decimal (e.g. 0.07 for 7%)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Decimal,

    /// Number of years
    #[arg(long)]
    pub years: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FutureValueOutput {
    principal: Decimal,
    annual_rate: Decimal,
    years: u32,
    future_value: Decimal,
}

pub fn run_future_value(args: FutureValueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let future_value = projection::future_value(args.principal, args.rate, args.years)?;
    Ok(serde_json::to_value(FutureValueOutput {
        principal: args.principal,
        annual_rate: args.rate,
        years: args.years,
        future_value,
    })?)
}

pub fn run_contributions(args: ContributionsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result =
        projection::with_contributions(args.principal, args.monthly, args.rate, args.years)?;
    Ok(serde_json::to_value(result)?)
}
