use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::allocation::RiskTier;
use crate::engine::ProjectionEngine;
use crate::error::PlannerError;
use crate::projection::{self, ContributionProjection};
use crate::types::{Money, Rate};
use crate::PlannerResult;

/// Ticker-level plan request. The three monthly-contribution fields are
/// all-or-none: a partial set is a validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub amount: Money,
    /// Risk questionnaire score, integer 1–10.
    pub risk_score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_contribution: Option<Money>,
    /// Expected annual return as a percentage (0–100), applied to the
    /// monthly-contribution projection only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_return: Option<Decimal>,
    /// Contribution horizon in years, integer 1–50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_horizon: Option<i64>,
}

/// One line of the ticker-level allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerAllocation {
    pub ticker: String,
    /// Weight as a fraction (0.60 = 60%).
    pub percentage: Rate,
    pub dollar_amount: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub allocations: Vec<TickerAllocation>,
    /// Future value of the lump sum at each fixed horizon, keyed by year.
    /// Always all four horizons, regardless of any time horizon field.
    pub expected_returns: BTreeMap<String, Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_contribution: Option<ContributionProjection>,
}

/// Calculate a plan with the built-in ticker engine.
pub fn calculate_plan(request: &PlanRequest) -> PlannerResult<PlanResponse> {
    calculate_plan_with(&ProjectionEngine::ticker(), request)
}

/// Calculate a plan with an injected engine.
pub fn calculate_plan_with(
    engine: &ProjectionEngine,
    request: &PlanRequest,
) -> PlannerResult<PlanResponse> {
    // --- Validation ---
    if request.amount <= Decimal::ZERO {
        return Err(PlannerError::InvalidInput {
            field: "amount".into(),
            reason: "amount must be a positive number".into(),
        });
    }
    let tier = RiskTier::from_score(request.risk_score)?;
    let monthly_fields = validate_monthly_fields(request)?;

    // --- Allocation and weighted expected return ---
    let allocations = engine.allocate(request.amount, tier)?;
    let weighted_rate = engine.portfolio_rate(tier, &allocations, None)?;

    // --- Fixed-horizon projections at the weighted rate ---
    let expected_returns = projection::horizon_values(request.amount, weighted_rate)?
        .into_iter()
        .map(|(year, fv)| (year.to_string(), fv))
        .collect();

    // --- Optional monthly-contribution projection at the caller's rate ---
    let monthly_contribution = match monthly_fields {
        Some((monthly, annual_rate, years)) => Some(projection::with_contributions(
            request.amount,
            monthly,
            annual_rate,
            years,
        )?),
        None => None,
    };

    Ok(PlanResponse {
        allocations: allocations
            .into_iter()
            .map(|a| TickerAllocation {
                ticker: a.label,
                percentage: a.weight,
                dollar_amount: a.dollar_amount,
            })
            .collect(),
        expected_returns,
        monthly_contribution,
    })
}

/// Enforce the all-or-none monthly trio and its ranges. Returns
/// (monthly contribution, annual rate as a decimal, years).
fn validate_monthly_fields(
    request: &PlanRequest,
) -> PlannerResult<Option<(Money, Rate, u32)>> {
    match (
        request.monthly_contribution,
        request.expected_return,
        request.time_horizon,
    ) {
        (None, None, None) => Ok(None),
        (Some(monthly), Some(expected_return), Some(time_horizon)) => {
            if monthly <= Decimal::ZERO {
                return Err(PlannerError::InvalidInput {
                    field: "monthlyContribution".into(),
                    reason: "monthly contribution must be a positive number".into(),
                });
            }
            if expected_return < Decimal::ZERO || expected_return > Decimal::from(100) {
                return Err(PlannerError::InvalidInput {
                    field: "expectedReturn".into(),
                    reason: "expected return must be a percentage between 0 and 100".into(),
                });
            }
            if !(1..=50).contains(&time_horizon) {
                return Err(PlannerError::InvalidInput {
                    field: "timeHorizon".into(),
                    reason: "time horizon must be an integer between 1 and 50 years".into(),
                });
            }
            let annual_rate = expected_return / Decimal::from(100);
            Ok(Some((monthly, annual_rate, time_horizon as u32)))
        }
        _ => Err(PlannerError::InvalidInput {
            field: "monthlyContribution".into(),
            reason: "monthlyContribution, expectedReturn, and timeHorizon must be provided together"
                .into(),
        }),
    }
}
