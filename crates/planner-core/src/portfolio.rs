use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::RiskTier;
use crate::engine::ProjectionEngine;
use crate::error::PlannerError;
use crate::projection::{self, HORIZON_YEARS};
use crate::types::{Money, Rate};
use crate::PlannerResult;

/// Category-level portfolio request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRequest {
    pub investment_amount: Money,
    /// "Low" | "Moderate" | "High", case-sensitive.
    pub risk_level: RiskTier,
    /// Expected annual return as a percentage; defaults by tier if absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_return: Option<Decimal>,
    /// Projection window in years; must be one of the fixed horizons.
    pub timeline: u32,
}

/// One line of the category-level allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAllocation {
    pub category: String,
    /// Weight as a fraction (0.60 = 60%).
    pub percentage: Rate,
    pub dollar_amount: Money,
}

/// Portfolio value at one horizon year, with the same static weights
/// applied to the grown total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyProjection {
    pub year: u32,
    pub total_value: Money,
    pub allocations: Vec<CategoryAllocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResult {
    pub initial_allocations: Vec<CategoryAllocation>,
    /// Fixed horizons restricted to years <= timeline.
    pub yearly_projections: Vec<YearlyProjection>,
}

/// Calculate a portfolio with the built-in category engine.
pub fn calculate_portfolio(request: &PortfolioRequest) -> PlannerResult<PortfolioResult> {
    calculate_portfolio_with(&ProjectionEngine::category(), request)
}

/// Calculate a portfolio with an injected engine.
pub fn calculate_portfolio_with(
    engine: &ProjectionEngine,
    request: &PortfolioRequest,
) -> PlannerResult<PortfolioResult> {
    // --- Validation ---
    if request.investment_amount <= Decimal::ZERO {
        return Err(PlannerError::InvalidInput {
            field: "investmentAmount".into(),
            reason: "investment amount must be a positive number".into(),
        });
    }
    if !HORIZON_YEARS.contains(&request.timeline) {
        return Err(PlannerError::InvalidInput {
            field: "timeline".into(),
            reason: "timeline must be one of 1, 2, 5, or 10 years".into(),
        });
    }

    let override_rate = request.expected_return.map(|pct| pct / Decimal::from(100));

    // --- Allocation and growth rate ---
    let initial = engine.allocate(request.investment_amount, request.risk_level)?;
    let rate = engine.portfolio_rate(request.risk_level, &initial, override_rate)?;

    // --- Per-horizon projections: same weights, growing pie ---
    let mut yearly_projections = Vec::new();
    for &year in HORIZON_YEARS.iter().filter(|&&y| y <= request.timeline) {
        let total_value = projection::future_value(request.investment_amount, rate, year)?;
        let allocations = initial
            .iter()
            .map(|a| CategoryAllocation {
                category: a.label.clone(),
                percentage: a.weight,
                dollar_amount: total_value * a.weight,
            })
            .collect();
        yearly_projections.push(YearlyProjection {
            year,
            total_value,
            allocations,
        });
    }

    Ok(PortfolioResult {
        initial_allocations: initial
            .into_iter()
            .map(|a| CategoryAllocation {
                category: a.label,
                percentage: a.weight,
                dollar_amount: a.dollar_amount,
            })
            .collect(),
        yearly_projections,
    })
}
