use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::types::{Money, Rate};
use crate::PlannerResult;

/// Fixed projection horizons, in years.
pub const HORIZON_YEARS: [u32; 4] = [1, 2, 5, 10];

/// Result of projecting a principal plus recurring monthly contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionProjection {
    pub final_value: Money,
    /// Money put in: principal + monthly × months, not compounded.
    pub total_contributions: Money,
    /// finalValue − totalContributions. Negative under a negative rate.
    pub total_growth: Money,
    pub yearly_projections: Vec<ContributionYear>,
}

/// One year of the contribution schedule, computed from scratch from the
/// original principal and rate (not incrementally from the prior year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionYear {
    pub year: u32,
    pub value: Money,
    pub contributions: Money,
    pub growth: Money,
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

/// Compound future value: principal × (1 + rate)^years.
///
/// The rate may be negative. `years = 0` returns the principal exactly.
pub fn future_value(principal: Money, annual_rate: Rate, years: u32) -> PlannerResult<Money> {
    if principal < Decimal::ZERO {
        return Err(PlannerError::Domain {
            function: "future_value".into(),
            reason: "principal must be non-negative".into(),
        });
    }
    Ok(principal * compound(annual_rate, years))
}

/// Future values at each fixed horizon, each computed independently from
/// the original principal.
pub fn horizon_values(principal: Money, annual_rate: Rate) -> PlannerResult<Vec<(u32, Money)>> {
    HORIZON_YEARS
        .iter()
        .map(|&year| future_value(principal, annual_rate, year).map(|fv| (year, fv)))
        .collect()
}

/// Principal FV, annuity FV, and simple contribution sum after `months`
/// months of contributing at `monthly_rate`.
fn value_after(
    principal: Money,
    monthly_contribution: Money,
    monthly_rate: Rate,
    months: u32,
) -> (Money, Money) {
    let growth_factor = compound(monthly_rate, months);
    let principal_fv = principal * growth_factor;

    // Zero-rate branch is the algebraic limit of the annuity formula as
    // rate → 0, and it must trigger at exactly 0 (division by zero).
    let annuity_fv = if monthly_rate.is_zero() {
        monthly_contribution * Decimal::from(months)
    } else {
        monthly_contribution * ((growth_factor - Decimal::ONE) / monthly_rate)
    };

    let contributions = principal + monthly_contribution * Decimal::from(months);
    (principal_fv + annuity_fv, contributions)
}

/// Project a principal with recurring monthly contributions.
///
/// monthlyRate = annualRate / 12, months = years × 12. Each year of the
/// breakdown repeats the full computation for months = year × 12.
pub fn with_contributions(
    principal: Money,
    monthly_contribution: Money,
    annual_rate: Rate,
    years: u32,
) -> PlannerResult<ContributionProjection> {
    if principal < Decimal::ZERO {
        return Err(PlannerError::Domain {
            function: "with_contributions".into(),
            reason: "principal must be non-negative".into(),
        });
    }
    if monthly_contribution < Decimal::ZERO {
        return Err(PlannerError::Domain {
            function: "with_contributions".into(),
            reason: "monthly contribution must be non-negative".into(),
        });
    }

    let monthly_rate = annual_rate / Decimal::from(12);
    let total_months = years * 12;

    let (final_value, total_contributions) =
        value_after(principal, monthly_contribution, monthly_rate, total_months);

    let mut yearly_projections = Vec::with_capacity(years as usize);
    for year in 1..=years {
        let (value, contributions) =
            value_after(principal, monthly_contribution, monthly_rate, year * 12);
        yearly_projections.push(ContributionYear {
            year,
            value,
            contributions,
            growth: value - contributions,
        });
    }

    Ok(ContributionProjection {
        final_value,
        total_contributions,
        total_growth: final_value - total_contributions,
        yearly_projections,
    })
}
