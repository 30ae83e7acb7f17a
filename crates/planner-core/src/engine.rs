use crate::allocation::{AllocationResult, AllocationTable, RiskTier};
use crate::rates::RateModel;
use crate::types::{Money, Rate};
use crate::PlannerResult;

/// An allocation table paired with its return-rate policy.
///
/// The two delivery pipelines are instances of this one engine, differing
/// only in which table and rate model they carry. Tables are owned values
/// with no interior mutability, so a single engine can be shared across
/// threads freely.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    table: AllocationTable,
    rates: RateModel,
}

impl ProjectionEngine {
    /// Engine over an arbitrary table and rate model. Used by tests to
    /// substitute alternate configuration without touching globals.
    pub fn new(table: AllocationTable, rates: RateModel) -> ProjectionEngine {
        ProjectionEngine { table, rates }
    }

    /// The ticker-level engine: per-symbol expected returns.
    pub fn ticker() -> ProjectionEngine {
        ProjectionEngine {
            table: AllocationTable::tickers(),
            rates: RateModel::ticker_returns(),
        }
    }

    /// The category-level engine: one default return per tier.
    pub fn category() -> ProjectionEngine {
        ProjectionEngine {
            table: AllocationTable::categories(),
            rates: RateModel::tier_defaults(),
        }
    }

    pub fn allocate(&self, amount: Money, tier: RiskTier) -> PlannerResult<Vec<AllocationResult>> {
        self.table.allocate(amount, tier)
    }

    /// Portfolio-level expected annual return for a tier's allocations,
    /// per the engine's rate model.
    pub fn portfolio_rate(
        &self,
        tier: RiskTier,
        allocations: &[AllocationResult],
        override_rate: Option<Rate>,
    ) -> PlannerResult<Rate> {
        let entries: Vec<_> = allocations
            .iter()
            .map(|a| crate::allocation::AllocationEntry {
                label: a.label.clone(),
                weight: a.weight,
            })
            .collect();
        self.rates.portfolio_rate(tier, &entries, override_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ticker_engine_weighted_rate() {
        let engine = ProjectionEngine::ticker();
        let allocs = engine.allocate(dec!(10000), RiskTier::High).unwrap();
        let rate = engine.portfolio_rate(RiskTier::High, &allocs, None).unwrap();
        // 0.50*0.12 + 0.30*0.15 + 0.20*0.09
        assert_eq!(rate, dec!(0.1230));
    }

    #[test]
    fn test_category_engine_flat_rate() {
        let engine = ProjectionEngine::category();
        let allocs = engine.allocate(dec!(10000), RiskTier::Moderate).unwrap();
        let rate = engine
            .portfolio_rate(RiskTier::Moderate, &allocs, None)
            .unwrap();
        assert_eq!(rate, dec!(0.07));
    }

    #[test]
    fn test_engine_is_deterministic() {
        let engine = ProjectionEngine::ticker();
        let a = engine.allocate(dec!(2500.50), RiskTier::Moderate).unwrap();
        let b = engine.allocate(dec!(2500.50), RiskTier::Moderate).unwrap();
        assert_eq!(a, b);
    }
}
