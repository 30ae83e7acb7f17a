use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use crate::allocation::{AllocationEntry, RiskTier};
use crate::error::PlannerError;
use crate::types::Rate;
use crate::PlannerResult;

/// Expected-return policy for a pipeline.
///
/// `PerLabel` carries a fixed rate per allocation label and derives the
/// portfolio rate as a weighted average. `FlatPerTier` carries one default
/// rate per tier, overridable by a caller-supplied rate.
#[derive(Debug, Clone)]
pub enum RateModel {
    PerLabel(BTreeMap<String, Rate>),
    FlatPerTier {
        low: Rate,
        moderate: Rate,
        high: Rate,
    },
}

impl RateModel {
    /// Fixed expected annual returns for the ticker-level strategies.
    pub fn ticker_returns() -> RateModel {
        let mut rates = BTreeMap::new();
        rates.insert("VOO".to_string(), dec!(0.09));
        rates.insert("QQQ".to_string(), dec!(0.12));
        rates.insert("SCHD".to_string(), dec!(0.08));
        rates.insert("BND".to_string(), dec!(0.04));
        rates.insert("VXUS".to_string(), dec!(0.07));
        rates.insert("ARKK".to_string(), dec!(0.15));
        RateModel::PerLabel(rates)
    }

    /// Default annual returns per risk tier for the category-level
    /// strategies.
    pub fn tier_defaults() -> RateModel {
        RateModel::FlatPerTier {
            low: dec!(0.04),
            moderate: dec!(0.07),
            high: dec!(0.12),
        }
    }

    /// Portfolio-level expected annual return.
    ///
    /// `PerLabel`: Σ weightᵢ × rate(labelᵢ) over the entries; a label with
    /// no rate is a config-consistency failure. Zero weights contribute
    /// zero. The override does not apply (per-label rates are fixed).
    ///
    /// `FlatPerTier`: the caller override if given, else the tier default.
    pub fn portfolio_rate(
        &self,
        tier: RiskTier,
        entries: &[AllocationEntry],
        override_rate: Option<Rate>,
    ) -> PlannerResult<Rate> {
        match self {
            RateModel::PerLabel(rates) => {
                let mut weighted = Decimal::ZERO;
                for entry in entries {
                    let rate = rates
                        .get(&entry.label)
                        .ok_or_else(|| PlannerError::MissingReturnRate(entry.label.clone()))?;
                    weighted += entry.weight * rate;
                }
                Ok(weighted)
            }
            RateModel::FlatPerTier {
                low,
                moderate,
                high,
            } => Ok(override_rate.unwrap_or(match tier {
                RiskTier::Low => *low,
                RiskTier::Moderate => *moderate,
                RiskTier::High => *high,
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::AllocationTable;
    use rust_decimal_macros::dec;

    #[test]
    fn test_weighted_rate_moderate_tickers() {
        let table = AllocationTable::tickers();
        let rates = RateModel::ticker_returns();
        let entries = table.entries(RiskTier::Moderate).unwrap();
        let rate = rates
            .portfolio_rate(RiskTier::Moderate, entries, None)
            .unwrap();
        // 0.40*0.09 + 0.30*0.12 + 0.20*0.08 + 0.10*0.07
        assert_eq!(rate, dec!(0.0950));
    }

    #[test]
    fn test_weighted_rate_ignores_override_for_per_label() {
        let table = AllocationTable::tickers();
        let rates = RateModel::ticker_returns();
        let entries = table.entries(RiskTier::Low).unwrap();
        let with_override = rates
            .portfolio_rate(RiskTier::Low, entries, Some(dec!(0.50)))
            .unwrap();
        let without = rates.portfolio_rate(RiskTier::Low, entries, None).unwrap();
        assert_eq!(with_override, without);
    }

    #[test]
    fn test_missing_label_is_config_error() {
        let rates = RateModel::ticker_returns();
        let entries = vec![AllocationEntry::new("UNLISTED", dec!(1.0))];
        let err = rates
            .portfolio_rate(RiskTier::Low, &entries, None)
            .unwrap_err();
        assert!(matches!(err, PlannerError::MissingReturnRate(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_flat_rate_defaults_and_override() {
        let rates = RateModel::tier_defaults();
        assert_eq!(
            rates.portfolio_rate(RiskTier::Low, &[], None).unwrap(),
            dec!(0.04)
        );
        assert_eq!(
            rates.portfolio_rate(RiskTier::Moderate, &[], None).unwrap(),
            dec!(0.07)
        );
        assert_eq!(
            rates.portfolio_rate(RiskTier::High, &[], None).unwrap(),
            dec!(0.12)
        );
        assert_eq!(
            rates
                .portfolio_rate(RiskTier::High, &[], Some(dec!(0.055)))
                .unwrap(),
            dec!(0.055)
        );
    }

    #[test]
    fn test_zero_weight_contributes_zero() {
        let rates = RateModel::ticker_returns();
        let entries = vec![
            AllocationEntry::new("VOO", dec!(1.0)),
            AllocationEntry::new("QQQ", dec!(0.0)),
        ];
        let rate = rates.portfolio_rate(RiskTier::Low, &entries, None).unwrap();
        assert_eq!(rate, dec!(0.090));
    }
}
