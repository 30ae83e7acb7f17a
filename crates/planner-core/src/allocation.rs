use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PlannerError;
use crate::types::{Money, Rate};
use crate::PlannerResult;

/// Per-tier weights must sum to 1 within this tolerance.
const WEIGHT_TOLERANCE: Decimal = dec!(0.000000001);

/// Three-level ordinal risk scale. Serde names are the case-sensitive
/// wire literals ("Low" | "Moderate" | "High").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Map a 1–10 risk questionnaire score onto a tier:
    /// 1–3 Low, 4–7 Moderate, 8–10 High.
    pub fn from_score(score: i64) -> PlannerResult<RiskTier> {
        match score {
            1..=3 => Ok(RiskTier::Low),
            4..=7 => Ok(RiskTier::Moderate),
            8..=10 => Ok(RiskTier::High),
            _ => Err(PlannerError::InvalidInput {
                field: "riskScore".into(),
                reason: "risk score must be an integer between 1 and 10".into(),
            }),
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Low => write!(f, "Low"),
            RiskTier::Moderate => write!(f, "Moderate"),
            RiskTier::High => write!(f, "High"),
        }
    }
}

/// One (label, weight) pair in an allocation strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub label: String,
    pub weight: Rate,
}

impl AllocationEntry {
    pub fn new(label: &str, weight: Rate) -> Self {
        AllocationEntry {
            label: label.to_string(),
            weight,
        }
    }
}

/// An allocation entry expanded against a dollar amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub label: String,
    pub weight: Rate,
    pub dollar_amount: Money,
}

/// Immutable mapping from risk tier to an ordered allocation strategy.
///
/// Built once, validated at construction, never mutated. Tables are
/// injected into the engine rather than read from global state so tests
/// can substitute alternates.
#[derive(Debug, Clone)]
pub struct AllocationTable {
    tiers: Vec<(RiskTier, Vec<AllocationEntry>)>,
}

impl AllocationTable {
    /// Build a table, rejecting any tier whose weights do not sum to 1.
    pub fn new(tiers: Vec<(RiskTier, Vec<AllocationEntry>)>) -> PlannerResult<AllocationTable> {
        for (tier, entries) in &tiers {
            let total: Decimal = entries.iter().map(|e| e.weight).sum();
            if (total - Decimal::ONE).abs() > WEIGHT_TOLERANCE {
                return Err(PlannerError::InvalidInput {
                    field: "weights".into(),
                    reason: format!("weights for tier {tier} sum to {total}, expected 1"),
                });
            }
        }
        Ok(AllocationTable { tiers })
    }

    /// The ETF-level strategies, keyed by ticker symbol.
    pub fn tickers() -> AllocationTable {
        AllocationTable {
            tiers: vec![
                (
                    RiskTier::Low,
                    vec![
                        AllocationEntry::new("SCHD", dec!(0.60)),
                        AllocationEntry::new("BND", dec!(0.20)),
                        AllocationEntry::new("VOO", dec!(0.20)),
                    ],
                ),
                (
                    RiskTier::Moderate,
                    vec![
                        AllocationEntry::new("VOO", dec!(0.40)),
                        AllocationEntry::new("QQQ", dec!(0.30)),
                        AllocationEntry::new("SCHD", dec!(0.20)),
                        AllocationEntry::new("VXUS", dec!(0.10)),
                    ],
                ),
                (
                    RiskTier::High,
                    vec![
                        AllocationEntry::new("QQQ", dec!(0.50)),
                        AllocationEntry::new("ARKK", dec!(0.30)),
                        AllocationEntry::new("VOO", dec!(0.20)),
                    ],
                ),
            ],
        }
    }

    /// The asset-class-level strategies, keyed by category name.
    pub fn categories() -> AllocationTable {
        AllocationTable {
            tiers: vec![
                (
                    RiskTier::Low,
                    vec![
                        AllocationEntry::new("Bonds", dec!(0.60)),
                        AllocationEntry::new("Index Funds", dec!(0.40)),
                    ],
                ),
                (
                    RiskTier::Moderate,
                    vec![
                        AllocationEntry::new("Index Funds", dec!(0.40)),
                        AllocationEntry::new("Tech Stocks", dec!(0.35)),
                        AllocationEntry::new("Value Stocks", dec!(0.25)),
                    ],
                ),
                (
                    RiskTier::High,
                    vec![
                        AllocationEntry::new("Tech Stocks", dec!(0.45)),
                        AllocationEntry::new("Growth Stocks", dec!(0.35)),
                        AllocationEntry::new("Emerging Markets", dec!(0.20)),
                    ],
                ),
            ],
        }
    }

    /// The ordered strategy for a tier, if the table defines one.
    pub fn entries(&self, tier: RiskTier) -> Option<&[AllocationEntry]> {
        self.tiers
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Expand the tier's strategy against a dollar amount, preserving
    /// table order. Pure function of (amount, tier) and the table.
    pub fn allocate(&self, amount: Money, tier: RiskTier) -> PlannerResult<Vec<AllocationResult>> {
        if amount <= Decimal::ZERO {
            return Err(PlannerError::InvalidInput {
                field: "amount".into(),
                reason: "amount must be a positive number".into(),
            });
        }

        let entries = self
            .entries(tier)
            .ok_or_else(|| PlannerError::UnknownRiskTier(tier.to_string()))?;

        Ok(entries
            .iter()
            .map(|e| AllocationResult {
                label: e.label.clone(),
                weight: e.weight,
                dollar_amount: amount * e.weight,
            })
            .collect())
    }
}
