use planner_core::allocation::{AllocationEntry, AllocationTable, RiskTier};
use planner_core::engine::ProjectionEngine;
use planner_core::plan::{self, PlanRequest};
use planner_core::portfolio::{self, PortfolioRequest};
use planner_core::rates::RateModel;
use planner_core::PlannerError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn plan_request(amount: Decimal, risk_score: i64) -> PlanRequest {
    PlanRequest {
        amount,
        risk_score,
        monthly_contribution: None,
        expected_return: None,
        time_horizon: None,
    }
}

// ===========================================================================
// Ticker pipeline end to end
// ===========================================================================

#[test]
fn test_plan_moderate_full_response() {
    let response = plan::calculate_plan(&plan_request(dec!(10000), 5)).unwrap();

    let tickers: Vec<&str> = response
        .allocations
        .iter()
        .map(|a| a.ticker.as_str())
        .collect();
    assert_eq!(tickers, vec!["VOO", "QQQ", "SCHD", "VXUS"]);

    let total: Decimal = response.allocations.iter().map(|a| a.dollar_amount).sum();
    assert_eq!(total, dec!(10000));

    // Weighted moderate rate 0.095: year 1 = 10950, year 2 = 10000 * 1.095^2
    assert_eq!(response.expected_returns["1"], dec!(10950));
    assert_eq!(
        response.expected_returns["2"],
        dec!(10000) * dec!(1.095) * dec!(1.095)
    );
}

#[test]
fn test_plan_always_returns_all_four_horizons() {
    // A short contribution horizon must not clamp the lump-sum horizons
    let mut request = plan_request(dec!(5000), 2);
    request.monthly_contribution = Some(dec!(100));
    request.expected_return = Some(dec!(5));
    request.time_horizon = Some(3);

    let response = plan::calculate_plan(&request).unwrap();
    assert!(response.expected_returns["10"] > response.expected_returns["1"]);
    assert_eq!(
        response.monthly_contribution.unwrap().yearly_projections.len(),
        3
    );
}

#[test]
fn test_plan_risk_score_boundaries() {
    let low = plan::calculate_plan(&plan_request(dec!(1000), 3)).unwrap();
    let moderate_lo = plan::calculate_plan(&plan_request(dec!(1000), 4)).unwrap();
    let moderate_hi = plan::calculate_plan(&plan_request(dec!(1000), 7)).unwrap();
    let high = plan::calculate_plan(&plan_request(dec!(1000), 8)).unwrap();

    assert_eq!(low.allocations[0].ticker, "SCHD");
    assert_eq!(moderate_lo.allocations[0].ticker, "VOO");
    assert_eq!(moderate_lo.allocations, moderate_hi.allocations);
    assert_eq!(high.allocations[0].ticker, "QQQ");
}

#[test]
fn test_plan_wire_format_field_names() {
    let mut request = plan_request(dec!(1000), 5);
    request.monthly_contribution = Some(dec!(50));
    request.expected_return = Some(dec!(7));
    request.time_horizon = Some(2);

    let response = plan::calculate_plan(&request).unwrap();
    let json = serde_json::to_value(&response).unwrap();

    let alloc = &json["allocations"][0];
    assert!(alloc.get("ticker").is_some());
    assert!(alloc.get("percentage").is_some());
    assert!(alloc.get("dollarAmount").is_some());

    let horizons = json["expectedReturns"].as_object().unwrap();
    for key in ["1", "2", "5", "10"] {
        assert!(horizons.contains_key(key), "missing horizon {key}");
    }

    let monthly = &json["monthlyContribution"];
    assert!(monthly.get("finalValue").is_some());
    assert!(monthly.get("totalContributions").is_some());
    assert!(monthly.get("totalGrowth").is_some());
    assert!(monthly["yearlyProjections"][0].get("contributions").is_some());
}

// ===========================================================================
// Category pipeline end to end
// ===========================================================================

#[test]
fn test_portfolio_request_parses_wire_names() {
    let request: PortfolioRequest = serde_json::from_str(
        r#"{"investmentAmount": 20000, "riskLevel": "Moderate", "timeline": 5}"#,
    )
    .unwrap();
    assert_eq!(request.risk_level, RiskTier::Moderate);

    let result = portfolio::calculate_portfolio(&request).unwrap();
    let years: Vec<u32> = result.yearly_projections.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![1, 2, 5]);
    assert_eq!(result.initial_allocations[0].category, "Index Funds");
}

#[test]
fn test_portfolio_risk_level_is_case_sensitive() {
    let parsed: Result<PortfolioRequest, _> = serde_json::from_str(
        r#"{"investmentAmount": 20000, "riskLevel": "moderate", "timeline": 5}"#,
    );
    assert!(parsed.is_err());
}

#[test]
fn test_portfolio_default_rate_by_tier() {
    let request = PortfolioRequest {
        investment_amount: dec!(10000),
        risk_level: RiskTier::High,
        expected_return: None,
        timeline: 1,
    };
    let result = portfolio::calculate_portfolio(&request).unwrap();
    // High default is 12%
    assert_eq!(result.yearly_projections[0].total_value, dec!(11200.00));
}

#[test]
fn test_portfolio_override_applies_to_growth_only() {
    let request = PortfolioRequest {
        investment_amount: dec!(10000),
        risk_level: RiskTier::High,
        expected_return: Some(dec!(3)),
        timeline: 1,
    };
    let result = portfolio::calculate_portfolio(&request).unwrap();
    assert_eq!(result.yearly_projections[0].total_value, dec!(10300.00));
    // Same static weights as the no-override case
    assert_eq!(
        result.yearly_projections[0].allocations[0].percentage,
        dec!(0.45)
    );
}

// ===========================================================================
// Engine substitution (injected configuration)
// ===========================================================================

#[test]
fn test_injected_table_missing_tier_raises_unknown_tier() {
    let table = AllocationTable::new(vec![(
        RiskTier::Low,
        vec![AllocationEntry::new("CASH", dec!(1.0))],
    )])
    .unwrap();
    let engine = ProjectionEngine::new(table, RateModel::tier_defaults());

    let request = PortfolioRequest {
        investment_amount: dec!(1000),
        risk_level: RiskTier::High,
        expected_return: None,
        timeline: 1,
    };
    let err = portfolio::calculate_portfolio_with(&engine, &request).unwrap_err();
    assert!(matches!(err, PlannerError::UnknownRiskTier(_)));
    assert!(!err.is_validation());
}

#[test]
fn test_injected_rates_missing_label_raises_config_error() {
    // Table and rate model disagree on the label set
    let table = AllocationTable::new(vec![(
        RiskTier::Moderate,
        vec![AllocationEntry::new("PRIVATE", dec!(1.0))],
    )])
    .unwrap();
    let engine = ProjectionEngine::new(table, RateModel::ticker_returns());

    let err = plan::calculate_plan_with(&engine, &plan_request(dec!(1000), 5)).unwrap_err();
    assert!(matches!(err, PlannerError::MissingReturnRate(_)));
}

#[test]
fn test_pipelines_are_idempotent() {
    let plan_req = plan_request(dec!(10000), 6);
    assert_eq!(
        plan::calculate_plan(&plan_req).unwrap(),
        plan::calculate_plan(&plan_req).unwrap()
    );

    let portfolio_req = PortfolioRequest {
        investment_amount: dec!(10000),
        risk_level: RiskTier::Moderate,
        expected_return: Some(dec!(8)),
        timeline: 10,
    };
    assert_eq!(
        portfolio::calculate_portfolio(&portfolio_req).unwrap(),
        portfolio::calculate_portfolio(&portfolio_req).unwrap()
    );
}
