use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use planner_core::PlannerError;

/// Convert an engine error into a napi::Error, keeping the
/// validation/internal distinction in the reason string.
fn to_napi_error(e: PlannerError) -> napi::Error {
    let class = if e.is_validation() {
        "validation"
    } else {
        "internal"
    };
    napi::Error::from_reason(format!("{class}: {e}"))
}

fn parse_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(format!("validation: {e}"))
}

/// Ticker-level plan: allocation, fixed-horizon projections, optional
/// monthly-contribution schedule.
#[napi]
pub fn calculate_plan(input_json: String) -> NapiResult<String> {
    let request: planner_core::plan::PlanRequest =
        serde_json::from_str(&input_json).map_err(parse_error)?;
    let response = planner_core::plan::calculate_plan(&request).map_err(to_napi_error)?;
    serde_json::to_string(&response).map_err(|e| napi::Error::from_reason(e.to_string()))
}

/// Category-level portfolio: allocation and timeline-clamped projections.
#[napi]
pub fn calculate_portfolio(input_json: String) -> NapiResult<String> {
    let request: planner_core::portfolio::PortfolioRequest =
        serde_json::from_str(&input_json).map_err(parse_error)?;
    let result = planner_core::portfolio::calculate_portfolio(&request).map_err(to_napi_error)?;
    serde_json::to_string(&result).map_err(|e| napi::Error::from_reason(e.to_string()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FutureValueOptions {
    principal: Decimal,
    /// Annual return rate as a decimal (0.09 = 9%).
    annual_rate: Decimal,
    years: u32,
}

/// Compound future value of a lump sum: principal × (1 + rate)^years.
#[napi]
pub fn future_value(input_json: String) -> NapiResult<String> {
    let options: FutureValueOptions = serde_json::from_str(&input_json).map_err(parse_error)?;
    let fv = planner_core::projection::future_value(options.principal, options.annual_rate, options.years)
        .map_err(to_napi_error)?;
    Ok(fv.to_string())
}
