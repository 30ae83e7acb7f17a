pub mod allocation;
pub mod engine;
pub mod error;
pub mod plan;
pub mod portfolio;
pub mod projection;
pub mod rates;
pub mod types;

pub use error::PlannerError;
pub use types::*;

/// Standard result type for all planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
