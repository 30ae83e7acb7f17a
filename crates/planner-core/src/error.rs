use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// A caller-supplied field failed validation. Surfaced as a 400-class
    /// condition by whatever façade receives it.
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    /// A risk tier reached the engine that the injected allocation table
    /// does not define. Config-consistency failure, never defaulted.
    #[error("Unknown risk tier: {0}")]
    UnknownRiskTier(String),

    /// An allocation label has no expected return in the rate model.
    /// Config-consistency failure: the tables disagree with each other.
    #[error("Missing return rate for label: {0}")]
    MissingReturnRate(String),

    /// An engine precondition was violated despite upstream validation.
    /// Lower-level guard than `InvalidInput`; treated as fatal to the
    /// request, not the process.
    #[error("Domain error in {function}: {reason}")]
    Domain { function: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl PlannerError {
    /// True for errors the caller caused (400-class); false for
    /// configuration-consistency and serialization failures (500-class).
    pub fn is_validation(&self) -> bool {
        matches!(self, PlannerError::InvalidInput { .. })
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(e: serde_json::Error) -> Self {
        PlannerError::SerializationError(e.to_string())
    }
}
