pub mod plan;
pub mod portfolio;
pub mod projection;
