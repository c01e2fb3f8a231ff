//! Defines the core data structures shared by the engine and validator.
pub mod types;

// Re-export key types for convenient access
pub use types::{CalculationInput, CalculationOutput, CampaignType};
