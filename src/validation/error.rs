//! Defines the error types for the validation module.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The specific category of a consistency violation.
///
// This enum allows for programmatic inspection of findings, which is more
// robust than string matching on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorCode {
    RevenueInconsistency,
    RoasInconsistency,
    CpaInconsistency,
    /// Zero sales with a nonzero (or infinite) CPA. Kept distinct from
    /// `CpaInconsistency` because it is the most common latent bug class.
    CpaInvalidZeroSales,
    FractionalSales,
    ProfitInconsistency,
    RoiInconsistency,
}

impl ValidationErrorCode {
    /// The stable wire identifier for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RevenueInconsistency => "REVENUE_INCONSISTENCY",
            Self::RoasInconsistency => "ROAS_INCONSISTENCY",
            Self::CpaInconsistency => "CPA_INCONSISTENCY",
            Self::CpaInvalidZeroSales => "CPA_INVALID_ZERO_SALES",
            Self::FractionalSales => "FRACTIONAL_SALES",
            Self::ProfitInconsistency => "PROFIT_INCONSISTENCY",
            Self::RoiInconsistency => "ROI_INCONSISTENCY",
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured consistency violation, carrying the re-derived expected
/// value next to the one found in the record for diagnostic display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub code: ValidationErrorCode,
    pub message: String,
    pub expected: f64,
    pub actual: f64,
}

/// The category of a non-fatal finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationWarningCode {
    SignificantRounding,
    ZeroSalesWithLeads,
}

impl ValidationWarningCode {
    /// The stable wire identifier for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignificantRounding => "SIGNIFICANT_ROUNDING",
            Self::ZeroSalesWithLeads => "ZERO_SALES_WITH_LEADS",
        }
    }
}

impl fmt::Display for ValidationWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An informational finding. The record is still internally consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationWarning {
    pub code: ValidationWarningCode,
    pub message: String,
    pub details: Option<String>,
}

/// The full report from one validation pass. Every rule is evaluated even
/// when earlier ones fail; `errors` lists all violations found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// Returned by [`assert_valid`](super::assert_valid) when a record fails
/// consistency validation. Aggregates every violation into one message
/// for fail-fast call sites.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("calculation validation failed:\n{details}\nThis indicates a defect in whatever produced the record.")]
pub struct ValidationFailure {
    pub details: String,
}
