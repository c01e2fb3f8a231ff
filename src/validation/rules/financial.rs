//! Rules for the financial identities: revenue, profit, ROAS, ROI.

use crate::model::CalculationOutput;
use crate::validation::error::{ValidationError, ValidationErrorCode};
use crate::validation::within_tolerance;

/// Revenue must equal sales × average sale value, using the rounded
/// sales figure. A record built from the fractional projection fails
/// here.
pub(crate) fn check_revenue(output: &CalculationOutput) -> Option<ValidationError> {
    let expected = output.sales * output.average_sale_value;
    if within_tolerance(output.revenue, expected) {
        return None;
    }
    Some(ValidationError {
        code: ValidationErrorCode::RevenueInconsistency,
        message: "revenue does not match sales × average sale value".into(),
        expected,
        actual: output.revenue,
    })
}

/// ROAS must equal revenue / investment when the budget is positive.
pub(crate) fn check_roas(output: &CalculationOutput) -> Option<ValidationError> {
    if output.investment > 0.0 {
        let expected = output.revenue / output.investment;
        if !within_tolerance(output.roas, expected) {
            return Some(ValidationError {
                code: ValidationErrorCode::RoasInconsistency,
                message: "roas does not match revenue / investment".into(),
                expected,
                actual: output.roas,
            });
        }
    }
    None
}

/// Profit must equal revenue − investment.
pub(crate) fn check_profit(output: &CalculationOutput) -> Option<ValidationError> {
    let expected = output.revenue - output.investment;
    if within_tolerance(output.profit, expected) {
        return None;
    }
    Some(ValidationError {
        code: ValidationErrorCode::ProfitInconsistency,
        message: "profit does not match revenue − investment".into(),
        expected,
        actual: output.profit,
    })
}

/// ROI must equal (profit / investment) × 100 when the budget is positive.
pub(crate) fn check_roi(output: &CalculationOutput) -> Option<ValidationError> {
    if output.investment > 0.0 {
        let expected = (output.profit / output.investment) * 100.0;
        if !within_tolerance(output.roi, expected) {
            return Some(ValidationError {
                code: ValidationErrorCode::RoiInconsistency,
                message: "roi does not match (profit / investment) × 100".into(),
                expected,
                actual: output.roi,
            });
        }
    }
    None
}
