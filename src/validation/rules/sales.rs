//! Rules and warnings for the sales count and its derived CPA.

use crate::model::CalculationOutput;
use crate::validation::error::{
    ValidationError, ValidationErrorCode, ValidationWarning, ValidationWarningCode,
};
use crate::validation::within_tolerance;

/// CPA must equal investment / sales when there are sales, and must be
/// exactly 0 when there are none. An infinite or nonzero CPA on a
/// zero-sales record is reported under its own code.
pub(crate) fn check_cpa(output: &CalculationOutput) -> Option<ValidationError> {
    if output.sales > 0.0 {
        let expected = output.investment / output.sales;
        if within_tolerance(output.cpa, expected) {
            None
        } else {
            Some(ValidationError {
                code: ValidationErrorCode::CpaInconsistency,
                message: "cpa does not match investment / sales".into(),
                expected,
                actual: output.cpa,
            })
        }
    } else if output.cpa != 0.0 {
        Some(ValidationError {
            code: ValidationErrorCode::CpaInvalidZeroSales,
            message: "cpa must be exactly 0 when sales is 0".into(),
            expected: 0.0,
            actual: output.cpa,
        })
    } else {
        None
    }
}

/// Sales must be a mathematical integer; the floor at the end of the
/// funnel is the only place a sales count is ever produced.
pub(crate) fn check_integer_sales(output: &CalculationOutput) -> Option<ValidationError> {
    if output.sales.fract() != 0.0 {
        return Some(ValidationError {
            code: ValidationErrorCode::FractionalSales,
            message: "sales must be a whole number".into(),
            expected: output.sales.floor(),
            actual: output.sales,
        });
    }
    None
}

/// Flags records where conservative rounding discarded at least half a
/// sale of projected volume.
pub(crate) fn warn_rounding_loss(output: &CalculationOutput) -> Option<ValidationWarning> {
    if output.sales_raw > 0.0 {
        let loss = output.sales_raw - output.sales;
        if loss >= 0.5 {
            return Some(ValidationWarning {
                code: ValidationWarningCode::SignificantRounding,
                message: "conservative rounding discarded a near-complete sale".into(),
                details: Some(format!(
                    "raw sales: {:.2}, final sales: {:.0} (loss of {:.2} sales)",
                    output.sales_raw, output.sales, loss
                )),
            });
        }
    }
    None
}

/// Flags funnels that generated demand but closed nothing: leads exist,
/// budget was spent, yet the configured sale rate yields under one sale.
pub(crate) fn warn_zero_sales_with_leads(
    output: &CalculationOutput,
) -> Option<ValidationWarning> {
    if output.sales == 0.0 && output.investment > 0.0 && output.leads > 0.0 {
        return Some(ValidationWarning {
            code: ValidationWarningCode::ZeroSalesWithLeads,
            message: "funnel generated leads but converted no sales".into(),
            details: Some(format!(
                "{:.0} leads generated, but a {}% close rate yields less than one sale",
                output.leads, output.sale_rate
            )),
        });
    }
    None
}
