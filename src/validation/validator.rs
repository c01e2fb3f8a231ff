//! The central validator that orchestrates all consistency rules.
use super::error::{ValidationFailure, ValidationResult};
use super::rules::{financial, sales};
use crate::model::CalculationOutput;
use tracing::debug;

/// Independently re-derives every metric relationship in the record and
/// cross-checks it against the stored value.
///
/// The validator depends only on the record's shape, not on the engine:
/// it accepts any record, including deliberately corrupted ones. Every
/// rule runs even when earlier ones fail, so the result reports all
/// violations at once. The input is never mutated and nothing panics on
/// a malformed-but-well-typed record.
pub fn validate(output: &CalculationOutput) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Rule order follows the derivation chain.
    errors.extend(financial::check_revenue(output));
    errors.extend(financial::check_roas(output));
    errors.extend(sales::check_cpa(output));
    errors.extend(sales::check_integer_sales(output));
    errors.extend(financial::check_profit(output));
    errors.extend(financial::check_roi(output));

    warnings.extend(sales::warn_rounding_loss(output));
    warnings.extend(sales::warn_zero_sales_with_leads(output));

    if !errors.is_empty() {
        debug!(
            error_count = errors.len(),
            "metrics record failed consistency checks"
        );
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Fail-fast wrapper around [`validate`] for call sites that must halt on
/// any inconsistency, such as automated correctness gates. Aggregates
/// every violation into one [`ValidationFailure`].
pub fn assert_valid(output: &CalculationOutput) -> Result<(), ValidationFailure> {
    let result = validate(output);
    if result.is_valid {
        return Ok(());
    }

    let details = result
        .errors
        .iter()
        .map(|e| {
            format!(
                "[{}] {} (expected: {}, actual: {})",
                e.code, e.message, e.expected, e.actual
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Err(ValidationFailure { details })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_funnel_metrics;
    use crate::model::{CalculationInput, CampaignType};
    use crate::validation::error::{ValidationErrorCode, ValidationWarningCode};
    use rstest::rstest;

    fn input(campaign_type: CampaignType, investment: f64, cpm: f64, sale_rate: f64) -> CalculationInput {
        CalculationInput {
            campaign_type,
            investment,
            cpm,
            sale_rate,
            ..CalculationInput::default()
        }
    }

    #[rstest]
    #[case::default_site(input(CampaignType::Site, 5000.0, 15.0, 5.0))]
    #[case::whatsapp(input(CampaignType::Whatsapp, 5000.0, 15.0, 5.0))]
    #[case::zero_cpm(input(CampaignType::Site, 5000.0, 0.0, 5.0))]
    #[case::zero_investment(input(CampaignType::Site, 0.0, 15.0, 5.0))]
    #[case::saturated_rates(input(CampaignType::Site, 1000.0, 1.0, 100.0))]
    #[case::tiny_budget(input(CampaignType::Whatsapp, 3.5, 80.0, 2.0))]
    fn engine_output_always_validates_clean(#[case] input: CalculationInput) {
        let result = validate(&calculate_funnel_metrics(&input));

        assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn revenue_mismatch_is_isolated_to_one_error() {
        let mut output = calculate_funnel_metrics(&CalculationInput::default());

        // Corrupt revenue but keep the downstream fields consistent with
        // the corrupted value, so only the revenue identity breaks.
        output.revenue = 20_000.0;
        output.profit = 20_000.0 - output.investment;
        output.roas = 20_000.0 / output.investment;
        output.roi = (output.profit / output.investment) * 100.0;

        let result = validate(&output);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.errors[0].code,
            ValidationErrorCode::RevenueInconsistency
        );
        assert_eq!(result.errors[0].expected, 46.0 * 297.0);
        assert_eq!(result.errors[0].actual, 20_000.0);
    }

    #[test]
    fn fractional_sales_are_detected() {
        let mut output = calculate_funnel_metrics(&CalculationInput::default());

        // A record built from the unrounded projection: internally
        // consistent everywhere except the integer-sales rule.
        output.sales = 46.5;
        output.revenue = 46.5 * output.average_sale_value;
        output.profit = output.revenue - output.investment;
        output.roas = output.revenue / output.investment;
        output.roi = (output.profit / output.investment) * 100.0;
        output.cpa = output.investment / 46.5;

        let result = validate(&output);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, ValidationErrorCode::FractionalSales);
        assert_eq!(result.errors[0].expected, 46.0);
        assert_eq!(result.errors[0].actual, 46.5);
    }

    #[test]
    fn infinite_cpa_on_zero_sales_has_its_own_code() {
        let mut output =
            calculate_funnel_metrics(&input(CampaignType::Site, 5000.0, 0.0, 5.0));
        assert_eq!(output.sales, 0.0);

        output.cpa = f64::INFINITY;

        let result = validate(&output);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.errors[0].code,
            ValidationErrorCode::CpaInvalidZeroSales
        );
        assert_eq!(result.errors[0].expected, 0.0);
    }

    #[test]
    fn all_violations_are_reported_not_just_the_first() {
        let mut output = calculate_funnel_metrics(&CalculationInput::default());

        // A lone revenue corruption breaks three identities at once:
        // revenue, ROAS, and profit all disagree with the stored values.
        output.revenue += 1_000.0;

        let result = validate(&output);
        let codes: Vec<_> = result.errors.iter().map(|e| e.code).collect();

        assert_eq!(codes.len(), 3);
        assert!(codes.contains(&ValidationErrorCode::RevenueInconsistency));
        assert!(codes.contains(&ValidationErrorCode::RoasInconsistency));
        assert!(codes.contains(&ValidationErrorCode::ProfitInconsistency));
    }

    #[test]
    fn heavy_rounding_loss_raises_a_warning_only() {
        // 250 leads at 1.16% close: sales_raw 2.9, floored to 2.
        let campaign = CalculationInput {
            campaign_type: CampaignType::Site,
            investment: 1000.0,
            average_sale_value: 100.0,
            cpm: 10.0,
            ctr: 1.0,
            connect_rate: 50.0,
            conversation_rate: 80.0,
            conversion_rate: 50.0,
            sale_rate: 1.16,
        };
        let result = validate(&calculate_funnel_metrics(&campaign));

        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(
            result.warnings[0].code,
            ValidationWarningCode::SignificantRounding
        );
    }

    #[test]
    fn demand_without_sales_raises_a_warning_only() {
        // 933 leads at 0.01% close: under one sale despite real demand.
        let campaign = input(CampaignType::Site, 5000.0, 15.0, 0.01);
        let result = validate(&calculate_funnel_metrics(&campaign));

        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(
            result.warnings[0].code,
            ValidationWarningCode::ZeroSalesWithLeads
        );
        assert!(result.warnings[0].details.is_some());
    }

    #[test]
    fn assert_valid_passes_engine_output_through() {
        let output = calculate_funnel_metrics(&CalculationInput::default());
        assert!(assert_valid(&output).is_ok());
    }

    #[test]
    fn assert_valid_aggregates_every_violation() {
        let mut output = calculate_funnel_metrics(&CalculationInput::default());
        output.revenue += 1_000.0;

        let failure = assert_valid(&output).unwrap_err();
        let message = failure.to_string();

        assert!(message.contains("REVENUE_INCONSISTENCY"));
        assert!(message.contains("ROAS_INCONSISTENCY"));
        assert!(message.contains("PROFIT_INCONSISTENCY"));
    }
}
