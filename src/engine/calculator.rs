//! Single source of truth for all funnel calculations.
//!
//! Master formula (non-negotiable order):
//! 1. impressions  = (investment / cpm) * 1000
//! 2. clicks       = impressions * ctr
//! 3. intermediate = clicks * stage rate (page views or conversations)
//! 4. leads        = intermediate * conversion rate
//! 5. sales_raw    = leads * sale rate
//! 6. sales        = floor(sales_raw)   <- ONLY rounding point
//! 7. revenue      = sales * average sale value
//! 8. profit       = revenue - investment
//! 9. roas         = revenue / investment
//! 10. roi         = (profit / investment) * 100
//!
//! Revenue is computed from the *rounded* sales figure: fractional sales
//! are never realizable, so partial progress toward the next sale earns
//! zero credit.

use crate::model::{CalculationInput, CalculationOutput, CampaignType};
use tracing::trace;

/// Division that returns 0 instead of infinity or NaN.
///
/// Every division in the pipeline routes through this; it is the sole
/// mechanism keeping non-finite values out of the metrics chain.
#[inline]
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    let result = numerator / denominator;
    if result.is_finite() {
        result
    } else {
        0.0
    }
}

/// Computes the full metrics record for one campaign configuration.
///
/// Total over finite inputs: zero, negative, or out-of-range values
/// degrade to zero-valued (or degenerate) metrics, never to a panic or a
/// non-finite field.
pub fn calculate_funnel_metrics(input: &CalculationInput) -> CalculationOutput {
    trace!(
        campaign_type = ?input.campaign_type,
        investment = input.investment,
        "computing funnel metrics"
    );

    let investment = input.investment;

    // STEP 1: impressions bought by the budget at the given CPM.
    let impressions = safe_divide(investment, input.cpm) * 1000.0;

    // STEP 2: clicks out of those impressions.
    let clicks = impressions * (input.ctr / 100.0);

    // STEP 3: the intermediate stage depends on the topology. The
    // inactive topology's fields are forced to 0 so the record stays
    // uniform for consumers.
    let (page_views, conversations, cost_per_conversation, intermediate) =
        match input.campaign_type {
            CampaignType::Site => {
                let page_views = clicks * (input.connect_rate / 100.0);
                (page_views, 0.0, 0.0, page_views)
            }
            CampaignType::Whatsapp => {
                let conversations = clicks * (input.conversation_rate / 100.0);
                // Cost per conversation is derived, not an input.
                let cost_per_conversation = safe_divide(investment, conversations);
                (0.0, conversations, cost_per_conversation, conversations)
            }
        };

    // STEP 4: leads out of the active intermediate stage.
    let leads = intermediate * (input.conversion_rate / 100.0);
    let cost_per_lead = safe_divide(investment, leads);

    // STEP 5: fractional sales projection.
    let sales_raw = leads * (input.sale_rate / 100.0);

    // STEP 6: the single rounding point. Floor, never round-to-nearest:
    // a 0.9-of-a-sale projection is zero sales.
    let sales = sales_raw.floor();

    // STEP 7: revenue from ROUNDED sales, not sales_raw.
    let revenue = sales * input.average_sale_value;

    // No additional cost components in the current model.
    let total_investment = investment;

    // STEP 8-10: financial ratios, all safe against a zero budget.
    let profit = revenue - total_investment;
    let roas = safe_divide(revenue, investment);
    let roi = safe_divide(profit, investment) * 100.0;

    // Cost per acquisition; 0 (not infinity) when there are no sales.
    let cpa = safe_divide(investment, sales);

    CalculationOutput {
        investment,
        cpm: input.cpm,
        ctr: input.ctr,
        connect_rate: input.connect_rate,
        conversation_rate: input.conversation_rate,
        conversion_rate: input.conversion_rate,
        sale_rate: input.sale_rate,
        average_sale_value: input.average_sale_value,
        impressions,
        clicks,
        page_views,
        conversations,
        cost_per_conversation,
        leads,
        cost_per_lead,
        sales_raw,
        sales,
        revenue,
        total_investment,
        profit,
        roas,
        roi,
        cpa,
    }
}
