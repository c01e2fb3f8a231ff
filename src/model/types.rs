use serde::{Deserialize, Serialize};

/// The two supported funnel topologies.
///
/// Both share the entry stages (impressions, clicks) and the exit stages
/// (leads, sales); they differ only in the intermediate stage. A `Site`
/// campaign turns clicks into page views, a `Whatsapp` campaign turns
/// clicks into chat conversations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    Site,
    Whatsapp,
}

/// Campaign parameters supplied by the caller on every recompute.
///
/// All rates are percentages (`ctr = 1.0` means 1%). Out-of-range or
/// negative values are tolerated: the engine degrades to zero-valued
/// metrics rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    pub campaign_type: CampaignType,

    // Financial inputs
    pub investment: f64,
    pub average_sale_value: f64,

    // Traffic inputs
    pub cpm: f64,
    pub ctr: f64,

    // Conversion rates
    /// SITE: clicks that become page views.
    pub connect_rate: f64,
    /// WHATSAPP: clicks that open a conversation.
    pub conversation_rate: f64,
    /// Views or conversations that become leads.
    pub conversion_rate: f64,
    /// Leads that close as sales.
    pub sale_rate: f64,
}

impl Default for CalculationInput {
    /// The reference campaign: the values the dashboard seeds with and
    /// resets to.
    fn default() -> Self {
        Self {
            campaign_type: CampaignType::Site,
            investment: 5000.0,
            average_sale_value: 297.0,
            cpm: 15.0,
            ctr: 1.0,
            connect_rate: 70.0,
            conversation_rate: 80.0,
            conversion_rate: 40.0,
            sale_rate: 5.0,
        }
    }
}

/// The complete metrics record produced by one engine run.
///
/// A value, not an entity: constructed fresh on every input change and
/// immutable once produced. The record is topology-agnostic for
/// consumers, because the intermediate-stage fields of the inactive
/// topology are forced to exactly 0, never left undefined.
///
/// Every field is `f64`, including `sales`, which holds a mathematical
/// integer after the engine's single floor. Keeping it floating is what
/// lets the validator detect fractional corruption in externally
/// supplied records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationOutput {
    // Inputs (passed through)
    pub investment: f64,
    pub cpm: f64,
    pub ctr: f64,
    pub connect_rate: f64,
    pub conversation_rate: f64,
    pub conversion_rate: f64,
    pub sale_rate: f64,
    pub average_sale_value: f64,

    // Funnel metrics
    pub impressions: f64,
    pub clicks: f64,
    /// SITE only; 0 in whatsapp mode.
    pub page_views: f64,
    /// WHATSAPP only; 0 in site mode.
    pub conversations: f64,
    /// WHATSAPP only (derived, not an input); 0 in site mode.
    pub cost_per_conversation: f64,
    pub leads: f64,
    pub cost_per_lead: f64,

    // Sales (with rounding)
    /// Fractional projection BEFORE rounding.
    pub sales_raw: f64,
    /// Integer value AFTER the floor.
    pub sales: f64,

    // Financial metrics (all derived from rounded sales)
    pub revenue: f64,
    /// Total spend basis; equal to `investment` in the current model,
    /// which carries no additional cost components.
    pub total_investment: f64,
    pub profit: f64,
    pub roas: f64,
    pub roi: f64,
    pub cpa: f64,
}
