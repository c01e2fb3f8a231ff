//! Plain-text projection report for a metrics record.
//!
//! The diagnostic counterpart of a dashboard summary panel: funnel stage
//! volumes followed by the financial block, with currency and percent
//! formatting. Pure string building; no I/O.

use crate::model::CalculationOutput;
use std::fmt::Write;

/// Renders the full projection summary for one record.
///
/// The record carries no topology tag, so the active intermediate stage
/// is inferred from which fields are populated: any nonzero conversation
/// figure means a messaging funnel, otherwise the site stage is shown.
pub fn format_summary(output: &CalculationOutput) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "CAMPAIGN PROJECTION");
    let _ = writeln!(out, "----------------------------------");
    let _ = writeln!(out, "{:<20}{:>14}", "Impressions", format_count(output.impressions));
    let _ = writeln!(out, "{:<20}{:>14}", "Clicks", format_count(output.clicks));
    if is_chat_record(output) {
        let _ = writeln!(out, "{:<20}{:>14}", "Conversations", format_count(output.conversations));
        let _ = writeln!(
            out,
            "{:<20}{:>14}",
            "Cost/conversation",
            format_currency(output.cost_per_conversation)
        );
    } else {
        let _ = writeln!(out, "{:<20}{:>14}", "Page views", format_count(output.page_views));
    }
    let _ = writeln!(out, "{:<20}{:>14}", "Leads", format_count(output.leads));
    let _ = writeln!(out, "{:<20}{:>14}", "Sales", format_count(output.sales));

    // Margin is a display-only derivation; a zero-revenue record shows 0.
    let margin = if output.revenue > 0.0 {
        (output.profit / output.revenue) * 100.0
    } else {
        0.0
    };

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<20}{:>14}", "Investment", format_currency(output.total_investment));
    let _ = writeln!(out, "{:<20}{:>14}", "Revenue", format_currency(output.revenue));
    let _ = writeln!(out, "{:<20}{:>14}", "Profit", format_currency(output.profit));
    let _ = writeln!(out, "{:<20}{:>14}", "Margin", format_percent(margin));
    let _ = writeln!(out, "{:<20}{:>14}", "ROAS", format_multiplier(output.roas));
    let _ = writeln!(out, "{:<20}{:>14}", "ROI", format_percent(output.roi));
    let _ = writeln!(out, "{:<20}{:>14}", "Cost/lead", format_currency(output.cost_per_lead));
    let _ = writeln!(out, "{:<20}{:>14}", "CPA", format_currency(output.cpa));

    out
}

fn is_chat_record(output: &CalculationOutput) -> bool {
    output.conversations != 0.0 || output.cost_per_conversation != 0.0
}

/// Stage volumes: rounded to whole units with thousands grouping.
fn format_count(value: f64) -> String {
    let n = value.round() as i64;
    let sign = if n < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(n.unsigned_abs()))
}

/// Monetary values: `R$` prefix, thousands grouping, two decimals.
fn format_currency(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("R$ {}{}.{:02}", sign, group_thousands(abs / 100), abs % 100)
}

fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

fn format_multiplier(value: f64) -> String {
    format!("{:.2}x", value)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let offset = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
