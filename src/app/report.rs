use anyhow::{Context, Result};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{app::config::OutputFormat, models::PortfolioValuation};

/// Two decimal places, half away from zero, `,` between thousands: `EUR 1,234.50`.
pub fn format_amount(value: Decimal, currency: &str) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{} {}{}.{}", currency, sign, grouped, fraction)
}

pub fn render_text(valuation: &PortfolioValuation, currency: &str, breakdown: bool) -> String {
    let mut out = format!(
        "Portfolio value for Investor {} on {}: {}",
        valuation.investor_id(),
        valuation.as_of().format("%Y-%m-%d"),
        format_amount(*valuation.total(), currency)
    );

    if breakdown {
        for holding in valuation.holdings() {
            out.push_str(&format!(
                "\n  {:<12} {:<10} {}",
                holding.holding_id(),
                holding.kind().to_str(),
                format_amount(*holding.value(), currency)
            ));
            if let Some(err) = holding.error() {
                out.push_str(&format!("  (failed: {})", err));
            }
        }
    }

    out
}

pub fn render_json(valuation: &PortfolioValuation) -> Result<String> {
    serde_json::to_string_pretty(valuation).with_context(|| "Failed to serialize valuation")
}

pub fn render(
    valuation: &PortfolioValuation,
    format: OutputFormat,
    currency: &str,
    breakdown: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(valuation, currency, breakdown)),
        OutputFormat::Json => render_json(valuation),
    }
}
