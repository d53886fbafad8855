//! Field parsing and validation for command input.
//!
//! Commands take `key=value` arguments; this module turns the raw strings
//! into validated domain values before anything reaches the services.

use chrono::NaiveDate;

use crate::cli::output;
use crate::domain::{BillingCycle, SubscriptionCategory};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Splits `key=value` tokens, rejecting anything without an `=`.
pub fn split_key_values(args: &[String]) -> Result<Vec<(String, String)>, String> {
    let mut pairs = Vec::new();
    for arg in args {
        match arg.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                pairs.push((key.to_string(), value.to_string()));
            }
            _ => return Err(format!("expected key=value, got `{}`", arg)),
        }
    }
    Ok(pairs)
}

pub fn parse_price(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
        .ok_or_else(|| format!("`{}` is not a valid price (e.g. 9.99)", raw))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| format!("`{}` is not a date in YYYY-MM-DD form", raw))
}

pub fn parse_positive_days(raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|days| *days > 0)
        .ok_or_else(|| format!("`{}` is not a positive number of days", raw))
}

/// Decodes a category, warning when the value degrades to `Other`.
pub fn parse_category(raw: &str) -> SubscriptionCategory {
    let decoded = SubscriptionCategory::decode(raw.trim());
    if decoded.is_defaulted() {
        output::warning(format!("Unknown category `{}`, using Other", raw.trim()));
    }
    decoded.value()
}

/// Decodes a cycle, warning when the value degrades to `Monthly`.
pub fn parse_cycle(raw: &str) -> BillingCycle {
    let decoded = BillingCycle::decode(raw.trim());
    if decoded.is_defaulted() {
        output::warning(format!("Unknown cycle `{}`, using Monthly", raw.trim()));
    }
    decoded.value()
}

/// Asks for confirmation before a destructive action. `assume_yes` skips the
/// prompt (for scripted use).
pub fn confirm(prompt: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or(false)
}
