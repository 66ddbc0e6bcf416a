//! Display formatting for money, dates and ratings.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::fmt;

use chrono::{DateTime, Local, TimeZone};

pub const CURRENCY_SYMBOL: &str = "₹";

/// `1234.5` -> `"₹1,234.50"`.
pub fn currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}{CURRENCY_SYMBOL}{}.{cents}", group_thousands(whole))
}

/// Optional amount, with a dash when absent.
pub fn currency_or_dash(amount: Option<f64>) -> String {
    amount.map_or_else(|| "-".to_owned(), currency)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Calendar date of an RFC 3339 timestamp in the browser's local time zone.
///
/// Date-only values (`2026-10-01`) and other unparsable input keep their
/// leading date part unchanged.
pub fn date(timestamp: &str) -> String {
    date_in(timestamp, &Local)
}

/// Local `HH:MM` of an RFC 3339 timestamp, for chat bubbles.
pub fn time_of_day(timestamp: &str) -> String {
    time_of_day_in(timestamp, &Local)
}

fn date_in<Tz: TimeZone>(timestamp: &str, zone: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(at) => at.with_timezone(zone).format("%Y-%m-%d").to_string(),
        Err(_) => timestamp.split_once('T').map_or(timestamp, |(day, _)| day).to_owned(),
    }
}

fn time_of_day_in<Tz: TimeZone>(timestamp: &str, zone: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(at) => at.with_timezone(zone).format("%H:%M").to_string(),
        Err(_) => timestamp
            .split_once('T')
            .and_then(|(_, rest)| rest.get(..5))
            .unwrap_or("")
            .to_owned(),
    }
}

/// Rating to one decimal, or "New" for unrated technicians.
pub fn rating(value: Option<f64>) -> String {
    match value {
        Some(v) if v > 0.0 => format!("{v:.1}"),
        _ => "New".to_owned(),
    }
}
