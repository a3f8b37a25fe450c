//! Display formatting for dates, times and prices.
//!
//! Inputs are the backend's ISO-8601 strings ("2026-03-14" or
//! "2026-03-14T18:00:00"); anything unparseable is shown as received.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn parse_date(s: &str) -> Option<NaiveDate> {
    s.get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let time = match s.find('T') {
        Some(idx) => &s[idx + 1..],
        None => s,
    };
    let hm = time.get(..5)?;
    NaiveTime::parse_from_str(hm, "%H:%M").ok()
}

/// "Mar 14, 2026".
pub fn format_date_human(date_str: &str) -> String {
    use chrono::Datelike;

    match parse_date(date_str) {
        Some(d) => format!(
            "{} {}, {}",
            MONTH_NAMES[d.month0() as usize],
            d.day(),
            d.year()
        ),
        None => date_str.to_string(),
    }
}

/// "6:00 PM". Accepts a full timestamp or a bare "HH:MM".
pub fn format_time(time_str: &str) -> String {
    match parse_time(time_str) {
        Some(t) => t.format("%-I:%M %p").to_string(),
        None => time_str.to_string(),
    }
}

/// "6:00 PM - 7:00 PM".
pub fn format_time_range(start: &str, end: &str) -> String {
    format!("{} - {}", format_time(start), format_time(end))
}

/// "Mar 14, 2026 6:00 PM".
pub fn format_datetime_human(s: &str) -> String {
    match NaiveDateTime::parse_from_str(s.get(..19).unwrap_or(s), "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => format!(
            "{} {}",
            format_date_human(&dt.date().to_string()),
            dt.time().format("%-I:%M %p")
        ),
        Err(_) => format_date_human(s),
    }
}

/// Dollar amount without trailing zeros: `25.0` is "$25", `12.5` is "$12.5".
pub fn format_price(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("${trimmed}")
}

pub fn format_hourly_price(amount: f64) -> String {
    format!("{}/hour", format_price(amount))
}

/// Today's local date as "YYYY-MM-DD", the earliest bookable day.
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
