//! Locale formatting for area, currency, and date fields.
//!
//! Every function here is best-effort: an unparseable input comes back
//! as (or wrapped around) the raw string, never as an error. Data is
//! preserved over presentation.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::words::spell_cardinal;

/// Canonical area unit suffix.
pub const AREA_SUFFIX: &str = "м²";

/// Format an area value.
///
/// A value that already carries the unit keeps its digits untouched;
/// only the ASCII `м^2` spelling is normalized to `м²`. Otherwise a
/// numeric value is rendered with two decimals and grouped thousands,
/// and a non-numeric one gets the suffix appended verbatim.
///
/// `1234.5` → `1 234.50 м²`, `500 м²` → `500 м²`, `abc` → `abc м²`.
pub fn format_area(raw: &str) -> String {
    let value = raw.trim();
    if value.ends_with("м²") || value.ends_with("м^2") {
        return value.replace("м^2", "м²");
    }
    match value.parse::<f64>() {
        Ok(number) => format!("{} {AREA_SUFFIX}", group_decimal(number)),
        Err(_) => format!("{value} {AREA_SUFFIX}"),
    }
}

/// Format a cadastral cost as digits plus words:
/// `1234.56` → `1 234 руб. 56 коп. (одна тысяча двести тридцать
/// четыре рублей пятьдесят шесть копеек)`.
///
/// Rubles are the truncated integer part; kopecks are the remainder
/// rounded to two digits. The currency nouns themselves (`рублей`,
/// `копеек`) are fixed genitive plural and not declined per amount.
pub fn format_money(amount: f64) -> String {
    let rub = amount.trunc() as u64;
    let kop = ((amount - amount.trunc()) * 100.0).round() as u64;
    format!(
        "{} руб. {:02} коп. ({} рублей {} копеек)",
        group_digits(&rub.to_string()),
        kop,
        spell_cardinal(rub),
        spell_cardinal(kop)
    )
}

/// Reformat a date string to `DD-MM-YYYY`.
///
/// Accepts RFC 3339, a bare `YYYY-MM-DDTHH:MM:SS` (with optional
/// fractional seconds, `T` or space separated), or a plain
/// `YYYY-MM-DD`. Anything else is returned unchanged.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d-%m-%Y").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%d-%m-%Y").to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d-%m-%Y").to_string();
    }
    raw.to_string()
}

/// Two decimal places with the integer digits grouped in threes.
fn group_decimal(value: f64) -> String {
    let rendered = format!("{value:.2}");
    let (sign, rest) = match rendered.strip_prefix('-') {
        Some(tail) => ("-", tail),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some(parts) => parts,
        None => (rest, "00"),
    };
    format!("{sign}{}.{frac_part}", group_digits(int_part))
}

/// Insert a space between every group of three digits, right-aligned.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
