//! Display formatting shared by tables, cards and forms

use chrono::NaiveDate;

pub const SQUARE_FEET_PER_ACRE: f64 = 43_560.0;

/// Insert `sep` between groups of three digits of an unsigned integer string
fn group_thousands(digits: &str, sep: char) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Split a fixed-point rendering into sign, integer digits and fraction
fn split_fixed(formatted: &str) -> (&str, &str, Option<&str>) {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    match unsigned.split_once('.') {
        Some((int, frac)) => (sign, int, Some(frac)),
        None => (sign, unsigned, None),
    }
}

/// `$1,234.56`
pub fn format_currency(amount: f64) -> String {
    let formatted = format!("{:.2}", amount);
    let (sign, int, frac) = split_fixed(&formatted);
    format!(
        "${}{}.{}",
        sign,
        group_thousands(int, ','),
        frac.unwrap_or("00")
    )
}

/// Thousands separators on the integer part: `1234567` -> `1,234,567`
pub fn format_number(num: f64) -> String {
    let formatted = num.to_string();
    let (sign, int, frac) = split_fixed(&formatted);
    match frac {
        Some(f) => format!("{}{}.{}", sign, group_thousands(int, ','), f),
        None => format!("{}{}", sign, group_thousands(int, ',')),
    }
}

/// Indian digit grouping (`12,34,567.5`), at most two fraction digits
pub fn format_inr(amount: f64) -> String {
    let formatted = format!("{:.2}", amount);
    let (sign, int, frac) = split_fixed(&formatted);

    let grouped = if int.len() <= 3 {
        int.to_string()
    } else {
        let (head, tail) = int.split_at(int.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            parts.push(&head[start..end]);
            end = start;
        }
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    let frac = frac.unwrap_or("").trim_end_matches('0');
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

/// `2.5 acres`
pub fn format_acres(acres: f64) -> String {
    format!("{} acres", acres)
}

/// Ten-digit numbers become `+1 (123) - 456 - 7890`; anything else is returned as is
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("+1 ({}) - {} - {}", &digits[0..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}

/// `Jan 1, 2023`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Parse the value of a `<input type="date">`; blank or malformed input is `None`
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Render a date for a `<input type="date">`
pub fn date_input_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn acres_to_square_feet(acres: f64) -> f64 {
    acres * SQUARE_FEET_PER_ACRE
}

pub fn square_feet_to_acres(sqft: f64) -> f64 {
    sqft / SQUARE_FEET_PER_ACRE
}
