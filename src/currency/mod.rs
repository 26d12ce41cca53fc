use std::fmt;

use serde::{Deserialize, Serialize};

/// Balances within this distance of zero are treated as settled.
pub const SETTLED_THRESHOLD: f64 = 0.01;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

/// Rounds a monetary value to two decimal places, half away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    from_cents(to_cents(value))
}

/// Returns true when `value` lies inside the settlement threshold.
pub fn is_settled(value: f64) -> bool {
    value.abs() <= SETTLED_THRESHOLD
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" | "KRW" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Settlement arithmetic runs on whole cents.
pub const CENTS_PER_UNIT: f64 = 100.0;

/// Converts a decimal amount into whole cents, half away from zero.
pub fn to_cents(amount: f64) -> i64 {
    (amount * CENTS_PER_UNIT).round() as i64
}

pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / CENTS_PER_UNIT
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let grouped = insert_grouping(int_part, locale.grouping_separator);
    match frac_part {
        Some(frac) => format!("{}{}{}", grouped, locale.decimal_separator, frac),
        None => grouped,
    }
}

fn insert_grouping(int_part: &str, separator: char) -> String {
    match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, separator)),
        None => group_digits(int_part, separator),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Renders `amount` with the currency symbol, e.g. `$1,234.50` or `-€12.00`.
pub fn format_currency_value(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount.abs(), precision);
    let symbol = symbol_for(code.as_str());
    let separator = if symbol.chars().all(char::is_alphabetic) {
        " "
    } else {
        ""
    };
    if amount < 0.0 && round_to_cents(amount) != 0.0 {
        format!("-{}{}{}", symbol, separator, body)
    } else {
        format!("{}{}{}", symbol, separator, body)
    }
}
