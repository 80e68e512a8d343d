//! Money and date rendering for the shell.
//!
//! A handful of locale separators and currency symbols, no exchange rates.

use chrono::{Datelike, NaiveDate};

use itex_config::Config;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
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

/// Separators for a language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
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

impl LocaleConfig {
    /// Unknown tags fall back to en-US separators.
    pub fn for_tag(tag: &str) -> Self {
        let language = tag
            .split(|ch: char| ch == '-' || ch == '_')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        let (decimal_separator, grouping_separator) = match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" => (',', '.'),
            "fr" => (',', ' '),
            _ => ('.', ','),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

/// Currency plus locale, resolved once from the user's [`Config`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoneyFormat {
    pub code: CurrencyCode,
    pub locale: LocaleConfig,
}

impl MoneyFormat {
    pub fn from_config(config: &Config) -> Self {
        Self {
            code: CurrencyCode::new(config.currency.as_str()),
            locale: LocaleConfig::for_tag(&config.locale),
        }
    }

    /// Amount with the currency's minor units, e.g. `$25,000.00`.
    pub fn amount(&self, value: f64) -> String {
        format_currency_value(value, &self.code, &self.locale, minor_units_for(self.code.as_str()))
    }

    /// Amount rounded to whole units, e.g. `$140,000`.
    pub fn whole(&self, value: f64) -> String {
        format_currency_value(value, &self.code, &self.locale, 0)
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => format!("{code} "),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, fraction) = match body.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (body.as_str(), None),
    };
    let mut rendered = group_digits(int_part, locale.grouping_separator);
    if let Some(fraction) = fraction {
        rendered.push(locale.decimal_separator);
        rendered.push_str(fraction);
    }
    rendered
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

/// Symbol-prefixed amount with a leading minus for negatives.
pub fn format_currency_value(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    precision: u8,
) -> String {
    let body = format_number(locale, amount.abs(), precision);
    let symbol = symbol_for(code.as_str());
    let rounds_to_zero = body.chars().all(|ch| !ch.is_ascii_digit() || ch == '0');
    if amount < 0.0 && !rounds_to_zero {
        format!("-{symbol}{body}")
    } else {
        format!("{symbol}{body}")
    }
}

/// `Jan 15, 2023`
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {}, {}", month_label(date.month()), date.day(), date.year())
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}
