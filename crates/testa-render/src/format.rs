//! # Locale-Aware Value Formatting
//!
//! Dates, numbers, and list joining per document language. This is
//! deliberately small: the supported languages share European conventions,
//! and anything fancier (CLDR plural rules, currency styles) belongs to a
//! presentation layer outside the core.

use chrono::{Datelike, NaiveDate};

use testa_core::LanguageCode;

/// Format a calendar date for the given document language.
pub fn format_date(date: NaiveDate, language: &LanguageCode) -> String {
    match language.as_str() {
        // Czech/Slovak convention: day. month. year with spaces.
        "sk" | "cs" => format!("{}. {}. {}", date.day(), date.month(), date.year()),
        "de" => format!("{:02}.{:02}.{}", date.day(), date.month(), date.year()),
        "pl" | "uk" => format!("{:02}.{:02}.{}", date.day(), date.month(), date.year()),
        "en" => format!("{} {} {}", date.day(), month_name_en(date.month()), date.year()),
        _ => date.format("%Y-%m-%d").to_string(),
    }
}

fn month_name_en(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// Format a number with the language's decimal separator. Integral values
/// drop the fraction entirely; fractional values keep two decimals.
pub fn format_number(value: f64, language: &LanguageCode) -> String {
    let text = if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    };
    match language.as_str() {
        "sk" | "cs" | "de" | "pl" | "uk" => text.replace('.', ","),
        _ => text,
    }
}

/// The conjunction used when joining the last item of a list.
fn conjunction(language: &LanguageCode) -> &'static str {
    match language.as_str() {
        "sk" | "cs" => "a",
        "de" => "und",
        "pl" => "i",
        "uk" => "та",
        _ => "and",
    }
}

/// Join items into a language-appropriate list:
/// `a`, `a and b`, `a, b and c`.
pub fn join_list(items: &[String], language: &LanguageCode) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => {
            format!("{} {} {}", head.join(", "), conjunction(language), last)
        }
    }
}

/// Localized word for a remainder-of-estate share.
pub fn remainder_word(language: &LanguageCode) -> &'static str {
    match language.as_str() {
        "sk" => "zvyšok pozostalosti",
        "cs" => "zbytek pozůstalosti",
        "de" => "der verbleibende Nachlass",
        "pl" => "pozostała część spadku",
        _ => "the remainder of the estate",
    }
}

/// Localized yes/no for boolean substitution.
pub fn format_bool(value: bool, language: &LanguageCode) -> &'static str {
    match (language.as_str(), value) {
        ("sk", true) => "áno",
        ("sk", false) => "nie",
        ("cs", true) => "ano",
        ("cs", false) => "ne",
        ("de", true) => "ja",
        ("de", false) => "nein",
        ("pl", true) => "tak",
        ("pl", false) => "nie",
        (_, true) => "yes",
        (_, false) => "no",
    }
}
