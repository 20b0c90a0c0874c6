//! Locale-aware money and date formatting plus optional coloring.

use chrono::{DateTime, Local, Utc};
use colored::{Color, Colorize};
use fineasy_config::Config;
use fineasy_domain::Transaction;

/// Number and date conventions for a locale family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleStyle {
    /// `1.234,56` and `dd/mm/yyyy`.
    Brazilian,
    /// `1,234.56` and `mm/dd/yyyy`.
    English,
}

impl LocaleStyle {
    pub fn from_tag(tag: &str) -> Self {
        let lower = tag.trim().to_ascii_lowercase();
        if lower.starts_with("pt") {
            LocaleStyle::Brazilian
        } else {
            LocaleStyle::English
        }
    }

    fn separators(self) -> (char, char) {
        match self {
            LocaleStyle::Brazilian => (',', '.'),
            LocaleStyle::English => ('.', ','),
        }
    }
}

/// Renders amounts, dates, and colors for the configured locale.
#[derive(Debug, Clone)]
pub struct Formatter {
    locale: LocaleStyle,
    currency: String,
    color: bool,
}

impl Formatter {
    pub fn new(locale: LocaleStyle, currency: impl Into<String>, color: bool) -> Self {
        Self {
            locale,
            currency: currency.into().to_ascii_uppercase(),
            color,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            LocaleStyle::from_tag(&config.locale),
            config.currency.clone(),
            config.ui_color_enabled,
        )
    }

    pub fn locale(&self) -> LocaleStyle {
        self.locale
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn money(&self, amount: f64) -> String {
        let body = format_number(self.locale, amount.abs());
        let sign = if amount < 0.0 && body.chars().any(|ch| ch != '0' && ch.is_ascii_digit()) {
            "-"
        } else {
            ""
        };
        match (currency_symbol(&self.currency), self.locale) {
            (Some(symbol), LocaleStyle::Brazilian) => format!("{sign}{symbol} {body}"),
            (Some(symbol), LocaleStyle::English) => format!("{sign}{symbol}{body}"),
            (None, _) => format!("{sign}{} {body}", self.currency),
        }
    }

    /// History-list amount: `+ R$ 10,00` for inflows, `- R$ 10,00` for outflows.
    pub fn signed_money(&self, transaction: &Transaction) -> String {
        format!("{} {}", transaction.kind.sign(), self.money(transaction.amount))
    }

    pub fn date(&self, timestamp: DateTime<Utc>) -> String {
        let local = timestamp.with_timezone(&Local);
        match self.locale {
            LocaleStyle::Brazilian => local.format("%d/%m/%Y").to_string(),
            LocaleStyle::English => local.format("%m/%d/%Y").to_string(),
        }
    }

    pub fn percent(&self, value: f64) -> String {
        let (decimal, _) = self.locale.separators();
        format!("{value:.1}%").replace('.', &decimal.to_string())
    }

    pub fn paint(&self, text: impl AsRef<str>, color: Color) -> String {
        if self.color {
            text.as_ref().color(color).to_string()
        } else {
            text.as_ref().to_string()
        }
    }

    pub fn bold(&self, text: impl AsRef<str>) -> String {
        if self.color {
            text.as_ref().bold().to_string()
        } else {
            text.as_ref().to_string()
        }
    }

    pub fn dim(&self, text: impl AsRef<str>) -> String {
        if self.color {
            text.as_ref().dimmed().to_string()
        } else {
            text.as_ref().to_string()
        }
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "BRL" => Some("R$"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

fn format_number(locale: LocaleStyle, value: f64) -> String {
    let (decimal, grouping) = locale.separators();
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}{}{}", group_digits(int_part, grouping), decimal, frac_part)
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
