//! Locale-aware presentation helpers.

use chrono::NaiveDate;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64, currency: &str) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Formatter configured by a locale's separators and patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFormatter {
    thousands: char,
    decimal: char,
    symbol_gap: bool,
    date_pattern: &'static str,
}

impl LocaleFormatter {
    pub fn pt_br() -> Self {
        Self {
            thousands: '.',
            decimal: ',',
            symbol_gap: true,
            date_pattern: "%d/%m/%Y",
        }
    }

    pub fn en_us() -> Self {
        Self {
            thousands: ',',
            decimal: '.',
            symbol_gap: false,
            date_pattern: "%m/%d/%Y",
        }
    }

    /// Picks a formatter for a locale tag, defaulting to pt-BR.
    pub fn for_locale(locale: &str) -> Self {
        match locale.to_ascii_lowercase().as_str() {
            "en-us" | "en_us" | "en" => Self::en_us(),
            _ => Self::pt_br(),
        }
    }

    fn group_digits(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(self.thousands);
            }
            grouped.push(ch);
        }
        grouped
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        let cents = (amount.abs() * 100.0).round() as u64;
        let whole = self.group_digits(&(cents / 100).to_string());
        let number = format!("{}{}{:02}", whole, self.decimal, cents % 100);
        let symbol = currency_symbol(currency);
        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        if self.symbol_gap {
            format!("{sign}{symbol} {number}")
        } else {
            format!("{sign}{symbol}{number}")
        }
    }
}

impl DateFormatter for LocaleFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.date_pattern).to_string()
    }
}

fn currency_symbol(code: &str) -> &str {
    match code {
        "BRL" => "R$",
        "USD" => "$",
        "EUR" => "€",
        other => other,
    }
}
