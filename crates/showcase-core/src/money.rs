//! Money type and locale-aware price formatting.
//!
//! Uses cents-based integer representation so that rounding happens once,
//! when a catalog price is converted, and never during formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    BRL,
    USD,
    EUR,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "BRL").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "R$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Number formatting conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    /// Brazilian Portuguese: `R$ 1.234,56`.
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// US English: `$1,234.56`.
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    fn thousands_separator(&self) -> char {
        match self {
            Locale::PtBr => '.',
            Locale::EnUs => ',',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Locale::PtBr => ',',
            Locale::EnUs => '.',
        }
    }

    /// Separator placed between the symbol and the digits.
    fn symbol_gap(&self) -> &'static str {
        match self {
            Locale::PtBr => "\u{a0}",
            Locale::EnUs => "",
        }
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., centavos for BRL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use showcase_core::money::{Currency, Money};
    /// let price = Money::from_decimal(49.99, Currency::BRL);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Format with grouping and separators of the given locale.
    pub fn display_in(&self, locale: Locale) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_i64.pow(places);
        let magnitude = self.amount_cents.unsigned_abs();
        let units = magnitude / divisor as u64;
        let fraction = magnitude % divisor as u64;

        let mut out = String::new();
        if self.amount_cents < 0 {
            out.push('-');
        }
        out.push_str(self.currency.symbol());
        out.push_str(locale.symbol_gap());
        out.push_str(&group_digits(units, locale.thousands_separator()));
        if places > 0 {
            out.push(locale.decimal_separator());
            out.push_str(&format!("{:0width$}", fraction, width = places as usize));
        }
        out
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_in(Locale::default()))
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Formats catalog prices in a fixed currency and locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceFormatter {
    currency: Currency,
    locale: Locale,
}

impl PriceFormatter {
    /// Create a formatter for the given currency and locale.
    pub fn new(currency: Currency, locale: Locale) -> Self {
        Self { currency, locale }
    }

    /// Format a catalog amount (e.g., `1234.5` -> `R$ 1.234,50`).
    pub fn format(&self, amount: f64) -> String {
        Money::from_decimal(amount, self.currency).display_in(self.locale)
    }
}
