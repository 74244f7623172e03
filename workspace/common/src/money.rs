use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{iso, FormattableCurrency, Formatter, LocalFormat, Locale, Money, Params, Position};
use tracing::debug;

use crate::error::{DisplayError, Result};

/// Currency used when nothing else is configured.
const DEFAULT_CURRENCY: &str = "BRL";

/// Formats amounts as localized currency strings, e.g. `R$ 5.000,00`.
///
/// Symbol and exponent come from the ISO table of `rusty_money`. Amounts are
/// always rendered with exactly `exponent` minor digits.
#[derive(Clone, Copy)]
pub struct CurrencyFormatter {
    currency: &'static iso::Currency,
    locale: Locale,
}

impl CurrencyFormatter {
    /// Formatter for an ISO-4217 code such as `"BRL"` or `"USD"`.
    pub fn new(code: &str) -> Result<Self> {
        let normalized = code.trim().to_uppercase();
        let currency = iso::find(&normalized)
            .ok_or_else(|| DisplayError::UnknownCurrency(code.to_string()))?;
        debug!(currency = currency.code(), "Currency formatter created");
        Ok(Self {
            currency,
            locale: number_locale(currency),
        })
    }

    pub fn code(&self) -> &'static str {
        self.currency.code()
    }

    pub fn format(&self, amount: Decimal) -> String {
        let exponent = self.currency.exponent();
        let mut rounded = amount.round_dp_with_strategy(exponent, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(exponent);

        let local = LocalFormat::from_locale(self.locale);
        // Comma-decimal locales put a space between symbol and amount
        let spaced = local.exponent_separator == ',';
        let positions = match (self.currency.symbol_first(), spaced) {
            (true, true) => vec![Position::Sign, Position::Symbol, Position::Space, Position::Amount],
            (true, false) => vec![Position::Sign, Position::Symbol, Position::Amount],
            (false, _) => vec![Position::Sign, Position::Amount, Position::Space, Position::Symbol],
        };

        let params = Params {
            digit_separator: local.digit_separator,
            exponent_separator: local.exponent_separator,
            separator_pattern: local.digit_separator_pattern(),
            positions,
            rounding: None,
            symbol: Some(self.currency.symbol()),
            code: Some(self.currency.code()),
        };

        Formatter::money(&Money::from_decimal(rounded, self.currency), params)
    }
}

/// Number grouping for a currency. The ISO table files the real under US
/// separators, Brazilian usage is `1.234,56`.
fn number_locale(currency: &iso::Currency) -> Locale {
    match currency.code() {
        "BRL" => Locale::EnEu,
        _ => currency.locale(),
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        let currency = iso::find(DEFAULT_CURRENCY).unwrap_or(iso::BRL);
        Self {
            currency,
            locale: number_locale(currency),
        }
    }
}

impl fmt::Debug for CurrencyFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyFormatter")
            .field("currency", &self.code())
            .field("locale", &self.locale)
            .finish()
    }
}

impl PartialEq for CurrencyFormatter {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}
