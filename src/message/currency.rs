//! Currency rendering for prices in the order message.
//!
//! Amounts are rounded half away from zero to whole units and grouped by
//! thousands. [`LocaleCurrencyFormatter::fr_xof`] reproduces the `fr-FR` /
//! `XOF` rendering diners see on the menu, e.g. `1 500 F CFA`.

/// Renders an amount as a currency string.
pub trait CurrencyFormatter {
    fn format(&self, amount: f64) -> String;
}

/// Narrow no-break space, the `fr` digit group separator.
pub const NARROW_NBSP: char = '\u{202f}';
/// No-break space, between the amount and the currency symbol.
///
/// Inside the symbol itself (`F CFA`) the locale uses [`NARROW_NBSP`].
pub const NBSP: char = '\u{a0}';

/// Zero-decimal currency format with a trailing symbol.
///
/// Negative zero keeps its sign (`-0 F CFA`), as `Intl.NumberFormat` does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCurrencyFormatter {
    group_separator: char,
    symbol_separator: char,
    symbol: &'static str,
}

impl LocaleCurrencyFormatter {
    pub const fn new(group_separator: char, symbol_separator: char, symbol: &'static str) -> Self {
        Self {
            group_separator,
            symbol_separator,
            symbol,
        }
    }

    /// West African CFA franc as rendered by the `fr-FR` locale.
    pub const fn fr_xof() -> Self {
        Self::new(NARROW_NBSP, NBSP, "F\u{202f}CFA")
    }

    fn group_digits(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

impl Default for LocaleCurrencyFormatter {
    fn default() -> Self {
        Self::fr_xof()
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn format(&self, amount: f64) -> String {
        let number = if amount.is_nan() {
            "NaN".to_string()
        } else if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            format!("{sign}∞")
        } else {
            let rounded = amount.round();
            let sign = if rounded.is_sign_negative() { "-" } else { "" };
            // `Display` gives the shortest round-trip digits, never an exponent.
            let digits = format!("{}", rounded.abs());
            format!("{sign}{}", self.group_digits(&digits))
        };
        format!("{number}{}{}", self.symbol_separator, self.symbol)
    }
}

impl<F: CurrencyFormatter + ?Sized> CurrencyFormatter for &F {
    fn format(&self, amount: f64) -> String {
        (**self).format(amount)
    }
}
