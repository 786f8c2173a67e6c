//! Money type for representing monetary values.
//!
//! Amounts are integers in the currency's minor unit (paise for INR), so
//! totals never pick up floating-point error. Arithmetic is checked and
//! returns `None` on overflow or currency mismatch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Minor units per major unit.
    pub fn minor_per_major(&self) -> i64 {
        100
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }

    /// Whether amounts group digits the Indian way (lakh, crore).
    fn indian_grouping(&self) -> bool {
        matches!(self, Currency::INR)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (e.g., paise).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub const fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Whole rupees.
    ///
    /// ```
    /// use ayur_commerce::money::Money;
    /// assert_eq!(Money::inr(299).amount_minor, 29_900);
    /// assert_eq!(Money::inr(299).to_string(), "₹299");
    /// ```
    pub const fn inr(rupees: i64) -> Self {
        Self::new(rupees.saturating_mul(100), Currency::INR)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Try to add another Money value.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_sub(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a scalar.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum values of one currency. `None` on overflow or mixed currencies.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// `percent`% of this amount, rounded half away from zero to the minor unit.
    pub fn try_percentage(&self, percent: i64) -> Option<Money> {
        let scaled = i128::from(self.amount_minor) * i128::from(percent);
        let half = if scaled < 0 { -50 } else { 50 };
        i64::try_from((scaled + half) / 100)
            .ok()
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Round to a whole major unit, halves rounding up.
    pub fn round_to_major(&self) -> Money {
        let unit = self.currency.minor_per_major();
        let shifted = self.amount_minor.saturating_add(unit / 2);
        Money::new(shifted.div_euclid(unit).saturating_mul(unit), self.currency)
    }

    /// Format as a display string, e.g. `₹1,00,000` or `₹53.82`.
    ///
    /// Whole amounts carry no fraction digits; otherwise up to two, with
    /// trailing zeros dropped.
    pub fn display(&self) -> String {
        let unit = self.currency.minor_per_major().unsigned_abs();
        let magnitude = self.amount_minor.unsigned_abs();
        let major = group_digits(&(magnitude / unit).to_string(), self.currency.indian_grouping());
        let minor = magnitude % unit;

        let sign = if self.amount_minor < 0 { "-" } else { "" };
        if minor == 0 {
            format!("{}{}{}", sign, self.currency.symbol(), major)
        } else {
            let fraction = format!("{:02}", minor);
            format!(
                "{}{}{}.{}",
                sign,
                self.currency.symbol(),
                major,
                fraction.trim_end_matches('0')
            )
        }
    }
}

/// Insert thousands separators into a run of ASCII digits.
fn group_digits(digits: &str, indian: bool) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let group = if indian { 2 } else { 3 };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_rupees() {
        let m = Money::inr(2999);
        assert_eq!(m.amount_minor, 299_900);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_display_indian_grouping() {
        assert_eq!(Money::inr(0).display(), "₹0");
        assert_eq!(Money::inr(999).display(), "₹999");
        assert_eq!(Money::inr(2999).display(), "₹2,999");
        assert_eq!(Money::inr(100_000).display(), "₹1,00,000");
        assert_eq!(Money::inr(12_345_678).display(), "₹1,23,45,678");
    }

    #[test]
    fn test_display_fraction() {
        assert_eq!(Money::new(5382, Currency::INR).display(), "₹53.82");
        assert_eq!(Money::new(5350, Currency::INR).display(), "₹53.5");
        assert_eq!(Money::new(5305, Currency::INR).display(), "₹53.05");
        assert_eq!(Money::new(-29_900, Currency::INR).display(), "-₹299");
    }

    #[test]
    fn test_display_western_grouping() {
        assert_eq!(Money::new(123_456_789, Currency::USD).display(), "$1,234,567.89");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::inr(299);
        let b = Money::inr(149);
        assert_eq!(a.try_add(&b), Some(Money::inr(448)));
        assert_eq!(a.try_subtract(&b), Some(Money::inr(150)));
    }

    #[test]
    fn test_try_sum() {
        let lines = [Money::inr(299), Money::inr(149), Money::new(50, Currency::INR)];
        assert_eq!(
            Money::try_sum(lines.iter(), Currency::INR),
            Some(Money::new(44_850, Currency::INR))
        );
        assert_eq!(Money::try_sum([].iter(), Currency::INR), Some(Money::inr(0)));
    }

    #[test]
    fn test_currency_mismatch() {
        let inr = Money::inr(10);
        let usd = Money::new(1000, Currency::USD);
        assert!(inr.try_add(&usd).is_none());
        assert!(Money::try_sum([inr, usd].iter(), Currency::INR).is_none());
    }

    #[test]
    fn test_overflow_is_none() {
        let big = Money::new(i64::MAX, Currency::INR);
        assert!(big.try_add(&Money::new(1, Currency::INR)).is_none());
        assert!(big.try_multiply(2).is_none());
    }

    #[test]
    fn test_percentage_and_rounding() {
        // 18% of ₹299 is ₹53.82, which rounds to ₹54.
        let tax = Money::inr(299).try_percentage(18).unwrap();
        assert_eq!(tax.amount_minor, 5382);
        assert_eq!(tax.round_to_major(), Money::inr(54));

        assert_eq!(Money::new(5350, Currency::INR).round_to_major(), Money::inr(54));
        assert_eq!(Money::new(5349, Currency::INR).round_to_major(), Money::inr(53));
        assert_eq!(Money::new(-250, Currency::INR).round_to_major(), Money::inr(-2));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("JPY"), None);
    }
}
