//! # Money Module
//!
//! Provides the `Money` type for NAD-denominated amounts.
//!
//! All prices in the booking engine are authored in Namibian Dollars and
//! held in integer cents. Conversion into the selected display currency is
//! a formatting concern and happens in `namib-rates`, never here.
//!
//! ## Usage
//! ```rust
//! use namib_core::money::Money;
//!
//! // Create from cents (preferred)
//! let rate = Money::from_cents(50_000); // N$500.00 per day
//!
//! // Arithmetic operations
//! let three_days = rate * 3;                     // N$1,500.00
//! let with_fee = three_days + Money::from_cents(10_000); // N$1,600.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in NAD cents (the smallest currency unit).
///
/// ## Invariants
/// - All catalog prices, line amounts, and totals flow through this type
/// - Arithmetic is exact integer math; rounding happens only in
///   `calculate_tax` and at display-conversion time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use namib_core::money::Money;
    ///
    /// let fee = Money::from_cents(10_000); // N$100.00
    /// assert_eq!(fee.cents(), 10_000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use namib_core::money::Money;
    ///
    /// let price = Money::from_major_minor(165, 0); // N$165.00
    /// assert_eq!(price.cents(), 16_500);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (whole dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Calculates tax on this amount, rounded to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`. The +5000 rounds the
    /// half-cent up instead of truncating.
    ///
    /// ## Example
    /// ```rust
    /// use namib_core::money::Money;
    /// use namib_core::types::TaxRate;
    ///
    /// let pre_tax = Money::from_cents(160_000); // N$1,600.00
    /// let rate = TaxRate::from_bps(1500);       // 15%
    ///
    /// let tax = pre_tax.calculate_tax(rate);
    /// assert_eq!(tax.cents(), 24_000);          // N$240.00
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 intermediate prevents overflow on large amounts
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies money by a quantity (extras lines).
    ///
    /// ## Example
    /// ```rust
    /// use namib_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(12_000); // N$120.00
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 36_000);     // N$360.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Multiplies money by a whole-day rental duration (vehicle line).
    #[inline]
    pub const fn multiply_days(&self, days: u32) -> Self {
        Money(self.0 * days as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable NAD format.
///
/// ## Note
/// This is for debugging and logs. Selected-currency display strings come
/// from the currency service, which handles conversion and localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}N${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation of line amounts into a total.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(12_000);
        assert_eq!(money.cents(), 12_000);
        assert_eq!(money.dollars(), 120);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(1100, 0);
        assert_eq!(money.cents(), 110_000);

        let odd = Money::from_major_minor(10, 99);
        assert_eq!(odd.cents(), 1099);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(150_000)), "N$1500.00");
        assert_eq!(format!("{}", Money::from_cents(500)), "N$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-N$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "N$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let lines = [
            Money::from_cents(36_000),
            Money::from_cents(16_500),
            Money::zero(),
        ];
        let total: Money = lines.into_iter().sum();
        assert_eq!(total.cents(), 52_500);
    }

    #[test]
    fn test_tax_calculation_booking_rate() {
        // N$1,500.00 at 15% = N$225.00
        let amount = Money::from_cents(150_000);
        let rate = TaxRate::from_bps(1500);
        let tax = amount.calculate_tax(rate);
        assert_eq!(tax.cents(), 22_500);
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // N$0.03 at 15% = N$0.0045 → rounds to N$0.00
        let tiny = Money::from_cents(3);
        assert_eq!(tiny.calculate_tax(TaxRate::from_bps(1500)).cents(), 0);

        // N$0.04 at 15% = N$0.006 → rounds to N$0.01
        let four = Money::from_cents(4);
        assert_eq!(four.calculate_tax(TaxRate::from_bps(1500)).cents(), 1);
    }

    #[test]
    fn test_multiply_days() {
        let daily_rate = Money::from_cents(50_000);
        assert_eq!(daily_rate.multiply_days(3).cents(), 150_000);
        assert_eq!(daily_rate.multiply_days(1).cents(), 50_000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(12_000);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 36_000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
    }
}
