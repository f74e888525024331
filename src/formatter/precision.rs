//! Precision resolution
//!
//! A format call carries both fraction-digit bounds and an optional
//! significant-digit count. This module folds them into one rounding
//! position and one display padding target, so the rendering modules
//! never re-derive precision rules.

use crate::decimal::Decimal;

/// The resolved precision settings for one format call
#[derive(Debug, Clone, Copy)]
pub(crate) struct Precision {
    pub min_fraction: u32,
    pub max_fraction: u32,
    /// 0 disables significant-digit mode
    pub significant: u32,
    pub show_trailing_zeros: bool,
}

impl Precision {
    /// Fraction digits to round at for a value of the given magnitude.
    /// In significant-digit mode the count follows the magnitude and is
    /// clamped into the fraction-digit bounds.
    pub fn rounding_fraction_digits(&self, magnitude: i32) -> u32 {
        if self.significant > 0 {
            let target = (self.significant as i64 - 1 - magnitude as i64).max(0) as u32;
            target.clamp(self.min_fraction, self.max_fraction)
        } else {
            self.max_fraction
        }
    }

    /// Rounds the magnitude in place, half-up
    pub fn apply(&self, dec: &mut Decimal) {
        if dec.is_zero() {
            return;
        }
        let digits = self.rounding_fraction_digits(dec.magnitude());
        dec.round_fraction(digits);
    }

    /// Minimum fraction digits to display, given the integer digit
    /// count of the rounded value. Trailing-zero padding in
    /// significant-digit mode stretches the fraction until integer and
    /// fraction digits together reach the significant count.
    pub fn display_min_fraction(&self, integer_digit_count: u32) -> u32 {
        if self.significant > 0 && self.show_trailing_zeros {
            let pad = self.significant.saturating_sub(integer_digit_count);
            pad.max(self.min_fraction).min(self.max_fraction)
        } else {
            self.min_fraction
        }
    }
}
