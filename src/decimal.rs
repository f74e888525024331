//! Exact decimal representation of `f64` magnitudes
//!
//! Formatting must stay digit-correct past the range where `f64`
//! arithmetic keeps integer precision (beyond 2^53, and down at
//! subnormal magnitudes). This module holds a value as its shortest
//! round-trip decimal digit string, so multiplier scaling, compact
//! division and rounding are all exact moves on a digit vector instead
//! of lossy float multiplications.

/// A non-negative decimal magnitude: `digits[0].digits[1..] × 10^exponent`.
///
/// Zero is the empty digit vector. Non-zero values keep the first and
/// last digit non-zero (canonical form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decimal {
    digits: Vec<u8>,
    exponent: i32,
}

impl Decimal {
    /// Builds the shortest round-trip decimal expansion of `|value|`.
    /// `value` must be finite.
    pub fn from_abs(value: f64) -> Self {
        let value = value.abs();
        debug_assert!(value.is_finite());
        let repr = format!("{value:e}");
        let (mantissa, exp) = repr
            .split_once('e')
            .expect("LowerExp always contains an exponent");
        let exponent: i32 = exp.parse().expect("LowerExp exponent is an integer");
        let mut digits: Vec<u8> = mantissa
            .bytes()
            .filter(|b| b.is_ascii_digit())
            .map(|b| b - b'0')
            .collect();
        while digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            Decimal { digits, exponent: 0 }
        } else {
            Decimal { digits, exponent }
        }
    }

    pub fn zero() -> Self {
        Decimal { digits: Vec::new(), exponent: 0 }
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Power-of-ten position of the most significant digit (0 for zero)
    pub fn magnitude(&self) -> i32 {
        self.exponent
    }

    /// Multiplies by `10^k` (exact)
    pub fn shift(&mut self, k: i32) {
        if !self.is_zero() {
            self.exponent += k;
        }
    }

    pub fn shifted(mut self, k: i32) -> Self {
        self.shift(k);
        self
    }

    /// Digit at power-of-ten position `place` (0 when out of range)
    pub fn digit_at(&self, place: i32) -> u8 {
        let idx = self.exponent as i64 - place as i64;
        if idx < 0 {
            return 0;
        }
        self.digits.get(idx as usize).copied().unwrap_or(0)
    }

    /// Position of the least significant stored digit, `None` for zero
    pub fn low_position(&self) -> Option<i32> {
        if self.is_zero() {
            None
        } else {
            Some(self.exponent - (self.digits.len() as i32 - 1))
        }
    }

    /// Number of digits in the integer part (0 when the value is < 1)
    pub fn integer_digit_count(&self) -> u32 {
        if self.is_zero() || self.exponent < 0 {
            0
        } else {
            self.exponent as u32 + 1
        }
    }

    /// Number of fraction digits needed to show every stored digit
    pub fn fraction_digit_count(&self) -> u32 {
        match self.low_position() {
            Some(low) if low < 0 => (-low) as u32,
            _ => 0,
        }
    }

    /// Rounds half-up at power-of-ten position `place`: every digit
    /// below `place` is dropped, and the kept value is incremented when
    /// the first dropped digit is 5 or more.
    pub fn round_at_place(&mut self, place: i32) {
        if self.is_zero() {
            return;
        }
        let keep = self.exponent as i64 - place as i64 + 1;
        if keep >= self.digits.len() as i64 {
            return;
        }
        if keep < 0 {
            *self = Decimal::zero();
            return;
        }
        let keep = keep as usize;
        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);
        if round_up {
            let mut carry = true;
            for digit in self.digits.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                self.digits.insert(0, 1);
                self.exponent += 1;
            }
        }
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.exponent = 0;
        }
    }

    /// Rounds half-up to at most `count` fraction digits
    pub fn round_fraction(&mut self, count: u32) {
        self.round_at_place(-(count.min(i32::MAX as u32) as i32));
    }

    /// Rounds half-up to `count` significant digits (no-op for zero or
    /// a disabled count of 0)
    pub fn round_significant(&mut self, count: u32) {
        if count == 0 || self.is_zero() {
            return;
        }
        self.round_at_place(self.exponent - (count as i32 - 1));
    }

    /// Approximate float value; used only for plural-category selection
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let mut s = String::with_capacity(self.digits.len() + 8);
        for d in &self.digits {
            s.push((b'0' + d) as char);
        }
        s.push('e');
        let exp = self.exponent - (self.digits.len() as i32 - 1);
        s.push_str(&exp.to_string());
        s.parse().unwrap_or(0.0)
    }
}
