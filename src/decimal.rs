//! Fixed-scale decimals built on [`BigInteger`]

use crate::*;
use crate::stdlib::cmp::Ordering;
use crate::stdlib::string::String;

use crate::bigdigit::DigitVec;


/// A [`BigInteger`] with an implied radix point 'scale' digits from the right
///
/// Construction strips zero digits below the radix point, so every number
/// has exactly one (value, scale) representation; zero always has scale 0.
/// Derived equality therefore agrees with numeric comparison.
///
/// ```
/// use lexorank::{BigDecimal, NumeralSystem};
///
/// let n = BigDecimal::parse("1:200", NumeralSystem::Base36).unwrap();
/// assert_eq!(n.scale(), 1);
/// assert_eq!(n.format(), "1:2");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigDecimal {
    int_val: BigInteger,
    scale: usize,
}

impl BigDecimal {
    /// Create decimal from integer value and scale, normalizing
    ///
    /// Trailing fractional zeros are removed, lowering the scale.
    ///
    pub fn new(int_val: BigInteger, scale: usize) -> Self {
        if int_val.is_zero() {
            return BigDecimal { int_val: int_val, scale: 0 };
        }
        let zero_count = int_val.magnitude().count_insignificant_zeros(scale);
        BigDecimal {
            int_val: int_val.shift_right(zero_count),
            scale: scale - zero_count,
        }
    }

    /// Zero in the given numeral system
    pub fn zero(system: NumeralSystem) -> Self {
        BigDecimal { int_val: BigInteger::zero(system), scale: 0 }
    }

    /// One half: the digit base/2 at scale 1
    ///
    /// Every supported base is even, so this is exact.
    ///
    pub fn half(system: NumeralSystem) -> Self {
        let digit = DigitVec::from_vec(vec![system.base() / 2]);
        Self::new(BigInteger::from_parts(system, Sign::Plus, digit), 1)
    }

    /// Parse decimal text containing at most one radix point
    ///
    /// Without a radix point the scale is zero.
    ///
    pub fn parse(text: &str, system: NumeralSystem) -> Result<Self, LexoRankError> {
        let radix = system.radix_point_char();
        let (int_str, scale) = match text.find(radix) {
            None => return Ok(Self::new(BigInteger::parse(text, system)?, 0)),
            Some(idx) => {
                if text.rfind(radix) != Some(idx) {
                    return Err(LexoRankError::MultipleRadixPoints(radix));
                }
                let (head, tail) = (&text[..idx], &text[idx + radix.len_utf8()..]);
                let mut joined = String::with_capacity(text.len());
                joined.push_str(head);
                joined.push_str(tail);
                (joined, tail.chars().count())
            }
        };

        let int_val = BigInteger::parse(&int_str, system)?;
        Ok(Self::new(int_val, scale))
    }

    pub fn system(&self) -> NumeralSystem {
        self.int_val.system()
    }

    /// Number of digits after the radix point
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// The unscaled integer value
    pub fn value(&self) -> &BigInteger {
        &self.int_val
    }

    pub fn is_zero(&self) -> bool {
        self.int_val.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.int_val.is_negative()
    }

    pub(crate) fn check_system(&self, other: &BigDecimal) -> Result<(), LexoRankError> {
        self.int_val.check_system(&other.int_val)
    }

    /// Integer values of both operands brought to a common scale
    fn aligned_values(&self, other: &BigDecimal) -> (BigInteger, BigInteger, usize) {
        match self.scale.cmp(&other.scale) {
            Ordering::Less => (
                self.int_val.shift_left(other.scale - self.scale),
                other.int_val.clone(),
                other.scale,
            ),
            Ordering::Greater => (
                self.int_val.clone(),
                other.int_val.shift_left(self.scale - other.scale),
                self.scale,
            ),
            Ordering::Equal => (self.int_val.clone(), other.int_val.clone(), self.scale),
        }
    }

    /// Sum of two decimals
    pub fn add(&self, other: &BigDecimal) -> Result<Self, LexoRankError> {
        self.check_system(other)?;
        Ok(self.add_unchecked(other))
    }

    /// Difference of two decimals
    pub fn subtract(&self, other: &BigDecimal) -> Result<Self, LexoRankError> {
        self.check_system(other)?;
        Ok(self.sub_unchecked(other))
    }

    /// Product of two decimals; the scales add
    pub fn multiply(&self, other: &BigDecimal) -> Result<Self, LexoRankError> {
        self.check_system(other)?;
        Ok(self.mul_unchecked(other))
    }

    pub(crate) fn add_unchecked(&self, other: &BigDecimal) -> Self {
        let (a, b, scale) = self.aligned_values(other);
        Self::new(a.add_unchecked(&b), scale)
    }

    pub(crate) fn sub_unchecked(&self, other: &BigDecimal) -> Self {
        let (a, b, scale) = self.aligned_values(other);
        Self::new(a.sub_unchecked(&b), scale)
    }

    pub(crate) fn mul_unchecked(&self, other: &BigDecimal) -> Self {
        Self::new(self.int_val.mul_unchecked(&other.int_val), self.scale + other.scale)
    }

    /// True if no digit below the radix point is non-zero
    pub fn is_exact(&self) -> bool {
        self.scale == 0 || self.int_val.magnitude().is_zero_below(self.scale)
    }

    /// Largest integer not greater than this value
    pub fn floor(&self) -> BigInteger {
        self.with_scale_round(0, RoundingMode::Floor).int_val
    }

    /// Smallest integer not less than this value
    pub fn ceil(&self) -> BigInteger {
        self.with_scale_round(0, RoundingMode::Ceiling).int_val
    }

    /// Reduce the scale to 'new_scale', rounding dropped digits with 'mode'
    ///
    /// Never increases the scale: if 'new_scale' is not less than the
    /// current scale the value is returned unchanged.
    ///
    /// ```
    /// use lexorank::{BigDecimal, NumeralSystem, RoundingMode};
    ///
    /// let n = BigDecimal::parse("-1.25", NumeralSystem::Base10).unwrap();
    /// assert_eq!(n.with_scale_round(1, RoundingMode::Floor).format(), "-1.3");
    /// assert_eq!(n.with_scale_round(1, RoundingMode::Ceiling).format(), "-1.2");
    /// ```
    pub fn with_scale_round(&self, new_scale: usize, mode: RoundingMode) -> Self {
        if new_scale >= self.scale {
            return self.clone();
        }

        let diff = self.scale - new_scale;
        let truncated = self.int_val.shift_right(diff);
        let discarded_nonzero = !self.int_val.magnitude().is_zero_below(diff);

        let sign = self.int_val.sign();
        let int_val = if mode.rounds_away_from_zero(sign, discarded_nonzero) {
            let unit = BigInteger::from_parts(self.system(), sign, DigitVec::one());
            truncated.add_unchecked(&unit)
        } else {
            truncated
        };

        Self::new(int_val, new_scale)
    }

    /// Reduce the scale, rounding toward +∞ if 'round_up' else toward -∞
    pub fn set_scale(&self, new_scale: usize, round_up: bool) -> Self {
        self.with_scale_round(new_scale, RoundingMode::directional(round_up))
    }

    /// Canonical text
    ///
    /// The radix point is placed 'scale' digits from the right, with zero
    /// digits padded on the left so at least one integer digit exists.
    /// A minus sign is written before any padding.
    ///
    pub fn format(&self) -> String {
        if self.scale == 0 {
            return self.int_val.format();
        }

        let system = self.system();
        let mag = self.int_val.magnitude();
        let width = mag.len().max(self.scale + 1);

        let mut buf = String::with_capacity(width + 2);
        if self.int_val.is_negative() {
            buf.push(system.negative_char());
        }
        for idx in (0..width).rev() {
            buf.push(system.to_char(mag.digit_at(idx)));
            if idx == self.scale {
                buf.push(system.radix_point_char());
            }
        }
        buf
    }

    /// Numeric comparison after aligning scales, ignoring the numeral system
    pub(crate) fn cmp_value(&self, other: &BigDecimal) -> Ordering {
        let (a, b, _) = self.aligned_values(other);
        a.cmp_value(&b)
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::*;
    use paste::paste;

    include!("decimal.tests.rs");
}
