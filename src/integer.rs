//! Arbitrary precision signed integers in a configurable numeral system
//!

use crate::*;
use crate::stdlib::cmp::Ordering;
use crate::stdlib::string::String;
use crate::stdlib::Vec;

use crate::arithmetic::addition::add_digit_slices;
use crate::arithmetic::subtraction::sub_digit_slices;
use crate::arithmetic::multiplication::multiply_digit_slices;
use crate::arithmetic::{cmp_digit_slices, complement_digits};
use crate::bigdigit::DigitVec;


/// A signed integer of unbounded size, written in a [`NumeralSystem`]
///
/// The magnitude is stored one digit per element, least significant
/// first, and never carries zeros at its most significant end. Zero is
/// the single digit `0` with [`Sign::NoSign`].
///
/// Operations combining two integers fail with
/// [`LexoRankError::SystemMismatch`] if their bases differ.
///
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    system: NumeralSystem,
    sign: Sign,
    mag: DigitVec,
}

impl BigInteger {
    /// Build from raw parts, normalizing the magnitude
    pub(crate) fn from_parts(system: NumeralSystem, sign: Sign, mut mag: DigitVec) -> Self {
        debug_assert!(system.validate_digits(mag.as_slice()));
        mag.remove_significant_zeros();
        let sign = if mag.is_zero() { Sign::NoSign } else { sign };
        debug_assert!(sign != Sign::NoSign || mag.is_zero());
        BigInteger {
            system: system,
            sign: sign,
            mag: mag,
        }
    }

    /// Zero in the given numeral system
    pub fn zero(system: NumeralSystem) -> Self {
        BigInteger {
            system: system,
            sign: Sign::NoSign,
            mag: DigitVec::zero(),
        }
    }

    /// One in the given numeral system
    pub fn one(system: NumeralSystem) -> Self {
        BigInteger {
            system: system,
            sign: Sign::Plus,
            mag: DigitVec::one(),
        }
    }

    /// Parse optionally-signed digit string
    ///
    /// ```
    /// use lexorank::{BigInteger, NumeralSystem};
    ///
    /// let n = BigInteger::parse("-00z", NumeralSystem::Base36).unwrap();
    /// assert_eq!(n.format(), "-z");
    /// ```
    pub fn parse(text: &str, system: NumeralSystem) -> Result<Self, LexoRankError> {
        let (sign, body) = if let Some(rest) = text.strip_prefix(system.negative_char()) {
            (Sign::Minus, rest)
        } else if let Some(rest) = text.strip_prefix(system.positive_char()) {
            (Sign::Plus, rest)
        } else {
            (Sign::Plus, text)
        };

        if body.is_empty() {
            return Err(LexoRankError::Empty);
        }

        let mut digits = Vec::with_capacity(body.len());
        for ch in body.chars() {
            digits.push(system.to_digit(ch)?);
        }
        digits.reverse();

        Ok(Self::from_parts(system, sign, DigitVec::from_vec(digits)))
    }

    /// Canonical text: no leading zeros, `-` prefix for negative numbers
    pub fn format(&self) -> String {
        let mut buf = String::with_capacity(self.mag.len() + 1);
        if self.sign == Sign::Minus {
            buf.push(self.system.negative_char());
        }
        buf.extend(self.mag.iter_significant_first().map(|&d| self.system.to_char(d)));
        buf
    }

    pub fn system(&self) -> NumeralSystem {
        self.system
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Number of digits in the magnitude (zero has one digit)
    pub fn len(&self) -> usize {
        self.mag.len()
    }

    /// Digit at position 'index', counting from the least significant
    ///
    /// Positions beyond the magnitude read as zero.
    ///
    pub fn digit_at(&self, index: usize) -> u8 {
        self.mag.digit_at(index)
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::NoSign
    }

    pub fn is_one(&self) -> bool {
        self.sign == Sign::Plus && self.mag.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    pub(crate) fn magnitude(&self) -> &DigitVec {
        &self.mag
    }

    /// Fail unless 'other' uses a numeral system of the same base
    pub(crate) fn check_system(&self, other: &BigInteger) -> Result<(), LexoRankError> {
        check_same_base(self.system, other.system)
    }

    /// Return the integer with opposite sign
    pub fn negate(&self) -> Self {
        BigInteger {
            system: self.system,
            sign: -self.sign,
            mag: self.mag.clone(),
        }
    }

    /// Sum of two integers
    pub fn add(&self, other: &BigInteger) -> Result<Self, LexoRankError> {
        self.check_system(other)?;
        Ok(self.add_unchecked(other))
    }

    /// Difference of two integers
    pub fn subtract(&self, other: &BigInteger) -> Result<Self, LexoRankError> {
        self.check_system(other)?;
        Ok(self.sub_unchecked(other))
    }

    /// Product of two integers
    pub fn multiply(&self, other: &BigInteger) -> Result<Self, LexoRankError> {
        self.check_system(other)?;
        Ok(self.mul_unchecked(other))
    }

    pub(crate) fn add_unchecked(&self, other: &BigInteger) -> Self {
        debug_assert_eq!(self.system.base(), other.system.base());
        match (self.sign, other.sign) {
            (Sign::NoSign, _) => other.clone(),
            (_, Sign::NoSign) => self.clone(),
            (a, b) if a == b => {
                let sum = add_digit_slices(self.mag.as_slice(), other.mag.as_slice(), self.system.base());
                Self::from_parts(self.system, a, sum)
            }
            // mixed signs: a + b == a - (-b)
            _ => self.sub_unchecked(&other.negate()),
        }
    }

    pub(crate) fn sub_unchecked(&self, other: &BigInteger) -> Self {
        debug_assert_eq!(self.system.base(), other.system.base());
        match (self.sign, other.sign) {
            (_, Sign::NoSign) => self.clone(),
            (Sign::NoSign, _) => other.negate(),
            // mixed signs: a - b == a + (-b)
            (a, b) if a != b => self.add_unchecked(&other.negate()),
            (sign, _) => {
                let radix = self.system.base();
                let (a, b) = (self.mag.as_slice(), other.mag.as_slice());
                match cmp_digit_slices(a, b) {
                    Ordering::Equal => Self::zero(self.system),
                    Ordering::Greater => Self::from_parts(self.system, sign, sub_digit_slices(a, b, radix)),
                    Ordering::Less => Self::from_parts(self.system, -sign, sub_digit_slices(b, a, radix)),
                }
            }
        }
    }

    pub(crate) fn mul_unchecked(&self, other: &BigInteger) -> Self {
        debug_assert_eq!(self.system.base(), other.system.base());
        if self.is_zero() || other.is_zero() {
            return Self::zero(self.system);
        }

        let sign = self.sign * other.sign;
        if self.mag.is_one() {
            return Self::from_parts(self.system, sign, other.mag.clone());
        }
        if other.mag.is_one() {
            return Self::from_parts(self.system, sign, self.mag.clone());
        }

        let product = multiply_digit_slices(self.mag.as_slice(), other.mag.as_slice(), self.system.base());
        Self::from_parts(self.system, sign, product)
    }

    /// Multiply by base^times
    pub fn shift_left(&self, times: usize) -> Self {
        if times == 0 || self.is_zero() {
            return self.clone();
        }
        Self::from_parts(self.system, self.sign, self.mag.shifted_left(times))
    }

    /// Divide by base^times, truncating toward zero
    ///
    /// Shifting out every digit leaves zero.
    ///
    pub fn shift_right(&self, times: usize) -> Self {
        if times == 0 {
            return self.clone();
        }
        Self::from_parts(self.system, self.sign, self.mag.shifted_right(times))
    }

    /// Digit-wise complement (base-1-d) of the magnitude, padded to 'width' digits
    ///
    /// The sign is kept. Fails if 'width' is zero or shorter than the
    /// magnitude.
    ///
    pub fn complement(&self, width: usize) -> Result<Self, LexoRankError> {
        if width == 0 || width < self.mag.len() {
            return Err(LexoRankError::InvalidWidth { width: width, digits: self.mag.len() });
        }
        let digits = complement_digits(self.mag.as_slice(), width, self.system.base());
        let sign = if self.is_zero() { Sign::Plus } else { self.sign };
        Ok(Self::from_parts(self.system, sign, DigitVec::from_vec(digits)))
    }

    /// Numeric comparison, ignoring the numeral system
    pub(crate) fn cmp_value(&self, other: &BigInteger) -> Ordering {
        match (self.sign, other.sign) {
            (a, b) if a != b => a.cmp(&b),
            (Sign::Minus, _) => cmp_digit_slices(other.mag.as_slice(), self.mag.as_slice()),
            (Sign::NoSign, _) => Ordering::Equal,
            (Sign::Plus, _) => cmp_digit_slices(self.mag.as_slice(), other.mag.as_slice()),
        }
    }
}


/// Fail unless both systems have the same base
pub(crate) fn check_same_base(left: NumeralSystem, right: NumeralSystem) -> Result<(), LexoRankError> {
    if left.base() != right.base() {
        return Err(LexoRankError::SystemMismatch { left: left.base(), right: right.base() });
    }
    Ok(())
}
