//! Digit vectors (little-endian, one digit per element)

use crate::stdlib::Vec;
use crate::stdlib::iter;


/// Vector of digits, interpreted as the magnitude of an integer
///
/// Index zero holds the least significant digit. The radix is not
/// stored here; it belongs to the numeral system of the owning integer.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct DigitVec {
    pub digits: Vec<u8>,
}

impl DigitVec {
    /// Create new vector
    #[cfg(test)]
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create new vector with capacity
    pub fn with_capacity(n: usize) -> Self {
        Self::from_vec(Vec::with_capacity(n))
    }

    /// construct from vector of digits
    pub fn from_vec(v: Vec<u8>) -> Self {
        Self {
            digits: v,
        }
    }

    /// allocate with n digits and fill with zeros
    pub fn from_zero_count(n: usize) -> Self {
        Self::from_vec(vec![0; n])
    }

    /// The canonical magnitude of zero: a single zero digit
    pub fn zero() -> Self {
        Self::from_vec(vec![0])
    }

    /// The magnitude of one
    pub fn one() -> Self {
        Self::from_vec(vec![1])
    }

    /// Number of digits in the vector
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True if no digit is non-zero
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// True if this is exactly the single digit one
    pub fn is_one(&self) -> bool {
        self.digits.as_slice() == [1]
    }

    /// Remove all digits
    pub fn clear(&mut self) {
        self.digits.clear()
    }

    /// Append digit at the most significant end
    pub fn push_significant_digit(&mut self, d: u8) {
        self.digits.push(d)
    }

    /// Borrow inner vector as slice of digits
    pub fn as_slice(&self) -> &[u8] {
        self.digits.as_slice()
    }

    /// Digit at position 'idx' (least significant is zero), zero beyond the end
    pub fn digit_at(&self, idx: usize) -> u8 {
        self.digits.get(idx).copied().unwrap_or(0)
    }

    /// Iterate digits from most to least significant
    pub fn iter_significant_first(&self) -> impl Iterator<Item=&u8> + '_ {
        self.digits.iter().rev()
    }

    /// Remove zeros at the most significant end, keeping at least one digit
    pub fn remove_significant_zeros(&mut self) {
        match self.digits.iter().rposition(|&d| d != 0) {
            Some(idx) => self.digits.truncate(idx + 1),
            None => {
                self.digits.clear();
                self.digits.push(0);
            }
        }
    }

    /// Copy of this vector with 'n' zeros inserted at the least significant end
    pub fn shifted_left(&self, n: usize) -> Self {
        let mut result = Self::with_capacity(self.len() + n);
        result.digits.extend(iter::repeat(0).take(n));
        result.digits.extend_from_slice(&self.digits);
        result
    }

    /// Copy of this vector with the 'n' least significant digits removed
    ///
    /// Removing every digit leaves zero.
    ///
    pub fn shifted_right(&self, n: usize) -> Self {
        if n >= self.len() {
            return Self::zero();
        }
        Self::from_vec(self.digits[n..].to_vec())
    }

    /// True if the 'n' least significant digits are all zero
    pub fn is_zero_below(&self, n: usize) -> bool {
        self.digits.iter().take(n).all(|&d| d == 0)
    }

    /// Number of zero digits at the least significant end, at most 'limit'
    pub fn count_insignificant_zeros(&self, limit: usize) -> usize {
        self.digits.iter().take(limit).take_while(|&&d| d == 0).count()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn remove_significant_zeros() {
        let mut v = DigitVec::from_vec(vec![1, 2, 0, 0]);
        v.remove_significant_zeros();
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn remove_significant_zeros_all_zero() {
        let mut v = DigitVec::from_zero_count(4);
        v.remove_significant_zeros();
        assert_eq!(v, DigitVec::zero());

        let mut v = DigitVec::new();
        v.remove_significant_zeros();
        assert_eq!(v, DigitVec::zero());
    }

    #[test]
    fn shifted_left() {
        let v = DigitVec::from_vec(vec![5, 4, 3, 2, 1]);
        assert_eq!(v.shifted_left(2).as_slice(), &[0, 0, 5, 4, 3, 2, 1]);
        assert_eq!(v.shifted_left(0), v);
    }

    #[test]
    fn shifted_right() {
        let v = DigitVec::from_vec(vec![5, 4, 3, 2, 1]);
        assert_eq!(v.shifted_right(2).as_slice(), &[3, 2, 1]);
        assert_eq!(v.shifted_right(5), DigitVec::zero());
        assert_eq!(v.shifted_right(9), DigitVec::zero());
    }

    #[test]
    fn digit_at() {
        let v = DigitVec::from_vec(vec![7, 8]);
        assert_eq!(v.digit_at(0), 7);
        assert_eq!(v.digit_at(1), 8);
        assert_eq!(v.digit_at(2), 0);
    }

    #[test]
    fn iter_significant_first() {
        let v = DigitVec::from_vec(vec![3, 2, 1]);
        let digits: Vec<u8> = v.iter_significant_first().copied().collect();
        assert_eq!(digits, [1, 2, 3]);
    }

    #[test]
    fn count_insignificant_zeros() {
        let v = DigitVec::from_vec(vec![0, 0, 0, 4]);
        assert_eq!(v.count_insignificant_zeros(2), 2);
        assert_eq!(v.count_insignificant_zeros(10), 3);
        assert!(v.is_zero_below(3));
        assert!(!v.is_zero_below(4));
    }
}
