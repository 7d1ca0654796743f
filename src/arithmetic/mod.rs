//! arithmetic routines on little-endian digit slices
//!
//! Every routine takes the radix explicitly; digits are `u8` values
//! below the radix and intermediate results are computed in `u32`.
//!

use crate::stdlib::cmp::Ordering;

use num_integer::div_rem;

pub(crate) mod addition;
pub(crate) mod subtraction;
pub(crate) mod multiplication;


/// Split a wide value into (carry, digit) in the given radix
#[inline]
pub(crate) fn split_wide_digit(n: u32, radix: u8) -> (u8, u8) {
    let (hi, lo) = div_rem(n, radix as u32);
    debug_assert!(hi <= u8::MAX as u32);
    (hi as u8, lo as u8)
}

/// Add carry into slice of digits, returning any overflow
pub(crate) fn add_carry_into_slice(dest: &mut [u8], mut carry: u8, radix: u8) -> u8 {
    for d in dest.iter_mut() {
        if carry == 0 {
            return 0;
        }
        let (hi, lo) = split_wide_digit(*d as u32 + carry as u32, radix);
        *d = lo;
        carry = hi;
    }
    carry
}

/// Compare magnitudes of two normalized digit slices
///
/// Slices must not carry zeros at the most significant end, so a
/// longer slice is always the larger magnitude.
///
pub(crate) fn cmp_digit_slices(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Digit-wise (radix-1-d) complement of 'digits', padded to 'width' digits
///
/// Padding positions hold the complement of zero, the largest digit.
///
pub(crate) fn complement_digits(digits: &[u8], width: usize, radix: u8) -> crate::stdlib::Vec<u8> {
    debug_assert!(width >= digits.len());
    let max_digit = radix - 1;
    (0..width)
        .map(|i| max_digit - digits.get(i).copied().unwrap_or(0))
        .collect()
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn split_wide_digit_base36() {
        assert_eq!(split_wide_digit(35, 36), (0, 35));
        assert_eq!(split_wide_digit(36, 36), (1, 0));
        assert_eq!(split_wide_digit(63 * 63 + 63 + 63, 64), (63, 63));
    }

    #[test]
    fn add_carry_ripples() {
        let mut digits = [9, 9, 3];
        let overflow = add_carry_into_slice(&mut digits, 1, 10);
        assert_eq!(digits, [0, 0, 4]);
        assert_eq!(overflow, 0);

        let mut digits = [9, 9];
        let overflow = add_carry_into_slice(&mut digits, 1, 10);
        assert_eq!(digits, [0, 0]);
        assert_eq!(overflow, 1);
    }

    #[test]
    fn cmp_by_length_then_digits() {
        assert_eq!(cmp_digit_slices(&[0, 1], &[9]), Ordering::Greater);
        assert_eq!(cmp_digit_slices(&[9, 1], &[0, 2]), Ordering::Less);
        assert_eq!(cmp_digit_slices(&[3, 2, 1], &[3, 2, 1]), Ordering::Equal);
        assert_eq!(cmp_digit_slices(&[4, 2, 1], &[3, 2, 1]), Ordering::Greater);
    }

    #[test]
    fn complement_pads_with_max_digit() {
        assert_eq!(complement_digits(&[1, 2], 4, 10), [8, 7, 9, 9]);
        assert_eq!(complement_digits(&[0], 1, 36), [35]);
    }
}
