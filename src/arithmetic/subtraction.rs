//!
//! Subtraction algorithms for digit slices
//!

use crate::bigdigit::DigitVec;


/// Subtract digits of 'b' from the larger or equal magnitude 'a'
///
/// Result is normalized (no zeros at the significant end).
///
#[inline]
pub(crate) fn sub_digit_slices(a: &[u8], b: &[u8], radix: u8) -> DigitVec {
    let mut result = DigitVec::with_capacity(a.len());
    sub_digit_slices_into(a, b, radix, &mut result);
    return result;
}

/// Fill DigitVec with difference of digits (a - b), requires a >= b
pub(crate) fn sub_digit_slices_into(a: &[u8], b: &[u8], radix: u8, v: &mut DigitVec) {
    debug_assert!(super::cmp_digit_slices(a, b) != crate::stdlib::cmp::Ordering::Less);
    v.clear();

    let mut borrow = 0i16;
    for (i, &a_digit) in a.iter().enumerate() {
        let b_digit = b.get(i).copied().unwrap_or(0);
        let mut diff = a_digit as i16 - b_digit as i16 - borrow;
        if diff < 0 {
            diff += radix as i16;
            borrow = 1;
        } else {
            borrow = 0;
        }
        v.push_significant_digit(diff as u8);
    }
    debug_assert_eq!(borrow, 0);

    v.remove_significant_zeros();
}


#[cfg(test)]
mod test_sub_digit_slices {
    use super::*;

    macro_rules! impl_test {
        ($radix:literal: [$($a:literal),*] - [$($b:literal),*] == [$($c:literal),*]) => {{
            let a: &[u8] = &[$($a),*];
            let b: &[u8] = &[$($b),*];
            let expected: &[u8] = &[$($c),*];

            let diff = sub_digit_slices(a, b, $radix);
            assert_eq!(diff.as_slice(), expected);
        }};
    }

    #[test]
    fn test_0_0() {
        impl_test!(10: [0] - [0] == [0]);
    }

    #[test]
    fn test_10_3() {
        impl_test!(10: [0, 1] - [3] == [7]);
    }

    #[test]
    fn test_1000_1() {
        impl_test!(10: [0, 0, 0, 1] - [1] == [9, 9, 9]);
    }

    #[test]
    fn test_equal_is_zero() {
        impl_test!(36: [4, 5, 6] - [4, 5, 6] == [0]);
    }

    #[test]
    fn test_base36_200000_8() {
        // "200000" - "8" = "1zzzzs"
        impl_test!(36: [0, 0, 0, 0, 0, 2] - [8] == [28, 35, 35, 35, 35, 1]);
    }
}
