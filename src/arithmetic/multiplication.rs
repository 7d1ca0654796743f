//!
//! Multiplication algorithms for digit slices
//!

use crate::bigdigit::DigitVec;

use super::{add_carry_into_slice, split_wide_digit};


/// Schoolbook product of two digit slices
///
/// Result is normalized (no zeros at the significant end).
///
#[inline]
pub(crate) fn multiply_digit_slices(a: &[u8], b: &[u8], radix: u8) -> DigitVec {
    let mut result = DigitVec::from_zero_count(a.len() + b.len());
    multiply_digit_slices_into(a, b, radix, &mut result);
    return result;
}

/// Accumulate product of 'a' and 'b' into zero-filled 'result'
fn multiply_digit_slices_into(a: &[u8], b: &[u8], radix: u8, result: &mut DigitVec) {
    debug_assert!(result.len() >= a.len() + b.len());
    debug_assert!(result.is_zero());

    for (ia, &digit_a) in a.iter().enumerate() {
        if digit_a == 0 {
            continue;
        }

        let mut carry = 0u8;
        for (ib, &digit_b) in b.iter().enumerate() {
            let dest = &mut result.digits[ia + ib];
            let prod = digit_a as u32 * digit_b as u32 + *dest as u32 + carry as u32;
            let (hi, lo) = split_wide_digit(prod, radix);
            *dest = lo;
            carry = hi;
        }

        let overflow = add_carry_into_slice(&mut result.digits[ia + b.len()..], carry, radix);
        debug_assert_eq!(overflow, 0);
    }

    result.remove_significant_zeros();
}


#[cfg(test)]
mod test_multiply_digit_slices {
    use super::*;

    macro_rules! impl_test {
        ($radix:literal: [$($a:literal),*] [$($b:literal),*] == [$($c:literal),*]) => {{
            let a: &[u8] = &[$($a),*];
            let b: &[u8] = &[$($b),*];
            let expected: &[u8] = &[$($c),*];

            let v = multiply_digit_slices(a, b, $radix);
            assert_eq!(v.as_slice(), expected);

            let commutes = multiply_digit_slices(b, a, $radix);
            assert_eq!(commutes.as_slice(), expected);
        }};
    }

    #[test]
    fn test_0_0() {
        impl_test!(10: [0] [0] == [0]);
    }

    #[test]
    fn test_5_5() {
        impl_test!(10: [5] [5] == [5, 2]);
    }

    #[test]
    fn test_7_22_truncates() {
        impl_test!(10: [7, 0] [2, 2, 0, 0] == [4, 5, 1]);
    }

    #[test]
    fn test_254_791() {
        impl_test!(10: [4, 5, 2] [1, 9, 7] == [4, 1, 9, 0, 0, 2]);
    }

    #[test]
    fn test_base36_half() {
        // "2" * "i" = "10" (2 * 18 = 36)
        impl_test!(36: [2] [18] == [0, 1]);
    }

    #[test]
    fn test_base64_max_digits() {
        // 63 * 63 = 3969 = 62 * 64 + 1
        impl_test!(64: [63] [63] == [1, 62]);
        impl_test!(64: [63, 63] [63, 63] == [1, 0, 62, 63]);
    }
}
