//!
//! Addition algorithms for digit slices
//!

use crate::bigdigit::DigitVec;

use super::split_wide_digit;


/// Add two (aligned) slices of digits
#[inline]
pub(crate) fn add_digit_slices(a: &[u8], b: &[u8], radix: u8) -> DigitVec {
    let mut result = DigitVec::with_capacity(a.len().max(b.len()) + 1);
    add_digit_slices_into(a, b, radix, &mut result);
    return result;
}

/// Fill DigitVec with sum of digits
pub(crate) fn add_digit_slices_into(a: &[u8], b: &[u8], radix: u8, v: &mut DigitVec) {
    // a is longer of the slices
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    v.clear();

    let mut carry = 0u8;
    for (i, &a_digit) in a.iter().enumerate() {
        let b_digit = b.get(i).copied().unwrap_or(0);
        let (hi, lo) = split_wide_digit(a_digit as u32 + b_digit as u32 + carry as u32, radix);
        v.push_significant_digit(lo);
        carry = hi;
    }

    if carry != 0 {
        v.push_significant_digit(carry);
    }
}


#[cfg(test)]
mod test_add_digit_slices {
    use super::*;

    macro_rules! impl_test {
        ($radix:literal: [$($a:literal),*] [$($b:literal),*] == [$($c:literal),*]) => {{
            let a: &[u8] = &[$($a),*];
            let b: &[u8] = &[$($b),*];
            let expected: &[u8] = &[$($c),*];

            let sum = add_digit_slices(a, b, $radix);
            assert_eq!(sum.as_slice(), expected);

            let commutes = add_digit_slices(b, a, $radix);
            assert_eq!(commutes.as_slice(), expected);
        }};
    }

    #[test]
    fn test_0_0() {
        impl_test!(10: [0] [0] == [0]);
    }

    #[test]
    fn test_10_1() {
        impl_test!(10: [0, 1] [1] == [1, 1]);
    }

    #[test]
    fn test_1_999() {
        impl_test!(10: [1] [9, 9, 9] == [0, 0, 0, 1]);
    }

    #[test]
    fn test_base36_z_1() {
        impl_test!(36: [35] [1] == [0, 1]);
    }

    #[test]
    fn test_base36_zzzzz_zzzzz() {
        impl_test!(36: [35, 35, 35, 35, 35] [35, 35, 35, 35, 35] == [34, 35, 35, 35, 35, 1]);
    }

    #[test]
    fn test_base64_carry_chain() {
        impl_test!(64: [63, 63, 2] [1] == [0, 0, 3]);
    }
}
