// Tests for BigInteger, included by integer.rs

use crate::stdlib::DefaultHasher;
use crate::stdlib::hash::{Hash, Hasher};

fn b36(s: &str) -> BigInteger {
    BigInteger::parse(s, NumeralSystem::Base36).unwrap()
}

fn b10(s: &str) -> BigInteger {
    BigInteger::parse(s, NumeralSystem::Base10).unwrap()
}

fn hash<T: Hash>(obj: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    obj.hash(&mut hasher);
    hasher.finish()
}

macro_rules! impl_case {
    (format $name:ident: $system:ident $input:literal => $expected:literal) => {
        paste! {
            #[test]
            fn [< format_ $name >]() {
                let n = BigInteger::parse($input, NumeralSystem::$system).unwrap();
                assert_eq!(n.format(), $expected);
                let again = BigInteger::parse(&n.format(), NumeralSystem::$system).unwrap();
                assert_eq!(again, n);
            }
        }
    };
    ($op:ident $name:ident: $system:ident $a:literal, $b:literal => $expected:literal) => {
        paste! {
            #[test]
            fn [< $op _ $name >]() {
                let a = BigInteger::parse($a, NumeralSystem::$system).unwrap();
                let b = BigInteger::parse($b, NumeralSystem::$system).unwrap();
                let expected = BigInteger::parse($expected, NumeralSystem::$system).unwrap();
                assert_eq!(a.$op(&b).unwrap(), expected);
            }
        }
    };
}

impl_case!(format zero: Base36 "0" => "0");
impl_case!(format padded_zero: Base36 "0000" => "0");
impl_case!(format negative_zero: Base36 "-0" => "0");
impl_case!(format plus_sign: Base36 "+12" => "12");
impl_case!(format leading_zeros: Base36 "00z1" => "z1");
impl_case!(format negative: Base10 "-0042" => "-42");
impl_case!(format base64: Base64 "0A^_z" => "A^_z");

impl_case!(add zero_left: Base10 "0", "17" => "17");
impl_case!(add zero_right: Base10 "-17", "0" => "-17");
impl_case!(add carry: Base10 "999", "1" => "1000");
impl_case!(add base36_carry: Base36 "zz", "1" => "100");
impl_case!(add mixed_pos_larger: Base10 "100", "-1" => "99");
impl_case!(add mixed_neg_larger: Base10 "1", "-100" => "-99");
impl_case!(add mixed_cancel: Base10 "-55", "55" => "0");
impl_case!(add negatives: Base10 "-5", "-7" => "-12");

impl_case!(subtract simple: Base10 "10", "3" => "7");
impl_case!(subtract to_negative: Base10 "3", "10" => "-7");
impl_case!(subtract from_zero: Base10 "0", "3" => "-3");
impl_case!(subtract negative_rhs: Base10 "3", "-10" => "13");
impl_case!(subtract negative_lhs: Base10 "-3", "10" => "-13");
impl_case!(subtract both_negative: Base10 "-3", "-10" => "7");
impl_case!(subtract equal: Base36 "abc", "abc" => "0");
impl_case!(subtract base36_borrow: Base36 "200000", "8" => "1zzzzs");

impl_case!(multiply by_zero: Base10 "12345", "0" => "0");
impl_case!(multiply by_one: Base10 "12345", "1" => "12345");
impl_case!(multiply by_minus_one: Base10 "-1", "12345" => "-12345");
impl_case!(multiply neg_neg: Base10 "-12", "-12" => "144");
impl_case!(multiply pos_neg: Base10 "254", "-791" => "-200914");
impl_case!(multiply base36_half: Base36 "2", "i" => "10");
impl_case!(multiply base64: Base64 "zz", "zz" => "zy01");

#[test]
fn parse_rejects_invalid_digit() {
    assert_eq!(BigInteger::parse("12a", NumeralSystem::Base10), Err(LexoRankError::InvalidDigit('a')));
    assert_eq!(BigInteger::parse("1-2", NumeralSystem::Base36), Err(LexoRankError::InvalidDigit('-')));
    assert_eq!(BigInteger::parse("AB", NumeralSystem::Base36), Err(LexoRankError::InvalidDigit('A')));
}

#[test]
fn parse_rejects_empty() {
    assert_eq!(BigInteger::parse("", NumeralSystem::Base36), Err(LexoRankError::Empty));
    assert_eq!(BigInteger::parse("-", NumeralSystem::Base36), Err(LexoRankError::Empty));
    assert_eq!(BigInteger::parse("+", NumeralSystem::Base10), Err(LexoRankError::Empty));
}

#[test]
fn zero_invariants() {
    let zero = b36("000");
    assert!(zero.is_zero());
    assert_eq!(zero.sign(), Sign::NoSign);
    assert_eq!(zero.len(), 1);
    assert_eq!(zero, BigInteger::zero(NumeralSystem::Base36));
    assert_eq!(zero.negate(), zero);
}

#[test]
fn one_queries() {
    assert!(BigInteger::one(NumeralSystem::Base64).is_one());
    assert!(b10("+1").is_one());
    assert!(!b10("-1").is_one());
    assert!(!b10("10").is_one());
}

#[test]
fn digit_at() {
    let n = b36("1z3");
    assert_eq!(n.digit_at(0), 3);
    assert_eq!(n.digit_at(1), 35);
    assert_eq!(n.digit_at(2), 1);
    assert_eq!(n.digit_at(3), 0);
}

#[test]
fn shift_left() {
    assert_eq!(b36("12345").shift_left(2).format(), "1234500");
    assert_eq!(b36("-1").shift_left(3).format(), "-1000");
    assert_eq!(b36("0").shift_left(3).format(), "0");
}

#[test]
fn shift_right() {
    assert_eq!(b36("12345").shift_right(2).format(), "123");
    assert_eq!(b36("12345").shift_right(5).format(), "0");
    assert_eq!(b36("12345").shift_right(6).format(), "0");
    assert_eq!(b10("-1299").shift_right(2).format(), "-12");
    assert!(b10("-12").shift_right(2).is_zero());
}

#[test]
fn complement() {
    assert_eq!(b10("12").complement(4).unwrap().format(), "9987");
    assert_eq!(b36("z").complement(1).unwrap().format(), "0");
    assert_eq!(b10("-3").complement(2).unwrap().format(), "-96");
}

#[test]
fn complement_rejects_narrow_width() {
    assert_eq!(b10("123").complement(2), Err(LexoRankError::InvalidWidth { width: 2, digits: 3 }));
    assert_eq!(b10("1").complement(0), Err(LexoRankError::InvalidWidth { width: 0, digits: 1 }));
}

#[test]
fn cross_system_operations_fail() {
    let a = b10("12");
    let b = b36("12");
    let expected = Err(LexoRankError::SystemMismatch { left: 10, right: 36 });
    assert_eq!(a.add(&b), expected);
    assert_eq!(a.subtract(&b), expected);
    assert_eq!(a.multiply(&b), expected);
}

#[test]
fn ordering() {
    let values = ["-zz", "-z", "-1", "0", "1", "9", "a", "z", "10", "zz", "100"];
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(b36(a).cmp(&b36(b)), i.cmp(&j), "{} <=> {}", a, b);
            assert_eq!(b36(a) == b36(b), i == j);
        }
    }
}

#[test]
fn equality_ignores_padding() {
    assert_eq!(b36("00012"), b36("12"));
    assert_eq!(b36("+12"), b36("12"));
    assert_eq!(hash(&b36("00012")), hash(&b36("12")));
}

#[test]
fn equality_requires_same_base() {
    assert_ne!(b10("12"), b36("12"));
    assert_ne!(b10("12").cmp(&b36("12")), Ordering::Equal);
}

#[test]
fn add_then_subtract_roundtrip() {
    let a = b36("hzzzzz");
    let b = b36("-1y2x");
    assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
}
