// Tests for BigDecimal, included by decimal.rs

use crate::stdlib::DefaultHasher;
use crate::stdlib::hash::{Hash, Hasher};

fn d10(s: &str) -> BigDecimal {
    BigDecimal::parse(s, NumeralSystem::Base10).unwrap()
}

fn d36(s: &str) -> BigDecimal {
    BigDecimal::parse(s, NumeralSystem::Base36).unwrap()
}

fn hash<T: Hash>(obj: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    obj.hash(&mut hasher);
    hasher.finish()
}

macro_rules! impl_case {
    (parse $name:ident: $system:ident $input:literal => $expected:literal, scale=$scale:literal) => {
        paste! {
            #[test]
            fn [< parse_ $name >]() {
                let n = BigDecimal::parse($input, NumeralSystem::$system).unwrap();
                assert_eq!(n.format(), $expected);
                assert_eq!(n.scale(), $scale);
                assert_eq!(BigDecimal::parse(&n.format(), NumeralSystem::$system).unwrap(), n);
            }
        }
    };
    (round $name:ident: $input:literal, $scale:literal; $($mode:ident => $expected:literal),+) => {
        $(
            paste! {
                #[test]
                fn [< round_ $name _ $mode >]() {
                    let n = d10($input);
                    assert_eq!(n.with_scale_round($scale, RoundingMode::$mode).format(), $expected);
                }
            }
        )*
    };
    ($op:ident $name:ident: $system:ident $a:literal, $b:literal => $expected:literal) => {
        paste! {
            #[test]
            fn [< $op _ $name >]() {
                let a = BigDecimal::parse($a, NumeralSystem::$system).unwrap();
                let b = BigDecimal::parse($b, NumeralSystem::$system).unwrap();
                assert_eq!(a.$op(&b).unwrap().format(), $expected);
            }
        }
    };
}

impl_case!(parse integer: Base10 "12" => "12", scale=0);
impl_case!(parse trailing_zeros: Base36 "1:200" => "1:2", scale=1);
impl_case!(parse all_zero_fraction: Base36 "0:000" => "0", scale=0);
impl_case!(parse bare_fraction: Base36 ":5" => "0:5", scale=1);
impl_case!(parse negative_fraction: Base36 "-:5" => "-0:5", scale=1);
impl_case!(parse small_negative: Base10 "-0.05" => "-0.05", scale=2);
impl_case!(parse trailing_radix: Base36 "100008:" => "100008", scale=0);
impl_case!(parse padded: Base64 "000z:_0" => "z:_", scale=1);

impl_case!(round half_way: "1.25", 1; Floor => "1.2", Ceiling => "1.3", Up => "1.3", Down => "1.2");
impl_case!(round negative: "-1.25", 1; Floor => "-1.3", Ceiling => "-1.2", Up => "-1.3", Down => "-1.2");
impl_case!(round negative_to_zero: "-0.1", 0; Floor => "-1", Ceiling => "0", Up => "-1", Down => "0");
impl_case!(round small: "0.01", 1; Floor => "0", Ceiling => "0.1", Up => "0.1", Down => "0");
impl_case!(round carry: "9.99", 1; Floor => "9.9", Ceiling => "10", Up => "10", Down => "9.9");
impl_case!(round never_grows: "1.5", 3; Floor => "1.5", Ceiling => "1.5", Up => "1.5", Down => "1.5");

impl_case!(add fractions: Base10 "1.5", "2.25" => "3.75");
impl_case!(add to_integer: Base10 "0.5", "0.5" => "1");
impl_case!(add mixed_signs: Base10 "-1.5", "0.25" => "-1.25");
impl_case!(add base36: Base36 "hzzzzz:i", "0:i" => "i00000");
impl_case!(subtract borrow: Base10 "1", "0.001" => "0.999");
impl_case!(subtract to_negative: Base10 "0.25", "1" => "-0.75");
impl_case!(subtract step: Base36 "200000", "8" => "1zzzzs");
impl_case!(multiply fractions: Base10 "1.5", "1.5" => "2.25");
impl_case!(multiply half: Base36 "zzzzzz", "0:i" => "hzzzzz:i");
impl_case!(multiply negative: Base10 "-0.2", "0.5" => "-0.1");

#[test]
fn parse_errors() {
    assert_eq!(BigDecimal::parse("1:2:3", NumeralSystem::Base36), Err(LexoRankError::MultipleRadixPoints(':')));
    assert_eq!(BigDecimal::parse("1..", NumeralSystem::Base10), Err(LexoRankError::MultipleRadixPoints('.')));
    assert_eq!(BigDecimal::parse(":", NumeralSystem::Base36), Err(LexoRankError::Empty));
    assert_eq!(BigDecimal::parse("", NumeralSystem::Base36), Err(LexoRankError::Empty));
    assert_eq!(BigDecimal::parse("1.5", NumeralSystem::Base36), Err(LexoRankError::InvalidDigit('.')));
}

#[test]
fn new_normalizes() {
    let n = BigDecimal::new(BigInteger::parse("120", NumeralSystem::Base10).unwrap(), 2);
    assert_eq!(n.scale(), 1);
    assert_eq!(n.format(), "1.2");

    let n = BigDecimal::new(BigInteger::parse("100", NumeralSystem::Base10).unwrap(), 2);
    assert_eq!(n.scale(), 0);
    assert_eq!(n.format(), "1");

    let z = BigDecimal::new(BigInteger::zero(NumeralSystem::Base36), 4);
    assert_eq!(z.scale(), 0);
    assert_eq!(z, BigDecimal::zero(NumeralSystem::Base36));
}

#[test]
fn half() {
    assert_eq!(BigDecimal::half(NumeralSystem::Base10).format(), "0.5");
    assert_eq!(BigDecimal::half(NumeralSystem::Base36).format(), "0:i");
    assert_eq!(BigDecimal::half(NumeralSystem::Base64).format(), "0:W");
}

#[test]
fn floor_and_ceil() {
    assert_eq!(d10("1.5").floor().format(), "1");
    assert_eq!(d10("1.5").ceil().format(), "2");
    assert_eq!(d10("-1.5").floor().format(), "-2");
    assert_eq!(d10("-1.5").ceil().format(), "-1");
    assert_eq!(d10("-0.5").ceil().format(), "0");
    assert_eq!(d10("7").floor().format(), "7");
    assert_eq!(d10("7").ceil().format(), "7");
    assert_eq!(d36("hzzzzz:i").ceil().format(), "i00000");
}

#[test]
fn is_exact() {
    assert!(d36("1:0").is_exact());
    assert!(d36("zz").is_exact());
    assert!(!d36("1:1").is_exact());
}

#[test]
fn set_scale_is_directional() {
    let n = d36("1:zz");
    assert_eq!(n.set_scale(1, false).format(), "1:z");
    assert_eq!(n.set_scale(1, true).format(), "2");
    assert_eq!(n.set_scale(0, false).format(), "1");
}

#[test]
fn equality_agrees_with_ordering() {
    let a = d36("1:0");
    let b = d36("1");
    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), Ordering::Equal);
    assert_eq!(hash(&a), hash(&b));

    let a = d10("0.10");
    let b = d10("0.1");
    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), Ordering::Equal);
}

#[test]
fn ordering_aligns_scales() {
    let values = ["-1", "-0.5", "0", "0.05", "0.5", "0.55", "1", "10.01"];
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(d10(a).cmp(&d10(b)), i.cmp(&j), "{} <=> {}", a, b);
        }
    }
}

#[test]
fn cross_system_operations_fail() {
    let a = d10("1.5");
    let b = d36("1:5");
    let expected = Err(LexoRankError::SystemMismatch { left: 10, right: 36 });
    assert_eq!(a.add(&b), expected);
    assert_eq!(a.subtract(&b), expected);
    assert_eq!(a.multiply(&b), expected);
}

#[test]
fn from_integer() {
    let n: BigDecimal = BigInteger::parse("-12", NumeralSystem::Base10).unwrap().into();
    assert_eq!(n.scale(), 0);
    assert_eq!(n.format(), "-12");
}
