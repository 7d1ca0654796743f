// Property tests to be included by lib.rs (if enabled)

use num_bigint::BigInt;
use crate::stdlib::string::String;


/// Decimal in the range of a rank: 'int' below base^6, plus 'scale' fractional digits
fn rank_decimal(system: NumeralSystem, int: u64, frac: u64, scale: u32) -> BigDecimal {
    let base = system.base() as u64;
    let int = int % base.pow(RANK_WIDTH as u32);
    let unit = base.pow(scale);
    let value = BigInteger::from_u64(int * unit + frac % unit, system);
    BigDecimal::new(value, scale as usize)
}

mod arithmetic {
    use super::*;

    macro_rules! impl_test {
        ($system:ident) => {
            paste! { proptest! {
                #[test]
                fn [< add_commutes_ $system:lower >](a: i64, b: i64) {
                    let a = BigInteger::from_i64(a, NumeralSystem::$system);
                    let b = BigInteger::from_i64(b, NumeralSystem::$system);
                    prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
                }

                #[test]
                fn [< add_associates_ $system:lower >](a: i64, b: i64, c: i64) {
                    let a = BigInteger::from_i64(a, NumeralSystem::$system);
                    let b = BigInteger::from_i64(b, NumeralSystem::$system);
                    let c = BigInteger::from_i64(c, NumeralSystem::$system);
                    let left = a.add(&b).unwrap().add(&c).unwrap();
                    let right = a.add(&b.add(&c).unwrap()).unwrap();
                    prop_assert_eq!(left, right);
                }

                #[test]
                fn [< add_subtract_inverse_ $system:lower >](a: i64, b: i64) {
                    let a = BigInteger::from_i64(a, NumeralSystem::$system);
                    let b = BigInteger::from_i64(b, NumeralSystem::$system);
                    prop_assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
                }

                #[test]
                fn [< matches_bigint_ $system:lower >](a: i64, b: i64) {
                    let system = NumeralSystem::$system;
                    let x = BigInteger::from_i64(a, system);
                    let y = BigInteger::from_i64(b, system);
                    let (ba, bb) = (BigInt::from(a), BigInt::from(b));

                    prop_assert_eq!(BigInt::from(x.add(&y).unwrap()), &ba + &bb);
                    prop_assert_eq!(BigInt::from(x.subtract(&y).unwrap()), &ba - &bb);
                    prop_assert_eq!(BigInt::from(x.multiply(&y).unwrap()), &ba * &bb);
                    prop_assert_eq!(x.cmp(&y), a.cmp(&b));
                }

                #[test]
                fn [< decimal_add_subtract_inverse_ $system:lower >](a: i64, sa in 0usize..8, b: i64, sb in 0usize..8) {
                    let a = BigDecimal::new(BigInteger::from_i64(a, NumeralSystem::$system), sa);
                    let b = BigDecimal::new(BigInteger::from_i64(b, NumeralSystem::$system), sb);
                    prop_assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
                }
            } }
        };
    }

    impl_test!(Base10);
    impl_test!(Base36);
    impl_test!(Base64);
}

mod text {
    use super::*;

    macro_rules! impl_test {
        ($system:ident) => {
            paste! { proptest! {
                #[test]
                fn [< format_parse_ $system:lower >](
                    negative: bool,
                    digits in prop::collection::vec(0u8..NumeralSystem::$system.base(), 1..20),
                    radix in prop::option::of(0usize..20),
                ) {
                    let system = NumeralSystem::$system;
                    let mut text = String::new();
                    if negative {
                        text.push(system.negative_char());
                    }
                    for (i, &d) in digits.iter().enumerate() {
                        if radix == Some(i) {
                            text.push(system.radix_point_char());
                        }
                        text.push(system.to_char(d));
                    }

                    let parsed = BigDecimal::parse(&text, system).unwrap();
                    let formatted = parsed.format();
                    let reparsed = BigDecimal::parse(&formatted, system).unwrap();
                    prop_assert_eq!(&reparsed, &parsed);
                    prop_assert_eq!(reparsed.format(), formatted);
                }
            } }
        };
    }

    impl_test!(Base10);
    impl_test!(Base36);
    impl_test!(Base64);
}

mod ranks {
    use super::*;

    macro_rules! impl_test {
        ($system:ident) => {
            paste! { proptest! {
                #[test]
                fn [< between_is_strict_ $system:lower >](
                    a: u64, fa: u64, sa in 0u32..4,
                    b: u64, fb: u64, sb in 0u32..4,
                ) {
                    let ctx = Context::new(NumeralSystem::$system);
                    let a = rank_decimal(ctx.system(), a, fa, sa);
                    let b = rank_decimal(ctx.system(), b, fb, sb);
                    prop_assume!(a != b);

                    let a = ctx.rank(Bucket::Bucket0, a).unwrap();
                    let b = ctx.rank(Bucket::Bucket0, b).unwrap();
                    let (low, high) = if a < b { (a, b) } else { (b, a) };

                    let mid = low.between(&high).unwrap();
                    prop_assert!(low < mid && mid < high);
                    prop_assert!(low.as_str() < mid.as_str() && mid.as_str() < high.as_str());
                    prop_assert_eq!(high.between(&low).unwrap(), mid);
                }

                #[test]
                fn [< string_order_ $system:lower >](
                    a: u64, fa: u64, sa in 0u32..4, ba in 0u32..3,
                    b: u64, fb: u64, sb in 0u32..4, bb in 0u32..3,
                ) {
                    let ctx = Context::new(NumeralSystem::$system);
                    let a = ctx.rank(Bucket::resolve(ba).unwrap(), rank_decimal(ctx.system(), a, fa, sa)).unwrap();
                    let b = ctx.rank(Bucket::resolve(bb).unwrap(), rank_decimal(ctx.system(), b, fb, sb)).unwrap();
                    prop_assert_eq!(a.cmp(&b), a.as_str().cmp(b.as_str()));
                    prop_assert_eq!(ctx.parse_rank(a.as_str()).unwrap(), a);
                }

                #[test]
                fn [< gen_next_prev_ $system:lower >](a: u64, fa: u64, sa in 0u32..4) {
                    let ctx = Context::new(NumeralSystem::$system);
                    let r = ctx.rank(Bucket::Bucket1, rank_decimal(ctx.system(), a, fa, sa)).unwrap();

                    let next = r.gen_next();
                    prop_assert!(r.is_max() || next > r);
                    prop_assert!(next.as_str() >= r.as_str() || r.is_min());

                    let prev = r.gen_prev();
                    prop_assert!(r.is_min() || prev < r || r.is_max());
                }
            } }
        };
    }

    impl_test!(Base10);
    impl_test!(Base36);
    impl_test!(Base64);
}
