// Tests for Rank, included by rank.rs

use crate::stdlib::DefaultHasher;
use crate::stdlib::hash::{Hash, Hasher};
use crate::stdlib::num::NonZeroU64;
use crate::stdlib::Vec;
use crate::stdlib::string::ToString;

fn rank(s: &str) -> Rank {
    Rank::parse(s).unwrap()
}

fn base10(s: &str) -> Rank {
    Context::new(NumeralSystem::Base10).parse_rank(s).unwrap()
}

fn hash<T: Hash>(obj: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    obj.hash(&mut hasher);
    hasher.finish()
}

macro_rules! impl_case {
    (canonical $name:ident: $input:literal => $expected:literal) => {
        paste! {
            #[test]
            fn [< canonical_ $name >]() {
                let r = rank($input);
                assert_eq!(r.as_str(), $expected);
                assert_eq!(rank(r.as_str()), r);
                assert_eq!(rank(r.as_str()).as_str(), $expected);
            }
        }
    };
    (between $name:ident: $left:literal, $right:literal => $expected:literal) => {
        paste! {
            #[test]
            fn [< between_ $name >]() {
                let left = rank($left);
                let right = rank($right);
                let mid = left.between(&right).unwrap();
                assert_eq!(mid.as_str(), $expected);
                assert!(left < mid && mid < right);
                assert_eq!(right.between(&left).unwrap(), mid);
            }
        }
    };
}

impl_case!(canonical padded: "0|100000" => "0|100000");
impl_case!(canonical short_integer: "0|1" => "0|000001");
impl_case!(canonical trailing_radix: "0|100008:" => "0|100008");
impl_case!(canonical fraction: "1|0:i" => "1|000000:i");
impl_case!(canonical trailing_fraction_zeros: "2|hzzzzz:i0" => "2|hzzzzz:i");
impl_case!(canonical leading_zeros: "0|0000100000" => "0|100000");
impl_case!(canonical zero: "0|0" => "0|000000");
impl_case!(canonical max: "2|zzzzzz" => "2|zzzzzz");

impl_case!(between adjacent_gap: "0|100000", "0|100002" => "0|100001");
impl_case!(between step: "0|100000", "0|100008" => "0|100004");
impl_case!(between adjacent: "0|100000", "0|100001" => "0|100000:i");
impl_case!(between wide: "0|000000", "0|zzzzzz" => "0|hzzzzz");
impl_case!(between fractions: "0|100000:1", "0|100000:3" => "0|100000:2");
impl_case!(between trims_precision: "0|100000:1", "0|100002:z" => "0|100001");
impl_case!(between mixed_scale: "0|100000", "0|100000:1" => "0|100000:0i");

#[test]
fn gen_next_adds_step() {
    assert_eq!(rank("0|100000").gen_next().as_str(), "0|100008");
    assert_eq!(rank("1|hzzzzz:i").gen_next().as_str(), "1|i00008");
}

#[test]
fn gen_prev_subtracts_step() {
    assert_eq!(base10("0|200000").gen_prev().as_str(), "0|199992");
    assert_eq!(rank("0|200000").gen_prev().as_str(), "0|1zzzzs");
    assert_eq!(rank("0|100000:5").gen_prev().as_str(), "0|0zzzzs");
}

#[test]
fn gen_next_from_min_resets() {
    let min = Rank::min();
    assert!(min.is_min());
    assert_eq!(min.gen_next().as_str(), "0|100000");
}

#[test]
fn gen_prev_from_max_resets() {
    let max = Rank::max(Bucket::Bucket1);
    assert!(max.is_max());
    assert_eq!(max.gen_prev().as_str(), "1|y00000");
}

#[test]
fn gen_next_near_max_uses_midpoint() {
    let r = rank("0|zzzzzu");
    let next = r.gen_next();
    assert_eq!(next.as_str(), "0|zzzzzw");
    assert!(r < next && next < Rank::max(Bucket::Bucket0));
}

#[test]
fn gen_prev_near_min_uses_midpoint() {
    let r = rank("0|000004");
    let prev = r.gen_prev();
    assert_eq!(prev.as_str(), "0|000002");

    let r = rank("0|000000:1");
    let prev = r.gen_prev();
    assert_eq!(prev.as_str(), "0|000000:0i");
    assert!(Rank::min() < prev && prev < r);
}

#[test]
fn gen_next_saturates_at_max() {
    let max = Rank::max(Bucket::Bucket0);
    assert_eq!(max.gen_next(), max);
    assert_eq!(max.gen_next().as_str(), "0|zzzzzz");
}

#[test]
fn gen_prev_saturates_at_min() {
    let min = Rank::min();
    assert_eq!(min.gen_prev(), min);
    assert_eq!(min.gen_prev().as_str(), "0|000000");
}

#[test]
fn custom_step() {
    let ctx = Context::default().with_step(NonZeroU64::new(36).unwrap());
    let r = ctx.parse_rank("0|100000").unwrap();
    assert_eq!(r.gen_next().as_str(), "0|100010");
    assert_eq!(r.gen_next().gen_prev(), r);
    assert_eq!(r.gen_next().context(), &ctx);
}

#[test]
fn between_different_buckets_fails() {
    let err = rank("0|100000").between(&rank("1|100000")).unwrap_err();
    assert_eq!(err, LexoRankError::DifferentBuckets);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "different buckets");
}

#[test]
fn between_identical_fails() {
    let r = rank("0|100000");
    let err = r.between(&r).unwrap_err();
    assert_eq!(err, LexoRankError::IdenticalRanks("0|100000".into(), "0|100000".into()));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "ranks cannot be the same: 0|100000, 0|100000");

    // same decimal written differently
    assert!(rank("0|1").between(&rank("0|000001:0")).is_err());
}

#[test]
fn between_different_systems_fails() {
    let a = base10("0|100000");
    let b = rank("0|100000");
    assert_eq!(a.between(&b), Err(LexoRankError::SystemMismatch { left: 10, right: 36 }));
}

#[test]
fn repeated_between_stays_inside() {
    let right = rank("0|100001");
    let mut left = rank("0|100000");
    let mut seen = Vec::new();
    for _ in 0..10 {
        let next = left.between(&right).unwrap();
        assert!(left < next, "{} < {}", left, next);
        assert!(next < right, "{} < {}", next, right);
        assert!(left.as_str() < next.as_str() && next.as_str() < right.as_str());
        assert!(!seen.contains(&next));
        seen.push(next.clone());
        left = next;
    }
    assert_eq!(seen.len(), 10);
}

#[test]
fn repeated_between_from_right_stays_inside() {
    let left = rank("0|100000");
    let mut right = rank("0|100001");
    for _ in 0..10 {
        let next = left.between(&right).unwrap();
        assert!(left < next && next < right);
        right = next;
    }
}

#[test]
fn min_and_max() {
    let min = Rank::min();
    let max = Rank::max(Bucket::Bucket0);
    assert_eq!(min.bucket(), Bucket::Bucket0);
    assert!(min.decimal().is_zero());
    assert_eq!(min.as_str(), "0|000000");
    assert_eq!(max.bucket(), Bucket::Bucket0);
    assert_eq!(max.decimal().format(), "zzzzzz");
    assert!(min < max);
}

#[test]
fn middle_and_initial() {
    assert_eq!(Rank::middle().as_str(), "0|hzzzzz");
    assert_eq!(Rank::initial(Bucket::Bucket0).as_str(), "0|100000");
    assert_eq!(Rank::initial(Bucket::Bucket2).as_str(), "2|y00000");
}

#[test]
fn bucket_rotation() {
    let r = rank("2|100000:i");
    assert_eq!(r.in_next_bucket().as_str(), "0|100000:i");
    assert_eq!(r.in_prev_bucket().as_str(), "1|100000:i");
    assert_eq!(r.in_next_bucket().in_prev_bucket(), r);
}

#[test]
fn ordering_across_buckets() {
    assert!(rank("0|zzzzzz") < rank("1|000000"));
    assert!(rank("2|000000") > rank("1|zzzzzz"));
}

#[test]
fn string_order_matches_rank_order() {
    let mut ranks = vec![Rank::min(), Rank::initial(Bucket::Bucket0)];
    for _ in 0..6 {
        let last = ranks[ranks.len() - 1].clone();
        ranks.push(last.gen_next());
    }
    let first = ranks[1].clone();
    let mut right = ranks[2].clone();
    for _ in 0..6 {
        right = first.between(&right).unwrap();
        ranks.push(right.clone());
    }
    ranks.push(Rank::max(Bucket::Bucket0));
    ranks.push(Rank::initial(Bucket::Bucket1));

    let mut by_rank = ranks.clone();
    by_rank.sort();
    let mut by_text = ranks.clone();
    by_text.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    assert_eq!(by_rank, by_text);
}

#[test]
fn equality_and_hash() {
    let a = rank("0|1");
    let b = rank("0|000001:");
    assert_eq!(a, b);
    assert_eq!(hash(&a), hash(&b));
    assert_ne!(a, rank("1|000001"));
}

#[test]
fn base64_between() {
    let ctx = Context::new(NumeralSystem::Base64);
    let left = ctx.parse_rank("0|100000").unwrap();
    let right = ctx.parse_rank("0|100001").unwrap();
    let mid = left.between(&right).unwrap();
    assert_eq!(mid.as_str(), "0|100000:W");
    assert!(left < mid && mid < right);
    assert!(left.as_str() < mid.as_str() && mid.as_str() < right.as_str());
}

#[test]
fn format_decimal_pads_integer_part() {
    let ctx = Context::default();
    let decimal = BigDecimal::parse("1:z", NumeralSystem::Base36).unwrap();
    assert_eq!(format_rank(&ctx, Bucket::Bucket1, &decimal), "1|000001:z");
}
