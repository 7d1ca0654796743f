//! Implementation of comparison operations
//!
//! Numbers order first by the base of their numeral system, then by
//! value; two numbers only compare equal when both match. Ranks order by
//! base, then bucket, then decimal.
//!

use crate::*;

use crate::stdlib::cmp::Ordering;
use crate::stdlib::hash::{Hash, Hasher};


impl Ord for BigInteger {
    fn cmp(&self, other: &BigInteger) -> Ordering {
        self.system().base().cmp(&other.system().base())
            .then_with(|| self.cmp_value(other))
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &BigInteger) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


impl Ord for BigDecimal {
    fn cmp(&self, other: &BigDecimal) -> Ordering {
        self.system().base().cmp(&other.system().base())
            .then_with(|| self.cmp_value(other))
    }
}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &BigDecimal) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


impl PartialEq for Rank {
    fn eq(&self, other: &Rank) -> bool {
        self.bucket() == other.bucket() && self.decimal() == other.decimal()
    }
}

impl Eq for Rank {}

impl Hash for Rank {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bucket().hash(state);
        self.decimal().hash(state);
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Rank) -> Ordering {
        let base = |r: &Rank| r.decimal().system().base();
        base(self).cmp(&base(other))
            .then_with(|| self.bucket().cmp(&other.bucket()))
            .then_with(|| self.decimal().cmp_value(other.decimal()))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Rank) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn integers_of_different_bases() {
        let a = BigInteger::parse("z", NumeralSystem::Base36).unwrap();
        let b = BigInteger::parse("9", NumeralSystem::Base10).unwrap();
        assert!(b < a);
        assert_ne!(a, b);
    }

    #[test]
    fn decimals_compare_by_value() {
        let a = BigDecimal::parse("0:z", NumeralSystem::Base36).unwrap();
        let b = BigDecimal::parse("1", NumeralSystem::Base36).unwrap();
        let c = BigDecimal::parse("0:zz", NumeralSystem::Base36).unwrap();
        assert!(a < b);
        assert!(a < c && c < b);
        assert_eq!(a.max(b.clone()), b);
    }

    #[test]
    fn ranks_ignore_step() {
        let ctx = Context::default().with_step(crate::stdlib::num::NonZeroU64::new(100).unwrap());
        let a = ctx.parse_rank("0|100000").unwrap();
        let b = Rank::parse("0|100000").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }
}
