//! Rank parameters
//!
//! A [`Context`] fixes the numeral system ranks are written in and the
//! step used when appending or prepending. Every rank keeps the context
//! it was created with, and ranks generated from it inherit that context.

use crate::*;
use crate::stdlib::num::NonZeroU64;
use crate::stdlib::Vec;

use crate::bigdigit::DigitVec;

// const DEFAULT_STEP: u64 = 8;
include!(concat!(env!("OUT_DIR"), "/default_step.rs"));

/// Number of integer digits in a rank's decimal
pub const RANK_WIDTH: usize = 6;


/// Parameters shared by a family of ranks
///
/// ```
/// use lexorank::{Bucket, Context, NumeralSystem};
///
/// let ctx = Context::new(NumeralSystem::Base10);
/// let rank = ctx.initial_rank(Bucket::Bucket0);
/// assert_eq!(rank.as_str(), "0|100000");
/// assert_eq!(rank.gen_next().as_str(), "0|100008");
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    system: NumeralSystem,
    step: u64,
}

impl Default for Context {
    fn default() -> Self {
        Context::new(NumeralSystem::default())
    }
}

impl Context {
    /// Context for 'system' using the default step
    pub const fn new(system: NumeralSystem) -> Self {
        Context {
            system: system,
            step: DEFAULT_STEP,
        }
    }

    /// Copy of this context with a different step
    pub fn with_step(&self, step: NonZeroU64) -> Self {
        Context {
            system: self.system,
            step: step.get(),
        }
    }

    pub fn system(&self) -> NumeralSystem {
        self.system
    }

    /// Distance added by `gen_next` and removed by `gen_prev`
    pub fn step(&self) -> u64 {
        self.step
    }

    fn integer_of_digits(&self, digits: Vec<u8>) -> BigDecimal {
        BigInteger::from_parts(self.system, Sign::Plus, DigitVec::from_vec(digits)).into()
    }

    /// Smallest decimal a rank may hold: zero
    pub fn min_decimal(&self) -> BigDecimal {
        BigDecimal::zero(self.system)
    }

    /// Largest decimal a rank may hold: base^6 - 1
    pub fn max_decimal(&self) -> BigDecimal {
        self.integer_of_digits(vec![self.system.base() - 1; RANK_WIDTH])
    }

    /// Decimal of the initial rank in the first bucket: base^5
    pub fn initial_min_decimal(&self) -> BigDecimal {
        let mut digits = vec![0; RANK_WIDTH];
        digits[RANK_WIDTH - 1] = 1;
        self.integer_of_digits(digits)
    }

    /// Decimal of the initial rank in other buckets: (base-2) * base^5
    pub fn initial_max_decimal(&self) -> BigDecimal {
        let mut digits = vec![0; RANK_WIDTH];
        digits[RANK_WIDTH - 1] = self.system.base() - 2;
        self.integer_of_digits(digits)
    }

    /// The step as an integer decimal in this context's system
    pub(crate) fn step_decimal(&self) -> BigDecimal {
        BigInteger::from_u64(self.step, self.system).into()
    }

    /// True if 'decimal' lies in the closed range of rank decimals
    pub fn contains(&self, decimal: &BigDecimal) -> bool {
        decimal.system().base() == self.system.base()
            && *decimal >= self.min_decimal()
            && *decimal <= self.max_decimal()
    }

    /// Parse rank text `<bucket>|<decimal>` in this context
    pub fn parse_rank(&self, text: &str) -> Result<Rank, LexoRankError> {
        let (bucket, decimal) = text
            .split_once('|')
            .ok_or_else(|| LexoRankError::MissingSeparator(text.into()))?;
        let bucket = Bucket::parse(bucket, self.system)?;
        let decimal = BigDecimal::parse(decimal, self.system)?;
        self.rank(bucket, decimal)
    }

    /// Build a rank from parts
    ///
    /// Fails if 'decimal' is in another numeral system or outside the
    /// range `[min_decimal, max_decimal]`.
    ///
    pub fn rank(&self, bucket: Bucket, decimal: BigDecimal) -> Result<Rank, LexoRankError> {
        crate::integer::check_same_base(self.system, decimal.system())?;
        if !self.contains(&decimal) {
            return Err(LexoRankError::OutOfRange(decimal.format()));
        }
        Ok(Rank::from_parts(*self, bucket, decimal))
    }

    /// Lowest rank: bucket 0, decimal zero
    pub fn min_rank(&self) -> Rank {
        Rank::from_parts(*self, Bucket::min(), self.min_decimal())
    }

    /// Highest rank of 'bucket'
    pub fn max_rank(&self, bucket: Bucket) -> Rank {
        Rank::from_parts(*self, bucket, self.max_decimal())
    }

    /// Rank halfway between the lowest and highest rank of bucket 0
    pub fn middle_rank(&self) -> Rank {
        let min = self.min_rank();
        let decimal = crate::rank::between_decimals(min.decimal(), &self.max_decimal());
        Rank::from_parts(*self, min.bucket(), decimal)
    }

    /// Starting rank of 'bucket'
    ///
    /// The first bucket starts low and leaves room to append; the others
    /// start high and leave room to prepend.
    ///
    pub fn initial_rank(&self, bucket: Bucket) -> Rank {
        let decimal = if bucket == Bucket::min() {
            self.initial_min_decimal()
        } else {
            self.initial_max_decimal()
        };
        Rank::from_parts(*self, bucket, decimal)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_context() {
        let ctx = Context::default();
        assert_eq!(ctx.system(), NumeralSystem::Base36);
        assert_eq!(ctx.step(), DEFAULT_STEP);
        assert_eq!(ctx.step_decimal().format(), "8");
    }

    #[test]
    fn with_step() {
        let ctx = Context::default().with_step(NonZeroU64::new(40).unwrap());
        assert_eq!(ctx.step(), 40);
        assert_eq!(ctx.system(), NumeralSystem::Base36);
        assert_eq!(ctx.step_decimal().format(), "14");
    }

    #[test]
    fn decimal_constants_base36() {
        let ctx = Context::new(NumeralSystem::Base36);
        assert_eq!(ctx.min_decimal().format(), "0");
        assert_eq!(ctx.max_decimal().format(), "zzzzzz");
        assert_eq!(ctx.initial_min_decimal().format(), "100000");
        assert_eq!(ctx.initial_max_decimal().format(), "y00000");
    }

    #[test]
    fn decimal_constants_base10() {
        let ctx = Context::new(NumeralSystem::Base10);
        assert_eq!(ctx.max_decimal().format(), "999999");
        assert_eq!(ctx.initial_max_decimal().format(), "800000");
    }

    #[test]
    fn decimal_constants_base64() {
        let ctx = Context::new(NumeralSystem::Base64);
        assert_eq!(ctx.max_decimal().format(), "zzzzzz");
        assert_eq!(ctx.initial_max_decimal().format(), "y00000");
    }

    #[test]
    fn contains() {
        let ctx = Context::default();
        let parse = |s: &str| BigDecimal::parse(s, NumeralSystem::Base36).unwrap();
        assert!(ctx.contains(&parse("0")));
        assert!(ctx.contains(&parse("zzzzzz")));
        assert!(ctx.contains(&parse("zzzzzy:z")));
        assert!(!ctx.contains(&parse("zzzzzz:1")));
        assert!(!ctx.contains(&parse("-0:1")));
        assert!(!ctx.contains(&parse("1000000")));
        assert!(!ctx.contains(&BigDecimal::parse("1", NumeralSystem::Base10).unwrap()));
    }

    #[test]
    fn rank_rejects_foreign_system() {
        let ctx = Context::default();
        let decimal = BigDecimal::parse("100000", NumeralSystem::Base10).unwrap();
        assert_eq!(
            ctx.rank(Bucket::Bucket0, decimal),
            Err(LexoRankError::SystemMismatch { left: 36, right: 10 })
        );
    }

    #[test]
    fn parse_rank_errors() {
        let ctx = Context::default();
        assert_eq!(ctx.parse_rank("0100000"), Err(LexoRankError::MissingSeparator("0100000".into())));
        assert_eq!(ctx.parse_rank("3|100000"), Err(LexoRankError::UnknownBucket("3".into())));
        assert_eq!(ctx.parse_rank("0|INVALID"), Err(LexoRankError::InvalidDigit('I')));
        assert_eq!(ctx.parse_rank("0|1000000"), Err(LexoRankError::OutOfRange("1000000".into())));
        assert_eq!(ctx.parse_rank("0|-1"), Err(LexoRankError::OutOfRange("-1".into())));
        assert_eq!(ctx.parse_rank("0|1:2:3"), Err(LexoRankError::MultipleRadixPoints(':')));
    }

    #[test]
    fn initial_ranks() {
        let ctx = Context::default();
        assert_eq!(ctx.initial_rank(Bucket::Bucket0).as_str(), "0|100000");
        assert_eq!(ctx.initial_rank(Bucket::Bucket1).as_str(), "1|y00000");
        assert_eq!(ctx.initial_rank(Bucket::Bucket2).as_str(), "2|y00000");
    }

    #[test]
    fn middle_rank() {
        assert_eq!(Context::default().middle_rank().as_str(), "0|hzzzzz");
        assert_eq!(Context::new(NumeralSystem::Base10).middle_rank().as_str(), "0|499999");
    }
}
