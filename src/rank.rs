//! Rank keys and the algorithms generating them

use crate::*;
use crate::stdlib::cmp::Ordering;
use crate::stdlib::string::String;

use tracing::{debug, trace};


/// A sortable key: a [`Bucket`] and a [`BigDecimal`] written as
/// `<bucket>|<decimal>`
///
/// The decimal's integer part is always padded to six digits, so within
/// one [`Context`] the byte-wise order of [`Rank::as_str`] matches the
/// order of ranks.
///
/// ```
/// use lexorank::{Bucket, Rank};
///
/// let first = Rank::initial(Bucket::Bucket0);
/// let second = first.gen_next();
/// let inserted = first.between(&second).unwrap();
///
/// assert_eq!(first.as_str(), "0|100000");
/// assert_eq!(second.as_str(), "0|100008");
/// assert_eq!(inserted.as_str(), "0|100004");
/// ```
#[derive(Clone)]
pub struct Rank {
    value: String,
    bucket: Bucket,
    decimal: BigDecimal,
    context: Context,
}

impl Rank {
    /// Build rank, trusting 'decimal' to be in range of 'context'
    pub(crate) fn from_parts(context: Context, bucket: Bucket, decimal: BigDecimal) -> Self {
        debug_assert!(context.contains(&decimal));
        Rank {
            value: format_rank(&context, bucket, &decimal),
            bucket: bucket,
            decimal: decimal,
            context: context,
        }
    }

    /// Parse rank text in the default context
    pub fn parse(text: &str) -> Result<Self, LexoRankError> {
        Context::default().parse_rank(text)
    }

    /// Lowest rank of the default context
    pub fn min() -> Self {
        Context::default().min_rank()
    }

    /// Highest rank of 'bucket' in the default context
    pub fn max(bucket: Bucket) -> Self {
        Context::default().max_rank(bucket)
    }

    /// Rank halfway through bucket 0 of the default context
    pub fn middle() -> Self {
        Context::default().middle_rank()
    }

    /// Starting rank of 'bucket' in the default context
    pub fn initial(bucket: Bucket) -> Self {
        Context::default().initial_rank(bucket)
    }

    pub fn bucket(&self) -> Bucket {
        self.bucket
    }

    pub fn decimal(&self) -> &BigDecimal {
        &self.decimal
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Canonical text of the rank
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_min(&self) -> bool {
        self.decimal.is_zero()
    }

    pub fn is_max(&self) -> bool {
        self.decimal == self.context.max_decimal()
    }

    fn with_decimal(&self, decimal: BigDecimal) -> Self {
        Self::from_parts(self.context, self.bucket, decimal)
    }

    /// Same decimal in the following bucket
    pub fn in_next_bucket(&self) -> Self {
        Self::from_parts(self.context, self.bucket.next(), self.decimal.clone())
    }

    /// Same decimal in the preceding bucket
    pub fn in_prev_bucket(&self) -> Self {
        Self::from_parts(self.context, self.bucket.prev(), self.decimal.clone())
    }

    /// A rank sorting after this one, in the same bucket
    ///
    /// The lowest rank jumps to the initial rank. Otherwise the step is
    /// added to the ceiling of the decimal; near the top of the range
    /// the result is placed between this rank and the highest one
    /// instead. The highest rank has no successor and is returned
    /// unchanged.
    ///
    pub fn gen_next(&self) -> Self {
        if self.is_min() {
            return self.with_decimal(self.context.initial_min_decimal());
        }

        let max = self.context.max_decimal();
        if self.decimal == max {
            debug!(rank = %self, "highest rank has no successor");
            return self.clone();
        }

        let ceil = BigDecimal::from(self.decimal.ceil());
        let next = ceil.add_unchecked(&self.context.step_decimal());
        if next < max {
            return self.with_decimal(next);
        }

        debug!(rank = %self, "step reaches the highest rank, using midpoint");
        self.with_decimal(between_decimals(&self.decimal, &max))
    }

    /// A rank sorting before this one, in the same bucket
    ///
    /// The highest rank jumps to the initial rank of the upper range.
    /// Otherwise the step is subtracted from the floor of the decimal;
    /// near zero the result is placed between the lowest rank and this
    /// one instead. The lowest rank has no predecessor and is returned
    /// unchanged.
    ///
    pub fn gen_prev(&self) -> Self {
        if self.is_max() {
            return self.with_decimal(self.context.initial_max_decimal());
        }

        let min = self.context.min_decimal();
        if self.decimal == min {
            debug!(rank = %self, "lowest rank has no predecessor");
            return self.clone();
        }

        let floor = BigDecimal::from(self.decimal.floor());
        let prev = floor.sub_unchecked(&self.context.step_decimal());
        if prev > min {
            return self.with_decimal(prev);
        }

        debug!(rank = %self, "step reaches the lowest rank, using midpoint");
        self.with_decimal(between_decimals(&min, &self.decimal))
    }

    /// A rank strictly between this one and 'other'
    ///
    /// The order of the two ranks does not matter. Fails if they are in
    /// different buckets or numeral systems, or hold the same decimal.
    ///
    pub fn between(&self, other: &Rank) -> Result<Self, LexoRankError> {
        if self.bucket != other.bucket {
            return Err(LexoRankError::DifferentBuckets);
        }
        self.decimal.check_system(&other.decimal)?;

        let decimal = match self.decimal.cmp(&other.decimal) {
            Ordering::Less => between_decimals(&self.decimal, &other.decimal),
            Ordering::Greater => between_decimals(&other.decimal, &self.decimal),
            Ordering::Equal => {
                return Err(LexoRankError::IdenticalRanks(self.value.clone(), other.value.clone()));
            }
        };
        Ok(self.with_decimal(decimal))
    }
}


/// Text of a rank: bucket char, `|`, decimal with integer part padded
fn format_rank(context: &Context, bucket: Bucket, decimal: &BigDecimal) -> String {
    let system = context.system();
    let text = decimal.format();
    let int_len = text.find(system.radix_point_char()).unwrap_or(text.len());

    let mut buf = String::with_capacity(RANK_WIDTH + text.len() + 2);
    buf.push(bucket.as_char(system));
    buf.push('|');
    for _ in int_len..RANK_WIDTH {
        buf.push(system.zero_char());
    }
    buf.push_str(&text);
    buf
}

/// Shortest decimal strictly between 'o_left' and 'o_right'
///
/// Requires `o_left < o_right`, both in the same numeral system.
///
pub(crate) fn between_decimals(o_left: &BigDecimal, o_right: &BigDecimal) -> BigDecimal {
    debug_assert!(o_left < o_right);

    let mut left = o_left.clone();
    let mut right = o_right.clone();

    // bring both bounds to the smaller scale
    if o_left.scale() < o_right.scale() {
        let shrunk = o_right.set_scale(o_left.scale(), false);
        if *o_left >= shrunk {
            trace!(left = %o_left, right = %o_right, "bounds collide at common scale");
            return middle(o_left, o_right);
        }
        right = shrunk;
    }
    if o_left.scale() > right.scale() {
        let shrunk = o_left.set_scale(right.scale(), true);
        if shrunk >= right {
            trace!(left = %o_left, right = %o_right, "bounds collide at common scale");
            return middle(o_left, o_right);
        }
        left = shrunk;
    }

    // drop precision while the bounds stay apart
    let mut scale = left.scale();
    while scale > 0 {
        let next_scale = scale - 1;
        let trimmed_left = left.set_scale(next_scale, true);
        let trimmed_right = right.set_scale(next_scale, false);
        match trimmed_left.cmp(&trimmed_right) {
            Ordering::Equal => return check_mid(o_left, o_right, trimmed_left),
            Ordering::Greater => break,
            Ordering::Less => {}
        }
        scale = next_scale;
        left = trimmed_left;
        right = trimmed_right;
    }

    let mut mid = check_mid(o_left, o_right, middle(&left, &right));

    // shorten the result while it stays inside the bounds
    while mid.scale() > 0 {
        let shorter = mid.set_scale(mid.scale() - 1, false);
        if *o_left >= shorter || shorter >= *o_right {
            break;
        }
        mid = shorter;
    }

    mid
}

/// 'mid' if strictly inside the bounds, else the exact midpoint of the bounds
fn check_mid(left: &BigDecimal, right: &BigDecimal, mid: BigDecimal) -> BigDecimal {
    if *left < mid && mid < *right {
        return mid;
    }
    trace!(left = %left, right = %right, mid = %mid, "candidate outside bounds, using midpoint");
    middle(left, right)
}

/// Arithmetic mean of two decimals, truncated to their scale if possible
fn middle(left: &BigDecimal, right: &BigDecimal) -> BigDecimal {
    let sum = left.add_unchecked(right);
    let mid = sum.mul_unchecked(&BigDecimal::half(left.system()));
    let scale = left.scale().max(right.scale());

    if mid.scale() > scale {
        let round_down = mid.set_scale(scale, false);
        if round_down > *left {
            return round_down;
        }
        let round_up = mid.set_scale(scale, true);
        if round_up < *right {
            return round_up;
        }
    }

    mid
}
