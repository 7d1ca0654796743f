//! Rank buckets

use crate::*;

use num_traits::ToPrimitive;


/// One of the three namespaces a rank lives in
///
/// The buckets form a ring under [`Bucket::next`] and [`Bucket::prev`].
/// Rotating every rank of a list into the next bucket lets a caller
/// rewrite keys without colliding with the ones still in use.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    Bucket0,
    Bucket1,
    Bucket2,
}

impl Default for Bucket {
    fn default() -> Self {
        Bucket::Bucket0
    }
}

impl Bucket {
    /// Every bucket, in ring order
    pub const ALL: [Bucket; 3] = [Bucket::Bucket0, Bucket::Bucket1, Bucket::Bucket2];

    /// Numeric id: 0, 1, or 2
    pub const fn id(self) -> u8 {
        match self {
            Bucket::Bucket0 => 0,
            Bucket::Bucket1 => 1,
            Bucket::Bucket2 => 2,
        }
    }

    /// Following bucket in the ring (0 → 1 → 2 → 0)
    pub const fn next(self) -> Self {
        match self {
            Bucket::Bucket0 => Bucket::Bucket1,
            Bucket::Bucket1 => Bucket::Bucket2,
            Bucket::Bucket2 => Bucket::Bucket0,
        }
    }

    /// Preceding bucket in the ring (0 → 2 → 1 → 0)
    pub const fn prev(self) -> Self {
        match self {
            Bucket::Bucket0 => Bucket::Bucket2,
            Bucket::Bucket1 => Bucket::Bucket0,
            Bucket::Bucket2 => Bucket::Bucket1,
        }
    }

    pub const fn min() -> Self {
        Bucket::Bucket0
    }

    pub const fn max() -> Self {
        Bucket::Bucket2
    }

    /// Bucket with the given numeric id
    pub fn resolve(id: u32) -> Result<Self, LexoRankError> {
        match id {
            0 => Ok(Bucket::Bucket0),
            1 => Ok(Bucket::Bucket1),
            2 => Ok(Bucket::Bucket2),
            _ => Err(LexoRankError::UnknownBucket(format!("{}", id))),
        }
    }

    /// Parse a bucket id written in 'system'
    ///
    /// The id is read as an integer, so `"00"` and `"+1"` are accepted.
    ///
    pub fn parse(text: &str, system: NumeralSystem) -> Result<Self, LexoRankError> {
        let value = BigInteger::parse(text, system)?;
        value.to_u32()
             .and_then(|id| Self::resolve(id).ok())
             .ok_or_else(|| LexoRankError::UnknownBucket(text.into()))
    }

    /// Digit character of the id in 'system'
    pub fn as_char(self, system: NumeralSystem) -> char {
        system.to_char(self.id())
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ring_closure() {
        for &bucket in Bucket::ALL.iter() {
            assert_eq!(bucket.next().next().next(), bucket);
            assert_eq!(bucket.prev().prev().prev(), bucket);
            assert_eq!(bucket.prev().next(), bucket);
            assert_eq!(bucket.next().prev(), bucket);
        }
    }

    #[test]
    fn ring_order() {
        assert_eq!(Bucket::Bucket0.next(), Bucket::Bucket1);
        assert_eq!(Bucket::Bucket1.next(), Bucket::Bucket2);
        assert_eq!(Bucket::Bucket2.next(), Bucket::Bucket0);
        assert_eq!(Bucket::Bucket0.prev(), Bucket::Bucket2);
    }

    #[test]
    fn min_max() {
        assert_eq!(Bucket::min(), Bucket::ALL[0]);
        assert_eq!(Bucket::max(), Bucket::ALL[2]);
        assert!(Bucket::min() < Bucket::max());
    }

    #[test]
    fn resolve() {
        for &bucket in Bucket::ALL.iter() {
            assert_eq!(Bucket::resolve(bucket.id() as u32), Ok(bucket));
        }
        assert_eq!(Bucket::resolve(3), Err(LexoRankError::UnknownBucket("3".into())));
    }

    #[test]
    fn parse() {
        let system = NumeralSystem::Base36;
        assert_eq!(Bucket::parse("0", system), Ok(Bucket::Bucket0));
        assert_eq!(Bucket::parse("002", system), Ok(Bucket::Bucket2));
        assert_eq!(Bucket::parse("+1", system), Ok(Bucket::Bucket1));
        assert_eq!(Bucket::parse("3", system), Err(LexoRankError::UnknownBucket("3".into())));
        assert_eq!(Bucket::parse("-1", system), Err(LexoRankError::UnknownBucket("-1".into())));
        assert_eq!(Bucket::parse("zzzzzzzzzzzzzz", system), Err(LexoRankError::UnknownBucket("zzzzzzzzzzzzzz".into())));
        assert_eq!(Bucket::parse("A", system), Err(LexoRankError::InvalidDigit('A')));
        assert_eq!(Bucket::parse("", system), Err(LexoRankError::Empty));
    }

    #[test]
    fn as_char() {
        assert_eq!(Bucket::Bucket2.as_char(NumeralSystem::Base64), '2');
        assert_eq!(Bucket::Bucket0.as_char(NumeralSystem::Base10), '0');
    }
}
