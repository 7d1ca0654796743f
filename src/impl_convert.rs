//! Conversions between numbers of this crate, machine integers,
//! and num-bigint integers

use crate::*;
use crate::stdlib::convert::TryFrom;
use crate::stdlib::Vec;

use crate::bigdigit::DigitVec;

use num_bigint::{BigInt, BigUint};
use num_integer::div_rem;
use num_traits::{ToPrimitive, Zero};


impl BigInteger {
    /// Write a machine integer in 'system'
    pub fn from_u64(n: u64, system: NumeralSystem) -> Self {
        let radix = system.base() as u64;
        let mut digits = Vec::new();
        let mut rest = n;
        while rest != 0 {
            let (hi, lo) = div_rem(rest, radix);
            digits.push(lo as u8);
            rest = hi;
        }
        Self::from_parts(system, Sign::Plus, DigitVec::from_vec(digits))
    }

    /// Write a signed machine integer in 'system'
    pub fn from_i64(n: i64, system: NumeralSystem) -> Self {
        let abs = Self::from_u64(n.unsigned_abs(), system);
        if n < 0 { abs.negate() } else { abs }
    }

    /// Rewrite a num-bigint integer in 'system'
    pub fn from_bigint(n: &BigInt, system: NumeralSystem) -> Self {
        let (sign, digits) = n.to_radix_le(system.base() as u32);
        Self::from_parts(system, sign, DigitVec::from_vec(digits))
    }

    /// Magnitude as u64, if it fits
    fn magnitude_u64(&self) -> Option<u64> {
        let radix = self.system().base() as u64;
        self.magnitude()
            .iter_significant_first()
            .try_fold(0u64, |acc, &d| acc.checked_mul(radix)?.checked_add(d as u64))
    }
}


impl ToPrimitive for BigInteger {
    fn to_i64(&self) -> Option<i64> {
        let mag = self.magnitude_u64()?;
        match self.sign() {
            Sign::Minus if mag == i64::MIN.unsigned_abs() => Some(i64::MIN),
            Sign::Minus => i64::try_from(mag).ok().map(|v| -v),
            _ => i64::try_from(mag).ok(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self.sign() {
            Sign::Minus => None,
            _ => self.magnitude_u64(),
        }
    }
}


impl From<&BigInteger> for BigInt {
    fn from(n: &BigInteger) -> Self {
        let radix = n.system().base() as u32;
        let mag = n.magnitude()
            .iter_significant_first()
            .fold(BigUint::zero(), |acc, &d| acc * radix + d as u32);
        BigInt::from_biguint(n.sign(), mag)
    }
}

impl From<BigInteger> for BigInt {
    fn from(n: BigInteger) -> Self {
        BigInt::from(&n)
    }
}


impl From<BigInteger> for BigDecimal {
    fn from(n: BigInteger) -> Self {
        BigDecimal::new(n, 0)
    }
}
