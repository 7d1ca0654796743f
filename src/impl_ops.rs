//! Implement math operators
//!
//! Only negation is infallible; combining two numbers goes through the
//! checked methods (`add`, `subtract`, `multiply`), which reject operands
//! of different numeral systems.
//!

use crate::*;
use crate::stdlib::ops::Neg;


impl Neg for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        self.negate()
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        self.negate()
    }
}

impl Neg for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn neg(self) -> BigDecimal {
        -&self
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn neg(self) -> BigDecimal {
        BigDecimal::new(self.value().negate(), self.scale())
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $system:ident $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n = BigDecimal::parse($input, NumeralSystem::$system).unwrap();
                let expected = BigDecimal::parse($expected, NumeralSystem::$system).unwrap();
                assert_eq!(-&n, expected);
                assert_eq!(-n.clone(), expected);
                assert_eq!(-(-n.clone()), n);
            }
        };
    }

    impl_case!(case_0: Base10 "0" => "0");
    impl_case!(case_1d5: Base10 "1.5" => "-1.5");
    impl_case!(case_n0d01: Base10 "-0.01" => "0.01");
    impl_case!(case_z_i: Base36 "z:i" => "-z:i");

    #[test]
    fn neg_integer() {
        let n = BigInteger::parse("-zz", NumeralSystem::Base64).unwrap();
        assert_eq!((-&n).format(), "zz");
        assert_eq!((-n).format(), "zz");
    }
}
