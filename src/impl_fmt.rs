//! Implementation of std::fmt traits
//!

use crate::*;


impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.format())
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInteger(\"{}\", base={})", self, self.system().base())
    }
}


impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.format())
    }
}

impl fmt::Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigDecimal(\"{}\", base={})", self, self.system().base())
    }
}


impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}


impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rank(\"{}\")", self.as_str())
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::string::ToString;

    #[test]
    fn display_integer() {
        let n = BigInteger::parse("-00zz", NumeralSystem::Base36).unwrap();
        assert_eq!(n.to_string(), "-zz");
        assert_eq!(format!("{:>6}", n), "   -zz");
    }

    #[test]
    fn debug_integer() {
        let n = BigInteger::parse("42", NumeralSystem::Base10).unwrap();
        assert_eq!(format!("{:?}", n), "BigInteger(\"42\", base=10)");
    }

    #[test]
    fn display_decimal() {
        let n = BigDecimal::parse("-:05", NumeralSystem::Base64).unwrap();
        assert_eq!(n.to_string(), "-0:05");
        assert_eq!(format!("{:?}", n), "BigDecimal(\"-0:05\", base=64)");
    }

    #[test]
    fn display_bucket() {
        assert_eq!(Bucket::Bucket2.to_string(), "2");
    }

    #[test]
    fn display_rank() {
        let rank = Rank::initial(Bucket::Bucket1);
        assert_eq!(rank.to_string(), "1|y00000");
        assert_eq!(format!("{:?}", rank), "Rank(\"1|y00000\")");
        assert_eq!(format!("{:<10}|", rank), "1|y00000  |");
    }
}
