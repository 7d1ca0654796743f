use crate::*;
use crate::stdlib::str::FromStr;

impl FromStr for Rank {
    type Err = LexoRankError;

    /// Parse rank text in the default context
    #[inline]
    fn from_str(s: &str) -> Result<Rank, LexoRankError> {
        Rank::parse(s)
    }
}

impl FromStr for Bucket {
    type Err = LexoRankError;

    #[inline]
    fn from_str(s: &str) -> Result<Bucket, LexoRankError> {
        Bucket::parse(s, Context::default().system())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $bucket:ident, $decimal:literal) => {
            #[test]
            fn $name() {
                let rank = Rank::from_str($input).unwrap();
                assert_eq!(rank.bucket(), Bucket::$bucket);
                assert_eq!(rank.decimal().format(), $decimal);
            }
        };
    }

    impl_case!(case_0_100000: "0|100000" => Bucket0, "100000");
    impl_case!(case_1_0: "1|0" => Bucket1, "0");
    impl_case!(case_2_fraction: "2|000abc:def" => Bucket2, "abc:def");
    impl_case!(case_padded_bucket: "01|zzzzzz" => Bucket1, "zzzzzz");

    #[test]
    fn parse_bucket() {
        assert_eq!("2".parse::<Bucket>(), Ok(Bucket::Bucket2));
        assert_eq!("9".parse::<Bucket>(), Err(LexoRankError::UnknownBucket("9".into())));
    }
}


#[cfg(test)]
mod test_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $exp:literal) => {
            #[test]
            #[should_panic(expected = $exp)]
            fn $name() {
                Rank::from_str($input).unwrap();
            }
        };
    }

    impl_case!(case_empty: "" => "MissingSeparator");
    impl_case!(case_no_separator: "0100000" => "MissingSeparator");
    impl_case!(case_empty_bucket: "|100000" => "Empty");
    impl_case!(case_empty_decimal: "0|" => "Empty");
    impl_case!(case_unknown_bucket: "3|100000" => "UnknownBucket");
    impl_case!(case_invalid_digit: "0|INVALID" => "InvalidDigit");
    impl_case!(case_invalid_value: "INVALID|VALUE" => "InvalidDigit");
    impl_case!(case_radix_points: "0|1:2:3" => "MultipleRadixPoints");
    impl_case!(case_too_large: "0|1000000" => "OutOfRange");
    impl_case!(case_negative: "0|-1" => "OutOfRange");
    impl_case!(case_base10_radix: "0|100000.5" => "InvalidDigit");
}
