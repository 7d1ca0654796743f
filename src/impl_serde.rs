//!
//! Support for serde implementations
//!
//! Ranks and buckets are written as their canonical strings. The text of
//! a rank does not record its numeral system, so `Deserialize` reads it
//! in the default context and `Serialize` refuses ranks of any other
//! system. Ranks of other systems are read through a [`Context`], which
//! implements [`DeserializeSeed`](de::DeserializeSeed).
//!
use crate::*;
use serde::{de, ser};


impl ser::Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let system = self.context().system();
        let default_system = Context::default().system();
        if system != default_system {
            return Err(<S::Error as ser::Error>::custom(format!(
                "rank {} is in base {}, only base {} ranks serialize",
                self, system.base(), default_system.base()
            )));
        }
        serializer.serialize_str(self.as_str())
    }
}

/// Used by SerDe to construct a Rank in a given context
struct RankVisitor {
    context: Context,
}

impl<'de> de::Visitor<'de> for RankVisitor {
    type Value = Rank;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a base {} rank string such as \"0|100000\"", self.context.system().base())
    }

    fn visit_str<E>(self, value: &str) -> Result<Rank, E>
    where
        E: de::Error,
    {
        self.context.parse_rank(value).map_err(|err| E::custom(format!("{}", err)))
    }
}

impl<'de> de::Deserialize<'de> for Rank {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_str(RankVisitor { context: Context::default() })
    }
}

/// Read rank text in this context
impl<'de> de::DeserializeSeed<'de> for Context {
    type Value = Rank;

    fn deserialize<D>(self, d: D) -> Result<Rank, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_str(RankVisitor { context: self })
    }
}


impl ser::Serialize for Bucket {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Used by SerDe to construct a Bucket
struct BucketVisitor;

impl<'de> de::Visitor<'de> for BucketVisitor {
    type Value = Bucket;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a bucket id 0, 1, or 2")
    }

    fn visit_str<E>(self, value: &str) -> Result<Bucket, E>
    where
        E: de::Error,
    {
        Bucket::parse(value, Context::default().system())
            .map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Bucket, E>
    where
        E: de::Error,
    {
        let id = u32::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))?;
        Bucket::resolve(id).map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Bucket, E>
    where
        E: de::Error,
    {
        let id = u32::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))?;
        Bucket::resolve(id).map_err(|err| E::custom(format!("{}", err)))
    }
}

impl<'de> de::Deserialize<'de> for Bucket {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(BucketVisitor)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::Vec;

    use serde::de::DeserializeSeed;
    use serde_test::{
        Token, assert_tokens, assert_de_tokens, assert_de_tokens_error, assert_ser_tokens_error
    };

    mod serde_serialize_deserialize_rank {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $input:literal => $output:literal) => {
                #[test]
                fn $name() {
                    let rank = Rank::parse($input).unwrap();
                    assert_tokens(&rank, &[Token::Str($output)]);
                }
            }
        }

        impl_case!(case_0_100000: "0|100000" => "0|100000");
        impl_case!(case_1_short: "1|8" => "1|000008");
        impl_case!(case_2_fraction: "2|hzzzzz:i" => "2|hzzzzz:i");
    }

    #[test]
    fn deserialize_noncanonical_rank() {
        let rank = Rank::parse("0|100008").unwrap();
        assert_de_tokens(&rank, &[Token::Str("0|100008:")]);
    }

    #[test]
    fn deserialize_invalid_rank() {
        assert_de_tokens_error::<Rank>(
            &[Token::Str("0|INVALID")],
            "Not a valid digit: 'I'",
        );
        assert_de_tokens_error::<Rank>(
            &[Token::Str("0|100000|1")],
            "Not a valid digit: '|'",
        );
    }

    #[test]
    fn bucket_tokens() {
        assert_tokens(&Bucket::Bucket1, &[Token::Str("1")]);
        assert_de_tokens(&Bucket::Bucket2, &[Token::U64(2)]);
        assert_de_tokens(&Bucket::Bucket0, &[Token::I64(0)]);
        assert_de_tokens_error::<Bucket>(&[Token::U64(3)], "Unknown bucket: 3");
    }

    #[test]
    fn rank_in_json() {
        let ranks = vec![Rank::initial(Bucket::Bucket0), Rank::middle()];
        let json = serde_json::to_string(&ranks).unwrap();
        assert_eq!(json, r#"["0|100000","0|hzzzzz"]"#);
        let back: Vec<Rank> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ranks);
    }

    #[test]
    fn base10_rank_refuses_to_serialize() {
        let ctx = Context::new(NumeralSystem::Base10);
        let rank = ctx.parse_rank("0|199992").unwrap();
        assert_ser_tokens_error(&rank, &[], "rank 0|199992 is in base 10, only base 36 ranks serialize");
        assert!(serde_json::to_string(&rank).is_err());
        assert!(serde_json::to_string(&vec![rank]).is_err());
    }

    #[test]
    fn base10_rank_through_context() {
        let ctx = Context::new(NumeralSystem::Base10);
        let rank = ctx.parse_rank("0|199992").unwrap();

        let mut json = serde_json::Deserializer::from_str(r#""0|199992""#);
        let back = ctx.deserialize(&mut json).unwrap();
        assert_eq!(back, rank);
        assert_eq!(back.context().system(), NumeralSystem::Base10);

        let mut json = serde_json::Deserializer::from_str(r#""0|1zzzzs""#);
        assert!(ctx.deserialize(&mut json).is_err());
    }

    #[test]
    fn default_context_through_seed() {
        let rank = Rank::middle();
        let mut json = serde_json::Deserializer::from_str(r#""0|hzzzzz""#);
        assert_eq!(Context::default().deserialize(&mut json).unwrap(), rank);
    }
}
