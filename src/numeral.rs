//! Numeral system definitions
//!
//! The closed set of positional systems a number may be written in.
//! Each system fixes a base, a digit alphabet, and the characters used
//! for sign and radix point.
//!

use crate::LexoRankError;


const BASE_10_DIGITS: &str = "0123456789";
const BASE_36_DIGITS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";
const BASE_64_DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ^_abcdefghijklmnopqrstuvwxyz";


/// Positional numeral system used to encode integers and decimals as text
///
/// Every alphabet is in ascending ASCII order, so comparing two
/// equal-length digit strings byte-wise compares their values.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumeralSystem {
    /// Radix=*10*, digits `0-9`, radix point `.`
    Base10,
    /// Radix=*36*, digits `0-9a-z`, radix point `:`
    Base36,
    /// Radix=*64*, digits `0-9A-Z^_a-z`, radix point `:`
    Base64,
}

impl Default for NumeralSystem {
    fn default() -> Self {
        NumeralSystem::Base36
    }
}

impl NumeralSystem {
    /// Every supported numeral system
    pub const ALL: [NumeralSystem; 3] = [
        NumeralSystem::Base10,
        NumeralSystem::Base36,
        NumeralSystem::Base64,
    ];

    /// Number of distinct digits
    pub const fn base(self) -> u8 {
        match self {
            NumeralSystem::Base10 => 10,
            NumeralSystem::Base36 => 36,
            NumeralSystem::Base64 => 64,
        }
    }

    /// Digit characters, ordered by value
    pub const fn alphabet(self) -> &'static str {
        match self {
            NumeralSystem::Base10 => BASE_10_DIGITS,
            NumeralSystem::Base36 => BASE_36_DIGITS,
            NumeralSystem::Base64 => BASE_64_DIGITS,
        }
    }

    pub const fn positive_char(self) -> char {
        '+'
    }

    pub const fn negative_char(self) -> char {
        '-'
    }

    /// Character separating integer and fractional digits
    pub const fn radix_point_char(self) -> char {
        match self {
            NumeralSystem::Base10 => '.',
            NumeralSystem::Base36 | NumeralSystem::Base64 => ':',
        }
    }

    /// Map a digit character to its value
    pub fn to_digit(self, ch: char) -> Result<u8, LexoRankError> {
        let digit = match (self, ch) {
            (_, '0'..='9') => Some(ch as u8 - b'0'),
            (NumeralSystem::Base36, 'a'..='z') => Some(ch as u8 - b'a' + 10),
            (NumeralSystem::Base64, 'A'..='Z') => Some(ch as u8 - b'A' + 10),
            (NumeralSystem::Base64, '^') => Some(36),
            (NumeralSystem::Base64, '_') => Some(37),
            (NumeralSystem::Base64, 'a'..='z') => Some(ch as u8 - b'a' + 38),
            _ => None,
        };
        digit.ok_or(LexoRankError::InvalidDigit(ch))
    }

    /// Map a digit value to its character
    ///
    /// Total for `digit < self.base()`; panics otherwise.
    ///
    pub fn to_char(self, digit: u8) -> char {
        debug_assert!(digit < self.base());
        self.alphabet().as_bytes()[digit as usize] as char
    }

    /// Character of the digit zero
    pub fn zero_char(self) -> char {
        self.to_char(0)
    }

    /// Check contents of iterable contains values less than the base
    pub(crate) fn validate_digits<'a, I: IntoIterator<Item=&'a u8>>(self, i: I) -> bool {
        let base = self.base();
        i.into_iter().all(|&d| d < base)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        (valid $name:ident : $system:ident ~ $text:literal => [$($d:literal),*]) => {
            #[test]
            fn $name() {
                let digits: Result<crate::stdlib::Vec<u8>, _> = $text.chars().map(|c| NumeralSystem::$system.to_digit(c)).collect();
                assert_eq!(digits.unwrap(), [$($d),*]);
            }
        };
        (invalid $name:ident : $system:ident ~ $ch:literal) => {
            #[test]
            fn $name() {
                assert_eq!(NumeralSystem::$system.to_digit($ch), Err(LexoRankError::InvalidDigit($ch)));
            }
        };
    }

    impl_case!(valid case_base10_digits: Base10 ~ "0189" => [0, 1, 8, 9]);
    impl_case!(valid case_base36_letters: Base36 ~ "9az" => [9, 10, 35]);
    impl_case!(valid case_base64_upper: Base64 ~ "AZ" => [10, 35]);
    impl_case!(valid case_base64_symbols: Base64 ~ "^_" => [36, 37]);
    impl_case!(valid case_base64_lower: Base64 ~ "az" => [38, 63]);

    impl_case!(invalid case_base10_letter: Base10 ~ 'a');
    impl_case!(invalid case_base10_radix: Base10 ~ '.');
    impl_case!(invalid case_base36_upper: Base36 ~ 'A');
    impl_case!(invalid case_base36_caret: Base36 ~ '^');
    impl_case!(invalid case_base36_sign: Base36 ~ '-');
    impl_case!(invalid case_base64_colon: Base64 ~ ':');
    impl_case!(invalid case_base64_unicode: Base64 ~ 'é');

    #[test]
    fn alphabet_length_matches_base() {
        for system in NumeralSystem::ALL.iter() {
            assert_eq!(system.alphabet().len(), system.base() as usize);
        }
    }

    #[test]
    fn char_digit_bijection() {
        for &system in NumeralSystem::ALL.iter() {
            for digit in 0..system.base() {
                let ch = system.to_char(digit);
                assert_eq!(system.to_digit(ch), Ok(digit));
            }
            for ch in system.alphabet().chars() {
                assert_eq!(system.to_char(system.to_digit(ch).unwrap()), ch);
            }
        }
    }

    #[test]
    fn alphabets_are_ascending() {
        for system in NumeralSystem::ALL.iter() {
            let bytes = system.alphabet().as_bytes();
            assert!(bytes.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn reserved_chars() {
        assert_eq!(NumeralSystem::Base10.radix_point_char(), '.');
        assert_eq!(NumeralSystem::Base36.radix_point_char(), ':');
        assert_eq!(NumeralSystem::Base64.radix_point_char(), ':');
        for system in NumeralSystem::ALL.iter() {
            assert_eq!(system.positive_char(), '+');
            assert_eq!(system.negative_char(), '-');
        }
    }

    #[test]
    fn validate_digits() {
        assert!(NumeralSystem::Base10.validate_digits([0, 9].iter()));
        assert!(!NumeralSystem::Base10.validate_digits([0, 10].iter()));
        assert!(NumeralSystem::Base64.validate_digits([63].iter()));
    }

    #[test]
    fn default_is_base36() {
        assert_eq!(NumeralSystem::default(), NumeralSystem::Base36);
    }
}
