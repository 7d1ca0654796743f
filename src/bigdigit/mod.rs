//! Digit storage for big integers
//!
//! Integers are stored as vectors of single digits in the radix of
//! their numeral system, least significant digit first.
//!

pub(crate) mod digitvec;

pub(crate) use self::digitvec::DigitVec;
