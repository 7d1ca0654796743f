// Copyright 2024 Andrew Kubera
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lexicographically sortable rank keys
//!
//! A [`Rank`] is a short string such as `0|hzzzzz` which sorts by
//! plain string comparison. Moving an item in an ordered list only
//! requires generating a new rank between the ranks of its new
//! neighbours; no other item has to be rewritten.
//!
//! Internally a rank is a [`Bucket`] paired with a [`BigDecimal`]: an
//! arbitrary precision decimal stored in one of the supported
//! [`NumeralSystem`]s (base-36 by default). Generating a rank between
//! two others picks the shortest decimal strictly between them, so
//! keys grow slowly under repeated insertion at the same position.
//!
//! # Example
//!
//! ```
//! use lexorank::Rank;
//! use std::str::FromStr;
//!
//! let first = Rank::from_str("0|100000").unwrap();
//! let last = first.gen_next();
//! assert_eq!(last.as_str(), "0|100008");
//!
//! let middle = first.between(&last).unwrap();
//! assert!(first < middle && middle < last);
//! assert!(first.as_str() < middle.as_str() && middle.as_str() < last.as_str());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::fmt;
use self::stdlib::string::String;

pub use num_bigint::Sign;

// digit storage & slice algorithms
mod bigdigit;
mod arithmetic;

pub mod numeral;
pub use numeral::NumeralSystem;

mod integer;
pub use integer::BigInteger;

mod decimal;
pub use decimal::BigDecimal;

pub mod rounding;
pub use rounding::RoundingMode;

mod bucket;
pub use bucket::Bucket;

// Rank parameters
mod context;
pub use context::{Context, RANK_WIDTH};

mod rank;
pub use rank::Rank;

// Ord, PartialOrd, Hash
mod impl_cmp;
// Display, Debug
mod impl_fmt;
// Neg
mod impl_ops;
// From<T>, ToPrimitive, num_bigint interop
mod impl_convert;
// FromStr
mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;


/// Broad classification of a [`LexoRankError`]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ErrorKind {
    /// A character outside the numeral system's alphabet
    InvalidDigit,
    /// Any other malformed input or unsupported combination of operands
    InvalidArgument,
}

/// Errors produced while parsing or combining ranks and numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexoRankError {
    /// No digits where at least one was required
    Empty,
    /// Character is not a digit, sign, or radix point of the numeral system
    InvalidDigit(char),
    /// Decimal text contains the radix point more than once
    MultipleRadixPoints(char),
    /// Operands belong to numeral systems with different bases
    SystemMismatch { left: u8, right: u8 },
    /// Bucket id is not one of 0, 1, or 2
    UnknownBucket(String),
    /// Rank text has no `|` between bucket and decimal
    MissingSeparator(String),
    /// Ranks live in different buckets
    DifferentBuckets,
    /// Both ranks hold the same decimal
    IdenticalRanks(String, String),
    /// Decimal lies outside the range a rank may hold
    OutOfRange(String),
    /// Complement width is zero or narrower than the magnitude
    InvalidWidth { width: usize, digits: usize },
}

impl LexoRankError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match *self {
            LexoRankError::InvalidDigit(_) => ErrorKind::InvalidDigit,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for LexoRankError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use LexoRankError::*;

        match *self {
            Empty => f.write_str("Failed to parse empty string"),
            InvalidDigit(ch) => write!(f, "Not a valid digit: {:?}", ch),
            MultipleRadixPoints(ch) => write!(f, "More than one {:?}", ch),
            SystemMismatch { left, right } => {
                write!(f, "Expected numbers of same numeral system (base {} and base {})", left, right)
            }
            UnknownBucket(ref id) => write!(f, "Unknown bucket: {}", id),
            MissingSeparator(ref text) => write!(f, "Missing '|' in rank: {}", text),
            DifferentBuckets => f.write_str("different buckets"),
            IdenticalRanks(ref a, ref b) => write!(f, "ranks cannot be the same: {}, {}", a, b),
            OutOfRange(ref text) => write!(f, "Decimal out of rank range: {}", text),
            InvalidWidth { width, digits } => {
                write!(f, "Complement width {} cannot hold {} digits", width, digits)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LexoRankError {}
