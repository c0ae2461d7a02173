//! Defines fundamental types used throughout the crate.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Caller-defined character class.
///
/// Implemented automatically for any type with the required bounds; callers
/// normally use a plain `enum` deriving `Clone, PartialEq, Eq, Debug`.
pub trait CharGroup: Clone + Eq + Debug {}

impl<G: Clone + Eq + Debug> CharGroup for G {}

/// Caller-defined semantic token category.
///
/// `Hash` is required because the transition table is keyed on token kinds.
pub trait TokenKind: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> TokenKind for T {}

/// Classification of one scan position: either a caller group or the end of
/// the input.
///
/// The end-of-input sentinel lives outside the caller's group domain, so no
/// group value a classifier can return ever collides with it. A literal NUL
/// in the input is an ordinary character and reaches the classifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Class<G> {
    Group(G),
    End,
}

/// One maximal run of input characters that stayed within a single token
/// classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedToken<T> {
    /// Token category asserted by the matched transition rules.
    pub kind: T,
    /// The contiguous slice of input covered by this token.
    pub value: String,
}

impl<T> ParsedToken<T> {
    pub fn new(kind: T, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
