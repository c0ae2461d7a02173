//! # Tokenscan
//!
//! `tokenscan` breaks a flat string into a sequence of typed, contiguous
//! substrings by driving a character-classified state machine that the
//! caller configures declaratively instead of hand-writing a scanner:
//!
//! - a caller-supplied classifier maps each character to a caller-defined
//!   group
//!
//! - a [`builder`] chain registers transition rules, grouped by the token
//!   the scan is currently inside, into a frozen
//!   [`table::TransitionTable`]
//!
//! - [`machine::TokenMachine::scan`] walks an input one character pair at a
//!   time against the frozen table and returns the ordered token sequence,
//!   or fails fast on the first character pair no rule covers
//!
//! ## `machine`
//!
//! Once built, a [`machine::TokenMachine`] is immutable: `scan` borrows it
//! and keeps all scratch state local, so one machine may back any number of
//! sequential or concurrent scans, each producing an independent result.
//!
//! ## `grammars`
//!
//! [`grammars`] ships two worked consumers of the engine — MIME
//! content-type strings ([`grammars::content_type`]) and delimited dates
//! ([`grammars::date`]) — each exposing its classifier, a shared frozen
//! machine, and a `scan` convenience entry point.
//!
//! ## Example
//!
//! Configuring and running a small word/gap grammar.
//!
//! ```rust
//! # use tokenscan::Error;
//! use tokenscan::prelude::*;
//!
//! # fn main() -> Result<(), Error> {
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Token {
//!     Word,
//!     Gap,
//! }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Group {
//!     Letter,
//!     Space,
//! }
//!
//! let classify = |c: char| {
//!     if c == ' ' {
//!         Group::Space
//!     } else {
//!         Group::Letter
//!     }
//! };
//!
//! let machine = TokenMachine::builder(classify)
//!     .when_token_is(Token::Word)
//!     .stay_within([Group::Letter])?
//!     .legal_transition(Group::Letter, Group::Space, Token::Gap)?
//!     .when_token_is(Token::Gap)
//!     .stay_within([Group::Space])?
//!     .legal_transition(Group::Space, Group::Letter, Token::Word)?
//!     .build();
//!
//! let tokens = machine.scan("hello rust", Token::Word)?;
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0], ParsedToken::new(Token::Word, "hello"));
//! assert_eq!(tokens[1], ParsedToken::new(Token::Gap, " "));
//! assert_eq!(tokens[2], ParsedToken::new(Token::Word, "rust"));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod grammars;
pub mod machine;
pub mod prelude;
pub mod primitives;
pub mod table;

pub use error::{Error, Result};
