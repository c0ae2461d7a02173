//! Scanning MIME content-type strings.
//!
//! Recognizes `type/subtype` with optional `; name=value` parameters, both
//! bare and double-quoted values, and repeated parameters, e.g.
//! `multipart/form-data; boundary="a b"; charset=utf-8`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::machine::TokenMachine;
use crate::primitives::ParsedToken;
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentTypeToken {
    Type,
    TypeSeparator,
    Subtype,
    PostSubtypeWhitespace,
    ParameterSeparator,
    PreParameterWhitespace,
    ParameterName,
    NameValueSeparator,
    ValueOpenQuote,
    Value,
    QuotedValue,
    ValueCloseQuote,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentTypeGroup {
    /// `tspecials` with particular significance to this grammar.
    Quote,
    Equals,
    Semicolon,
    ForwardSlash,
    Letter,
    Numeral,
    Hyphen,
    Whitespace,
    /// Anything else, including the remaining `tspecials`.
    Symbol,
}

/// Groups that may appear inside a `token` (RFC 2045 sense): type and
/// subtype names, parameter names, unquoted values.
const TOKEN_CHARS: [ContentTypeGroup; 3] = [
    ContentTypeGroup::Letter,
    ContentTypeGroup::Numeral,
    ContentTypeGroup::Hyphen,
];

/// Groups legal inside a double-quoted value: everything except the closing
/// quote.
const QUOTED_CHARS: [ContentTypeGroup; 8] = [
    ContentTypeGroup::Letter,
    ContentTypeGroup::Numeral,
    ContentTypeGroup::Hyphen,
    ContentTypeGroup::Whitespace,
    ContentTypeGroup::ForwardSlash,
    ContentTypeGroup::Equals,
    ContentTypeGroup::Semicolon,
    ContentTypeGroup::Symbol,
];

/// Classifies one character of a content-type string.
pub fn classify(c: char) -> ContentTypeGroup {
    match c {
        '-' => ContentTypeGroup::Hyphen,
        '"' => ContentTypeGroup::Quote,
        '=' => ContentTypeGroup::Equals,
        ';' => ContentTypeGroup::Semicolon,
        '/' => ContentTypeGroup::ForwardSlash,
        c if c.is_whitespace() => ContentTypeGroup::Whitespace,
        c if c.is_ascii_alphabetic() => ContentTypeGroup::Letter,
        c if c.is_ascii_digit() => ContentTypeGroup::Numeral,
        _ => ContentTypeGroup::Symbol,
    }
}

pub type ContentTypeMachine =
    TokenMachine<ContentTypeToken, ContentTypeGroup, fn(char) -> ContentTypeGroup>;

fn build() -> Result<ContentTypeMachine> {
    use ContentTypeGroup::{Equals, ForwardSlash, Quote, Semicolon, Whitespace};
    use ContentTypeToken::*;

    let machine = TokenMachine::builder(classify as fn(char) -> ContentTypeGroup)
        .when_token_is(Type)
        .stay_within(TOKEN_CHARS)?
        .allow(TOKEN_CHARS, [ForwardSlash], TypeSeparator)?
        .when_token_is(TypeSeparator)
        .allow([ForwardSlash], TOKEN_CHARS, Subtype)?
        .when_token_is(Subtype)
        .stay_within(TOKEN_CHARS)?
        .allow(TOKEN_CHARS, [Whitespace], PostSubtypeWhitespace)?
        .allow(TOKEN_CHARS, [Semicolon], ParameterSeparator)?
        .when_token_is(PostSubtypeWhitespace)
        .stay_within([Whitespace])?
        .legal_transition(Whitespace, Semicolon, ParameterSeparator)?
        .when_token_is(ParameterSeparator)
        .legal_transition(Semicolon, Whitespace, PreParameterWhitespace)?
        .allow([Semicolon], TOKEN_CHARS, ParameterName)?
        .when_token_is(PreParameterWhitespace)
        .stay_within([Whitespace])?
        .allow([Whitespace], TOKEN_CHARS, ParameterName)?
        .when_token_is(ParameterName)
        .stay_within(TOKEN_CHARS)?
        .allow(TOKEN_CHARS, [Equals], NameValueSeparator)?
        .when_token_is(NameValueSeparator)
        .legal_transition(Equals, Quote, ValueOpenQuote)?
        .allow([Equals], TOKEN_CHARS, Value)?
        .when_token_is(Value)
        .stay_within(TOKEN_CHARS)?
        .allow(TOKEN_CHARS, [Semicolon], ParameterSeparator)?
        .when_token_is(ValueOpenQuote)
        .allow([Quote], QUOTED_CHARS, QuotedValue)?
        .legal_transition(Quote, Quote, ValueCloseQuote)?
        .when_token_is(QuotedValue)
        .stay_within(QUOTED_CHARS)?
        .allow(QUOTED_CHARS, [Quote], ValueCloseQuote)?
        .when_token_is(ValueCloseQuote)
        .legal_transition(Quote, Semicolon, ParameterSeparator)?
        .build();
    Ok(machine)
}

/// Returns the shared frozen content-type machine.
pub fn machine() -> &'static ContentTypeMachine {
    static MACHINE: Lazy<ContentTypeMachine> =
        Lazy::new(|| build().expect("content-type grammar is well-formed"));
    &MACHINE
}

/// Scans `input` as a content-type string, starting inside the type.
pub fn scan(input: &str) -> Result<Vec<ParsedToken<ContentTypeToken>>> {
    machine().scan(input, ContentTypeToken::Type)
}
