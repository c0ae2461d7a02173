//! Scanning delimited dates such as `2020-01-01`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::machine::TokenMachine;
use crate::primitives::ParsedToken;
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateToken {
    Year,
    YearMonthSeparator,
    Month,
    MonthDaySeparator,
    Day,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateGroup {
    Digit,
    Separator,
    Other,
}

/// Classifies one character of a delimited date.
pub fn classify(c: char) -> DateGroup {
    match c {
        '0'..='9' => DateGroup::Digit,
        '-' | '/' | '.' => DateGroup::Separator,
        _ => DateGroup::Other,
    }
}

pub type DateMachine = TokenMachine<DateToken, DateGroup, fn(char) -> DateGroup>;

fn build() -> Result<DateMachine> {
    use DateGroup::{Digit, Separator};
    use DateToken::*;

    let machine = TokenMachine::builder(classify as fn(char) -> DateGroup)
        .when_token_is(Year)
        .stay_within([Digit])?
        .legal_transition(Digit, Separator, YearMonthSeparator)?
        .when_token_is(YearMonthSeparator)
        .legal_transition(Separator, Digit, Month)?
        .when_token_is(Month)
        .stay_within([Digit])?
        .legal_transition(Digit, Separator, MonthDaySeparator)?
        .when_token_is(MonthDaySeparator)
        .legal_transition(Separator, Digit, Day)?
        .when_token_is(Day)
        .stay_within([Digit])?
        .build();
    Ok(machine)
}

/// Returns the shared frozen date machine.
pub fn machine() -> &'static DateMachine {
    static MACHINE: Lazy<DateMachine> = Lazy::new(|| build().expect("date grammar is well-formed"));
    &MACHINE
}

/// Scans `input` as a delimited date, starting inside the year.
pub fn scan(input: &str) -> Result<Vec<ParsedToken<DateToken>>> {
    machine().scan(input, DateToken::Year)
}
