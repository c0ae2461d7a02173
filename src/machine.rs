//! The frozen scanning engine: a classifier plus a transition table.

use crate::builder::MachineBuilder;
use crate::primitives::{CharGroup, Class, ParsedToken, TokenKind};
use crate::table::TransitionTable;
use crate::{Error, Result};

/// `TokenMachine` breaks strings into typed tokens by walking its transition
/// table one character pair at a time.
///
/// A machine is immutable once built. [`TokenMachine::scan`] takes `&self`
/// and keeps all scratch state local, so one machine may serve any number of
/// sequential or concurrent scans, each returning an independent token
/// sequence.
pub struct TokenMachine<T: TokenKind, G: CharGroup, C> {
    classifier: C,
    table: TransitionTable<T, G>,
}

impl<T, G, C> TokenMachine<T, G, C>
where
    T: TokenKind,
    G: CharGroup,
    C: Fn(char) -> G,
{
    /// Starts configuring a new machine around `classifier`.
    ///
    /// The classifier must be pure: it is consulted once per character per
    /// scan step, and scans are only deterministic if it is.
    pub fn builder(classifier: C) -> MachineBuilder<T, G, C> {
        MachineBuilder::new(classifier)
    }

    pub(crate) fn from_parts(classifier: C, table: TransitionTable<T, G>) -> Self {
        Self { classifier, table }
    }

    /// Returns the frozen transition table.
    pub fn table(&self) -> &TransitionTable<T, G> {
        &self.table
    }

    /// Classifies one scan position.
    ///
    /// A real character goes through the caller's classifier; the position
    /// one past the last character yields [`Class::End`] without consulting
    /// it. This is the only way a scan observes the end of its input — no
    /// character value doubles as an end marker.
    pub fn classify(&self, position: Option<char>) -> Class<G> {
        match position {
            Some(c) => Class::Group((self.classifier)(c)),
            None => Class::End,
        }
    }

    /// Scans `input` into an ordered token sequence.
    ///
    /// `starting_token` asserts the token category of the first character;
    /// the machine does not infer it. The input is consumed exactly as given
    /// (no implicit trimming), and the concatenation of the returned token
    /// values reproduces it. Scanning an empty string fails with
    /// [`Error::EmptyInput`], and the first character pair with no matching
    /// rule fails the whole scan with [`Error::IllegalTransition`] — no
    /// partial sequence is returned.
    pub fn scan(&self, input: &str, starting_token: T) -> Result<Vec<ParsedToken<T>>> {
        let mut chars = input.chars();
        let first = chars.next().ok_or(Error::EmptyInput)?;

        let mut tokens = Vec::new();
        let mut current_token = starting_token;
        let mut current_group = (self.classifier)(first);
        let mut running = String::from(first);

        // Walk (current, next) pairs, with one virtual step past the last
        // character for the end-of-input sentinel.
        let mut offset = 1;
        loop {
            let step = chars.next();
            match (step, self.classify(step)) {
                (Some(next_char), Class::Group(next_group)) => {
                    let rule = self
                        .table
                        .resolve(&current_token, &current_group, &next_group)
                        .ok_or_else(|| {
                            Error::illegal_transition(
                                &current_token,
                                &current_group,
                                &next_group,
                                offset,
                            )
                        })?;

                    // A token boundary occurs exactly at result-token
                    // changes, never at group changes within one token.
                    if rule.result() != &current_token {
                        log::trace!("emit {current_token:?} ({running:?})");
                        tokens.push(ParsedToken::new(
                            std::mem::replace(&mut current_token, rule.result().clone()),
                            std::mem::take(&mut running),
                        ));
                    }

                    running.push(next_char);
                    current_group = next_group;
                    offset += 1;
                }
                _ => {
                    log::trace!("emit {current_token:?} ({running:?})");
                    tokens.push(ParsedToken::new(current_token, running));
                    return Ok(tokens);
                }
            }
        }
    }
}

impl<T: TokenKind, G: CharGroup, C> std::fmt::Debug for TokenMachine<T, G, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenMachine")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Tok {
        Word,
        Gap,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Grp {
        Letter,
        Digit,
        Space,
        Other,
    }

    fn classify(c: char) -> Grp {
        match c {
            ' ' => Grp::Space,
            '0'..='9' => Grp::Digit,
            c if c.is_ascii_punctuation() => Grp::Other,
            _ => Grp::Letter,
        }
    }

    type WordMachine = TokenMachine<Tok, Grp, fn(char) -> Grp>;

    fn word_machine() -> WordMachine {
        TokenMachine::builder(classify as fn(char) -> Grp)
            .when_token_is(Tok::Word)
            .stay_within([Grp::Letter, Grp::Digit])
            .expect("Rule failed")
            .allow([Grp::Letter, Grp::Digit], [Grp::Space], Tok::Gap)
            .expect("Rule failed")
            .when_token_is(Tok::Gap)
            .stay_within([Grp::Space])
            .expect("Rule failed")
            .legal_transition(Grp::Space, Grp::Letter, Tok::Word)
            .expect("Rule failed")
            .build()
    }

    #[test]
    fn splits_on_token_changes_only() {
        let machine = word_machine();
        let tokens = machine.scan("ab cd", Tok::Word).expect("Scan failed");
        assert_eq!(
            tokens,
            vec![
                ParsedToken::new(Tok::Word, "ab"),
                ParsedToken::new(Tok::Gap, " "),
                ParsedToken::new(Tok::Word, "cd"),
            ]
        );
    }

    #[test]
    fn merges_group_changes_within_one_token() {
        let machine = word_machine();
        let tokens = machine.scan("a1b2", Tok::Word).expect("Scan failed");
        assert_eq!(tokens, vec![ParsedToken::new(Tok::Word, "a1b2")]);
    }

    #[test]
    fn covers_the_input_exactly() {
        let machine = word_machine();
        let input = "ab  cd9 x";
        let tokens = machine.scan(input, Tok::Word).expect("Scan failed");
        let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn scans_are_deterministic() {
        let machine = word_machine();
        let a = machine.scan("ab cd", Tok::Word).expect("Scan failed");
        let b = machine.scan("ab cd", Tok::Word).expect("Scan failed");
        assert_eq!(a, b);
    }

    #[test]
    fn sequential_scans_do_not_accumulate() {
        let machine = word_machine();
        machine.scan("ab cd", Tok::Word).expect("Scan failed");
        let second = machine.scan("xy", Tok::Word).expect("Scan failed");
        assert_eq!(second, vec![ParsedToken::new(Tok::Word, "xy")]);
    }

    #[test]
    fn fails_fast_with_no_partial_output() {
        let machine = word_machine();
        match machine.scan("ab!", Tok::Word) {
            Err(err) => assert_eq!(
                err,
                Error::IllegalTransition {
                    token: "Word".to_string(),
                    from: "Letter".to_string(),
                    to: "Other".to_string(),
                    offset: 2,
                }
            ),
            Ok(_) => unreachable!(),
        }
    }

    #[test]
    fn first_registered_rule_wins_ties() {
        // Both rules match Letter -> Space; the first keeps the token, so the
        // scan must not split there.
        let machine = TokenMachine::builder(classify as fn(char) -> Grp)
            .when_token_is(Tok::Word)
            .stay_within([Grp::Letter, Grp::Space])
            .expect("Rule failed")
            .allow([Grp::Letter], [Grp::Space], Tok::Gap)
            .expect("Rule failed")
            .build();

        let tokens = machine.scan("ab cd", Tok::Word).expect("Scan failed");
        assert_eq!(tokens, vec![ParsedToken::new(Tok::Word, "ab cd")]);
    }

    #[test]
    fn empty_input_is_an_error() {
        let machine = word_machine();
        match machine.scan("", Tok::Word) {
            Err(Error::EmptyInput) => {}
            _ => unreachable!(),
        }
    }

    #[test]
    fn end_of_input_is_out_of_band() {
        let machine = word_machine();
        assert_eq!(machine.classify(None), Class::End);
        assert_eq!(machine.classify(Some('a')), Class::Group(Grp::Letter));
        // A literal NUL is an ordinary character, not an end marker.
        assert_eq!(machine.classify(Some('\0')), Class::Group(Grp::Letter));
        let tokens = machine.scan("a\u{0}b", Tok::Word).expect("Scan failed");
        assert_eq!(tokens, vec![ParsedToken::new(Tok::Word, "a\u{0}b")]);
    }

    #[test]
    fn single_character_input_emits_the_starting_token() {
        let machine = word_machine();
        let tokens = machine.scan("a", Tok::Word).expect("Scan failed");
        assert_eq!(tokens, vec![ParsedToken::new(Tok::Word, "a")]);
    }

    #[test]
    fn frozen_machine_is_shareable_across_threads() {
        let machine = word_machine();
        std::thread::scope(|scope| {
            let left = scope.spawn(|| machine.scan("ab cd", Tok::Word));
            let right = scope.spawn(|| machine.scan("xy", Tok::Word));
            assert_eq!(left.join().expect("Join failed").expect("Scan failed").len(), 3);
            assert_eq!(right.join().expect("Join failed").expect("Scan failed").len(), 1);
        });
    }
}
