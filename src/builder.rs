//! Staged configuration of a [`TokenMachine`].
//!
//! Configuration follows a fixed call grammar: open a token block, register
//! rules under it, open further blocks, then freeze. The grammar is encoded
//! in the types — [`MachineBuilder`] only offers `when_token_is`, and rule
//! registration and `build` only exist on [`TokenBlock`] — so calling out of
//! order is a compile error rather than a runtime one.

use crate::machine::TokenMachine;
use crate::primitives::{CharGroup, TokenKind};
use crate::table::{Transition, TransitionTable};
use crate::{Error, Result};

/// Builder stage with no token block open yet.
///
/// Obtained from [`TokenMachine::builder`]; the only legal move is
/// [`MachineBuilder::when_token_is`].
pub struct MachineBuilder<T: TokenKind, G: CharGroup, C> {
    classifier: C,
    table: TransitionTable<T, G>,
}

impl<T: TokenKind, G: CharGroup, C> MachineBuilder<T, G, C> {
    pub(crate) fn new(classifier: C) -> Self {
        Self {
            classifier,
            table: TransitionTable::new(),
        }
    }

    /// Opens a configuration block: subsequent rules are owned by `token`.
    pub fn when_token_is(mut self, token: T) -> TokenBlock<T, G, C> {
        log::debug!("when_token_is({token:?})");
        self.table.open_block(token.clone());
        TokenBlock {
            builder: self,
            owner: token,
        }
    }
}

/// Builder stage with an open token block.
///
/// Rules registered here are owned by the block's token. From this stage the
/// caller may register further rules, open the next block, or freeze the
/// machine with [`TokenBlock::build`].
pub struct TokenBlock<T: TokenKind, G: CharGroup, C> {
    builder: MachineBuilder<T, G, C>,
    owner: T,
}

impl<T: TokenKind, G: CharGroup, C> TokenBlock<T, G, C> {
    /// Registers one rule under the open block: while inside the owner token,
    /// a (`from`, `to`) group pair moves the scan to `result`.
    ///
    /// Both group sets must be non-empty when the rule is finalized.
    pub fn allow(
        mut self,
        from: impl IntoIterator<Item = G>,
        to: impl IntoIterator<Item = G>,
        result: T,
    ) -> Result<Self> {
        let from: Vec<G> = from.into_iter().collect();
        let to: Vec<G> = to.into_iter().collect();
        log::debug!(
            "allow({from:?} -> {to:?} => {result:?}) under {:?}",
            self.owner
        );
        if from.is_empty() {
            return Err(Error::EmptyFromGroups {
                owner: format!("{:?}", self.owner),
            });
        }
        if to.is_empty() {
            return Err(Error::EmptyToGroups {
                owner: format!("{:?}", self.owner),
            });
        }
        self.builder
            .table
            .push(self.owner.clone(), Transition::new(from, to, result));
        Ok(self)
    }

    /// Declares that `groups` keep the owner token unchanged.
    ///
    /// Sugar for `allow(groups, groups, <owner>)`.
    pub fn stay_within(self, groups: impl IntoIterator<Item = G>) -> Result<Self> {
        let groups: Vec<G> = groups.into_iter().collect();
        let owner = self.owner.clone();
        self.allow(groups.clone(), groups, owner)
    }

    /// Registers a single-pair rule.
    ///
    /// Sugar for `allow([from], [to], result)`.
    pub fn legal_transition(self, from: G, to: G, result: T) -> Result<Self> {
        self.allow([from], [to], result)
    }

    /// Opens the next configuration block.
    pub fn when_token_is(self, token: T) -> TokenBlock<T, G, C> {
        self.builder.when_token_is(token)
    }

    /// Freezes the table and returns the reusable machine.
    pub fn build(self) -> TokenMachine<T, G, C>
    where
        C: Fn(char) -> G,
    {
        TokenMachine::from_parts(self.builder.classifier, self.builder.table)
    }
}

#[cfg(test)]
mod tests {
    use crate::machine::TokenMachine;
    use crate::Error;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Tok {
        Word,
        Gap,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Grp {
        Letter,
        Space,
    }

    fn classify(c: char) -> Grp {
        if c == ' ' {
            Grp::Space
        } else {
            Grp::Letter
        }
    }

    #[test]
    fn registers_rules_under_open_blocks() {
        let machine = TokenMachine::builder(classify)
            .when_token_is(Tok::Word)
            .stay_within([Grp::Letter])
            .expect("Rule failed")
            .legal_transition(Grp::Letter, Grp::Space, Tok::Gap)
            .expect("Rule failed")
            .when_token_is(Tok::Gap)
            .legal_transition(Grp::Space, Grp::Letter, Tok::Word)
            .expect("Rule failed")
            .build();

        assert_eq!(machine.table().len(), 3);
        assert_eq!(machine.table().rules_for(&Tok::Word).len(), 2);
        assert_eq!(machine.table().rules_for(&Tok::Gap).len(), 1);
    }

    #[test]
    fn rejects_empty_from_set() {
        let result = TokenMachine::builder(classify)
            .when_token_is(Tok::Word)
            .allow([], [Grp::Letter], Tok::Word);
        match result {
            Err(Error::EmptyFromGroups { owner }) => assert_eq!(owner, "Word"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn rejects_empty_to_set() {
        let result = TokenMachine::builder(classify)
            .when_token_is(Tok::Gap)
            .allow([Grp::Space], [], Tok::Gap);
        match result {
            Err(Error::EmptyToGroups { owner }) => assert_eq!(owner, "Gap"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn stay_within_expands_to_a_self_loop() {
        let machine = TokenMachine::builder(classify)
            .when_token_is(Tok::Word)
            .stay_within([Grp::Letter])
            .expect("Rule failed")
            .build();

        let rule = machine
            .table()
            .resolve(&Tok::Word, &Grp::Letter, &Grp::Letter)
            .expect("Rule expected");
        assert_eq!(rule.result(), &Tok::Word);
    }

    #[test]
    fn blocks_may_stay_empty() {
        let machine = TokenMachine::builder(classify)
            .when_token_is(Tok::Word)
            .build();
        assert!(machine.table().is_empty());
    }
}
