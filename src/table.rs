//! The frozen mapping from token kinds to their ordered transition rules.

use bincode::{Decode, Encode};
use rustc_hash::FxHashMap as HashMap;

use crate::primitives::{CharGroup, TokenKind};

/// A single transition rule.
///
/// While the scan is inside the owning token, a character pair whose groups
/// fall within (`from`, `to`) is legal and moves the scan to the `result`
/// token. The owning token is the key under which the rule is registered in
/// the [`TransitionTable`].
#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub struct Transition<T: TokenKind, G: CharGroup> {
    from: Vec<G>,
    to: Vec<G>,
    result: T,
}

impl<T: TokenKind, G: CharGroup> Transition<T, G> {
    pub(crate) fn new(from: Vec<G>, to: Vec<G>, result: T) -> Self {
        Self { from, to, result }
    }

    /// Groups the current character may belong to for this rule to apply.
    pub fn from_groups(&self) -> &[G] {
        &self.from
    }

    /// Groups the next character may belong to for this rule to apply.
    pub fn to_groups(&self) -> &[G] {
        &self.to
    }

    /// Token the scan is in after this rule applies.
    pub fn result(&self) -> &T {
        &self.result
    }

    fn matches(&self, from: &G, to: &G) -> bool {
        self.from.contains(from) && self.to.contains(to)
    }
}

/// `TransitionTable` maps each token kind to its transition rules.
///
/// Rules are kept in registration order per token; [`TransitionTable::resolve`]
/// returns the first match in that order, which is the observable tie-break
/// for overlapping rules. The table is populated through the builder and is
/// read-only afterwards, so it can back any number of concurrent scans.
#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub struct TransitionTable<T: TokenKind, G: CharGroup> {
    rules: HashMap<T, Vec<Transition<T, G>>>,
}

impl<T: TokenKind, G: CharGroup> TransitionTable<T, G> {
    pub(crate) fn new() -> Self {
        Self {
            rules: HashMap::default(),
        }
    }

    /// Ensures a rule list exists for `token`, even if it stays empty.
    pub(crate) fn open_block(&mut self, token: T) {
        self.rules.entry(token).or_default();
    }

    pub(crate) fn push(&mut self, owner: T, rule: Transition<T, G>) {
        self.rules.entry(owner).or_default().push(rule);
    }

    /// Returns the rules registered under `token`, in registration order.
    pub fn rules_for(&self, token: &T) -> &[Transition<T, G>] {
        self.rules.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the first rule under `token` matching the (`from`, `to`) group
    /// pair, or `None` if the pair is illegal there.
    pub fn resolve(&self, token: &T, from: &G, to: &G) -> Option<&Transition<T, G>> {
        self.rules_for(token).iter().find(|r| r.matches(from, to))
    }

    /// Total number of registered rules across all token kinds.
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.values().all(Vec::is_empty)
    }
}

impl<T: TokenKind, G: CharGroup> std::fmt::Display for TransitionTable<T, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TransitionTable object with rules:")?;
        for (token, rules) in self.rules.iter() {
            for rule in rules {
                writeln!(
                    f,
                    "{:?}: {:?} -> {:?} => {:?}",
                    token, rule.from, rule.to, rule.result
                )?;
            }
        }
        Ok(())
    }
}
