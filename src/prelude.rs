//! Library's interface essentials.

pub use super::builder::{MachineBuilder, TokenBlock};
pub use super::grammars;
pub use super::machine::TokenMachine;
pub use super::primitives::{CharGroup, Class, ParsedToken, TokenKind};
pub use super::table::{Transition, TransitionTable};
