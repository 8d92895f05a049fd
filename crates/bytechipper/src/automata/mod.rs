//! # Finite Automata
//!
//! Byte-level automata used by the pattern compiler:
//! * [`Nfa`] - the flat state arena that pattern combinators pack into.
//! * [`NfaTraversal`] - the epsilon-closed active set of a walk over an [`Nfa`].
//! * [`Dfa`] - the deterministic automaton built by subset construction.

mod dfa;
mod nfa;
mod state_set;
mod traversal;

#[doc(inline)]
pub use dfa::*;
#[doc(inline)]
pub use nfa::*;
#[doc(inline)]
pub use state_set::*;
#[doc(inline)]
pub use traversal::*;
