//! # NFA Traversal
//!
//! Tracks the set of simultaneously active states of an [`Nfa`] while
//! consuming bytes, along with aggregate accept/reject counts.

use crate::{
    automata::{DfaStatus, Nfa, NfaFlags, StateSet},
    types::StateId,
};

/// The state of a walk through an [`Nfa`].
///
/// After construction (and after every [`consume`](Self::consume)) the
/// active set is closed under epsilon edges.
#[derive(Debug, Clone)]
pub struct NfaTraversal<'a> {
    nfa: &'a Nfa,
    active: StateSet,
    num_accept: usize,
    num_reject: usize,
    num_hot: usize,
}

impl<'a> NfaTraversal<'a> {
    /// Begin a walk: every `START` state, closed under epsilon edges.
    pub fn initialize(nfa: &'a Nfa) -> Self {
        let mut active = StateSet::new(nfa.len());
        for id in nfa.states_with(NfaFlags::START) {
            active.insert(id);
        }
        Self::from_active(nfa, active)
    }

    /// Build a walk from an explicit active set, then close it.
    pub fn from_active(
        nfa: &'a Nfa,
        active: StateSet,
    ) -> Self {
        debug_assert_eq!(active.universe(), nfa.len());
        let mut traversal = Self {
            nfa,
            active,
            num_accept: 0,
            num_reject: 0,
            num_hot: 0,
        };
        traversal.expand_epsilon();
        traversal
    }

    /// Consume a byte.
    ///
    /// ## Returns
    /// The walk after taking every active state's transition on `byte`.
    pub fn consume(
        &self,
        byte: u8,
    ) -> NfaTraversal<'a> {
        let mut next = StateSet::new(self.nfa.len());
        self.consume_into(byte, &mut next);
        Self::from_active(self.nfa, next)
    }

    fn consume_into(
        &self,
        byte: u8,
        next: &mut StateSet,
    ) {
        next.clear();
        for id in self.active.iter() {
            next.insert(self.nfa.state(id).transitions[byte as usize]);
        }
    }

    /// Follow epsilon edges to a fixpoint, then recount.
    ///
    /// The active set only grows and is bounded by the state count,
    /// so cycles in the epsilon graph terminate.
    pub fn expand_epsilon(&mut self) {
        let mut num_hot = self.active.len();
        loop {
            let hot: Vec<StateId> = self.active.iter().collect();
            for id in hot {
                for &target in &self.nfa.state(id).epsilons {
                    self.active.insert(target);
                }
            }

            let prior = num_hot;
            num_hot = self.active.len();
            if prior == num_hot {
                break;
            }
        }

        self.num_hot = num_hot;
        self.num_accept = 0;
        self.num_reject = 0;
        for id in self.active.iter() {
            let flags = self.nfa.state(id).flags;
            if flags.contains(NfaFlags::ACCEPT) {
                self.num_accept += 1;
            }
            if flags.contains(NfaFlags::REJECT) {
                self.num_reject += 1;
            }
        }
    }

    /// The automaton being walked.
    pub fn nfa(&self) -> &'a Nfa {
        self.nfa
    }

    /// The active states.
    pub fn active(&self) -> &StateSet {
        &self.active
    }

    /// Is `state` active?
    pub fn is_active(
        &self,
        state: StateId,
    ) -> bool {
        self.active.contains(state)
    }

    /// The number of active accepting states.
    pub fn num_accept(&self) -> usize {
        self.num_accept
    }

    /// The number of active rejecting states.
    pub fn num_reject(&self) -> usize {
        self.num_reject
    }

    /// The number of active states.
    pub fn num_hot(&self) -> usize {
        self.num_hot
    }

    /// The verdict a DFA state built from this walk carries.
    ///
    /// Accepting if any active state accepts; rejecting if every active
    /// state rejects; otherwise still undecided.
    pub fn status(&self) -> DfaStatus {
        if self.num_accept > 0 {
            DfaStatus::Accept
        } else if self.num_hot == self.num_reject {
            DfaStatus::Reject
        } else {
            DfaStatus::Pass
        }
    }
}
