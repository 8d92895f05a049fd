//! # Deterministic Finite Automata
//!
//! A [`Dfa`] is an arena of [`DfaState`]s with dense byte transitions.
//! State `0` is always the start state.
//!
//! [`Dfa::from_nfa`] performs the subset (powerset) construction.

use crate::{
    automata::{Nfa, NfaTraversal, StateSet},
    types::{ALPHABET_SIZE, CommonHashMap, StateId, hash_map_new},
};

/// The verdict carried by a compiled-regex DFA state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DfaStatus {
    /// Still consuming; no verdict yet.
    #[default]
    Pass,

    /// The input consumed so far matches.
    Accept,

    /// No continuation of the input can match.
    Reject,
}

/// A state in a [`Dfa`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaState<S> {
    /// The state's status payload.
    pub status: S,

    /// Byte transitions; total over all 256 byte values.
    pub transitions: [StateId; ALPHABET_SIZE],
}

/// A deterministic finite automaton over bytes.
///
/// The status payload `S` is [`DfaStatus`] for single patterns; product
/// automata carry an index into an auxiliary status table instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa<S = DfaStatus> {
    states: Vec<DfaState<S>>,
}

impl<S> Default for Dfa<S> {
    fn default() -> Self {
        Self { states: Vec::new() }
    }
}

impl<S: Copy> Dfa<S> {
    /// The start state.
    pub const START: StateId = 0;

    /// The number of states.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// All states, by index.
    pub fn states(&self) -> &[DfaState<S>] {
        &self.states
    }

    /// Get a state's status payload.
    #[inline(always)]
    pub fn status(
        &self,
        id: StateId,
    ) -> S {
        self.states[id].status
    }

    /// Take a transition.
    #[inline(always)]
    pub fn next(
        &self,
        id: StateId,
        byte: u8,
    ) -> StateId {
        self.states[id].transitions[byte as usize]
    }

    /// Append a state whose transitions all loop to the start state.
    ///
    /// Builders overwrite every transition before the automaton is used.
    pub fn push_state(
        &mut self,
        status: S,
    ) -> StateId {
        let id = self.states.len();
        self.states.push(DfaState {
            status,
            transitions: [Self::START; ALPHABET_SIZE],
        });
        id
    }

    /// Set a transition.
    pub fn set_transition(
        &mut self,
        from: StateId,
        byte: u8,
        to: StateId,
    ) {
        self.states[from].transitions[byte as usize] = to;
    }

    /// Overwrite a state's status payload.
    pub fn set_status(
        &mut self,
        id: StateId,
        status: S,
    ) {
        self.states[id].status = status;
    }
}

impl Dfa<DfaStatus> {
    /// Subset construction.
    ///
    /// Each reachable set of simultaneously active NFA states becomes one
    /// DFA state. The initial walk is state `0`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(nfa)))]
    pub fn from_nfa(nfa: &Nfa) -> Self {
        let mut dfa = Self::default();
        let mut seen: CommonHashMap<StateSet, StateId> = hash_map_new();
        let mut open: Vec<(StateId, NfaTraversal)> = Vec::new();

        let start = NfaTraversal::initialize(nfa);
        let id = dfa.push_state(start.status());
        seen.insert(start.active().clone(), id);
        open.push((id, start));

        while let Some((from, walk)) = open.pop() {
            for byte in 0..=u8::MAX {
                let next = walk.consume(byte);
                let to = match seen.get(next.active()) {
                    Some(&to) => to,
                    None => {
                        let to = dfa.push_state(next.status());
                        seen.insert(next.active().clone(), to);
                        open.push((to, next));
                        to
                    }
                };
                dfa.set_transition(from, byte, to);
            }
        }

        log::debug!(
            "subset construction: {} NFA states -> {} DFA states",
            nfa.len(),
            dfa.num_states()
        );

        dfa
    }

    /// Is `id` an accepting state?
    #[inline(always)]
    pub fn is_accept(
        &self,
        id: StateId,
    ) -> bool {
        self.status(id) == DfaStatus::Accept
    }

    /// Is `id` a rejecting state?
    #[inline(always)]
    pub fn is_reject(
        &self,
        id: StateId,
    ) -> bool {
        self.status(id) == DfaStatus::Reject
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automata::NfaFlags;

    /// Accepts `ab`.
    fn ab_nfa() -> Nfa {
        let mut nfa = Nfa::with_states(4);
        nfa.set_state(0, NfaFlags::START, 3);
        nfa.set_transition(0, b'a', 1);
        nfa.set_state(1, NfaFlags::empty(), 3);
        nfa.set_transition(1, b'b', 2);
        nfa.set_state(2, NfaFlags::ACCEPT, 3);
        nfa.set_state(3, NfaFlags::REJECT, 3);
        nfa
    }

    #[test]
    fn test_from_nfa() {
        let dfa = Dfa::from_nfa(&ab_nfa());
        assert_eq!(dfa.num_states(), 4);
        assert_eq!(dfa.status(Dfa::<DfaStatus>::START), DfaStatus::Pass);

        let s = dfa.next(0, b'a');
        assert_eq!(dfa.status(s), DfaStatus::Pass);
        let s = dfa.next(s, b'b');
        assert!(dfa.is_accept(s));
        let s = dfa.next(s, b'b');
        assert!(dfa.is_reject(s));

        // The sink is shared.
        assert_eq!(dfa.next(0, b'z'), s);
        assert!((0..=u8::MAX).all(|b| dfa.next(s, b) == s));
    }

    #[test]
    fn test_nondeterministic_merge() {
        // Two start states; `a` reaches both an accept and a pass state.
        let mut nfa = Nfa::with_states(4);
        nfa.set_state(0, NfaFlags::START, 3);
        nfa.set_transition(0, b'a', 1);
        nfa.set_state(1, NfaFlags::ACCEPT, 3);
        nfa.set_state(2, NfaFlags::START, 3);
        nfa.set_transition(2, b'a', 2);
        nfa.set_state(3, NfaFlags::REJECT, 3);

        let dfa = Dfa::from_nfa(&nfa);
        let s = dfa.next(0, b'a');
        assert!(dfa.is_accept(s));
        let s = dfa.next(s, b'a');
        assert_eq!(dfa.status(s), DfaStatus::Pass);
        let s = dfa.next(s, b'b');
        assert!(dfa.is_reject(s));
    }
}
