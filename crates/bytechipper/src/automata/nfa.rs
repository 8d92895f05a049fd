//! # Nondeterministic Finite Automata
//!
//! An [`Nfa`] is a flat arena of [`NfaState`]s. Every reference between
//! states is an index into the arena; indices are stable for the life of
//! the automaton.

use core::ops::Range;

use crate::types::{ALPHABET_SIZE, StateId};

bitflags::bitflags! {
    /// Status flags on an NFA state.
    ///
    /// The flags are not mutually exclusive; a state may both accept and
    /// reject, and what that means is up to the consumer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NfaFlags: u8 {
        /// A state active before any input is consumed.
        const START = 1;

        /// A state which accepts the input consumed so far.
        const ACCEPT = 2;

        /// A state which can never accept again.
        const REJECT = 4;
    }
}

/// A state in an [`Nfa`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfaState {
    /// Status flags.
    pub flags: NfaFlags,

    /// Byte transitions; total over all 256 byte values.
    pub transitions: [StateId; ALPHABET_SIZE],

    /// Transitions which consume no input.
    pub epsilons: Vec<StateId>,
}

impl NfaState {
    fn blank() -> Self {
        Self {
            flags: NfaFlags::empty(),
            transitions: [0; ALPHABET_SIZE],
            epsilons: Vec::new(),
        }
    }
}

/// A nondeterministic finite automaton over bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<NfaState>,
}

impl Nfa {
    /// Allocate an automaton of `num_states` blank states.
    ///
    /// Blank states must be packed (see
    /// [`RegexSpec::pack_states`](crate::pattern::RegexSpec::pack_states))
    /// before the automaton is traversed.
    pub fn with_states(num_states: usize) -> Self {
        Self {
            states: vec![NfaState::blank(); num_states],
        }
    }

    /// The number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Is the automaton empty?
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All states, by index.
    pub fn states(&self) -> &[NfaState] {
        &self.states
    }

    /// Get a state.
    pub fn state(
        &self,
        id: StateId,
    ) -> &NfaState {
        &self.states[id]
    }

    /// Get a mutable state.
    pub fn state_mut(
        &mut self,
        id: StateId,
    ) -> &mut NfaState {
        &mut self.states[id]
    }

    /// Overwrite a state: set its flags and route every byte to `target`.
    ///
    /// Any existing epsilon edges are left in place.
    pub fn set_state(
        &mut self,
        id: StateId,
        flags: NfaFlags,
        target: StateId,
    ) {
        let state = &mut self.states[id];
        state.flags = flags;
        state.transitions.fill(target);
    }

    /// Route a single byte from `id` to `target`.
    pub fn set_transition(
        &mut self,
        id: StateId,
        byte: u8,
        target: StateId,
    ) {
        self.states[id].transitions[byte as usize] = target;
    }

    /// Add an epsilon edge.
    pub fn add_epsilon(
        &mut self,
        from: StateId,
        to: StateId,
    ) {
        self.states[from].epsilons.push(to);
    }

    /// Clear `flag` on every state in `range` which carries it.
    ///
    /// ## Returns
    /// The states which carried the flag, in ascending order.
    pub fn take_flag(
        &mut self,
        range: Range<StateId>,
        flag: NfaFlags,
    ) -> Vec<StateId> {
        let mut taken = Vec::new();
        for id in range {
            let state = &mut self.states[id];
            if state.flags.contains(flag) {
                state.flags.remove(flag);
                taken.push(id);
            }
        }
        taken
    }

    /// Iterate the ids of states carrying `flag`.
    pub fn states_with(
        &self,
        flag: NfaFlags,
    ) -> impl Iterator<Item = StateId> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.flags.contains(flag))
            .map(|(id, _)| id)
    }
}
