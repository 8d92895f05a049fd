//! # Compiled Regex
//!
//! A single [`RegexSpec`] lowered through an [`Nfa`] into a [`Dfa`].

use core::ops::Range;

use crate::{
    automata::{Dfa, DfaStatus},
    pattern::RegexSpec,
};

/// A compiled single-pattern matcher.
///
/// Matching is anchored at the start of the input; see
/// [`find_long`](Self::find_long) and [`find_first`](Self::find_first)
/// for unanchored search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRegex {
    dfa: Dfa,
}

impl CompiledRegex {
    /// Compile a pattern.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(spec)))]
    pub fn new(spec: &RegexSpec) -> Self {
        let nfa = spec.to_nfa();
        let dfa = Dfa::from_nfa(&nfa);
        Self { dfa }
    }

    /// The underlying automaton.
    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    /// The number of DFA states.
    pub fn num_states(&self) -> usize {
        self.dfa.num_states()
    }

    /// The length of the longest prefix of `text` which matches.
    ///
    /// An accepting start state matches the empty prefix.
    pub fn long_match_length(
        &self,
        text: &[u8],
    ) -> Option<usize> {
        let mut state = Dfa::<DfaStatus>::START;
        let mut best = None;

        match self.dfa.status(state) {
            DfaStatus::Accept => best = Some(0),
            DfaStatus::Reject => return None,
            DfaStatus::Pass => {}
        }

        for (idx, &byte) in text.iter().enumerate() {
            state = self.dfa.next(state, byte);
            match self.dfa.status(state) {
                DfaStatus::Accept => best = Some(idx + 1),
                DfaStatus::Reject => break,
                DfaStatus::Pass => {}
            }
        }

        best
    }

    /// The length of the shortest prefix of `text` which matches.
    pub fn first_match_length(
        &self,
        text: &[u8],
    ) -> Option<usize> {
        let mut state = Dfa::<DfaStatus>::START;

        match self.dfa.status(state) {
            DfaStatus::Accept => return Some(0),
            DfaStatus::Reject => return None,
            DfaStatus::Pass => {}
        }

        for (idx, &byte) in text.iter().enumerate() {
            state = self.dfa.next(state, byte);
            match self.dfa.status(state) {
                DfaStatus::Accept => return Some(idx + 1),
                DfaStatus::Reject => return None,
                DfaStatus::Pass => {}
            }
        }

        None
    }

    /// Does all of `text` match?
    pub fn matches(
        &self,
        text: &[u8],
    ) -> bool {
        self.long_match_length(text) == Some(text.len())
    }

    /// Find the longest match starting anywhere in `text`.
    ///
    /// Tries every start offset in turn; the earliest offset wins ties.
    /// Quadratic in `text.len()`.
    pub fn find_long(
        &self,
        text: &[u8],
    ) -> Option<Range<usize>> {
        let mut best: Option<Range<usize>> = None;
        for offset in 0..=text.len() {
            if let Some(len) = self.long_match_length(&text[offset..])
                && best.as_ref().is_none_or(|b| len > b.len())
            {
                best = Some(offset..offset + len);
            }
        }
        best
    }

    /// Find the shortest match at the earliest start offset in `text`.
    ///
    /// Quadratic in `text.len()`.
    pub fn find_first(
        &self,
        text: &[u8],
    ) -> Option<Range<usize>> {
        (0..=text.len()).find_map(|offset| {
            self.first_match_length(&text[offset..])
                .map(|len| offset..offset + len)
        })
    }
}

impl From<&RegexSpec> for CompiledRegex {
    fn from(spec: &RegexSpec) -> Self {
        Self::new(spec)
    }
}
