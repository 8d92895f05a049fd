//! # NFA Active-State Sets

use crate::types::StateId;

const WORD_BITS: usize = u64::BITS as usize;

/// A fixed-universe set of NFA state indices.
///
/// The universe size is fixed at construction; two sets over the same
/// universe are equal (and hash equal) iff they hold the same states,
/// which makes a `StateSet` its own canonical form for memoization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateSet {
    universe: usize,
    words: Vec<u64>,
}

impl StateSet {
    /// Create an empty set over `universe` states.
    pub fn new(universe: usize) -> Self {
        Self {
            universe,
            words: vec![0; universe.div_ceil(WORD_BITS)],
        }
    }

    /// The number of states in the universe.
    pub fn universe(&self) -> usize {
        self.universe
    }

    /// Is `state` in the set?
    pub fn contains(
        &self,
        state: StateId,
    ) -> bool {
        debug_assert!(state < self.universe);
        self.words[state / WORD_BITS] & (1u64 << (state % WORD_BITS)) != 0
    }

    /// Add `state` to the set.
    ///
    /// ## Returns
    /// `true` if the state was not already present.
    pub fn insert(
        &mut self,
        state: StateId,
    ) -> bool {
        debug_assert!(state < self.universe);
        let word = &mut self.words[state / WORD_BITS];
        let bit = 1u64 << (state % WORD_BITS);
        let fresh = *word & bit == 0;
        *word |= bit;
        fresh
    }

    /// Remove every state.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// The number of states in the set.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Is the set empty?
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Iterate the member states in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(idx, &word)| {
                let base = idx * WORD_BITS;
                BitIter { word }.map(move |bit| base + bit)
            })
    }
}

struct BitIter {
    word: u64,
}

impl Iterator for BitIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.word == 0 {
            return None;
        }
        let bit = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1;
        Some(bit)
    }
}
