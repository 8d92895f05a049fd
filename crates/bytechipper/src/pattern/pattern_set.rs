//! # Pattern Sets
//!
//! A [`PatternSet`] matches several patterns in one pass, reporting which
//! patterns accept the longest match. It is built by a
//! [`PatternSetBuilder`], which compiles each component pattern and then
//! runs a product construction over the component automata.
//!
//! ```rust
//! use bytechipper::pattern::{PatternSetBuilder, RegexSpec};
//!
//! let set = PatternSetBuilder::default()
//!     .with_pattern(RegexSpec::literal("cat"))
//!     .with_pattern(RegexSpec::literal("cats"))
//!     .compile();
//!
//! let m = set.long_match_length(b"cats!").unwrap();
//! assert_eq!(m.len, 4);
//! assert_eq!(m.types, &[1]);
//! ```

use std::time::Instant;

use crate::{
    automata::{Dfa, DfaStatus},
    pattern::{CompiledRegex, RegexSpec},
    types::{CommonHashMap, StateId, TokenTypeId, hash_map_new},
};

/// Builder for a [`PatternSet`].
///
/// Patterns are indexed in insertion order; that index is the token type
/// reported for matches of the pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSetBuilder {
    patterns: Vec<RegexSpec>,
}

impl PatternSetBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of patterns added.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Is the builder empty?
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Add a pattern.
    ///
    /// ## Returns
    /// The token type index of the pattern.
    pub fn add(
        &mut self,
        spec: RegexSpec,
    ) -> TokenTypeId {
        self.patterns.push(spec);
        self.patterns.len() - 1
    }

    /// Add a pattern, builder style.
    pub fn with_pattern(
        mut self,
        spec: RegexSpec,
    ) -> Self {
        self.add(spec);
        self
    }

    /// Compile the set.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn compile(self) -> PatternSet {
        let t0 = Instant::now();

        let components: Vec<CompiledRegex> = self.patterns.iter().map(CompiledRegex::new).collect();
        let (dfa, accepting) = product_dfa(&components);
        let set = PatternSet {
            patterns: self.patterns,
            components,
            dfa,
            accepting,
        };

        log::debug!(
            "compiled {} patterns into {} product states in {:?}",
            set.num_patterns(),
            set.num_states(),
            t0.elapsed()
        );

        set
    }
}

impl FromIterator<RegexSpec> for PatternSetBuilder {
    fn from_iter<I: IntoIterator<Item = RegexSpec>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}

impl Extend<RegexSpec> for PatternSetBuilder {
    fn extend<I: IntoIterator<Item = RegexSpec>>(
        &mut self,
        iter: I,
    ) {
        self.patterns.extend(iter);
    }
}

/// The status payload of a product-automaton state.
///
/// Accepting states name their accepting patterns as a span of the
/// set's shared accepting-index table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternStatus {
    /// The aggregate verdict.
    pub status: DfaStatus,

    /// Start of the accepting pattern indices.
    pub start: usize,

    /// Number of accepting patterns.
    pub count: usize,
}

/// A longest match reported by [`PatternSet::long_match_length`].
///
/// The type list borrows the set's accepting-index table, so a match
/// cannot outlive its set:
///
/// ```compile_fail
/// use bytechipper::pattern::{PatternSetBuilder, RegexSpec};
///
/// let set = PatternSetBuilder::default()
///     .with_pattern(RegexSpec::literal("ab"))
///     .compile();
/// let text = b"abc".to_vec();
/// let m = set.long_match_length(&text).unwrap();
/// drop(set);
/// assert_eq!(m.types, &[0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch<'a> {
    /// The match length.
    pub len: usize,

    /// Every pattern which accepts exactly this length, ascending.
    pub types: &'a [TokenTypeId],
}

/// A compiled, immutable set of patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<RegexSpec>,
    components: Vec<CompiledRegex>,
    dfa: Dfa<PatternStatus>,
    accepting: Vec<TokenTypeId>,
}

impl PatternSet {
    /// The number of patterns.
    pub fn num_patterns(&self) -> usize {
        self.patterns.len()
    }

    /// The source patterns, by token type index.
    pub fn patterns(&self) -> &[RegexSpec] {
        &self.patterns
    }

    /// The compiled component patterns, by token type index.
    pub fn components(&self) -> &[CompiledRegex] {
        &self.components
    }

    /// The number of product-automaton states.
    pub fn num_states(&self) -> usize {
        self.dfa.num_states()
    }

    /// The product automaton.
    pub fn dfa(&self) -> &Dfa<PatternStatus> {
        &self.dfa
    }

    /// The accepting pattern indices of a product state.
    pub fn accepting_types(
        &self,
        state: StateId,
    ) -> &[TokenTypeId] {
        let PatternStatus { start, count, .. } = self.dfa.status(state);
        &self.accepting[start..start + count]
    }

    /// The longest prefix of `text` matched by any pattern.
    ///
    /// ## Returns
    /// The match length and every pattern accepting at that length;
    /// `None` if no pattern matches any prefix.
    pub fn long_match_length(
        &self,
        text: &[u8],
    ) -> Option<PatternMatch<'_>> {
        let mut state = Dfa::<PatternStatus>::START;
        let mut best: Option<(usize, StateId)> = None;

        match self.dfa.status(state).status {
            DfaStatus::Accept => best = Some((0, state)),
            DfaStatus::Reject => return None,
            DfaStatus::Pass => {}
        }

        for (idx, &byte) in text.iter().enumerate() {
            state = self.dfa.next(state, byte);
            match self.dfa.status(state).status {
                DfaStatus::Accept => best = Some((idx + 1, state)),
                DfaStatus::Reject => break,
                DfaStatus::Pass => {}
            }
        }

        best.map(|(len, state)| PatternMatch {
            len,
            types: self.accepting_types(state),
        })
    }
}

/// Product construction over the component automata.
///
/// Each product state is the tuple of component states reached by the
/// same input; the tuple for the empty input is state `0`.
fn product_dfa(components: &[CompiledRegex]) -> (Dfa<PatternStatus>, Vec<TokenTypeId>) {
    let mut dfa = Dfa::default();
    let mut accepting = Vec::new();
    let mut seen: CommonHashMap<Vec<StateId>, StateId> = hash_map_new();
    let mut open: Vec<(StateId, Vec<StateId>)> = Vec::new();

    let mut allocate = |key: Vec<StateId>,
                        dfa: &mut Dfa<PatternStatus>,
                        open: &mut Vec<(StateId, Vec<StateId>)>|
     -> StateId {
        if let Some(&id) = seen.get(&key) {
            return id;
        }
        let status = product_status(components, &key, &mut accepting);
        let id = dfa.push_state(status);
        seen.insert(key.clone(), id);
        open.push((id, key));
        id
    };

    let start = vec![Dfa::<DfaStatus>::START; components.len()];
    allocate(start, &mut dfa, &mut open);

    while let Some((from, key)) = open.pop() {
        for byte in 0..=u8::MAX {
            let next: Vec<StateId> = components
                .iter()
                .zip(&key)
                .map(|(c, &s)| c.dfa().next(s, byte))
                .collect();
            let to = allocate(next, &mut dfa, &mut open);
            dfa.set_transition(from, byte, to);
        }
    }

    log::debug!(
        "product construction: {} components, {} states, {} accepting entries",
        components.len(),
        dfa.num_states(),
        accepting.len()
    );

    (dfa, accepting)
}

/// Aggregate the component verdicts of one product state.
fn product_status(
    components: &[CompiledRegex],
    key: &[StateId],
    accepting: &mut Vec<TokenTypeId>,
) -> PatternStatus {
    let start = accepting.len();
    let mut num_reject = 0;
    let mut num_pass = 0;

    for (idx, (component, &state)) in components.iter().zip(key).enumerate() {
        match component.dfa().status(state) {
            DfaStatus::Accept => accepting.push(idx),
            DfaStatus::Reject => num_reject += 1,
            DfaStatus::Pass => num_pass += 1,
        }
    }

    let count = accepting.len() - start;
    let status = if count > 0 {
        DfaStatus::Accept
    } else if num_reject > 0 && num_pass == 0 {
        DfaStatus::Reject
    } else {
        DfaStatus::Pass
    };

    PatternStatus {
        status,
        start,
        count,
    }
}
