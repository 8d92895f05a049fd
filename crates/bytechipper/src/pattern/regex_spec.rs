//! # Regex Specification Combinators
//!
//! A [`RegexSpec`] is a pattern built programmatically from combinators;
//! there is no textual regex syntax. Each node knows how many NFA states
//! it needs ([`RegexSpec::needed_states`]) and how to emit them into an
//! [`Nfa`] ([`RegexSpec::pack_states`]).
//!
//! ```rust
//! use bytechipper::pattern::RegexSpec;
//!
//! // [a-z]+(\.[a-z]+)*
//! let word = RegexSpec::plus(RegexSpec::byte_range(b'a'..=b'z'));
//! let spec = RegexSpec::concatenate([
//!     word.clone(),
//!     RegexSpec::star(RegexSpec::concatenate([RegexSpec::byte(b'.'), word])),
//! ]);
//!
//! let regex = spec.compile();
//! assert!(regex.matches(b"foo.bar"));
//! assert!(!regex.matches(b"foo."));
//! ```

use core::ops::{Range, RangeInclusive};

use crate::{
    automata::{Nfa, NfaFlags},
    pattern::CompiledRegex,
    types::StateId,
};

/// A regular expression over bytes, as a combinator tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegexSpec {
    /// Matches only the empty input.
    Epsilon,

    /// Matches exactly this byte sequence.
    Literal(Vec<u8>),

    /// Matches exactly one byte drawn from the set.
    Charset(Vec<u8>),

    /// Matches each child in sequence.
    ///
    /// An empty concatenation behaves as [`RegexSpec::Epsilon`].
    Concatenate(Vec<RegexSpec>),

    /// Matches any one child.
    ///
    /// An empty alternation behaves as [`RegexSpec::Epsilon`].
    Alternate(Vec<RegexSpec>),

    /// Matches zero or more repetitions of the child.
    Star(Box<RegexSpec>),
}

impl RegexSpec {
    /// The empty pattern.
    pub fn empty() -> Self {
        Self::Epsilon
    }

    /// A literal byte sequence.
    pub fn literal<S: AsRef<[u8]>>(seq: S) -> Self {
        Self::Literal(seq.as_ref().to_vec())
    }

    /// A single-byte literal.
    pub fn byte(byte: u8) -> Self {
        Self::Literal(vec![byte])
    }

    /// One byte drawn from `bytes`.
    pub fn charset<S: AsRef<[u8]>>(bytes: S) -> Self {
        Self::Charset(bytes.as_ref().to_vec())
    }

    /// One byte drawn from an inclusive byte range.
    pub fn byte_range(range: RangeInclusive<u8>) -> Self {
        Self::Charset(range.collect())
    }

    /// A sequence of patterns.
    pub fn concatenate<I>(children: I) -> Self
    where
        I: IntoIterator<Item = RegexSpec>,
    {
        Self::Concatenate(children.into_iter().collect())
    }

    /// A choice between patterns.
    pub fn alternate<I>(children: I) -> Self
    where
        I: IntoIterator<Item = RegexSpec>,
    {
        Self::Alternate(children.into_iter().collect())
    }

    /// Zero or more repetitions (`x*`).
    pub fn star(inner: RegexSpec) -> Self {
        Self::Star(Box::new(inner))
    }

    /// One or more repetitions (`x+`), as `x x*`.
    pub fn plus(inner: RegexSpec) -> Self {
        Self::Concatenate(vec![inner.clone(), Self::star(inner)])
    }

    /// Zero or one occurrence (`x?`), as `x | ε`.
    pub fn optional(inner: RegexSpec) -> Self {
        Self::Alternate(vec![inner, Self::Epsilon])
    }

    /// Exactly `count` repetitions (`x{N}`).
    ///
    /// `repeat(x, 0)` is an empty concatenation, and matches only the empty input.
    pub fn repeat(
        inner: RegexSpec,
        count: usize,
    ) -> Self {
        Self::Concatenate(vec![inner; count])
    }

    /// The exact number of NFA states [`pack_states`](Self::pack_states) initializes.
    pub fn needed_states(&self) -> usize {
        match self {
            Self::Epsilon => 2,
            Self::Literal(seq) => seq.len() + 2,
            Self::Charset(_) => 3,
            Self::Concatenate(children) if children.is_empty() => 2,
            Self::Concatenate(children) => children.iter().map(Self::needed_states).sum(),
            Self::Alternate(children) if children.is_empty() => 2,
            Self::Alternate(children) => 2 + children.iter().map(Self::needed_states).sum::<usize>(),
            Self::Star(inner) => 2 + inner.needed_states(),
        }
    }

    /// Emit this pattern's states into `nfa[offset..offset + self.needed_states()]`.
    ///
    /// Every state in the range is fully initialized: flags, all 256
    /// transitions, and any epsilon edges. States outside the range are
    /// untouched. Transitions never leave the range.
    ///
    /// ## Panics
    /// If `nfa` is too small to hold the range.
    pub fn pack_states(
        &self,
        nfa: &mut Nfa,
        offset: StateId,
    ) {
        match self {
            Self::Epsilon => pack_epsilon(nfa, offset),
            Self::Literal(seq) => pack_literal(nfa, offset, seq),
            Self::Charset(bytes) => pack_charset(nfa, offset, bytes),
            Self::Concatenate(children) if children.is_empty() => pack_epsilon(nfa, offset),
            Self::Concatenate(children) => pack_concatenate(nfa, offset, children),
            Self::Alternate(children) if children.is_empty() => pack_epsilon(nfa, offset),
            Self::Alternate(children) => pack_alternate(nfa, offset, children),
            Self::Star(inner) => pack_star(nfa, offset, inner),
        }
    }

    /// Build the [`Nfa`] for this pattern, with the root at state `0`.
    pub fn to_nfa(&self) -> Nfa {
        let mut nfa = Nfa::with_states(self.needed_states());
        self.pack_states(&mut nfa, 0);
        nfa
    }

    /// Compile this pattern.
    pub fn compile(&self) -> CompiledRegex {
        CompiledRegex::new(self)
    }
}

/// Pack `children` consecutively from `offset`.
///
/// ## Returns
/// Each child's state range.
fn pack_children(
    nfa: &mut Nfa,
    offset: StateId,
    children: &[RegexSpec],
) -> Vec<Range<StateId>> {
    let mut ranges = Vec::with_capacity(children.len());
    let mut base = offset;
    for child in children {
        let end = base + child.needed_states();
        child.pack_states(nfa, base);
        ranges.push(base..end);
        base = end;
    }
    ranges
}

/// Fresh START state at `offset` and its REJECT sink at `offset + 1`.
fn pack_entry_pair(
    nfa: &mut Nfa,
    offset: StateId,
    flags: NfaFlags,
) {
    let sink = offset + 1;
    nfa.set_state(offset, flags, sink);
    nfa.set_state(sink, NfaFlags::REJECT, sink);
}

fn pack_epsilon(
    nfa: &mut Nfa,
    offset: StateId,
) {
    pack_entry_pair(nfa, offset, NfaFlags::START | NfaFlags::ACCEPT);
}

fn pack_literal(
    nfa: &mut Nfa,
    offset: StateId,
    seq: &[u8],
) {
    let last = offset + seq.len();
    let sink = last + 1;

    nfa.set_state(offset, NfaFlags::START, sink);
    for (idx, &byte) in seq.iter().enumerate() {
        let here = offset + idx;
        nfa.set_state(here + 1, NfaFlags::empty(), sink);
        nfa.set_transition(here, byte, here + 1);
    }
    nfa.state_mut(last).flags.insert(NfaFlags::ACCEPT);
    nfa.set_state(sink, NfaFlags::REJECT, sink);
}

fn pack_charset(
    nfa: &mut Nfa,
    offset: StateId,
    bytes: &[u8],
) {
    let accept = offset + 1;
    let sink = offset + 2;

    nfa.set_state(offset, NfaFlags::START, sink);
    for &byte in bytes {
        nfa.set_transition(offset, byte, accept);
    }
    nfa.set_state(accept, NfaFlags::ACCEPT, sink);
    nfa.set_state(sink, NfaFlags::REJECT, sink);
}

fn pack_concatenate(
    nfa: &mut Nfa,
    offset: StateId,
    children: &[RegexSpec],
) {
    let ranges = pack_children(nfa, offset, children);

    for pair in ranges.windows(2) {
        let starts = nfa.take_flag(pair[1].clone(), NfaFlags::START);
        if starts.is_empty() {
            continue;
        }
        let accepts = nfa.take_flag(pair[0].clone(), NfaFlags::ACCEPT);
        for &accept in &accepts {
            for &start in &starts {
                nfa.add_epsilon(accept, start);
            }
        }
    }
}

fn pack_alternate(
    nfa: &mut Nfa,
    offset: StateId,
    children: &[RegexSpec],
) {
    let ranges = pack_children(nfa, offset + 2, children);
    pack_entry_pair(nfa, offset, NfaFlags::START);

    for range in ranges {
        for start in nfa.take_flag(range, NfaFlags::START) {
            nfa.add_epsilon(offset, start);
        }
    }
}

fn pack_star(
    nfa: &mut Nfa,
    offset: StateId,
    inner: &RegexSpec,
) {
    pack_entry_pair(nfa, offset, NfaFlags::START | NfaFlags::ACCEPT);

    let base = offset + 2;
    let range = base..base + inner.needed_states();
    inner.pack_states(nfa, base);

    for start in nfa.take_flag(range.clone(), NfaFlags::START) {
        nfa.add_epsilon(offset, start);
    }
    for accept in nfa.take_flag(range, NfaFlags::ACCEPT) {
        nfa.add_epsilon(accept, offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automata::NfaState;

    fn ids_with(
        nfa: &Nfa,
        flag: NfaFlags,
    ) -> Vec<StateId> {
        nfa.states_with(flag).collect()
    }

    /// Transitions never leave the packed range, and there is one entry point.
    fn assert_well_formed(spec: &RegexSpec) {
        let nfa = spec.to_nfa();
        assert_eq!(nfa.len(), spec.needed_states());
        for NfaState {
            transitions,
            epsilons,
            ..
        } in nfa.states()
        {
            assert!(transitions.iter().all(|&t| t < nfa.len()));
            assert!(epsilons.iter().all(|&t| t < nfa.len()));
        }
        assert_eq!(ids_with(&nfa, NfaFlags::START), vec![0]);
    }

    #[test]
    fn test_needed_states() {
        let a = RegexSpec::literal("a");
        let abc = RegexSpec::literal("abc");

        assert_eq!(RegexSpec::empty().needed_states(), 2);
        assert_eq!(abc.needed_states(), 5);
        assert_eq!(RegexSpec::charset("xyz").needed_states(), 3);
        assert_eq!(RegexSpec::concatenate([]).needed_states(), 2);
        assert_eq!(RegexSpec::alternate([]).needed_states(), 2);
        assert_eq!(
            RegexSpec::concatenate([a.clone(), abc.clone()]).needed_states(),
            8
        );
        assert_eq!(
            RegexSpec::alternate([a.clone(), abc.clone()]).needed_states(),
            10
        );
        assert_eq!(RegexSpec::star(abc).needed_states(), 7);
        assert_eq!(RegexSpec::plus(a.clone()).needed_states(), 3 + 5);
        assert_eq!(RegexSpec::repeat(a, 3).needed_states(), 9);
    }

    #[test]
    fn test_pack_epsilon() {
        let nfa = RegexSpec::empty().to_nfa();
        assert_eq!(nfa.state(0).flags, NfaFlags::START | NfaFlags::ACCEPT);
        assert_eq!(nfa.state(1).flags, NfaFlags::REJECT);
        assert!(nfa.state(0).transitions.iter().all(|&t| t == 1));
        assert!(nfa.state(1).transitions.iter().all(|&t| t == 1));
    }

    #[test]
    fn test_pack_literal() {
        let nfa = RegexSpec::literal("ab").to_nfa();
        assert_eq!(nfa.len(), 4);

        assert_eq!(nfa.state(0).flags, NfaFlags::START);
        assert_eq!(nfa.state(0).transitions[b'a' as usize], 1);
        assert_eq!(nfa.state(0).transitions[b'b' as usize], 3);
        assert_eq!(nfa.state(1).transitions[b'b' as usize], 2);
        assert_eq!(nfa.state(1).transitions[b'a' as usize], 3);
        assert_eq!(nfa.state(2).flags, NfaFlags::ACCEPT);
        assert!(nfa.state(2).transitions.iter().all(|&t| t == 3));
        assert_eq!(nfa.state(3).flags, NfaFlags::REJECT);
    }

    #[test]
    fn test_pack_literal_at_offset() {
        let spec = RegexSpec::literal("a");
        let mut nfa = Nfa::with_states(5);
        spec.pack_states(&mut nfa, 2);

        assert_eq!(ids_with(&nfa, NfaFlags::START), vec![2]);
        assert_eq!(ids_with(&nfa, NfaFlags::ACCEPT), vec![3]);
        assert_eq!(ids_with(&nfa, NfaFlags::REJECT), vec![4]);
        assert_eq!(nfa.state(2).transitions[b'a' as usize], 3);
        assert!(nfa.state(0).flags.is_empty());
    }

    #[test]
    fn test_pack_charset() {
        let nfa = RegexSpec::charset("xy").to_nfa();
        assert_eq!(nfa.state(0).transitions[b'x' as usize], 1);
        assert_eq!(nfa.state(0).transitions[b'y' as usize], 1);
        assert_eq!(nfa.state(0).transitions[b'z' as usize], 2);
        assert_eq!(nfa.state(1).flags, NfaFlags::ACCEPT);
        assert_eq!(nfa.state(2).flags, NfaFlags::REJECT);
    }

    #[test]
    fn test_pack_concatenate() {
        let spec = RegexSpec::concatenate([RegexSpec::literal("a"), RegexSpec::literal("b")]);
        let nfa = spec.to_nfa();

        // a: 0..3, b: 3..6
        assert_eq!(ids_with(&nfa, NfaFlags::START), vec![0]);
        assert_eq!(ids_with(&nfa, NfaFlags::ACCEPT), vec![4]);
        assert_eq!(nfa.state(1).epsilons, vec![3]);
    }

    #[test]
    fn test_pack_alternate() {
        let spec = RegexSpec::alternate([RegexSpec::literal("a"), RegexSpec::literal("b")]);
        let nfa = spec.to_nfa();

        // entry: 0, 1; a: 2..5; b: 5..8
        assert_eq!(ids_with(&nfa, NfaFlags::START), vec![0]);
        assert_eq!(nfa.state(0).epsilons, vec![2, 5]);
        assert_eq!(ids_with(&nfa, NfaFlags::ACCEPT), vec![3, 6]);
        assert_eq!(ids_with(&nfa, NfaFlags::REJECT), vec![1, 4, 7]);
    }

    #[test]
    fn test_pack_star() {
        let spec = RegexSpec::star(RegexSpec::literal("a"));
        let nfa = spec.to_nfa();

        // entry: 0, 1; a: 2..5
        assert_eq!(nfa.state(0).flags, NfaFlags::START | NfaFlags::ACCEPT);
        assert_eq!(nfa.state(0).epsilons, vec![2]);
        assert_eq!(nfa.state(3).epsilons, vec![0]);
        assert_eq!(ids_with(&nfa, NfaFlags::ACCEPT), vec![0]);
    }

    #[test]
    fn test_well_formed() {
        let a = RegexSpec::literal("a");
        let specs = [
            RegexSpec::empty(),
            RegexSpec::literal(""),
            RegexSpec::literal("hello"),
            RegexSpec::byte(b'z'),
            RegexSpec::byte_range(b'0'..=b'9'),
            RegexSpec::concatenate([]),
            RegexSpec::alternate([]),
            RegexSpec::star(RegexSpec::star(a.clone())),
            RegexSpec::optional(a.clone()),
            RegexSpec::repeat(a.clone(), 0),
            RegexSpec::concatenate([
                RegexSpec::plus(a.clone()),
                RegexSpec::alternate([RegexSpec::empty(), RegexSpec::charset("bc")]),
                RegexSpec::star(RegexSpec::concatenate([a.clone(), RegexSpec::empty()])),
            ]),
        ];
        for spec in &specs {
            assert_well_formed(spec);
        }
    }
}
