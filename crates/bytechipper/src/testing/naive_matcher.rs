//! # Naive Matcher
//!
//! A direct interpreter over the [`RegexSpec`] tree. It computes, for a
//! start position, the full set of positions a pattern can end at; no
//! automata are involved.

use std::collections::BTreeSet;

use crate::pattern::RegexSpec;

/// A backtracking reference matcher for [`RegexSpec`].
#[derive(Debug, Clone)]
pub struct NaiveMatcher<'a> {
    spec: &'a RegexSpec,
}

impl<'a> NaiveMatcher<'a> {
    /// Wrap a pattern.
    pub fn new(spec: &'a RegexSpec) -> Self {
        Self { spec }
    }

    /// Every `n` such that `text[..n]` matches, ascending.
    pub fn prefix_lengths(
        &self,
        text: &[u8],
    ) -> BTreeSet<usize> {
        match_ends(self.spec, text, 0)
    }

    /// Does all of `text` match?
    pub fn matches(
        &self,
        text: &[u8],
    ) -> bool {
        self.prefix_lengths(text).contains(&text.len())
    }

    /// The length of the longest matching prefix.
    pub fn long_match_length(
        &self,
        text: &[u8],
    ) -> Option<usize> {
        self.prefix_lengths(text).last().copied()
    }

    /// The length of the shortest matching prefix.
    pub fn first_match_length(
        &self,
        text: &[u8],
    ) -> Option<usize> {
        self.prefix_lengths(text).first().copied()
    }
}

fn match_ends(
    spec: &RegexSpec,
    text: &[u8],
    start: usize,
) -> BTreeSet<usize> {
    let mut ends = BTreeSet::new();
    match spec {
        RegexSpec::Epsilon => {
            ends.insert(start);
        }
        RegexSpec::Literal(seq) => {
            if text[start..].starts_with(seq) {
                ends.insert(start + seq.len());
            }
        }
        RegexSpec::Charset(bytes) => {
            if let Some(byte) = text.get(start)
                && bytes.contains(byte)
            {
                ends.insert(start + 1);
            }
        }
        RegexSpec::Concatenate(children) => {
            ends.insert(start);
            for child in children {
                ends = ends
                    .into_iter()
                    .flat_map(|pos| match_ends(child, text, pos))
                    .collect();
            }
        }
        RegexSpec::Alternate(children) if children.is_empty() => {
            ends.insert(start);
        }
        RegexSpec::Alternate(children) => {
            for child in children {
                ends.extend(match_ends(child, text, start));
            }
        }
        RegexSpec::Star(inner) => {
            ends.insert(start);
            let mut frontier = vec![start];
            while let Some(pos) = frontier.pop() {
                for end in match_ends(inner, text, pos) {
                    if ends.insert(end) {
                        frontier.push(end);
                    }
                }
            }
        }
    }
    ends
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_lengths() {
        let spec = RegexSpec::star(RegexSpec::alternate([
            RegexSpec::literal("a"),
            RegexSpec::literal("aa"),
        ]));
        let naive = NaiveMatcher::new(&spec);
        assert_eq!(
            naive.prefix_lengths(b"aaab").into_iter().collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
        assert!(naive.matches(b"aaa"));
        assert_eq!(naive.long_match_length(b"aaab"), Some(3));
        assert_eq!(naive.first_match_length(b"b"), Some(0));
    }

    #[test]
    fn test_concatenate() {
        let spec = RegexSpec::concatenate([RegexSpec::literal("foo"), RegexSpec::literal("bar")]);
        let naive = NaiveMatcher::new(&spec);
        assert!(naive.matches(b"foobar"));
        assert_eq!(naive.long_match_length(b"foob"), None);
    }
}
