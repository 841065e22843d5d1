//! Pattern Set Compiler.
//!
//! Consumes an iterable of byte sequences, discards empty ones, and
//! compiles the remainder into a multi-pattern automaton suitable for
//! single-pass scanning with overlap reporting. Compilation is
//! `O(sum of pattern lengths)`; duplicate patterns are accepted without
//! error and have no additional effect on the masked output, since the
//! resolver fuses overlapping matches into runs regardless of how many
//! patterns produced them.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

use crate::error::MaskError;

/// A compiled, immutable set of non-empty byte patterns.
///
/// Safe to share read-only across many [`crate::stream::StreamMasker`]
/// instances via `Arc`; building it is the only fallible operation in
/// this crate's public surface.
pub struct PatternSet {
    automaton: Option<AhoCorasick>,
    max_pattern_len: usize,
}

impl PatternSet {
    /// Compile a pattern set from any iterable of byte sequences.
    ///
    /// An all-empty or empty input iterable yields a `PatternSet` that
    /// matches nothing — masking such a set is the identity function.
    pub fn compile<I, P>(patterns: I) -> Result<Self, MaskError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let filtered: Vec<Vec<u8>> = patterns
            .into_iter()
            .map(|p| p.as_ref().to_vec())
            .filter(|p| !p.is_empty())
            .collect();

        if filtered.is_empty() {
            tracing::trace!("pattern set is empty after filtering; masking is the identity");
            return Ok(Self {
                automaton: None,
                max_pattern_len: 0,
            });
        }

        let max_pattern_len = filtered.iter().map(|p| p.len()).max().unwrap_or(0);

        let automaton = AhoCorasickBuilder::new()
            .match_kind(MatchKind::Standard)
            .build(&filtered)
            .map_err(|e| MaskError::PatternCompilation(e.to_string()))?;

        tracing::debug!(
            pattern_count = filtered.len(),
            max_pattern_len,
            "compiled pattern set"
        );

        Ok(Self {
            automaton: Some(automaton),
            max_pattern_len,
        })
    }

    /// An empty pattern set, equivalent to `PatternSet::compile(std::iter::empty::<&[u8]>())`.
    pub fn empty() -> Self {
        Self {
            automaton: None,
            max_pattern_len: 0,
        }
    }

    /// Length of the longest compiled pattern, or `0` if the set is empty.
    pub fn max_pattern_len(&self) -> usize {
        self.max_pattern_len
    }

    /// Whether this set matches nothing.
    pub fn is_empty(&self) -> bool {
        self.automaton.is_none()
    }

    pub(crate) fn automaton(&self) -> Option<&AhoCorasick> {
        self.automaton.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_iterable_matches_nothing() {
        let set = PatternSet::compile(std::iter::empty::<&[u8]>()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.max_pattern_len(), 0);
    }

    #[test]
    fn all_empty_patterns_are_discarded() {
        let set = PatternSet::compile([b"".as_slice(), b"".as_slice()]).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn duplicates_are_accepted() {
        let set = PatternSet::compile([b"peat".as_slice(), b"peat".as_slice()]).unwrap();
        assert!(!set.is_empty());
        assert_eq!(set.max_pattern_len(), 4);
    }

    #[test]
    fn max_pattern_len_tracks_longest() {
        let set = PatternSet::compile([b"a".as_slice(), b"longest".as_slice(), b"bb".as_slice()])
            .unwrap();
        assert_eq!(set.max_pattern_len(), 7);
    }

    #[test]
    fn patterns_may_contain_newlines() {
        let set = PatternSet::compile([b"multi\nline".as_slice()]).unwrap();
        assert_eq!(set.max_pattern_len(), 10);
    }
}
