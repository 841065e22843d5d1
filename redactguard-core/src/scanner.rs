//! Multi-Pattern Scanner.
//!
//! Runs a compiled [`PatternSet`] across a buffer and reports every
//! match, including matches that overlap each other. Ordering between
//! events is not guaranteed beyond what [`aho_corasick::AhoCorasick`]
//! provides on its own — the resolver sorts before fusing, so it does
//! not matter here.

use crate::pattern::PatternSet;

/// A match of some pattern ending at `end` (exclusive) with length `length`,
/// i.e. the half-open interval `[end - length, end)` of the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEvent {
    pub end: usize,
    pub length: usize,
}

impl MatchEvent {
    pub fn start(&self) -> usize {
        self.end - self.length
    }
}

/// Scans a buffer for every occurrence (including overlaps) of any
/// pattern in `patterns`.
pub fn scan(patterns: &PatternSet, buf: &[u8]) -> Vec<MatchEvent> {
    let Some(automaton) = patterns.automaton() else {
        return Vec::new();
    };

    automaton
        .find_overlapping_iter(buf)
        .map(|m| MatchEvent {
            end: m.end(),
            length: m.end() - m.start(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternSet;

    #[test]
    fn empty_pattern_set_yields_no_events() {
        let set = PatternSet::empty();
        assert!(scan(&set, b"anything").is_empty());
    }

    #[test]
    fn single_pattern_reports_one_event() {
        let set = PatternSet::compile([b"string".as_slice()]).unwrap();
        let events = scan(&set, b"teststring");
        assert_eq!(events, vec![MatchEvent { end: 10, length: 6 }]);
    }

    #[test]
    fn overlapping_patterns_are_all_reported() {
        // "cbccb" and "bcbcb" both occur within "bcbcbccb", overlapping.
        let set = PatternSet::compile([b"cbccb".as_slice(), b"bcbcb".as_slice()]).unwrap();
        let mut events = scan(&set, b"bcbcbccb");
        events.sort_by_key(|e| (e.end, e.length));
        assert_eq!(
            events,
            vec![
                MatchEvent { end: 5, length: 5 }, // bcbcb -> [0,5)
                MatchEvent { end: 8, length: 5 }, // cbccb -> [3,8)
            ]
        );
    }
}
