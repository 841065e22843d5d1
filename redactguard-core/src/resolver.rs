//! Masking Resolver.
//!
//! Converts a [`MatchEvent`] stream plus the original buffer into
//! masked output: overlapping/adjacent matches fuse into maximal
//! non-overlapping runs (a "Mask Run"), unmatched regions pass through
//! literally, and each run becomes `min(run_length, limit)` asterisks —
//! shorter than the run when the cap bites, possibly zero when
//! `limit == 0`.

use crate::scanner::MatchEvent;

/// A maximal, non-overlapping half-open interval covered by one or
/// more fused match events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskRun {
    pub start: usize,
    pub end: usize,
}

impl MaskRun {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Fuse match events into maximal Mask Runs.
///
/// Events are sorted on `(start, end)`, not `end` alone: a later-ending
/// match can start earlier than one already closed by an
/// earlier-ending, later-starting match in between (three or more
/// overlapping patterns can produce events in exactly that order), so
/// sorting on `end` can force a run closed before a still-overlapping
/// event has been seen, leaving two overlapping runs in the output.
/// Sorting on `start` is the standard interval-merge precondition: once
/// events are in non-decreasing start order, a run's start never moves
/// once opened, so tracking only its `end` while folding in every
/// event whose start falls inside it is sufficient to produce maximal,
/// non-overlapping runs.
pub fn fuse(mut events: Vec<MatchEvent>) -> Vec<MaskRun> {
    events.sort_by_key(|e| (e.start(), e.end));

    let mut runs: Vec<MaskRun> = Vec::new();
    let mut open: Option<MaskRun> = None;

    for ev in events {
        let start = ev.start();
        let end = ev.end;

        open = Some(match open {
            None => MaskRun { start, end },
            Some(run) if start <= run.end => MaskRun {
                start: run.start,
                end: end.max(run.end),
            },
            Some(run) => {
                runs.push(run);
                MaskRun { start, end }
            }
        });
    }

    if let Some(run) = open {
        runs.push(run);
    }

    runs
}

/// Emit masked output for `input`, given its (already fused, ascending,
/// non-overlapping) Mask Runs.
pub fn emit(input: &[u8], runs: &[MaskRun], limit: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut cursor = 0usize;

    for run in runs {
        out.extend_from_slice(&input[cursor..run.start]);
        let stars = run.len().min(limit);
        out.resize(out.len() + stars, b'*');
        cursor = run.end;
    }

    out.extend_from_slice(&input[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(end: usize, length: usize) -> MatchEvent {
        MatchEvent { end, length }
    }

    #[test]
    fn no_events_yields_no_runs() {
        assert!(fuse(vec![]).is_empty());
    }

    #[test]
    fn adjacent_matches_fuse() {
        // "note" ends at 4, "book" starts at 4 and ends at 8 -> touching, one run [0,8).
        let runs = fuse(vec![ev(4, 4), ev(8, 4)]);
        assert_eq!(runs, vec![MaskRun { start: 0, end: 8 }]);
    }

    #[test]
    fn disjoint_matches_stay_separate() {
        // "a****s**g" from "aballsong": ball=[1,5), on=[6,8).
        let runs = fuse(vec![ev(5, 4), ev(8, 2)]);
        assert_eq!(
            runs,
            vec![MaskRun { start: 1, end: 5 }, MaskRun { start: 6, end: 8 }]
        );
    }

    #[test]
    fn three_events_out_of_end_order_still_fuse_into_one_run() {
        // "WXY"@[0,3), "RS"@[6,8), "XYZWQRST"@[1,9) over "WXYZWQRST".
        // Sorted by end these arrive as (3,3), (8,2), (9,8): processing
        // (8,2) (start=6) would close {0,3} before (9,8) (start=1) is
        // seen, leaving {0,3} and {1,9} overlapping. Sorting by start
        // instead must fuse all three into the single run [0,9).
        let runs = fuse(vec![ev(3, 3), ev(8, 2), ev(9, 8)]);
        assert_eq!(runs, vec![MaskRun { start: 0, end: 9 }]);
    }

    #[test]
    fn left_extension_handles_out_of_order_events() {
        // A shorter pattern reported after a longer one, ending earlier,
        // still has to extend the run's start backward.
        let runs = fuse(vec![ev(10, 4), ev(6, 6)]);
        assert_eq!(runs, vec![MaskRun { start: 0, end: 10 }]);
    }

    #[test]
    fn emit_respects_cap() {
        let input = b"basketball";
        let runs = vec![MaskRun { start: 6, end: 10 }];
        assert_eq!(emit(input, &runs, 2), b"basket**".to_vec());
    }

    #[test]
    fn zero_limit_deletes() {
        let input = b"fivesix\n";
        let runs = vec![MaskRun { start: 4, end: 8 }];
        assert_eq!(emit(input, &runs, 0), b"five".to_vec());
    }

    #[test]
    fn emit_with_no_runs_is_identity() {
        let input = b"unchanged";
        assert_eq!(emit(input, &[], 15), input.to_vec());
    }
}
