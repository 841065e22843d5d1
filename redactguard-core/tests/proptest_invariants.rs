//! Property-based check of P5 (chunk invariance, spec.md §8): for any
//! pattern set, any input, and any way of splitting that input into
//! chunks, streaming the chunks through `StreamMasker` and
//! concatenating the results must equal the one-shot `mask()` output.

use std::sync::Arc;

use proptest::prelude::*;
use redactguard_core::{mask, PatternSet, StreamMasker};

/// Deterministically split `input` into 1+ chunks of varying,
/// seed-dependent sizes (a tiny LCG, not a full RNG dependency).
fn arbitrary_chunks(input: &[u8], seed: u64) -> Vec<&[u8]> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut state = seed | 1;
    let mut chunks = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let remaining = input.len() - pos;
        let take = 1 + ((state >> 33) as usize % remaining);
        chunks.push(&input[pos..pos + take]);
        pos += take;
    }

    chunks
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn chunking_never_changes_the_masked_result(
        input in "[ab\n]{0,40}",
        patterns in prop::collection::vec("[ab]{1,4}", 0..4),
        limit in 0usize..6,
        split_seed in any::<u64>(),
    ) {
        let input_bytes = input.as_bytes();
        let pattern_bytes: Vec<Vec<u8>> = patterns.iter().map(|p| p.as_bytes().to_vec()).collect();

        let oneshot = mask(input_bytes, pattern_bytes.clone(), limit).unwrap();

        let set = Arc::new(PatternSet::compile(pattern_bytes).unwrap());
        let mut masker = StreamMasker::new(set, limit);
        let mut streamed = Vec::new();
        for chunk in arbitrary_chunks(input_bytes, split_seed) {
            streamed.extend(masker.feed(chunk));
        }
        streamed.extend(masker.finish());

        prop_assert_eq!(oneshot, streamed);
    }

    #[test]
    fn output_never_exceeds_input_length(
        input in "[ab\n]{0,40}",
        patterns in prop::collection::vec("[ab]{1,4}", 0..4),
        limit in 0usize..6,
    ) {
        let pattern_bytes: Vec<Vec<u8>> = patterns.iter().map(|p| p.as_bytes().to_vec()).collect();
        let out = mask(input.as_bytes(), pattern_bytes, limit).unwrap();
        prop_assert!(out.len() <= input.len());
    }
}
