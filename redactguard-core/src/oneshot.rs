//! One-Shot Entry Point.
//!
//! A thin adapter that runs the Scanner and Resolver over a complete
//! input with no carry — equivalent to a single streaming `feed()`
//! immediately followed by `finish()`.

use crate::error::MaskError;
use crate::pattern::PatternSet;
use crate::resolver;
use crate::scanner;

/// Default number of asterisks emitted per Mask Run.
pub const DEFAULT_LIMIT: usize = 15;

/// Mask every occurrence (including overlaps) of any pattern in
/// `patterns` within `input`, capping each fused run at `limit`
/// asterisks.
///
/// Compiles `patterns` into a fresh [`PatternSet`] on every call; if
/// the same patterns will be reused across many inputs, compile once
/// with [`PatternSet::compile`] and call [`mask_with`] instead.
pub fn mask<I, P>(input: &[u8], patterns: I, limit: usize) -> Result<Vec<u8>, MaskError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<[u8]>,
{
    let set = PatternSet::compile(patterns)?;
    Ok(mask_with(&set, input, limit))
}

/// Mask `input` against an already-compiled [`PatternSet`].
pub fn mask_with(patterns: &PatternSet, input: &[u8], limit: usize) -> Vec<u8> {
    let events = scanner::scan(patterns, input);
    let runs = resolver::fuse(events);
    resolver::emit(input, &runs, limit)
}
