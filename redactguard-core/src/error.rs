use thiserror::Error;

/// Errors the engine can raise.
///
/// Rust's type system already rejects the shapes that the original
/// facade's `BadInputType`/`BadPatternIterable` errors guarded against
/// (a non-byte input, a non-iterable pattern set), so neither has a
/// variant here. `PatternCompilation` is the Rust-native realization of
/// the spec's "BadPatternElement (implementation option)": it surfaces
/// when the underlying automaton builder refuses the pattern set (for
/// example, an absurdly large pattern count exceeding its state-space
/// limits).
#[derive(Debug, Error)]
pub enum MaskError {
    #[error("pattern set compilation failed: {0}")]
    PatternCompilation(String),
}
