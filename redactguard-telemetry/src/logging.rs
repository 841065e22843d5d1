//! Structured logging for masking operations.
//!
//! The engine itself is synchronous (spec.md §5), so — unlike the
//! teacher's `EventLogger`, which instruments an async span around an
//! `.await` — events here are logged directly via `tracing` macros
//! with structured fields, no span/`Instrument` ceremony needed.

#[derive(Clone, Default)]
pub struct EventLogger;

impl EventLogger {
    /// Install a process-wide `tracing` subscriber reading
    /// `RUST_LOG`, defaulting to `info`.
    pub fn init() {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let fmt_layer = fmt::layer().with_target(false).with_thread_names(true);

        let filter_layer = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .unwrap();

        // Avoid panicking if a global subscriber is already installed
        // (e.g. under repeated test initialization).
        let _ = tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init();
    }

    /// Log that a masking call completed.
    pub fn log_mask_performed(input_len: usize, output_len: usize, run_count: usize) {
        tracing::info!(
            input_len,
            output_len,
            run_count,
            bytes_removed = input_len.saturating_sub(output_len),
            "mask performed"
        );
    }

    /// Log one fused Mask Run, before the cap is applied.
    pub fn log_run_masked(start: usize, end: usize, limit: usize) {
        let run_len = end - start;
        tracing::debug!(
            start,
            end,
            run_len,
            limit,
            truncated = run_len > limit,
            "run masked"
        );
    }
}
