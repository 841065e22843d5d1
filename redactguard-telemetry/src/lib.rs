//! # redactguard-telemetry
//!
//! Structured logging and Prometheus metrics for masking operations:
//! bytes scanned, Mask Runs emitted, and bytes deleted when the
//! asterisk cap truncates a run.

pub mod logging;
pub mod metrics;

pub use logging::EventLogger;
pub use metrics::MaskingMetrics;
