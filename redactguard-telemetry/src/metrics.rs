//! Prometheus metrics for masking operations.

use prometheus::{Counter, Histogram, HistogramOpts, Registry};

#[derive(Debug, Clone)]
pub struct MaskingMetrics {
    pub registry: Registry,
    pub bytes_scanned: Counter,
    pub runs_masked: Counter,
    pub bytes_deleted: Counter,
    pub run_length: Histogram,
}

impl Default for MaskingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MaskingMetrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let bytes_scanned =
            Counter::new("redactguard_bytes_scanned_total", "Total bytes scanned for patterns")
                .unwrap();
        let runs_masked =
            Counter::new("redactguard_runs_masked_total", "Total Mask Runs emitted").unwrap();
        let bytes_deleted = Counter::new(
            "redactguard_bytes_deleted_total",
            "Bytes removed because a run exceeded the asterisk cap",
        )
        .unwrap();
        let run_length = Histogram::with_opts(
            HistogramOpts::new("redactguard_run_length_bytes", "Length of each Mask Run")
                .buckets(vec![1.0, 4.0, 16.0, 64.0, 256.0, 1024.0]),
        )
        .unwrap();

        registry.register(Box::new(bytes_scanned.clone())).unwrap();
        registry.register(Box::new(runs_masked.clone())).unwrap();
        registry.register(Box::new(bytes_deleted.clone())).unwrap();
        registry.register(Box::new(run_length.clone())).unwrap();

        Self {
            registry,
            bytes_scanned,
            runs_masked,
            bytes_deleted,
            run_length,
        }
    }

    /// Record one resolved Mask Run against the configured cap.
    pub fn record_run(&self, run_len: usize, limit: usize) {
        self.runs_masked.inc();
        self.run_length.observe(run_len as f64);
        if run_len > limit {
            self.bytes_deleted.inc_by((run_len - limit) as f64);
        }
    }

    pub fn gather(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).expect("prometheus text encoding is always valid UTF-8"))
    }
}
