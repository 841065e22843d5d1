//! Streaming Carry Buffer and `std::io::Read` adapter.
//!
//! [`StreamMasker`] wraps the Scanner/Resolver pair for chunked input:
//! each call defers whatever suffix might still be the prefix of a
//! later match, and [`StreamMasker::finish`] flushes it at end of
//! stream. [`MaskingReader`] layers a `std::io::Read`/`BufRead` adapter
//! on top, the Rust-native analogue of `secretsweeper.StreamWrapper`.

use std::io::{self, BufRead, Read};
use std::sync::Arc;

use crate::pattern::PatternSet;
use crate::resolver::{self, MaskRun};
use crate::scanner;

/// Holds the state needed to mask a byte stream across arbitrary chunk
/// boundaries: a reference to the (immutable, shareable) pattern set,
/// the configured cap, and whatever trailing bytes could not yet be
/// resolved into output.
///
/// Not safe for concurrent use by multiple callers — each stream gets
/// its own `StreamMasker`. The `PatternSet` it holds, by contrast, is
/// immutable and may be shared (via `Arc`) across many `StreamMasker`s.
pub struct StreamMasker {
    patterns: Arc<PatternSet>,
    limit: usize,
    carry: Vec<u8>,
}

impl StreamMasker {
    pub fn new(patterns: Arc<PatternSet>, limit: usize) -> Self {
        Self {
            patterns,
            limit,
            carry: Vec::new(),
        }
    }

    /// Feed the next chunk of input, returning the output that is now
    /// safe to emit. The returned slice may be shorter than `chunk`
    /// (including empty) when the tail of `chunk` might still be the
    /// prefix of a pattern that hasn't completed yet.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<u8> {
        if chunk.is_empty() {
            return Vec::new();
        }
        let mut buf = std::mem::take(&mut self.carry);
        buf.extend_from_slice(chunk);
        self.process(buf, false)
    }

    /// Flush any remaining carry at end of stream, closing any open
    /// run against the end of input. Subsequent calls return nothing.
    pub fn finish(&mut self) -> Vec<u8> {
        let buf = std::mem::take(&mut self.carry);
        self.process(buf, true)
    }

    fn process(&mut self, buf: Vec<u8>, is_final: bool) -> Vec<u8> {
        let events = scanner::scan(&self.patterns, &buf);
        let runs = resolver::fuse(events);

        let split = if is_final {
            buf.len()
        } else {
            let max_len = self.patterns.max_pattern_len();
            let safe_prefix = buf.len().saturating_sub(max_len.saturating_sub(1));
            retract_for_open_run(safe_prefix, &runs)
        };

        let emit_runs: Vec<MaskRun> = runs.into_iter().filter(|r| r.end <= split).collect();
        let out = resolver::emit(&buf[..split], &emit_runs, self.limit);

        if split < buf.len() {
            tracing::trace!(
                carried_bytes = buf.len() - split,
                "deferred bytes across chunk boundary"
            );
        }

        self.carry = buf[split..].to_vec();
        out
    }
}

/// If a Mask Run straddles `safe_prefix` (starts before it, ends after
/// it), retract the cut point to the run's start so the whole run is
/// carried forward intact — unbounded by `max_pattern_len - 1` if
/// necessary. `runs` comes from [`resolver::fuse`], which guarantees
/// its output is ascending and non-overlapping, so at most one run can
/// straddle any given point.
fn retract_for_open_run(safe_prefix: usize, runs: &[MaskRun]) -> usize {
    for run in runs {
        if run.start < safe_prefix && run.end > safe_prefix {
            return run.start;
        }
    }
    safe_prefix
}

/// Default size of the scratch buffer `MaskingReader` reads raw bytes
/// into before feeding them to the masker.
const READ_CHUNK: usize = 8192;

/// A `std::io::Read` adapter that masks bytes pulled from an inner
/// reader, honoring the same carry protocol as [`StreamMasker`].
///
/// Unlike `secretsweeper.StreamWrapper.read`, which may return `b""`
/// without being at end of file (a partial-pattern boundary with
/// nothing yet safe to emit), `std::io::Read::read` is documented to
/// return `Ok(0)` only at true EOF. `MaskingReader::read` therefore
/// loops internally, pulling further chunks from the inner reader and
/// feeding the masker until it has at least one byte to hand back or
/// the inner reader is exhausted, rather than surfacing an empty,
/// non-EOF read to the caller.
pub struct MaskingReader<R> {
    inner: R,
    masker: StreamMasker,
    pending: Vec<u8>,
    pending_pos: usize,
    finished: bool,
}

impl<R> MaskingReader<R> {
    pub fn new(inner: R, patterns: Arc<PatternSet>, limit: usize) -> Self {
        Self {
            inner,
            masker: StreamMasker::new(patterns, limit),
            pending: Vec::new(),
            pending_pos: 0,
            finished: false,
        }
    }

    /// Unwrap the adapter, discarding any unread masked output.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn drain_pending(&mut self, out: &mut [u8]) -> usize {
        let available = &self.pending[self.pending_pos..];
        let n = available.len().min(out.len());
        out[..n].copy_from_slice(&available[..n]);
        self.pending_pos += n;
        n
    }

    fn has_pending(&self) -> bool {
        self.pending_pos < self.pending.len()
    }
}

impl<R: Read> Read for MaskingReader<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if out.is_empty() {
            return Ok(0);
        }

        loop {
            if self.has_pending() {
                return Ok(self.drain_pending(out));
            }
            if self.finished {
                return Ok(0);
            }

            let mut raw = vec![0u8; READ_CHUNK.max(out.len())];
            let n = self.inner.read(&mut raw)?;

            if n == 0 {
                self.finished = true;
                self.pending = self.masker.finish();
            } else {
                self.pending = self.masker.feed(&raw[..n]);
            }
            self.pending_pos = 0;
        }
    }
}

impl<R: BufRead> MaskingReader<R> {
    /// Read one raw line (up to and including `\n`) from the inner
    /// reader and run it through the masking carry protocol, appending
    /// masked output to `buf`. Returns the number of bytes appended;
    /// `0` once the inner reader is exhausted and any carry has been
    /// flushed. The terminator is an ordinary pattern byte, never
    /// special-cased — a pattern may itself contain `\n`.
    pub fn read_line_masked(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        if self.has_pending() {
            let n = self.pending.len() - self.pending_pos;
            buf.extend_from_slice(&self.pending[self.pending_pos..]);
            self.pending_pos = self.pending.len();
            return Ok(n);
        }
        if self.finished {
            return Ok(0);
        }

        let mut raw = Vec::new();
        let n = self.inner.read_until(b'\n', &mut raw)?;

        let masked = if n == 0 {
            self.finished = true;
            self.masker.finish()
        } else {
            self.masker.feed(&raw)
        };

        buf.extend_from_slice(&masked);
        Ok(masked.len())
    }

    /// Iterate over masked lines, in the style of
    /// `for line in secretsweeper.StreamWrapper(...)`.
    pub fn masked_lines(&mut self) -> MaskedLines<'_, R> {
        MaskedLines { reader: self }
    }
}

/// Iterator over the masked lines of a [`MaskingReader`].
pub struct MaskedLines<'r, R> {
    reader: &'r mut MaskingReader<R>,
}

impl<'r, R: BufRead> Iterator for MaskedLines<'r, R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        loop {
            match self.reader.read_line_masked(&mut buf) {
                Ok(0) if buf.is_empty() => return None,
                Ok(0) => return Some(Ok(buf)),
                Ok(_) => {
                    if buf.ends_with(b"\n") {
                        return Some(Ok(buf));
                    }
                    // Nothing yet to emit this round (carried), or a
                    // partial line still mid-pattern; keep pulling.
                    if self.reader.finished && !self.reader.has_pending() {
                        return Some(Ok(buf));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
