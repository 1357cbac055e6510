//! Progress bar for batch archive deletion.
//!
//! While a bar is drawing, log lines are written through
//! [`ProgressAwareStderr`] so they appear above the bar instead of through it.

use coldvault_core::DeleteProgress;
use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::io;
use std::io::Write;
use std::sync::Mutex;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use tracing_subscriber::fmt::MakeWriter;

static NEXT_BAR_ID: AtomicU64 = AtomicU64::new(1);
static ACTIVE_BAR: Mutex<Option<(u64, ProgressBar)>> = Mutex::new(None);

fn active_bar() -> Option<ProgressBar> {
    ACTIVE_BAR
        .lock()
        .ok()
        .and_then(|slot| slot.as_ref().map(|(_, bar)| bar.clone()))
}

/// Log writer that suspends the active progress bar around each line.
pub struct ProgressAwareStderr;

impl<'a> MakeWriter<'a> for ProgressAwareStderr {
    type Writer = LogLine;

    fn make_writer(&'a self) -> Self::Writer {
        LogLine(Vec::new())
    }
}

/// One formatted log event, written to stderr when dropped.
pub struct LogLine(Vec<u8>);

impl Write for LogLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LogLine {
    fn drop(&mut self) {
        if self.0.is_empty() {
            return;
        }
        let emit = || {
            let _ = io::stderr().write_all(&self.0);
        };
        match active_bar() {
            Some(bar) => bar.suspend(emit),
            None => emit(),
        }
    }
}

/// CLI progress bar wrapper implementing `DeleteProgress`.
///
/// Draws to stderr and clears itself on drop.
pub struct CliProgress {
    id: u64,
    bar: ProgressBar,
    failures: usize,
}

impl CliProgress {
    /// Creates a progress bar for `total` archives.
    #[must_use]
    pub fn new(total: usize, message: &str) -> Self {
        let bar = ProgressBar::new(total as u64);

        // Template: "Deleting [████████░░░░] 42/100 archives (12s)"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} archives ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        bar.set_message(message.to_string());

        let id = NEXT_BAR_ID.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut slot) = ACTIVE_BAR.lock() {
            *slot = Some((id, bar.clone()));
        }

        Self {
            id,
            bar,
            failures: 0,
        }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
        if let Ok(mut slot) = ACTIVE_BAR.lock()
            && slot.as_ref().is_some_and(|(id, _)| *id == self.id)
        {
            *slot = None;
        }
    }
}

impl DeleteProgress for CliProgress {
    fn on_archive_start(&mut self, _archive_id: &str, _total: usize, _current: usize) {}

    fn on_archive_complete(&mut self, _archive_id: &str, deleted: bool) {
        if !deleted {
            self.failures += 1;
            self.bar
                .set_message(format!("Deleting ({} failed)", self.failures));
        }
        self.bar.inc(1);
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}
