//! Cooperative cancellation and progress reporting for long imposition
//! runs. The token is checked at every suspension point named in the
//! concurrency model: each input-page read, each embedded-page draw,
//! each QR generation, and each chunk save.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use press_geometry::PrintError;

#[derive(Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Returns `Err(PrintError::Cancelled)` if cancellation has been
    /// requested. Called at every suspension point.
    pub fn check(&self) -> Result<(), PrintError> {
        if self.is_cancelled() {
            Err(PrintError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Receives progress updates as chunks and sheets complete. The default
/// no-op sink is used when a caller has no interest in progress.
pub trait ProgressSink: Send + Sync {
    fn on_sheet_rendered(&self, chunk_index: usize, sheet_index: usize, total_sheets: usize);
}

pub struct NoopProgressSink;

impl ProgressSink for NoopProgressSink {
    fn on_sheet_rendered(&self, _chunk_index: usize, _sheet_index: usize, _total_sheets: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_not_cancelled() {
        let token = CancellationToken::new();
        assert!(token.check().is_ok());
    }

    #[test]
    fn cancel_is_observed_through_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(matches!(token.check(), Err(PrintError::Cancelled)));
    }
}
