// src/dispatch/batch.rs
use crate::types::{BatchReport, MintOutcome};
use tokio::task::JoinHandle;

/// Handle over one dispatched batch. Holds the per-wallet outcome tasks;
/// the batch is settled only when every task has finished or been aborted.
pub struct BatchHandle {
    outcomes: Vec<JoinHandle<MintOutcome>>,
}

impl BatchHandle {
    pub(crate) fn new(outcomes: Vec<JoinHandle<MintOutcome>>) -> Self {
        Self { outcomes }
    }

    pub(crate) fn empty() -> Self {
        Self { outcomes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Cancel every outcome still pending. Already-settled outcomes keep
    /// their log entries.
    pub fn abort(&self) {
        for handle in &self.outcomes {
            handle.abort();
        }
    }

    /// Await every outcome task and tally the batch. An aborted task counts
    /// as dropped.
    pub async fn join(self) -> BatchReport {
        let mut report = BatchReport {
            attempted: self.outcomes.len(),
            ..BatchReport::default()
        };

        for handle in self.outcomes {
            match handle.await {
                Ok(outcome) if outcome.confirmed => report.confirmed += 1,
                _ => report.dropped += 1,
            }
        }

        report
    }
}
