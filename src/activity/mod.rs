// src/activity/mod.rs
use crate::types::{LogEntry, LogStatus};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Append-only activity feed. Entries are never edited or evicted; the feed
/// grows for the lifetime of the session.
#[derive(Clone, Default)]
pub struct ActivityLog {
    entries: Arc<RwLock<Vec<LogEntry>>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, entry: LogEntry) {
        match entry.status {
            LogStatus::Error => log::warn!("[{}] {}", entry.wallet_label, entry.message),
            _ => log::info!("[{}] {}", entry.wallet_label, entry.message),
        }

        self.entries.write().await.push(entry);
    }

    /// Entries newest-first, the exact reverse of append order
    pub async fn entries(&self) -> Vec<LogEntry> {
        self.entries.read().await.iter().rev().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
