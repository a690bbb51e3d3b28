// src/diagnostics/mod.rs
use crate::activity::ActivityLog;
use crate::registry::WalletRegistry;
use crate::types::{ConsoleConfig, DiagStatus, DiagnosticsConfig, LogEntry, LogStatus, Network};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{Duration, sleep};

/// Health probe over the console: credential present and fleet non-empty.
/// One scan emits exactly one log entry; the shared status indicator reverts
/// to idle on its own after the reset delay.
pub struct DiagnosticsProbe {
    registry: WalletRegistry,
    log: ActivityLog,
    has_credential: bool,
    config: DiagnosticsConfig,
    status: Arc<RwLock<DiagStatus>>,
}

impl DiagnosticsProbe {
    pub fn new(registry: WalletRegistry, log: ActivityLog, config: &ConsoleConfig) -> Self {
        Self {
            registry,
            log,
            has_credential: !config.api_key.trim().is_empty(),
            config: config.diagnostics,
            status: Arc::new(RwLock::new(DiagStatus::Idle)),
        }
    }

    pub async fn status(&self) -> DiagStatus {
        *self.status.read().await
    }

    /// Run one scan. Returns `Healthy` or `Error`; the indicator passes
    /// through `Checking` while the probe delay elapses.
    pub async fn run(&self) -> DiagStatus {
        *self.status.write().await = DiagStatus::Checking;
        sleep(Duration::from_millis(self.config.probe_delay_ms)).await;

        let api_ok = self.has_credential;
        let fleet_size = self.registry.len().await;
        let fleet_ok = fleet_size > 0;
        let healthy = api_ok && fleet_ok;

        let status = if healthy {
            DiagStatus::Healthy
        } else {
            DiagStatus::Error
        };
        *self.status.write().await = status;

        let message = format!(
            "System scan complete. API connectivity: {}. Active fleet: {} nodes. {}",
            if api_ok { "OK" } else { "MISSING KEY" },
            fleet_size,
            if healthy {
                "Ready for execution."
            } else {
                "Resolve issues before execution."
            }
        );

        // scan entries carry the default network tag
        self.log
            .record(LogEntry::new(
                "DIAGNOSTICS",
                if healthy {
                    LogStatus::Success
                } else {
                    LogStatus::Error
                },
                message,
                Network::Ethereum,
            ))
            .await;

        let shared = Arc::clone(&self.status);
        let reset_delay = Duration::from_millis(self.config.reset_delay_ms);
        tokio::spawn(async move {
            sleep(reset_delay).await;
            *shared.write().await = DiagStatus::Idle;
        });

        status
    }
}
