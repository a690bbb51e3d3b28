// src/dispatch/mod.rs
pub mod batch;

pub use batch::BatchHandle;

use crate::activity::ActivityLog;
use crate::registry::WalletRegistry;
use crate::types::{LogEntry, LogStatus, MintOutcome, MintRequest, SimulationConfig};
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::time::{Duration, sleep};

/// Fans a mint request out over the eligible fleet. Each wallet gets exactly
/// one outcome task with a randomized delay and an independent success draw;
/// outcome order is decided by the delay draws alone.
pub struct MintDispatcher {
    registry: WalletRegistry,
    log: ActivityLog,
    config: SimulationConfig,
    in_flight: Arc<AtomicUsize>,
}

// Keeps the in-flight count honest even when a task is aborted mid-sleep.
struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl MintDispatcher {
    pub fn new(registry: WalletRegistry, log: ActivityLog, config: SimulationConfig) -> Self {
        Self {
            registry,
            log,
            config,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// True while any outcome task of any batch is still unsettled
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Dispatch one batch. An empty eligible set degrades to a single error
    /// log entry and an empty handle; the caller never sees an `Err`.
    pub async fn dispatch(&self, request: MintRequest) -> BatchHandle {
        let eligible = self.registry.selected_on(request.network).await;

        if eligible.is_empty() {
            self.log
                .record(LogEntry::new(
                    "SYSTEM",
                    LogStatus::Error,
                    format!(
                        "Aborted. No {} wallets selected for execution.",
                        request.network
                    ),
                    request.network,
                ))
                .await;
            return BatchHandle::empty();
        }

        self.log
            .record(LogEntry::new(
                "PROTOCOL",
                LogStatus::Pending,
                format!(
                    "Initiating multi-wallet sequence at {} priority level...",
                    request.fee.priority_fee
                ),
                request.network,
            ))
            .await;

        log::info!(
            "Dispatching {} to {} wallet(s) on {}",
            request.target,
            eligible.len(),
            request.network
        );

        let mut outcomes = Vec::with_capacity(eligible.len());
        for wallet in eligible {
            self.in_flight.fetch_add(1, Ordering::SeqCst);

            let guard = InFlightGuard(Arc::clone(&self.in_flight));
            let log = self.log.clone();
            let config = self.config;
            let request = request.clone();

            outcomes.push(tokio::spawn(async move {
                let _guard = guard;

                let delay_ms = if config.delay_max_ms > config.delay_min_ms {
                    rand::thread_rng().gen_range(config.delay_min_ms..config.delay_max_ms)
                } else {
                    config.delay_min_ms
                };
                sleep(Duration::from_millis(delay_ms)).await;

                let confirmed = rand::thread_rng().gen_bool(config.success_probability);
                let entry = if confirmed {
                    LogEntry::new(
                        wallet.label.as_str(),
                        LogStatus::Success,
                        format!(
                            "TX CONFIRMED. Minted {} tokens at {} {}.",
                            request.quantity,
                            request.fee.priority_fee,
                            request.network.fee_unit()
                        ),
                        request.network,
                    )
                    .with_fee(request.fee.priority_fee.to_string())
                } else {
                    LogEntry::new(
                        wallet.label.as_str(),
                        LogStatus::Error,
                        "TX DROPPED. Node experienced latency or slippage exceeded.",
                        request.network,
                    )
                };
                log.record(entry).await;

                MintOutcome {
                    wallet_id: wallet.id,
                    wallet_label: wallet.label,
                    confirmed,
                }
            }));
        }

        BatchHandle::new(outcomes)
    }
}
