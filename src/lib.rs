// src/lib.rs
pub mod activity;
pub mod advisor;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod types;

pub use crate::activity::ActivityLog;
pub use crate::advisor::AdvisoryClient;
pub use crate::diagnostics::DiagnosticsProbe;
pub use crate::dispatch::{BatchHandle, MintDispatcher};
pub use crate::error::{ConsoleError, ConsoleResult};
pub use crate::registry::WalletRegistry;
pub use crate::types::{
    BatchReport, ConsoleConfig, ContractAnalysis, DiagStatus, FeeSettings, LogEntry, LogStatus,
    MintRequest, Network, SecretMaterial, Wallet,
};

use uuid::Uuid;

const BOOT_PROMPT: &str =
    "Explain why priority fees are critical for winning NFT mints in high-demand drops.";

/// Single owner of all console state. Every mutation funnels through the
/// registry, dispatcher, log and probe services; nothing lives in globals.
pub struct MintConsole {
    config: ConsoleConfig,
    registry: WalletRegistry,
    log: ActivityLog,
    dispatcher: MintDispatcher,
    advisor: AdvisoryClient,
    diagnostics: DiagnosticsProbe,
}

impl MintConsole {
    /// Create a new console
    pub fn new(config: ConsoleConfig) -> ConsoleResult<Self> {
        let registry = WalletRegistry::new();
        let log = ActivityLog::new();
        let dispatcher = MintDispatcher::new(registry.clone(), log.clone(), config.simulation);
        let advisor = AdvisoryClient::new(&config)?;
        let diagnostics = DiagnosticsProbe::new(registry.clone(), log.clone(), &config);

        Ok(Self {
            config,
            registry,
            log,
            dispatcher,
            advisor,
            diagnostics,
        })
    }

    /// Create a console configured from the environment
    pub fn from_env() -> ConsoleResult<Self> {
        Self::new(ConsoleConfig::from_env())
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    // Fleet management

    pub async fn add_wallet(&self, network: Network) -> Wallet {
        self.registry.add(network).await
    }

    pub async fn import_wallet(&self, network: Network, secret: impl Into<String>) -> Wallet {
        self.registry
            .import(network, SecretMaterial::new(secret))
            .await
    }

    pub async fn remove_wallet(&self, id: Uuid) {
        self.registry.remove(id).await;
    }

    pub async fn toggle_wallet(&self, id: Uuid) {
        self.registry.toggle_selection(id).await;
    }

    pub async fn wallets(&self) -> Vec<Wallet> {
        self.registry.wallets().await
    }

    pub async fn fleet_size(&self) -> usize {
        self.registry.len().await
    }

    // Execution

    /// Dispatch a mint batch over the selected wallets on the requested chain
    pub async fn mint(&self, request: MintRequest) -> BatchHandle {
        self.dispatcher.dispatch(request).await
    }

    /// True while any dispatched outcome is still unsettled
    pub fn is_minting(&self) -> bool {
        self.dispatcher.is_busy()
    }

    pub async fn activity(&self) -> Vec<LogEntry> {
        self.log.entries().await
    }

    // Advisory

    /// Startup advisory blurb; falls back to canned advice offline
    pub async fn boot_advice(&self) -> String {
        self.advisor.minting_advice(BOOT_PROMPT).await
    }

    pub async fn minting_advice(&self, prompt: &str) -> String {
        self.advisor.minting_advice(prompt).await
    }

    /// Run a security audit of a target contract address or marketplace URL
    pub async fn analyze_target(
        &self,
        target: &str,
        network: Network,
    ) -> ConsoleResult<ContractAnalysis> {
        let contract_data = advisor::describe_target(target);
        self.advisor.analyze_contract(&contract_data, network).await
    }

    // Diagnostics

    pub async fn run_diagnostics(&self) -> DiagStatus {
        self.diagnostics.run().await
    }

    pub async fn diag_status(&self) -> DiagStatus {
        self.diagnostics.status().await
    }
}
