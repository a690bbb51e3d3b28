// src/registry/mod.rs
pub mod address;

use crate::types::{Network, SecretMaterial, Wallet};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory wallet fleet. All balances and addresses are mock data; the
/// registry never touches the network.
#[derive(Clone, Default)]
pub struct WalletRegistry {
    wallets: Arc<RwLock<Vec<Wallet>>>,
}

impl WalletRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh wallet with a synthetic address and random display
    /// balance, selected by default.
    pub async fn add(&self, network: Network) -> Wallet {
        self.insert(network, None).await
    }

    /// Register a wallet around imported key material. The secret stays in
    /// memory for the session and is wiped on drop.
    pub async fn import(&self, network: Network, secret: SecretMaterial) -> Wallet {
        self.insert(network, Some(secret)).await
    }

    async fn insert(&self, network: Network, secret: Option<SecretMaterial>) -> Wallet {
        let mut wallets = self.wallets.write().await;

        let kind = if secret.is_some() { "Key" } else { "Node" };
        let label = format!("{} {} {}", network.short_tag(), kind, wallets.len() + 1);

        let wallet = Wallet {
            id: Uuid::new_v4(),
            label,
            address: address::synthetic(network),
            network,
            balance: address::display_balance(),
            is_selected: true,
            secret,
        };

        log::info!("Registered wallet {} ({}) on {}", wallet.label, wallet.id, network);
        wallets.push(wallet.clone());
        wallet
    }

    /// Remove by id. Silent no-op when the id is not registered.
    pub async fn remove(&self, id: Uuid) {
        let mut wallets = self.wallets.write().await;
        wallets.retain(|w| w.id != id);
    }

    /// Flip the selection flag. Silent no-op when the id is not registered.
    pub async fn toggle_selection(&self, id: Uuid) {
        let mut wallets = self.wallets.write().await;
        if let Some(wallet) = wallets.iter_mut().find(|w| w.id == id) {
            wallet.is_selected = !wallet.is_selected;
        }
    }

    pub async fn wallets(&self) -> Vec<Wallet> {
        self.wallets.read().await.clone()
    }

    /// Wallets eligible for dispatch on the given chain
    pub async fn selected_on(&self, network: Network) -> Vec<Wallet> {
        self.wallets
            .read()
            .await
            .iter()
            .filter(|w| w.is_selected && w.network == network)
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.wallets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.wallets.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_then_remove_restores_prior_set() {
        let registry = WalletRegistry::new();
        let kept = registry.add(Network::Ethereum).await;
        let before: Vec<Uuid> = registry.wallets().await.iter().map(|w| w.id).collect();

        let added = registry.add(Network::Solana).await;
        registry.remove(added.id).await;

        let after: Vec<Uuid> = registry.wallets().await.iter().map(|w| w.id).collect();
        assert_eq!(before, after);
        assert_eq!(after, vec![kept.id]);
    }

    #[tokio::test]
    async fn remove_of_unknown_id_is_a_noop() {
        let registry = WalletRegistry::new();
        registry.add(Network::Ethereum).await;

        registry.remove(Uuid::new_v4()).await;
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn double_toggle_restores_selection() {
        let registry = WalletRegistry::new();
        let wallet = registry.add(Network::Ethereum).await;
        assert!(wallet.is_selected);

        registry.toggle_selection(wallet.id).await;
        assert!(!registry.wallets().await[0].is_selected);

        registry.toggle_selection(wallet.id).await;
        assert!(registry.wallets().await[0].is_selected);
    }

    #[tokio::test]
    async fn toggle_of_unknown_id_is_a_noop() {
        let registry = WalletRegistry::new();
        let wallet = registry.add(Network::Ethereum).await;

        registry.toggle_selection(Uuid::new_v4()).await;
        assert_eq!(registry.wallets().await[0].is_selected, wallet.is_selected);
    }

    #[tokio::test]
    async fn selected_on_filters_by_network_and_flag() {
        let registry = WalletRegistry::new();
        let eth = registry.add(Network::Ethereum).await;
        let sol = registry.add(Network::Solana).await;
        let deselected = registry.add(Network::Ethereum).await;
        registry.toggle_selection(deselected.id).await;

        let eligible = registry.selected_on(Network::Ethereum).await;
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].id, eth.id);

        let eligible = registry.selected_on(Network::Solana).await;
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].id, sol.id);
    }

    #[tokio::test]
    async fn imported_wallets_carry_their_secret_and_label() {
        let registry = WalletRegistry::new();
        let wallet = registry
            .import(Network::Solana, SecretMaterial::new("5J...7890"))
            .await;

        assert_eq!(wallet.label, "Sol Key 1");
        assert_eq!(wallet.secret.as_ref().unwrap().expose(), "5J...7890");
    }

    #[tokio::test]
    async fn generated_labels_count_the_fleet() {
        let registry = WalletRegistry::new();
        assert_eq!(registry.add(Network::Ethereum).await.label, "Eth Node 1");
        assert_eq!(registry.add(Network::Solana).await.label, "Sol Node 2");
    }
}
