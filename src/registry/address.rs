// src/registry/address.rs
use crate::types::Network;
use rand::RngCore;

/// Generate a synthetic address for the fleet. Shapes mimic the real chains
/// closely enough for display; nothing ever validates or resolves them.
pub fn synthetic(network: Network) -> String {
    match network {
        Network::Ethereum => {
            let mut bytes = [0u8; 20];
            rand::thread_rng().fill_bytes(&mut bytes);
            format!("0x{}", hex::encode(bytes))
        }
        Network::Solana => (0..32).map(|_| fastrand::alphanumeric()).collect(),
    }
}

/// Random display balance in [0.10, 2.10), two decimals
pub fn display_balance() -> String {
    format!("{:.2}", 0.1 + fastrand::f64() * 2.0)
}
