// src/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use zeroize::Zeroize;

/// Mock chains the console routes between. A display/routing tag only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Ethereum,
    Solana,
}

impl Network {
    /// Fee unit echoed into confirmation messages
    pub fn fee_unit(&self) -> &'static str {
        match self {
            Network::Ethereum => "Gwei",
            Network::Solana => "P-Fee",
        }
    }

    pub fn short_tag(&self) -> &'static str {
        match self {
            Network::Ethereum => "Eth",
            Network::Solana => "Sol",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Ethereum => write!(f, "Ethereum"),
            Network::Solana => write!(f, "Solana"),
        }
    }
}

/// Imported key material. Held in memory for the session only, wiped on drop,
/// never serialized or logged.
#[derive(Clone)]
pub struct SecretMaterial(String);

impl Drop for SecretMaterial {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl SecretMaterial {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretMaterial(<redacted>)")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub id: Uuid,
    pub label: String,
    pub address: String,
    pub network: Network,
    /// Display-only decimal string, never validated or refreshed
    pub balance: String,
    pub is_selected: bool,
    #[serde(skip)]
    pub secret: Option<SecretMaterial>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Pending,
    Success,
    Error,
}

/// One line of the activity feed. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: String,
    pub wallet_label: String,
    pub status: LogStatus,
    pub message: String,
    pub network: Network,
    pub fee_used: Option<String>,
}

impl LogEntry {
    pub fn new(
        wallet_label: impl Into<String>,
        status: LogStatus,
        message: impl Into<String>,
        network: Network,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            wallet_label: wallet_label.into(),
            status,
            message: message.into(),
            network,
            fee_used: None,
        }
    }

    pub fn with_fee(mut self, fee_used: impl Into<String>) -> Self {
        self.fee_used = Some(fee_used.into());
        self
    }
}

/// Security audit produced wholesale by the advisory service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAnalysis {
    /// 0 (safe) to 100 (danger) by contract with the service; not enforced here
    pub risk_score: f64,
    pub functions: Vec<String>,
    pub vulnerabilities: Vec<String>,
    pub summary: String,
}

/// Cosmetic fee knob echoed into log messages
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeeSettings {
    pub priority_fee: f64,
}

impl Default for FeeSettings {
    fn default() -> Self {
        Self { priority_fee: 2.5 }
    }
}

#[derive(Debug, Clone)]
pub struct MintRequest {
    pub target: String,
    pub network: Network,
    pub quantity: u32,
    pub fee: FeeSettings,
}

/// Per-wallet result returned by one outcome task
#[derive(Debug, Clone)]
pub struct MintOutcome {
    pub wallet_id: Uuid,
    pub wallet_label: String,
    pub confirmed: bool,
}

/// Tally of a fully settled batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub attempted: usize,
    pub confirmed: usize,
    pub dropped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagStatus {
    Idle,
    Checking,
    Healthy,
    Error,
}

/// Timing and probability knobs for the mint simulation
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
    pub success_probability: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            delay_min_ms: 1500,
            delay_max_ms: 4000,
            success_probability: 0.95,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DiagnosticsConfig {
    pub probe_delay_ms: u64,
    pub reset_delay_ms: u64,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            probe_delay_ms: 1500,
            reset_delay_ms: 3000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub api_key: String,
    pub advice_model: String,
    pub analysis_model: String,
    pub simulation: SimulationConfig,
    pub diagnostics: DiagnosticsConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            advice_model: "gemini-3-flash-preview".to_string(),
            analysis_model: "gemini-3-pro-preview".to_string(),
            simulation: SimulationConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// Read the service credential once at startup. Absence is not an error
    /// here; advisory calls fail at call time instead.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .unwrap_or_default();

        Self {
            api_key,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_units_follow_network() {
        assert_eq!(Network::Ethereum.fee_unit(), "Gwei");
        assert_eq!(Network::Solana.fee_unit(), "P-Fee");
    }

    #[test]
    fn secret_material_is_redacted_in_debug() {
        let secret = SecretMaterial::new("0x...1234");
        assert_eq!(format!("{:?}", secret), "SecretMaterial(<redacted>)");
        assert_eq!(secret.expose(), "0x...1234");
    }

    #[test]
    fn wallet_serialization_skips_secret() {
        let wallet = Wallet {
            id: Uuid::new_v4(),
            label: "Eth Key 1".to_string(),
            address: "0xabc".to_string(),
            network: Network::Ethereum,
            balance: "1.24".to_string(),
            is_selected: true,
            secret: Some(SecretMaterial::new("5J...7890")),
        };

        let json = serde_json::to_string(&wallet).unwrap();
        assert!(!json.contains("7890"));
        assert!(json.contains("Ethereum"));
    }

    #[test]
    fn contract_analysis_uses_wire_field_names() {
        let json = r#"{
            "riskScore": 42.0,
            "functions": ["mint", "setBaseURI"],
            "vulnerabilities": [],
            "summary": "Moderate risk."
        }"#;

        let analysis: ContractAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.risk_score, 42.0);
        assert_eq!(analysis.functions.len(), 2);
    }
}
