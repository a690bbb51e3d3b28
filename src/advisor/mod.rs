// src/advisor/mod.rs
pub mod gemini;

pub use gemini::GeminiBackend;

use crate::error::{ConsoleError, ConsoleResult};
use crate::types::{ConsoleConfig, ContractAnalysis, Network};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Served verbatim whenever the advisory service cannot produce advice
pub const FALLBACK_ADVICE: &str = "Monitor gas prices closely. Use 20% higher priority fee than current average for 99% success rate.";

const ADVICE_SYSTEM_INSTRUCTION: &str = "You are an expert blockchain developer. Provide concise, technical advice on NFT minting strategies, gas optimization, and multi-wallet management.";

/// Text-generation backend seam. The production implementation is
/// [`GeminiBackend`]; tests swap in failing or canned backends.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Run one completion and return the first candidate's text
    async fn generate(&self, model: &str, request: GenerateRequest) -> ConsoleResult<String>;
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::text(prompt)],
            system_instruction: None,
            generation_config: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(Content::text(instruction));
        self
    }

    pub fn with_json_schema(mut self, schema: serde_json::Value) -> Self {
        self.generation_config = Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        });
        self
    }
}

/// Advisory front door: free-text minting advice with a hardcoded fallback,
/// and schema-pinned contract analysis that hard-fails without one.
#[derive(Clone)]
pub struct AdvisoryClient {
    backend: Arc<dyn GenerativeBackend>,
    advice_model: String,
    analysis_model: String,
}

impl AdvisoryClient {
    pub fn new(config: &ConsoleConfig) -> ConsoleResult<Self> {
        let backend = Arc::new(GeminiBackend::new(&config.api_key)?);
        Ok(Self::with_backend(backend, config))
    }

    pub fn with_backend(backend: Arc<dyn GenerativeBackend>, config: &ConsoleConfig) -> Self {
        Self {
            backend,
            advice_model: config.advice_model.clone(),
            analysis_model: config.analysis_model.clone(),
        }
    }

    /// Fetch free-text minting advice. Degrades to [`FALLBACK_ADVICE`] on any
    /// failure; never returns an error.
    pub async fn minting_advice(&self, prompt: &str) -> String {
        let request =
            GenerateRequest::text(prompt).with_system_instruction(ADVICE_SYSTEM_INSTRUCTION);

        match self.backend.generate(&self.advice_model, request).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                log::warn!("Advisory service returned empty advice, serving fallback");
                FALLBACK_ADVICE.to_string()
            }
            Err(err) => {
                log::warn!("Advisory fetch failed ({}), serving fallback", err);
                FALLBACK_ADVICE.to_string()
            }
        }
    }

    /// Request a structured security audit of a contract. A missing or
    /// non-conforming response is a hard failure the caller must catch.
    pub async fn analyze_contract(
        &self,
        contract_data: &str,
        network: Network,
    ) -> ConsoleResult<ContractAnalysis> {
        let prompt = format!(
            "Analyze this {} NFT contract code/address and provide a security audit. \
             Focus on minting functions, owner privileges, and potential rug-pull mechanisms. \
             Data: {}",
            network, contract_data
        );
        let request = GenerateRequest::text(prompt).with_json_schema(analysis_schema());

        let text = match self.backend.generate(&self.analysis_model, request).await {
            Ok(text) => text,
            Err(ConsoleError::EmptyResponse) => return Err(ConsoleError::NoAnalysisReceived),
            Err(err) => return Err(err),
        };

        serde_json::from_str(&text).map_err(|err| {
            log::debug!("Analysis payload did not match schema: {}", err);
            ConsoleError::NoAnalysisReceived
        })
    }
}

/// Response schema pinned onto analysis requests; all four fields required
fn analysis_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "riskScore": {
                "type": "NUMBER",
                "description": "Risk score from 0 (safe) to 100 (danger)"
            },
            "functions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Key functions found"
            },
            "vulnerabilities": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Detected vulnerabilities"
            },
            "summary": {
                "type": "STRING",
                "description": "Executive summary"
            }
        },
        "required": ["riskScore", "functions", "vulnerabilities", "summary"]
    })
}

/// Marketplace links get wrapped in extraction phrasing; raw addresses pass
/// through untouched.
pub fn describe_target(target: &str) -> String {
    if target.contains("opensea.io") || target.contains("http") {
        format!(
            "I am providing a link: {}. Extract the contract address and network type.",
            target
        )
    } else {
        target.to_string()
    }
}
