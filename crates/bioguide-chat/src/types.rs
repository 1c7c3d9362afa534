//! Q&A request/response and provider configuration types.

use serde::{Deserialize, Serialize};

/// LLM provider identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LLMProvider {
    HuggingFace,
    OpenAI,
    Groq,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::HuggingFace => write!(f, "huggingface"),
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Groq => write!(f, "groq"),
        }
    }
}

/// Provider, model and credentials picked for a request.
#[derive(Debug, Clone)]
pub struct ResolvedProvider {
    pub provider: LLMProvider,
    pub model: String,
    pub api_key: String,
    pub base_url: String,
}

/// Generation parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_new_tokens: usize,
    pub temperature: f64,
    /// Whether the prompt is echoed back in front of the continuation.
    pub return_full_text: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 150,
            temperature: 0.7,
            return_full_text: false,
        }
    }
}

/// Incoming question.
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Generated answer.
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// LLM config response (keys masked).
#[derive(Debug, Clone, Serialize)]
pub struct LLMConfigResponse {
    #[serde(rename = "preferredProvider")]
    pub preferred_provider: String,
    #[serde(rename = "huggingfaceConfigured")]
    pub huggingface_configured: bool,
    #[serde(rename = "openaiConfigured")]
    pub openai_configured: bool,
    #[serde(rename = "groqConfigured")]
    pub groq_configured: bool,
    #[serde(rename = "huggingfaceModel")]
    pub huggingface_model: String,
    #[serde(rename = "openaiModel")]
    pub openai_model: String,
    #[serde(rename = "groqModel")]
    pub groq_model: String,
    #[serde(rename = "maxNewTokens")]
    pub max_new_tokens: usize,
    pub temperature: f64,
    #[serde(rename = "activeProvider")]
    pub active_provider: Option<String>,
}

/// LLM config update request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LLMConfigUpdate {
    #[serde(rename = "preferredProvider")]
    pub preferred_provider: Option<String>,
    #[serde(rename = "huggingfaceApiKey")]
    pub huggingface_api_key: Option<String>,
    #[serde(rename = "openaiApiKey")]
    pub openai_api_key: Option<String>,
    #[serde(rename = "groqApiKey")]
    pub groq_api_key: Option<String>,
    #[serde(rename = "huggingfaceModel")]
    pub huggingface_model: Option<String>,
    #[serde(rename = "openaiModel")]
    pub openai_model: Option<String>,
    #[serde(rename = "groqModel")]
    pub groq_model: Option<String>,
    #[serde(rename = "maxNewTokens")]
    pub max_new_tokens: Option<usize>,
    pub temperature: Option<f64>,
}
