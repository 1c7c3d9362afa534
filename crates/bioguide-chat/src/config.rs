//! LLM configuration persistence and provider selection.
//!
//! API keys come from `llm-config.json` or the environment, never from code.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::{
    GenerationParams, LLMConfigResponse, LLMConfigUpdate, LLMProvider, ResolvedProvider,
};

pub const DEFAULT_HUGGINGFACE_MODEL: &str = "meta-llama/Llama-2-7b-chat-hf";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

pub const HUGGINGFACE_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// API keys read from the environment. Never written to disk.
#[derive(Debug, Clone, Default)]
pub struct EnvKeys {
    pub huggingface: Option<String>,
    pub openai: Option<String>,
    pub groq: Option<String>,
}

/// Stored LLM configuration (persisted to llm-config.json).
///
/// Keys set through the API live in the `*_api_key` fields and are saved.
/// Keys from the environment live in `env_keys` and only back those fields
/// up at resolution time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    #[serde(default = "default_preferred")]
    pub preferred_provider: String,
    #[serde(default)]
    pub huggingface_api_key: Option<String>,
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub groq_api_key: Option<String>,
    #[serde(default = "default_huggingface_model")]
    pub huggingface_model: String,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default = "default_groq_model")]
    pub groq_model: String,
    /// Overrides for self-hosted or proxied endpoints.
    #[serde(default)]
    pub huggingface_base_url: Option<String>,
    #[serde(default)]
    pub openai_base_url: Option<String>,
    #[serde(default)]
    pub groq_base_url: Option<String>,
    #[serde(default)]
    pub params: GenerationParams,
    #[serde(skip)]
    pub env_keys: EnvKeys,
    /// Path to config file for saving.
    #[serde(skip)]
    pub config_path: PathBuf,
}

fn default_preferred() -> String {
    "auto".into()
}
fn default_huggingface_model() -> String {
    DEFAULT_HUGGINGFACE_MODEL.into()
}
fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.into()
}
fn default_groq_model() -> String {
    DEFAULT_GROQ_MODEL.into()
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            preferred_provider: "auto".into(),
            huggingface_api_key: None,
            openai_api_key: None,
            groq_api_key: None,
            huggingface_model: DEFAULT_HUGGINGFACE_MODEL.into(),
            openai_model: DEFAULT_OPENAI_MODEL.into(),
            groq_model: DEFAULT_GROQ_MODEL.into(),
            huggingface_base_url: None,
            openai_base_url: None,
            groq_base_url: None,
            params: GenerationParams::default(),
            env_keys: EnvKeys::default(),
            config_path: PathBuf::new(),
        }
    }
}

impl LLMConfig {
    /// Load config from file, falling back to env vars and defaults.
    pub fn load(config_path: &Path) -> Self {
        let mut config = Self::load_file(config_path);
        config.apply_env();
        config
    }

    /// Load config from file only; a missing or unreadable file yields defaults.
    pub fn load_file(config_path: &Path) -> Self {
        let mut config: LLMConfig = std::fs::read_to_string(config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();
        config.config_path = config_path.to_path_buf();
        config
    }

    /// Env vars as fallback for API keys.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Fill `env_keys` from a variable lookup.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        self.env_keys = EnvKeys {
            huggingface: non_empty("HF_API_TOKEN").or_else(|| non_empty("HUGGINGFACE_API_KEY")),
            openai: non_empty("OPENAI_API_KEY"),
            groq: non_empty("GROQ_API_KEY"),
        };
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(&self.config_path, json)?;
        info!("Saved LLM config to {}", self.config_path.display());
        Ok(())
    }

    /// Apply an update, merging with existing config.
    pub fn apply_update(&mut self, update: &LLMConfigUpdate) {
        if let Some(p) = &update.preferred_provider {
            self.preferred_provider = p.clone();
        }
        if let Some(k) = &update.huggingface_api_key {
            self.huggingface_api_key = Some(k.clone());
        }
        if let Some(k) = &update.openai_api_key {
            self.openai_api_key = Some(k.clone());
        }
        if let Some(k) = &update.groq_api_key {
            self.groq_api_key = Some(k.clone());
        }
        if let Some(m) = &update.huggingface_model {
            self.huggingface_model = m.clone();
        }
        if let Some(m) = &update.openai_model {
            self.openai_model = m.clone();
        }
        if let Some(m) = &update.groq_model {
            self.groq_model = m.clone();
        }
        if let Some(n) = update.max_new_tokens {
            self.params.max_new_tokens = n;
        }
        if let Some(t) = update.temperature {
            self.params.temperature = t;
        }
    }

    /// Configured key for a provider, falling back to the environment.
    fn api_key(&self, provider: LLMProvider) -> Option<&str> {
        let (stored, env) = match provider {
            LLMProvider::HuggingFace => (&self.huggingface_api_key, &self.env_keys.huggingface),
            LLMProvider::OpenAI => (&self.openai_api_key, &self.env_keys.openai),
            LLMProvider::Groq => (&self.groq_api_key, &self.env_keys.groq),
        };
        stored.as_deref().or(env.as_deref())
    }

    fn resolve(&self, provider: LLMProvider) -> Option<ResolvedProvider> {
        let key = self.api_key(provider);
        let (model, base_url, default_base) = match provider {
            LLMProvider::HuggingFace => (
                &self.huggingface_model,
                &self.huggingface_base_url,
                HUGGINGFACE_BASE_URL,
            ),
            LLMProvider::OpenAI => (
                &self.openai_model,
                &self.openai_base_url,
                OPENAI_BASE_URL,
            ),
            LLMProvider::Groq => (
                &self.groq_model,
                &self.groq_base_url,
                GROQ_BASE_URL,
            ),
        };
        key.map(|k| ResolvedProvider {
            provider,
            model: model.clone(),
            api_key: k.to_string(),
            base_url: base_url
                .clone()
                .unwrap_or_else(|| default_base.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// Resolve which provider and model to use.
    pub fn resolve_provider(&self) -> Option<ResolvedProvider> {
        // Explicit preference
        if self.preferred_provider != "auto" {
            return match self.preferred_provider.as_str() {
                "huggingface" => self.resolve(LLMProvider::HuggingFace),
                "openai" => self.resolve(LLMProvider::OpenAI),
                "groq" => self.resolve(LLMProvider::Groq),
                _ => None,
            };
        }

        // Auto mode: HuggingFace > Groq > OpenAI
        self.resolve(LLMProvider::HuggingFace)
            .or_else(|| self.resolve(LLMProvider::Groq))
            .or_else(|| self.resolve(LLMProvider::OpenAI))
    }

    /// Build the public config response (no API keys exposed).
    pub fn to_response(&self) -> LLMConfigResponse {
        LLMConfigResponse {
            preferred_provider: self.preferred_provider.clone(),
            huggingface_configured: self.api_key(LLMProvider::HuggingFace).is_some(),
            openai_configured: self.api_key(LLMProvider::OpenAI).is_some(),
            groq_configured: self.api_key(LLMProvider::Groq).is_some(),
            huggingface_model: self.huggingface_model.clone(),
            openai_model: self.openai_model.clone(),
            groq_model: self.groq_model.clone(),
            max_new_tokens: self.params.max_new_tokens,
            temperature: self.params.temperature,
            active_provider: self.resolve_provider().map(|r| r.provider.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolves_nothing() {
        assert!(LLMConfig::default().resolve_provider().is_none());
    }

    #[test]
    fn test_auto_prefers_huggingface() {
        let config = LLMConfig {
            openai_api_key: Some("sk-o".into()),
            huggingface_api_key: Some("hf-x".into()),
            ..LLMConfig::default()
        };
        let resolved = config.resolve_provider().unwrap();
        assert_eq!(resolved.provider, LLMProvider::HuggingFace);
        assert_eq!(resolved.model, DEFAULT_HUGGINGFACE_MODEL);
        assert_eq!(resolved.base_url, HUGGINGFACE_BASE_URL);
    }

    #[test]
    fn test_explicit_preference_without_key() {
        let config = LLMConfig {
            preferred_provider: "groq".into(),
            openai_api_key: Some("sk-o".into()),
            ..LLMConfig::default()
        };
        assert!(config.resolve_provider().is_none());
    }

    #[test]
    fn test_base_url_override_trims_slash() {
        let config = LLMConfig {
            groq_api_key: Some("g".into()),
            groq_base_url: Some("http://localhost:8080/v1/".into()),
            ..LLMConfig::default()
        };
        assert_eq!(config.resolve_provider().unwrap().base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn test_response_masks_keys() {
        let config = LLMConfig {
            huggingface_api_key: Some("hf-secret".into()),
            ..LLMConfig::default()
        };
        let json = serde_json::to_string(&config.to_response()).unwrap();
        assert!(!json.contains("hf-secret"));
        assert!(json.contains("\"huggingfaceConfigured\":true"));
        assert!(json.contains("\"activeProvider\":\"huggingface\""));
    }

    fn env(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_env_key_resolves_but_is_never_saved() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("llm-config.json");
        let mut config = LLMConfig::load_file(&path);
        config.apply_env_from(env(&[("GROQ_API_KEY", "gsk-from-env-secret")]));

        let resolved = config.resolve_provider().unwrap();
        assert_eq!(resolved.provider, LLMProvider::Groq);
        assert_eq!(resolved.api_key, "gsk-from-env-secret");
        assert!(config.to_response().groq_configured);

        config.apply_update(&LLMConfigUpdate {
            max_new_tokens: Some(80),
            ..LLMConfigUpdate::default()
        });
        config.save().unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(!on_disk.contains("gsk-from-env-secret"));
        let reloaded = LLMConfig::load_file(&path);
        assert!(reloaded.groq_api_key.is_none());
        assert_eq!(reloaded.params.max_new_tokens, 80);
    }

    #[test]
    fn test_stored_key_wins_over_env() {
        let mut config = LLMConfig {
            openai_api_key: Some("sk-stored".into()),
            ..LLMConfig::default()
        };
        config.apply_env_from(env(&[("OPENAI_API_KEY", "sk-env"), ("HF_API_TOKEN", "  ")]));
        let resolved = config.resolve_provider().unwrap();
        assert_eq!(resolved.provider, LLMProvider::OpenAI);
        assert_eq!(resolved.api_key, "sk-stored");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("llm-config.json");
        let mut config = LLMConfig::load_file(&path);
        config.apply_update(&LLMConfigUpdate {
            preferred_provider: Some("openai".into()),
            openai_api_key: Some("sk-1".into()),
            max_new_tokens: Some(64),
            ..LLMConfigUpdate::default()
        });
        config.save().unwrap();

        let reloaded = LLMConfig::load_file(&path);
        assert_eq!(reloaded.preferred_provider, "openai");
        assert_eq!(reloaded.params.max_new_tokens, 64);
        assert_eq!(reloaded.resolve_provider().unwrap().provider, LLMProvider::OpenAI);
    }
}
