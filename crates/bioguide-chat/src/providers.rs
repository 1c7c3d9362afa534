//! Hosted text-generation calls.
//!
//! HuggingFace uses the Inference API text-generation format. OpenAI and
//! Groq share the chat-completions format. One request per question, no
//! streaming and no retry.

use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::types::{GenerationParams, LLMProvider, ResolvedProvider};
use bioguide_core::{Error, Result};

/// Send `prompt` to the resolved provider and return the trimmed answer.
pub async fn generate(
    client: &Client,
    resolved: &ResolvedProvider,
    prompt: &str,
    params: &GenerationParams,
) -> Result<String> {
    let (url, body) = match resolved.provider {
        LLMProvider::HuggingFace => (
            format!("{}/models/{}", resolved.base_url, resolved.model),
            json!({
                "inputs": prompt,
                "parameters": {
                    "max_new_tokens": params.max_new_tokens,
                    "temperature": params.temperature,
                    "return_full_text": params.return_full_text,
                },
            }),
        ),
        LLMProvider::OpenAI | LLMProvider::Groq => (
            format!("{}/chat/completions", resolved.base_url),
            json!({
                "model": resolved.model,
                "messages": [{"role": "user", "content": prompt}],
                "temperature": params.temperature,
                "max_tokens": params.max_new_tokens,
                "stream": false,
            }),
        ),
    };

    debug!(
        "Requesting {} completion from {} with model {}",
        resolved.provider, url, resolved.model
    );

    let response = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", resolved.api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Http(format!("API error {}: {}", status, body)));
    }

    let parsed: Value = response
        .json()
        .await
        .map_err(|e| Error::Inference(format!("Invalid response body: {}", e)))?;

    let answer = match resolved.provider {
        LLMProvider::HuggingFace => parse_huggingface(&parsed)?,
        LLMProvider::OpenAI | LLMProvider::Groq => parse_chat_completion(&parsed)?,
    };
    debug!("Received {} chars from {}", answer.len(), resolved.provider);
    Ok(answer)
}

/// Accepts `[{generated_text}]`, `{generated_text}` or `{error}`.
fn parse_huggingface(value: &Value) -> Result<String> {
    if let Some(err) = value.get("error").and_then(Value::as_str) {
        return Err(Error::Inference(err.to_string()));
    }
    let text = match value {
        Value::Array(items) => items.first().and_then(|v| v.get("generated_text")),
        other => other.get("generated_text"),
    };
    text.and_then(Value::as_str)
        .map(|t| t.trim().to_string())
        .ok_or_else(|| Error::Inference("Response has no generated_text".into()))
}

fn parse_chat_completion(value: &Value) -> Result<String> {
    if let Some(err) = value["error"]["message"].as_str() {
        return Err(Error::Inference(err.to_string()));
    }
    value["choices"][0]["message"]["content"]
        .as_str()
        .map(|t| t.trim().to_string())
        .ok_or_else(|| Error::Inference("Response has no choices".into()))
}
