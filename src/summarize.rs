use async_trait::async_trait;
use eyre::{Result, bail};
use log::debug;

pub const DEFAULT_GROQ_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";

/// Hosted LLM that turns a prompt into a completion
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, api_key: &str, prompt: &str) -> Result<String>;
}

/// Groq's OpenAI-compatible chat completions client
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GroqClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_GROQ_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Summarizer for GroqClient {
    async fn summarize(&self, api_key: &str, prompt: &str) -> Result<String> {
        debug!("Summarizing via Groq API with model {}", self.model);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("Groq API returned {status}: {body}");
        }

        let json: serde_json::Value = resp.json().await?;
        extract_completion_text(&json)
    }
}

fn extract_completion_text(json: &serde_json::Value) -> Result<String> {
    if let Some(text) = json
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|t| t.as_str())
    {
        return Ok(text.to_string());
    }
    bail!("unexpected Groq API response format");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_completion_text() {
        let json = serde_json::json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "model": "llama-3.1-70b-versatile",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": "Summary of the video."
                    },
                    "finish_reason": "stop"
                }
            ]
        });
        assert_eq!(extract_completion_text(&json).unwrap(), "Summary of the video.");
    }

    #[test]
    fn test_extract_completion_text_empty() {
        let json = serde_json::json!({"choices": []});
        assert!(extract_completion_text(&json).is_err());
    }

    #[test]
    fn test_extract_completion_text_null_content() {
        let json = serde_json::json!({"choices": [{"message": {"role": "assistant", "content": null}}]});
        assert!(extract_completion_text(&json).is_err());
    }

    #[test]
    fn test_builder_defaults() {
        let groq = GroqClient::new(reqwest::Client::new());
        assert_eq!(groq.model(), DEFAULT_MODEL);
        assert_eq!(groq.base_url, DEFAULT_GROQ_URL);

        let groq = groq.with_model("llama-3.3-70b-versatile").with_base_url("http://localhost:8080/v1/");
        assert_eq!(groq.model(), "llama-3.3-70b-versatile");
        assert_eq!(groq.base_url, "http://localhost:8080/v1");
    }
}
