use serde::Serialize;
use serde_json::Value as JsonValue;
use std::time::Duration;

use reqwest::StatusCode;

/// Thin client for one model on an OpenAI-compatible API.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    pub base: String,
    pub token: String,
    pub model: String,
}

/// Provider call failures, split so handlers can relay upstream errors
/// verbatim while everything else stays internal.
#[derive(Debug)]
pub enum OpenAiError {
    /// The provider answered with a non-success status.
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    /// Transport failure, or a response that doesn't match the API shape.
    Other(anyhow::Error),
}

impl OpenAiClient {
    #[must_use]
    pub const fn new(base: String, token: String, model: String) -> Self {
        Self { base, token, model }
    }

    /// `POST {base}/chat/completions`; returns the first choice's message
    /// content.
    ///
    /// # Errors
    ///
    /// `Upstream` for non-success provider statuses, `Other` for transport
    /// failures and malformed envelopes.
    pub async fn chat_text(
        &self,
        http: &reqwest::Client,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
        timeout: Duration,
    ) -> Result<String, OpenAiError> {
        #[derive(Serialize)]
        struct Msg<'a> {
            role: &'a str,
            content: &'a str,
        }
        #[derive(Serialize)]
        struct Body<'a> {
            model: &'a str,
            messages: Vec<Msg<'a>>,
            temperature: f32,
            max_tokens: u32,
        }

        let url = format!("{}/chat/completions", self.base.trim_end_matches('/'));
        let body = Body {
            model: &self.model,
            messages: vec![
                Msg {
                    role: "system",
                    content: system,
                },
                Msg {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            max_tokens,
        };

        let envelope = self.post_json(http, &url, &body, timeout).await?;
        envelope
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                OpenAiError::Other(anyhow::anyhow!("completion response missing content"))
            })
    }

    /// `POST {base}/images/generations`; returns the URL of the first
    /// generated image.
    ///
    /// # Errors
    ///
    /// `Upstream` for non-success provider statuses, `Other` for transport
    /// failures and malformed envelopes.
    pub async fn generate_image(
        &self,
        http: &reqwest::Client,
        prompt: &str,
        size: &str,
        timeout: Duration,
    ) -> Result<String, OpenAiError> {
        #[derive(Serialize)]
        struct Body<'a> {
            model: &'a str,
            prompt: &'a str,
            n: u8,
            size: &'a str,
        }

        let url = format!("{}/images/generations", self.base.trim_end_matches('/'));
        let body = Body {
            model: &self.model,
            prompt,
            n: 1,
            size,
        };

        let envelope = self.post_json(http, &url, &body, timeout).await?;
        envelope
            .pointer("/data/0/url")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| OpenAiError::Other(anyhow::anyhow!("image response missing url")))
    }

    async fn post_json<B: Serialize>(
        &self,
        http: &reqwest::Client,
        url: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<JsonValue, OpenAiError> {
        let mut req = http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .timeout(timeout)
            .json(body);

        if !self.token.trim().is_empty() {
            req = req.bearer_auth(&self.token);
        }

        let resp = req.send().await.map_err(|e| OpenAiError::Other(e.into()))?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(OpenAiError::Upstream {
                status,
                message: extract_error_message(&text),
            });
        }

        serde_json::from_str(&text).map_err(|e| OpenAiError::Other(e.into()))
    }
}

/// Pull `error.message` out of a provider error body, if it has one.
fn extract_error_message(body: &str) -> Option<String> {
    let js: JsonValue = serde_json::from_str(body).ok()?;
    let msg = js.pointer("/error/message").and_then(|v| v.as_str())?;
    let msg = msg.trim();
    if msg.is_empty() {
        return None;
    }
    Some(msg.to_string())
}
