//! HTTP client for the `generateContent` endpoint.

use super::backend::{GenerationError, ModelCall, TextGenerator};
use crate::log_debug;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;
use std::{env, time::Duration};

/// Longest error body kept when the service answers with a non-success status.
const MAX_ERROR_BODY_CHARS: usize = 2_000;
const CANDIDATE_TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

impl GenerateContentRequest {
    pub fn new(prompt: &str, temperature: f32) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig { temperature },
        }
    }
}

/// Raw answer from the wire, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Network seam so the client logic can run against a fake in tests.
pub trait HttpTransport: Send + Sync {
    fn post_json(
        &self,
        url: &str,
        api_key: &str,
        body: &GenerateContentRequest,
    ) -> Result<HttpResponse, GenerationError>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json(
        &self,
        url: &str,
        api_key: &str,
        body: &GenerateContentRequest,
    ) -> Result<HttpResponse, GenerationError> {
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .map_err(|err| {
                if err.is_timeout() {
                    GenerationError::Transport(format!("timed out: {err}"))
                } else {
                    GenerationError::Transport(err.to_string())
                }
            })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| GenerationError::Transport(format!("failed to read body: {err}")))?;
        Ok(HttpResponse { status, body })
    }
}

/// Client for the Gemini `generateContent` API.
pub struct GeminiClient<T = ReqwestTransport> {
    api_base: String,
    credential_var: String,
    transport: T,
}

impl<T: HttpTransport> GeminiClient<T> {
    pub fn new(api_base: impl Into<String>, credential_var: impl Into<String>, transport: T) -> Self {
        Self {
            api_base: api_base.into(),
            credential_var: credential_var.into(),
            transport,
        }
    }

    fn endpoint(&self, call: &ModelCall) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            call.model.model_id()
        )
    }

    fn credential(&self) -> Result<String, GenerationError> {
        match env::var(&self.credential_var) {
            Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            _ => Err(GenerationError::MissingCredential(self.credential_var.clone())),
        }
    }
}

impl<T: HttpTransport> TextGenerator for GeminiClient<T> {
    fn generate(&self, call: &ModelCall) -> Result<String, GenerationError> {
        let api_key = self.credential()?;
        let url = self.endpoint(call);
        let body = GenerateContentRequest::new(&call.prompt, call.temperature);
        log_debug(&format!(
            "POST {url} (model={}, temperature={})",
            call.model.label(),
            call.temperature
        ));
        let response = self.transport.post_json(&url, &api_key, &body)?;
        if !(200..300).contains(&response.status) {
            return Err(GenerationError::HttpStatus {
                status: response.status,
                body: truncate_chars(response.body.trim(), MAX_ERROR_BODY_CHARS),
            });
        }
        extract_text(&response.body)
    }
}

/// Pull the first candidate's text out of a response body. A JSON body with any other shape
/// is returned pretty-printed so the user still sees what came back.
pub fn extract_text(body: &str) -> Result<String, GenerationError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| GenerationError::MalformedResponse(err.to_string()))?;
    if let Some(text) = value
        .pointer(CANDIDATE_TEXT_POINTER)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
    {
        return Ok(text.to_string());
    }
    log_debug("response has no candidate text; showing raw JSON");
    serde_json::to_string_pretty(&value)
        .map_err(|err| GenerationError::MalformedResponse(err.to_string()))
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}
