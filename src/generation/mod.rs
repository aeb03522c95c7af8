//! Generation worker plus the collaborators it talks to: the staged diff and the remote
//! text-generation endpoint. The UI thread snapshots its fields into a
//! `GenerationRequest`, a worker thread does the slow part, and exactly one
//! `GenerationMessage` comes back over a channel.

mod backend;
mod gemini;
mod git;
mod job;

pub use backend::{
    DiffSource, GenerationError, GenerationMessage, GenerationRequest, JobId, ModelCall, Services,
    TextGenerator,
};
pub use gemini::{
    extract_text, GeminiClient, GenerateContentRequest, HttpResponse, HttpTransport,
    ReqwestTransport,
};
pub use git::GitDiff;
pub use job::{run_generation, spawn_generation};

use crate::config::{AppConfig, CREDENTIAL_ENV};
use anyhow::Result;
use std::{sync::Arc, time::Duration};

/// Wire the real git diff and HTTP client from CLI options.
pub fn services_from_config(config: &AppConfig) -> Result<Services> {
    let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
    let generator = GeminiClient::new(config.api_base.clone(), CREDENTIAL_ENV, transport);
    Ok(Services::new(
        Arc::new(GitDiff::new(config.repo.clone())),
        Arc::new(generator),
    ))
}
