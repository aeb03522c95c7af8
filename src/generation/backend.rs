use crate::config::{Language, Model};
use crate::fields::Fields;
use std::{sync::Arc, time::Duration};
use thiserror::Error;

/// Identifier handed to each generation worker so stale results can be recognized.
pub type JobId = u64;

/// Failures a generation attempt can end with. All of them end up as text in the output panel.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The credential variable is unset or blank. Raised before any network traffic.
    #[error("Falta {0} en entorno.")]
    MissingCredential(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("generation worker panicked: {0}")]
    WorkerPanicked(String),
}

impl GenerationError {
    /// Short tag for logs.
    pub fn phase(&self) -> &'static str {
        match self {
            GenerationError::MissingCredential(_) => "config",
            GenerationError::Transport(_) => "transport",
            GenerationError::HttpStatus { .. } => "http",
            GenerationError::MalformedResponse(_) => "response",
            GenerationError::WorkerPanicked(_) => "worker",
        }
    }
}

/// Snapshot of the fields a generation needs, taken on the UI thread when the command fires.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub template: String,
    pub context: String,
    pub language: Language,
    pub model: Model,
    pub temperature_text: String,
}

impl GenerationRequest {
    pub fn from_fields(fields: &Fields) -> Self {
        Self {
            template: fields.prompt.text().to_string(),
            context: fields.context.text().to_string(),
            language: fields.language,
            model: fields.model,
            temperature_text: fields.temperature.text().to_string(),
        }
    }
}

/// Fully resolved call to the text-generation endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCall {
    pub model: Model,
    pub prompt: String,
    pub temperature: f32,
}

/// Source of the staged diff. Never fails; problems yield an empty diff.
pub trait DiffSource: Send + Sync {
    fn staged_diff(&self) -> String;
}

/// Remote text generation.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, call: &ModelCall) -> Result<String, GenerationError>;
}

/// Collaborators shared with worker threads.
#[derive(Clone)]
pub struct Services {
    pub diff: Arc<dyn DiffSource>,
    pub generator: Arc<dyn TextGenerator>,
}

impl Services {
    pub fn new(diff: Arc<dyn DiffSource>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { diff, generator }
    }
}

/// Single message a worker sends back when it is done.
#[derive(Debug)]
pub struct GenerationMessage {
    pub job_id: JobId,
    pub outcome: Result<String, GenerationError>,
    pub elapsed: Duration,
}
