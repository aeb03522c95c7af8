//! Command-line parsing and validation helpers.

mod defaults;
mod validation;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub use defaults::{
    CREDENTIAL_ENV, DEFAULT_API_BASE, DEFAULT_TEMPERATURE_TEXT, DEFAULT_TIMEOUT_SECS,
    MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

/// CLI options for the commit message TUI. Everything here only seeds the screen; the
/// fields stay editable once the UI is running.
#[derive(Debug, Parser, Clone)]
#[command(about = "committerm: commit messages from your staged diff", author, version)]
pub struct AppConfig {
    /// Initial language for the generated message
    #[arg(long, value_enum, default_value_t = Language::Es)]
    pub lang: Language,

    /// Initial model selection
    #[arg(long, value_enum, default_value_t = Model::Pro)]
    pub model: Model,

    /// Initial temperature text (parsed when generating; invalid values fall back to 0.2)
    #[arg(long, default_value = DEFAULT_TEMPERATURE_TEXT, allow_hyphen_values = true)]
    pub temperature: String,

    /// Initial context text
    #[arg(long, default_value = "")]
    pub context: String,

    /// Load the prompt template from a file instead of the built-in one
    #[arg(long = "prompt-file", value_name = "PATH")]
    pub prompt_file: Option<PathBuf>,

    /// Repository whose staged changes are described
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Base URL of the generation endpoint
    #[arg(long = "api-base", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Request timeout in seconds
    #[arg(long = "timeout-secs", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Print the assembled prompt for the staged diff and exit
    #[arg(long = "print-prompt", default_value_t = false)]
    pub print_prompt: bool,

    /// Enable file logging (debug)
    #[arg(long = "logs", env = "COMMITTERM_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "COMMITTERM_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,

    /// Allow logging prompt/output snippets (debug log only)
    #[arg(
        long = "log-content",
        env = "COMMITTERM_LOG_CONTENT",
        default_value_t = false
    )]
    pub log_content: bool,

    /// Template text loaded from --prompt-file during validation.
    #[arg(skip)]
    pub prompt_template: Option<String>,
}

/// Language the commit message is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Es,
    En,
}

impl Language {
    pub fn label(self) -> &'static str {
        match self {
            Language::Es => "Español",
            Language::En => "English",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }
}

/// Model tier used for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Model {
    Pro,
    Flash,
}

impl Model {
    pub fn label(self) -> &'static str {
        match self {
            Model::Pro => "pro",
            Model::Flash => "flash",
        }
    }

    /// Identifier the endpoint expects in the request path.
    pub fn model_id(self) -> &'static str {
        match self {
            Model::Pro => "gemini-2.5-pro",
            Model::Flash => "gemini-2.5-flash",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Model::Pro => Model::Flash,
            Model::Flash => Model::Pro,
        }
    }
}
