use super::defaults::MAX_PROMPT_FILE_BYTES;
use super::{AppConfig, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS};
use anyhow::{bail, Context, Result};
use std::fs;

impl AppConfig {
    /// Check CLI values and load the prompt file, if any.
    pub fn validate(&mut self) -> Result<()> {
        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            bail!(
                "--timeout-secs must be between {MIN_TIMEOUT_SECS} and {MAX_TIMEOUT_SECS}, got {}",
                self.timeout_secs
            );
        }

        let api_base = self.api_base.trim_end_matches('/');
        if !(api_base.starts_with("https://") || api_base.starts_with("http://")) {
            bail!("--api-base must start with http:// or https://, got {api_base}");
        }
        if api_base.chars().any(char::is_whitespace) {
            bail!("--api-base cannot contain whitespace");
        }
        self.api_base = api_base.to_string();

        if !self.repo.is_dir() {
            bail!("--repo {} is not a directory", self.repo.display());
        }

        if let Some(path) = &self.prompt_file {
            let metadata = fs::metadata(path)
                .with_context(|| format!("--prompt-file {} not found", path.display()))?;
            if !metadata.is_file() {
                bail!("--prompt-file {} is not a file", path.display());
            }
            if metadata.len() > MAX_PROMPT_FILE_BYTES {
                bail!(
                    "--prompt-file {} is larger than {MAX_PROMPT_FILE_BYTES} bytes",
                    path.display()
                );
            }
            let template = fs::read_to_string(path)
                .with_context(|| format!("failed to read --prompt-file {}", path.display()))?;
            self.prompt_template = Some(template);
        }

        Ok(())
    }
}
