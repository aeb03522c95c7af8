//! Values shown on the screen: selectors, text fields, and the status line.

use crate::config::{AppConfig, Language, Model};
use crate::focus::FocusTarget;
use crate::prompt::DEFAULT_PROMPT;
use crate::text_buffer::TextBuffer;

pub const INITIAL_STATUS: &str = "F1 -> Ayuda";

/// Every editable or display-only value of the screen. Only the UI thread touches it.
#[derive(Debug, Clone)]
pub struct Fields {
    pub language: Language,
    pub model: Model,
    pub temperature: TextBuffer,
    pub context: TextBuffer,
    pub prompt: TextBuffer,
    pub output: TextBuffer,
    pub status: String,
}

impl Fields {
    pub fn from_config(config: &AppConfig) -> Self {
        let template = config
            .prompt_template
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string());
        Self {
            language: config.lang,
            model: config.model,
            temperature: TextBuffer::single_line(config.temperature.clone()),
            context: TextBuffer::multi_line(config.context.clone()),
            prompt: TextBuffer::multi_line(template),
            output: TextBuffer::multi_line(""),
            status: INITIAL_STATUS.to_string(),
        }
    }

    /// Text buffer behind a focus target, if it has one.
    pub fn buffer(&self, target: FocusTarget) -> Option<&TextBuffer> {
        match target {
            FocusTarget::Temperature => Some(&self.temperature),
            FocusTarget::Context => Some(&self.context),
            FocusTarget::Prompt => Some(&self.prompt),
            FocusTarget::Output => Some(&self.output),
            _ => None,
        }
    }

    pub fn buffer_mut(&mut self, target: FocusTarget) -> Option<&mut TextBuffer> {
        match target {
            FocusTarget::Temperature => Some(&mut self.temperature),
            FocusTarget::Context => Some(&mut self.context),
            FocusTarget::Prompt => Some(&mut self.prompt),
            FocusTarget::Output => Some(&mut self.output),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::FOCUS_ORDER;
    use clap::Parser;

    #[test]
    fn buffers_exist_exactly_for_text_targets() {
        let mut fields = Fields::from_config(&AppConfig::parse_from(["committerm"]));
        for &target in FOCUS_ORDER {
            assert_eq!(
                fields.buffer(target).is_some(),
                target.has_text_buffer(),
                "{target:?}"
            );
            assert_eq!(fields.buffer_mut(target).is_some(), target.has_text_buffer());
        }
    }
}
