//! Prompt assembly for the commit message request.
//!
//! Everything here is pure: the same template, context, language, and diff always produce
//! byte-identical output, so the worker thread and `--print-prompt` share one code path.

use crate::config::Language;
use std::ops::RangeInclusive;

/// Temperature used when the field is blank, unparseable, or out of range.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
/// Accepted sampling temperatures.
pub const TEMPERATURE_RANGE: RangeInclusive<f32> = 0.0..=2.0;

pub const CONTEXT_SEPARATOR: &str = "\n\nUse the following context to understand intent:\n";

const SPANISH_INSTRUCTION: &str = "\n\nAhora, genera el mensaje de commit correcto basado en esta información. En español, ten en cuenta una buena ortografía y usa acentos donde sea necesario.\nAquí está el Git diff:\n";
const ENGLISH_INSTRUCTION: &str = "\n\nNow, generate the correct commit message based on this information. In English language.\nHere is the Git diff:\n";

/// Conventional Commits template the prompt field is seeded with.
pub const DEFAULT_PROMPT: &str = r#"Eres un modelo de inteligencia artificial altamente capacitado en las mejores prácticas de desarrollo de software, específicamente para generar mensajes de commit siguiendo la especificación de Conventional Commits.
Dado el Git diff que se proporciona a continuación, por favor genera un título y cuerpo de commit adecuado de acuerdo a las directrices de Conventional Commits:
- Choose a type from the type-to-description below that best describes the git diff:
    "docs": "Documentation only changes",
    "style": "Changes that do not affect the meaning of the code",
    "refactor": "A code change that neither fixes a bug nor adds a feature",
    "perf": "A code change that improves performance",
    "test": "Adding missing tests or correcting existing tests",
    "build": "Changes that affect the build system or external dependencies",
    "ci": "Changes to our CI configuration files and scripts",
    "chore": "Other changes that don't modify src or test files",
    "revert": "Reverts a previous commit",
    "feat": "A new feature",
    "fix": "A bug fix"
- Proporciona un título conciso para el commit (no más de 72 caracteres).
- Opcionalmente, incluye un cuerpo detallado del commit que explique el propósito de los cambios, la justificación y cualquier contexto relevante. Nunca uses comillas simples '' ni comillas dobles "" en el cuerpo detallado, en su caso usa backticks `` solamente.
"#;

/// Fixed instruction sentence that precedes the diff.
pub fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::Es => SPANISH_INSTRUCTION,
        Language::En => ENGLISH_INSTRUCTION,
    }
}

/// Build the final prompt: template, optional context, language instruction, then the diff.
pub fn assemble(template: &str, context: &str, language: Language, diff: &str) -> String {
    let instruction = language_instruction(language);
    let mut prompt = String::with_capacity(
        template.len() + CONTEXT_SEPARATOR.len() + context.len() + instruction.len() + diff.len(),
    );
    prompt.push_str(template);
    if !context.trim().is_empty() {
        prompt.push_str(CONTEXT_SEPARATOR);
        prompt.push_str(context);
    }
    prompt.push_str(instruction);
    prompt.push_str(diff);
    prompt
}

/// Read the temperature field. Bad input never surfaces as an error; it becomes the default.
pub fn parse_temperature(text: &str) -> f32 {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite() && TEMPERATURE_RANGE.contains(value))
        .unwrap_or(DEFAULT_TEMPERATURE)
}
