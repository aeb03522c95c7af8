pub const DEFAULT_TEMPERATURE_TEXT: &str = "0.2";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 600;
/// Environment variable holding the generation service credential. Read at call time.
pub const CREDENTIAL_ENV: &str = "GEMINI_API_KEY";

// Prompt files are pasted into the editor verbatim; keep them to something a terminal can show.
pub(super) const MAX_PROMPT_FILE_BYTES: u64 = 256 * 1024;
