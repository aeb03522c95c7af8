//! Application state for the commit-message screen.
//!
//! `App` owns every field shown on screen, the focus/overlay state, and the single
//! generation slot. The event loop in `ui` feeds it keys and worker results.

mod logging;
mod state;

#[cfg(test)]
pub(crate) use logging::{log_file_path, set_logging_for_tests, trace_log_path};
pub use logging::{init_logging, log_debug, log_debug_content, log_panic};
pub use state::{
    App, GenerationState, SPINNER_FRAMES, STATUS_CANNOT_SELECT, STATUS_CONTEXT_CLEARED,
    STATUS_DONE, STATUS_ERROR, STATUS_GENERATING, STATUS_NO_SELECTION, STATUS_OUTPUT_COPIED,
    STATUS_SELECTED_ALL, STATUS_SELECTION_COPIED,
};
