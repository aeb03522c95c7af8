pub mod clipboard;
pub mod config;
pub mod fields;
pub mod focus;
pub mod generation;
pub mod help;
pub mod keys;
pub mod mouse;
pub mod prompt;
pub mod terminal_restore;
pub mod text_buffer;
pub mod ui;

mod app;

pub use app::*;
