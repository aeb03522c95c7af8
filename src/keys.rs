//! Global key chords. Anything not listed here is routed to the focused field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleHelp,
    Generate,
    CopyOutput,
    FocusNext,
    FocusPrevious,
    FocusPrompt,
    FocusContext,
    FocusOutput,
    ClearContext,
    /// Close the overlay if one is open, otherwise exit.
    QuitOrDismiss,
    SelectAll,
    CopySelection,
}

impl Command {
    /// Commands that still run while the help overlay is open.
    pub fn allowed_in_modal(self) -> bool {
        matches!(self, Command::ToggleHelp | Command::QuitOrDismiss)
    }
}

pub fn command_for_key(key: &KeyEvent) -> Option<Command> {
    // Ctrl+Alt is AltGr on some layouts and produces text, not a chord.
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);
    let command = match key.code {
        KeyCode::F(1) => Command::ToggleHelp,
        KeyCode::Esc => Command::QuitOrDismiss,
        KeyCode::BackTab => Command::FocusPrevious,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Command::FocusPrevious,
        KeyCode::Tab => Command::FocusNext,
        KeyCode::Char(ch) if ctrl => match ch.to_ascii_lowercase() {
            'j' => Command::Generate,
            'y' => Command::CopyOutput,
            'p' => Command::FocusPrompt,
            't' => Command::FocusContext,
            'o' => Command::FocusOutput,
            'l' => Command::ClearContext,
            'q' => Command::QuitOrDismiss,
            'a' => Command::SelectAll,
            'c' => Command::CopySelection,
            _ => return None,
        },
        _ => return None,
    };
    Some(command)
}
