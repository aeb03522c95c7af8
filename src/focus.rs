//! Keyboard focus and the help overlay.
//!
//! `Normal` owns a focus target; `Modal` parks the target it will restore when the overlay
//! closes. Focus commands issued while modal are refused and report `false`.

/// Focusable controls in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Language,
    Model,
    Temperature,
    Context,
    GenerateButton,
    CopyButton,
    QuitButton,
    Prompt,
    Output,
}

pub const FOCUS_ORDER: &[FocusTarget] = &[
    FocusTarget::Language,
    FocusTarget::Model,
    FocusTarget::Temperature,
    FocusTarget::Context,
    FocusTarget::GenerateButton,
    FocusTarget::CopyButton,
    FocusTarget::QuitButton,
    FocusTarget::Prompt,
    FocusTarget::Output,
];

impl FocusTarget {
    fn index(self) -> usize {
        FOCUS_ORDER
            .iter()
            .position(|target| *target == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        FOCUS_ORDER[(self.index() + 1) % FOCUS_ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = FOCUS_ORDER.len();
        FOCUS_ORDER[(self.index() + len - 1) % len]
    }

    pub fn has_text_buffer(self) -> bool {
        matches!(
            self,
            FocusTarget::Temperature | FocusTarget::Context | FocusTarget::Prompt | FocusTarget::Output
        )
    }

    /// Output accepts cursor movement and selection but never edits.
    pub fn is_editable(self) -> bool {
        matches!(
            self,
            FocusTarget::Temperature | FocusTarget::Context | FocusTarget::Prompt
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    Normal(FocusTarget),
    Modal { restore: FocusTarget },
}

#[derive(Debug, Clone)]
pub struct FocusController {
    state: FocusState,
}

impl FocusController {
    pub fn new(initial: FocusTarget) -> Self {
        Self {
            state: FocusState::Normal(initial),
        }
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Focused control, or `None` while the overlay owns input.
    pub fn focused(&self) -> Option<FocusTarget> {
        match self.state {
            FocusState::Normal(target) => Some(target),
            FocusState::Modal { .. } => None,
        }
    }

    pub fn is_modal(&self) -> bool {
        matches!(self.state, FocusState::Modal { .. })
    }

    pub fn focus_next(&mut self) -> bool {
        self.update(FocusTarget::next)
    }

    pub fn focus_previous(&mut self) -> bool {
        self.update(FocusTarget::previous)
    }

    pub fn focus(&mut self, target: FocusTarget) -> bool {
        self.update(|_| target)
    }

    /// Open or close the overlay. Returns `true` when the overlay is now open.
    pub fn toggle_modal(&mut self) -> bool {
        self.state = match self.state {
            FocusState::Normal(target) => FocusState::Modal { restore: target },
            FocusState::Modal { restore } => FocusState::Normal(restore),
        };
        self.is_modal()
    }

    /// Close the overlay if it is open. Returns `true` if something was dismissed.
    pub fn dismiss_modal(&mut self) -> bool {
        match self.state {
            FocusState::Modal { restore } => {
                self.state = FocusState::Normal(restore);
                true
            }
            FocusState::Normal(_) => false,
        }
    }

    fn update(&mut self, step: impl FnOnce(FocusTarget) -> FocusTarget) -> bool {
        match self.state {
            FocusState::Normal(target) => {
                self.state = FocusState::Normal(step(target));
                true
            }
            FocusState::Modal { .. } => false,
        }
    }
}
