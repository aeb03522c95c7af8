use crate::clipboard::ClipboardSink;
use crate::config::AppConfig;
use crate::fields::Fields;
use crate::focus::{FocusController, FocusTarget, FOCUS_ORDER};
use crate::generation::{
    spawn_generation, GenerationMessage, GenerationRequest, JobId, Services,
};
use crate::help::help_lines;
use crate::keys::Command;
use crate::mouse::ClickAction;
use crate::{log_debug, log_debug_content};
use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const STATUS_GENERATING: &str = "Generando...";
pub const STATUS_DONE: &str = "Hecho";
pub const STATUS_ERROR: &str = "Error";
pub const STATUS_OUTPUT_COPIED: &str = "Copiado al portapapeles";
pub const STATUS_CONTEXT_CLEARED: &str = "Contexto limpiado";
pub const STATUS_SELECTED_ALL: &str = "Todo el texto seleccionado";
pub const STATUS_CANNOT_SELECT: &str = "No se puede seleccionar texto en este campo";
pub const STATUS_SELECTION_COPIED: &str = "Texto seleccionado copiado";
pub const STATUS_NO_SELECTION: &str = "No hay texto seleccionado";

/// Spinner frames shown next to the status while a generation is in flight.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
/// Lines moved by PageUp/PageDown in text fields and the help overlay.
const PAGE_LINES: usize = 10;

macro_rules! state_change {
    ($self:expr, $field:ident, $value:expr) => {{
        $self.$field = $value;
        $self.request_redraw();
    }};
    ($self:expr, $body:block) => {{
        $body
        $self.request_redraw();
    }};
}

/// Lifecycle of the single generation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Running { job_id: JobId },
}

/// Central application state shared between the event loop and the renderer.
///
/// Only the UI thread owns an `App`. Workers report back through `job_tx`; their results are
/// applied by `apply_generation_message`, which keeps this struct the sole writer of UI state.
pub struct App {
    fields: Fields,
    focus: FocusController,
    help_scroll: u16,
    services: Services,
    generation: GenerationState,
    next_job_id: JobId,
    spinner_index: usize,
    job_tx: Sender<GenerationMessage>,
    job_rx: Receiver<GenerationMessage>,
    needs_redraw: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig, services: Services) -> Self {
        let (job_tx, job_rx) = unbounded();
        Self {
            fields: Fields::from_config(config),
            focus: FocusController::new(FOCUS_ORDER[0]),
            help_scroll: 0,
            services,
            generation: GenerationState::Idle,
            next_job_id: 1,
            spinner_index: 0,
            job_tx,
            job_rx,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Run a global command. Everything except help and quit is refused while the overlay is open.
    pub fn dispatch(&mut self, command: Command, clipboard: &mut dyn ClipboardSink) {
        if self.focus.is_modal() && !command.allowed_in_modal() {
            log_debug(&format!("{command:?} ignored while help overlay is open"));
            return;
        }
        match command {
            Command::ToggleHelp => self.toggle_help(),
            Command::Generate => self.generate(),
            Command::CopyOutput => self.copy_output(clipboard),
            Command::FocusNext => self.change_focus(FocusController::focus_next),
            Command::FocusPrevious => self.change_focus(FocusController::focus_previous),
            Command::FocusPrompt => self.change_focus(|focus| focus.focus(FocusTarget::Prompt)),
            Command::FocusContext => self.change_focus(|focus| focus.focus(FocusTarget::Context)),
            Command::FocusOutput => self.change_focus(|focus| focus.focus(FocusTarget::Output)),
            Command::ClearContext => self.clear_context(),
            Command::QuitOrDismiss => self.quit_or_dismiss(),
            Command::SelectAll => self.select_all(),
            Command::CopySelection => self.copy_selection(clipboard),
        }
    }

    /// Start a generation unless one is already running; a second request is ignored.
    pub(crate) fn generate(&mut self) {
        if let GenerationState::Running { job_id } = self.generation {
            log_debug(&format!("generate ignored: job {job_id} still running"));
            return;
        }
        let job_id = self.next_job_id;
        self.next_job_id += 1;
        let request = GenerationRequest::from_fields(&self.fields);
        log_debug(&format!(
            "starting generation {job_id} (model={}, lang={:?})",
            request.model.label(),
            request.language
        ));
        match spawn_generation(
            job_id,
            request,
            self.services.clone(),
            self.job_tx.clone(),
        ) {
            Ok(()) => {
                self.generation = GenerationState::Running { job_id };
                self.spinner_index = 0;
                state_change!(self, {
                    self.fields.status = STATUS_GENERATING.to_string();
                });
            }
            Err(err) => {
                log_debug(&format!("failed to spawn generation worker: {err}"));
                state_change!(self, {
                    self.fields
                        .output
                        .set_text(format!("Error: no se pudo iniciar la generación: {err}"));
                    self.fields.status = STATUS_ERROR.to_string();
                });
            }
        }
    }

    /// Commit a worker result: output text, status word, and a redraw in one step.
    pub fn apply_generation_message(&mut self, message: GenerationMessage) {
        match self.generation {
            GenerationState::Running { job_id } if job_id == message.job_id => {}
            _ => {
                log_debug(&format!(
                    "discarding stale result from generation {}",
                    message.job_id
                ));
                return;
            }
        }
        let elapsed_ms = message.elapsed.as_millis();
        let (output, status) = match message.outcome {
            Ok(text) => {
                log_debug(&format!(
                    "generation {} finished in {elapsed_ms} ms",
                    message.job_id
                ));
                log_debug_content(&format!("generation output: {text}"));
                (text, STATUS_DONE)
            }
            Err(err) => {
                log_debug(&format!(
                    "generation {} failed in {elapsed_ms} ms ({}): {err}",
                    message.job_id,
                    err.phase()
                ));
                (format!("Error: {err}"), STATUS_ERROR)
            }
        };
        state_change!(self, {
            self.fields.output.set_text(output);
            self.fields.status = status.to_string();
            self.generation = GenerationState::Idle;
        });
    }

    fn copy_output(&mut self, clipboard: &mut dyn ClipboardSink) {
        let status = match clipboard.copy(self.fields.output.text()) {
            Ok(()) => STATUS_OUTPUT_COPIED.to_string(),
            Err(err) => {
                log_debug(&format!("copy output failed: {err}"));
                format!("Error al copiar: {err}")
            }
        };
        state_change!(self, {
            self.fields.status = status;
        });
    }

    fn change_focus(&mut self, step: impl FnOnce(&mut FocusController) -> bool) {
        if step(&mut self.focus) {
            self.request_redraw();
        }
    }

    fn clear_context(&mut self) {
        state_change!(self, {
            self.fields.context.clear();
            self.focus.focus(FocusTarget::Context);
            self.fields.status = STATUS_CONTEXT_CLEARED.to_string();
        });
    }

    fn select_all(&mut self) {
        let buffer = self
            .text_target()
            .and_then(|target| self.fields.buffer_mut(target));
        let status = match buffer {
            Some(buffer) => {
                buffer.select_all();
                STATUS_SELECTED_ALL
            }
            None => STATUS_CANNOT_SELECT,
        };
        state_change!(self, {
            self.fields.status = status.to_string();
        });
    }

    fn copy_selection(&mut self, clipboard: &mut dyn ClipboardSink) {
        let Some(target) = self.text_target() else {
            state_change!(self, {
                self.fields.status = STATUS_NO_SELECTION.to_string();
            });
            return;
        };
        let selected = self
            .fields
            .buffer(target)
            .and_then(|buffer| buffer.selected_text())
            .map(str::to_owned);
        let status = match selected {
            None => STATUS_NO_SELECTION.to_string(),
            Some(text) => match clipboard.copy(&text) {
                Ok(()) => {
                    if let Some(buffer) = self.fields.buffer_mut(target) {
                        buffer.clear_selection();
                    }
                    STATUS_SELECTION_COPIED.to_string()
                }
                Err(err) => {
                    log_debug(&format!("copy selection failed: {err}"));
                    format!("Error al copiar: {err}")
                }
            },
        };
        state_change!(self, {
            self.fields.status = status;
        });
    }

    /// Focused control, if it holds a text buffer.
    fn text_target(&self) -> Option<FocusTarget> {
        self.focus.focused().filter(|target| target.has_text_buffer())
    }

    fn toggle_help(&mut self) {
        let open = self.focus.toggle_modal();
        log_debug(if open {
            "help overlay opened"
        } else {
            "help overlay closed"
        });
        state_change!(self, help_scroll, 0);
    }

    fn quit_or_dismiss(&mut self) {
        if self.focus.dismiss_modal() {
            log_debug("help overlay dismissed");
            state_change!(self, help_scroll, 0);
        } else {
            self.should_quit = true;
        }
    }

    /// Keys that are not global commands while the overlay is open: scrolling only.
    /// Scrolling stops at the last help line.
    pub(crate) fn handle_help_key(&mut self, key: KeyEvent) {
        let page = PAGE_LINES as u16;
        let last_line = help_lines().len().saturating_sub(1);
        let max_scroll = u16::try_from(last_line).unwrap_or(u16::MAX);
        let scroll = match key.code {
            KeyCode::Up => self.help_scroll.saturating_sub(1),
            KeyCode::Down => self.help_scroll.saturating_add(1),
            KeyCode::PageUp => self.help_scroll.saturating_sub(page),
            KeyCode::PageDown => self.help_scroll.saturating_add(page),
            KeyCode::Home => 0,
            _ => return,
        }
        .min(max_scroll);
        if scroll != self.help_scroll {
            state_change!(self, help_scroll, scroll);
        }
    }

    /// Route a non-command key to whichever control has focus.
    pub(crate) fn handle_field_key(&mut self, key: KeyEvent, clipboard: &mut dyn ClipboardSink) {
        let Some(target) = self.focus.focused() else {
            return;
        };
        match target {
            FocusTarget::Language | FocusTarget::Model => self.handle_selector_key(target, key),
            FocusTarget::GenerateButton | FocusTarget::CopyButton | FocusTarget::QuitButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.press_button(target, clipboard);
                }
            }
            FocusTarget::Temperature
            | FocusTarget::Context
            | FocusTarget::Prompt
            | FocusTarget::Output => self.handle_text_key(target, key),
        }
    }

    /// Apply a left click on the main screen. Clicks are ignored while the overlay is open.
    pub(crate) fn handle_click(&mut self, action: ClickAction, clipboard: &mut dyn ClipboardSink) {
        if self.focus.is_modal() {
            log_debug(&format!("{action:?} ignored while help overlay is open"));
            return;
        }
        match action {
            ClickAction::Focus(target) => self.change_focus(|focus| focus.focus(target)),
            ClickAction::Language(language) => state_change!(self, {
                self.focus.focus(FocusTarget::Language);
                self.fields.language = language;
            }),
            ClickAction::Model(model) => state_change!(self, {
                self.focus.focus(FocusTarget::Model);
                self.fields.model = model;
            }),
            ClickAction::Press(target) => {
                self.change_focus(|focus| focus.focus(target));
                self.press_button(target, clipboard);
            }
        }
    }

    fn handle_selector_key(&mut self, target: FocusTarget, key: KeyEvent) {
        if !matches!(
            key.code,
            KeyCode::Up
                | KeyCode::Down
                | KeyCode::Left
                | KeyCode::Right
                | KeyCode::Enter
                | KeyCode::Char(' ')
        ) {
            return;
        }
        state_change!(self, {
            match target {
                FocusTarget::Language => self.fields.language = self.fields.language.toggled(),
                FocusTarget::Model => self.fields.model = self.fields.model.toggled(),
                _ => {}
            }
        });
    }

    fn press_button(&mut self, target: FocusTarget, clipboard: &mut dyn ClipboardSink) {
        match target {
            FocusTarget::GenerateButton => self.generate(),
            FocusTarget::CopyButton => self.copy_output(clipboard),
            FocusTarget::QuitButton => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_text_key(&mut self, target: FocusTarget, key: KeyEvent) {
        let editable = target.is_editable();
        let Some(buffer) = self.fields.buffer_mut(target) else {
            return;
        };
        let extend = key.modifiers.contains(KeyModifiers::SHIFT);
        // AltGr arrives as Ctrl+Alt on Windows and some X11 layouts; either alone is a chord.
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let plain = ctrl == alt;
        match key.code {
            KeyCode::Left => buffer.move_left(extend),
            KeyCode::Right => buffer.move_right(extend),
            KeyCode::Up => buffer.move_up(extend),
            KeyCode::Down => buffer.move_down(extend),
            KeyCode::Home => buffer.move_home(extend),
            KeyCode::End => buffer.move_end(extend),
            KeyCode::PageUp => (0..PAGE_LINES).for_each(|_| buffer.move_up(extend)),
            KeyCode::PageDown => (0..PAGE_LINES).for_each(|_| buffer.move_down(extend)),
            KeyCode::Char(ch) if editable && plain => buffer.insert_char(ch),
            KeyCode::Enter if editable => buffer.insert_char('\n'),
            KeyCode::Backspace if editable => buffer.backspace(),
            KeyCode::Delete if editable => buffer.delete(),
            _ => return,
        }
        self.request_redraw();
    }

    /// Bracketed paste goes into the focused editable field.
    pub(crate) fn handle_paste(&mut self, text: &str) {
        let Some(target) = self.focus.focused().filter(|target| target.is_editable()) else {
            return;
        };
        if let Some(buffer) = self.fields.buffer_mut(target) {
            buffer.insert_str(text);
            self.request_redraw();
        }
    }

    pub(crate) fn tick_spinner(&mut self) {
        if !self.is_generating() {
            return;
        }
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAMES.len();
        self.request_redraw();
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus.focused()
    }

    pub fn is_modal(&self) -> bool {
        self.focus.is_modal()
    }

    pub fn help_scroll(&self) -> u16 {
        self.help_scroll
    }

    pub fn status_text(&self) -> &str {
        &self.fields.status
    }

    pub fn generation_state(&self) -> GenerationState {
        self.generation
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.generation, GenerationState::Running { .. })
    }

    pub fn spinner_frame(&self) -> Option<&'static str> {
        self.is_generating()
            .then(|| SPINNER_FRAMES[self.spinner_index % SPINNER_FRAMES.len()])
    }

    /// Channel the event loop waits on for worker results.
    pub fn generation_receiver(&self) -> &Receiver<GenerationMessage> {
        &self.job_rx
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub(crate) fn take_redraw_request(&mut self) -> bool {
        let requested = self.needs_redraw;
        self.needs_redraw = false;
        requested
    }

    #[cfg(test)]
    pub(crate) fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }
}
