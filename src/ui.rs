//! `ratatui` front-end: terminal setup, the event loop, and drawing.

use crate::clipboard::ClipboardSink;
use crate::config::{Language, Model};
use crate::focus::FocusTarget;
use crate::help::{help_lines, HELP_FOOTER, HELP_HEIGHT, HELP_TITLE, HELP_WIDTH};
use crate::keys::command_for_key;
use crate::log_debug;
use crate::mouse::{hit_test, row_strips, ClickAction, ClickRegion};
use crate::terminal_restore::TerminalRestoreGuard;
use crate::text_buffer::TextBuffer;
use crate::App;
use anyhow::{Context, Result};
use crossbeam_channel::{bounded, select, tick, Receiver, Sender};
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::ops::Range;
use std::thread;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

const SPINNER_INTERVAL: Duration = Duration::from_millis(100);
const INPUT_CHANNEL_CAPACITY: usize = 256;

const ACCENT: Color = Color::Rgb(255, 90, 90);
const TITLE: Color = Color::Rgb(255, 110, 110);
const DIM_BORDER: Color = Color::Rgb(130, 70, 70);
const TEXT: Color = Color::Rgb(210, 205, 200);
const HIGHLIGHT: Color = Color::Rgb(255, 220, 100);
const STATUS_TEXT: Color = Color::Rgb(160, 150, 150);

const LANGUAGE_LABEL: &str = "Lenguaje";
const MODEL_LABEL: &str = "Modelo";
const LANGUAGES: [Language; 2] = [Language::Es, Language::En];
const MODELS: [Model; 2] = [Model::Pro, Model::Flash];
const BUTTONS: [(FocusTarget, &str); 3] = [
    (FocusTarget::GenerateButton, "Generar"),
    (FocusTarget::CopyButton, "Copiar"),
    (FocusTarget::QuitButton, "Salir"),
];

/// Configure the terminal, run the event loop, and tear everything down.
pub fn run_app(app: &mut App, clipboard: &mut dyn ClipboardSink) -> Result<()> {
    let terminal_guard = TerminalRestoreGuard::new();
    terminal_guard.enable_raw_mode()?;
    let mut stdout = io::stdout();
    terminal_guard.enter_alt_screen(&mut stdout)?;
    terminal_guard.enable_bracketed_paste(&mut stdout)?;
    terminal_guard.enable_mouse_capture(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (input_tx, input_rx) = bounded(INPUT_CHANNEL_CAPACITY);
    spawn_input_thread(input_tx).context("failed to spawn input thread")?;

    let result = app_loop(&mut terminal, app, clipboard, &input_rx);

    drop(terminal);
    drop(terminal_guard);
    result
}

/// Forward terminal events to the UI thread. Detached: it may be parked in a blocking read
/// when the UI exits.
fn spawn_input_thread(tx: Sender<Event>) -> io::Result<()> {
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || loop {
            match event::read() {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    log_debug(&format!("terminal read error: {err}"));
                    return;
                }
            }
        })
        .map(|_| ())
}

fn app_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    clipboard: &mut dyn ClipboardSink,
    input_rx: &Receiver<Event>,
) -> Result<()> {
    let job_rx = app.generation_receiver().clone();
    let spinner = tick(SPINNER_INTERVAL);

    // Screen area of the last frame; clicks are resolved against what is on screen.
    let mut area = terminal.draw(|frame| draw(frame, app))?.area;
    app.take_redraw_request();

    loop {
        select! {
            recv(input_rx) -> event => match event {
                Ok(event) => handle_event(app, event, clipboard, area),
                Err(_) => {
                    log_debug("input channel closed, leaving event loop");
                    break;
                }
            },
            recv(job_rx) -> message => {
                if let Ok(message) = message {
                    app.apply_generation_message(message);
                }
            },
            recv(spinner) -> _ => app.tick_spinner(),
        }

        if app.should_quit() {
            break;
        }
        if app.take_redraw_request() {
            area = terminal.draw(|frame| draw(frame, app))?.area;
        }
    }
    Ok(())
}

fn handle_event(app: &mut App, event: Event, clipboard: &mut dyn ClipboardSink, area: Rect) {
    match event {
        // Some terminals report release and repeat events too; act on presses only.
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key_event(app, key, clipboard)
        }
        Event::Mouse(mouse) => handle_mouse_event(app, mouse, clipboard, area),
        Event::Paste(text) => app.handle_paste(&text),
        Event::Resize(_, _) => app.request_redraw(),
        _ => {}
    }
}

fn handle_mouse_event(
    app: &mut App,
    mouse: MouseEvent,
    clipboard: &mut dyn ClipboardSink,
    area: Rect,
) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    // The overlay has no clickable controls; the main-screen geometry does not apply.
    if app.is_modal() {
        return;
    }
    if let Some(action) = hit_test(&click_regions(area), mouse.column, mouse.row) {
        app.handle_click(action, clipboard);
    }
}

/// Global chords first; the rest goes to the overlay or the focused control.
fn handle_key_event(app: &mut App, key: KeyEvent, clipboard: &mut dyn ClipboardSink) {
    log_debug(&format!(
        "Key event: {:?} with modifiers: {:?}",
        key.code, key.modifiers
    ));
    if let Some(command) = command_for_key(&key) {
        app.dispatch(command, clipboard);
    } else if app.is_modal() {
        app.handle_help_key(key);
    } else {
        app.handle_field_key(key, clipboard);
    }
}

/// Render the main screen, or only the help panel while the overlay is open.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    if app.is_modal() {
        draw_help(frame, app);
    } else {
        draw_main(frame, app);
    }
}

/// Where each part of the main screen sits for a given terminal area.
struct MainLayout {
    controls: Rect,
    language: Rect,
    model: Rect,
    temperature: Rect,
    context: Rect,
    buttons: Rect,
    prompt: Rect,
    status: Rect,
    output: Rect,
}

fn main_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Length(3),
            Constraint::Min(5),
        ])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[0]);
    let controls = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(panel(" Controles ", false).inner(top[0]));
    MainLayout {
        controls: top[0],
        language: controls[0],
        model: controls[1],
        temperature: controls[2],
        context: controls[3],
        buttons: controls[4],
        prompt: top[1],
        status: rows[1],
        output: rows[2],
    }
}

/// Clickable regions of the main screen, narrowest first.
fn click_regions(area: Rect) -> Vec<ClickRegion> {
    let layout = main_layout(area);
    let mut regions = Vec::new();

    let languages = LANGUAGES.map(Language::label);
    let strips = option_strips(layout.language, LANGUAGE_LABEL, &languages);
    for (strip, language) in strips.into_iter().zip(LANGUAGES) {
        regions.push(ClickRegion::new(strip, ClickAction::Language(language)));
    }
    regions.push(ClickRegion::new(
        layout.language,
        ClickAction::Focus(FocusTarget::Language),
    ));

    let models = MODELS.map(Model::label);
    let strips = option_strips(layout.model, MODEL_LABEL, &models);
    for (strip, model) in strips.into_iter().zip(MODELS) {
        regions.push(ClickRegion::new(strip, ClickAction::Model(model)));
    }
    regions.push(ClickRegion::new(
        layout.model,
        ClickAction::Focus(FocusTarget::Model),
    ));

    let widths = BUTTONS.map(|(_, label)| text_width(&button_text(label)));
    let strips = row_strips(layout.buttons, 0, &widths, 1);
    for (strip, (target, _)) in strips.into_iter().zip(BUTTONS) {
        regions.push(ClickRegion::new(strip, ClickAction::Press(target)));
    }

    for (area, target) in [
        (layout.temperature, FocusTarget::Temperature),
        (layout.context, FocusTarget::Context),
        (layout.prompt, FocusTarget::Prompt),
        (layout.output, FocusTarget::Output),
    ] {
        regions.push(ClickRegion::new(area, ClickAction::Focus(target)));
    }
    regions
}

fn option_strips(row: Rect, label: &str, options: &[&str]) -> Vec<Rect> {
    let widths: Vec<u16> = options
        .iter()
        .map(|option| text_width(&option_text(option, false)))
        .collect();
    row_strips(row, text_width(&selector_label(label)), &widths, 0)
}

fn text_width(text: &str) -> u16 {
    clamp_u16(UnicodeWidthStr::width(text))
}

fn draw_main(frame: &mut Frame<'_>, app: &App) {
    let layout = main_layout(frame.size());
    draw_controls(frame, app, &layout);
    draw_text_field(frame, app, FocusTarget::Prompt, " Prompt Base ", layout.prompt);
    draw_status(frame, app, layout.status);
    draw_text_field(frame, app, FocusTarget::Output, " Salida del modelo ", layout.output);
}

fn draw_controls(frame: &mut Frame<'_>, app: &App, layout: &MainLayout) {
    frame.render_widget(panel(" Controles ", false), layout.controls);

    let fields = app.fields();
    let languages = LANGUAGES.map(|language| (language.label(), fields.language == language));
    frame.render_widget(
        Paragraph::new(selector_line(
            LANGUAGE_LABEL,
            &languages,
            app.focused() == Some(FocusTarget::Language),
        )),
        layout.language,
    );
    let models = MODELS.map(|model| (model.label(), fields.model == model));
    frame.render_widget(
        Paragraph::new(selector_line(
            MODEL_LABEL,
            &models,
            app.focused() == Some(FocusTarget::Model),
        )),
        layout.model,
    );
    draw_text_field(frame, app, FocusTarget::Temperature, " Temperatura ", layout.temperature);
    draw_text_field(frame, app, FocusTarget::Context, " Contexto ", layout.context);

    let spans: Vec<Span> = BUTTONS
        .iter()
        .flat_map(|(target, label)| {
            let style = if app.focused() == Some(*target) {
                Style::default()
                    .fg(Color::Black)
                    .bg(HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HIGHLIGHT)
            };
            [Span::styled(button_text(label), style), Span::raw(" ")]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), layout.buttons);
}

fn button_text(label: &str) -> String {
    format!("[ {label} ]")
}

fn selector_label(label: &str) -> String {
    format!("{label}: ")
}

fn option_text(option: &str, selected: bool) -> String {
    let mark = if selected { "(•)" } else { "( )" };
    format!("{mark} {option}  ")
}

fn selector_line(label: &str, options: &[(&str, bool)], focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT)
    };
    let mut spans = vec![Span::styled(selector_label(label), label_style)];
    for &(option, selected) in options {
        let style = if selected {
            Style::default().fg(HIGHLIGHT)
        } else {
            Style::default().fg(STATUS_TEXT)
        };
        spans.push(Span::styled(option_text(option, selected), style));
    }
    Line::from(spans)
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let text = match app.spinner_frame() {
        Some(spinner) => format!("{} {spinner}", app.status_text()),
        None => app.status_text().to_string(),
    };
    let status = Paragraph::new(text)
        .block(panel(" Estado ", false))
        .style(Style::default().fg(STATUS_TEXT));
    frame.render_widget(status, area);
}

fn draw_text_field(
    frame: &mut Frame<'_>,
    app: &App,
    target: FocusTarget,
    title: &'static str,
    area: Rect,
) {
    let Some(buffer) = app.fields().buffer(target) else {
        return;
    };
    let focused = app.focused() == Some(target);
    let block = panel(title, focused);
    let inner = block.inner(area);

    let (row, column) = buffer.cursor_position();
    let scroll_y = row.saturating_sub(usize::from(inner.height.saturating_sub(1)));
    let scroll_x = column.saturating_sub(usize::from(inner.width.saturating_sub(1)));
    // Wrapping is left off so the caret column always matches the text column.
    let paragraph = Paragraph::new(buffer_lines(buffer))
        .block(block)
        .style(Style::default().fg(TEXT))
        .scroll((clamp_u16(scroll_y), clamp_u16(scroll_x)));
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let x = inner.x.saturating_add(clamp_u16(column - scroll_x));
        let y = inner.y.saturating_add(clamp_u16(row - scroll_y));
        frame.set_cursor(x, y);
    }
}

/// Lines of a buffer with the selected span drawn reversed.
fn buffer_lines(buffer: &TextBuffer) -> Vec<Line<'_>> {
    let text = buffer.text();
    let selection = buffer.selection_range();
    buffer
        .line_ranges()
        .into_iter()
        .map(|line| match selection.as_ref().and_then(|sel| overlap(sel, &line)) {
            Some(selected) => Line::from(vec![
                Span::raw(&text[line.start..selected.start]),
                Span::styled(
                    &text[selected.clone()],
                    Style::default().add_modifier(Modifier::REVERSED),
                ),
                Span::raw(&text[selected.end..line.end]),
            ]),
            None => Line::from(&text[line]),
        })
        .collect()
}

fn overlap(selection: &Range<usize>, line: &Range<usize>) -> Option<Range<usize>> {
    let start = selection.start.max(line.start);
    let end = selection.end.min(line.end);
    (start < end).then_some(start..end)
}

fn draw_help(frame: &mut Frame<'_>, app: &App) {
    let area = centered_rect(HELP_WIDTH, HELP_HEIGHT, frame.size());
    let lines = help_lines();
    let max_scroll = lines.len().saturating_sub(1);
    let scroll = usize::from(app.help_scroll()).min(max_scroll);
    let help = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
        .block(
            panel(HELP_TITLE, true).title_bottom(Line::from(Span::styled(
                HELP_FOOTER,
                Style::default().fg(STATUS_TEXT),
            ))),
        )
        .style(Style::default().fg(TEXT))
        .scroll((clamp_u16(scroll), 0));
    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn panel(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT } else { DIM_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            title,
            Style::default().fg(TITLE).add_modifier(Modifier::BOLD),
        ))
}

fn clamp_u16(value: usize) -> u16 {
    value.min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;
    use crate::config::AppConfig;
    use crate::generation::{DiffSource, GenerationError, ModelCall, Services, TextGenerator};
    use crate::STATUS_GENERATING;
    use clap::Parser;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    struct EmptyDiff;

    impl DiffSource for EmptyDiff {
        fn staged_diff(&self) -> String {
            String::new()
        }
    }

    struct EchoGenerator;

    impl TextGenerator for EchoGenerator {
        fn generate(&self, _call: &ModelCall) -> Result<String, GenerationError> {
            Ok("docs: update readme".to_string())
        }
    }

    struct NullClipboard;

    impl ClipboardSink for NullClipboard {
        fn copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    fn test_app() -> App {
        let config = AppConfig::parse_from(["committerm-tests"]);
        App::new(
            &config,
            Services::new(Arc::new(EmptyDiff), Arc::new(EchoGenerator)),
        )
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer.get(x, y).symbol());
            }
            screen.push('\n');
        }
        screen
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn left_click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Screen position of the first cell showing `needle`.
    fn locate(screen: &str, needle: &str) -> (u16, u16) {
        for (row, line) in screen.lines().enumerate() {
            if let Some(byte) = line.find(needle) {
                let column = UnicodeWidthStr::width(&line[..byte]);
                return (column as u16, row as u16);
            }
        }
        panic!("{needle} not on screen");
    }

    #[test]
    fn main_screen_shows_every_panel() {
        let app = test_app();
        let screen = render(&app, 120, 40);
        for title in [
            "Controles",
            "Prompt Base",
            "Estado",
            "Salida del modelo",
            "Temperatura",
            "Contexto",
            "[ Generar ]",
            "F1 -> Ayuda",
            "(•) Español",
        ] {
            assert!(screen.contains(title), "missing {title}");
        }
        assert!(!screen.contains(HELP_TITLE.trim()));
    }

    #[test]
    fn help_overlay_replaces_main_screen() {
        let mut app = test_app();
        let mut clipboard = NullClipboard;
        handle_event(
            &mut app,
            press(KeyCode::F(1), KeyModifiers::NONE),
            &mut clipboard,
            SCREEN,
        );
        let screen = render(&app, 120, 40);
        assert!(screen.contains(HELP_TITLE.trim()));
        assert!(screen.contains("CONTROLES DE TECLADO"));
        assert!(screen.contains("Cerrar (Esc)"));
        assert!(!screen.contains("Salida del modelo"));
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let mut app = test_app();
        let mut clipboard = NullClipboard;
        render(&app, 20, 6);
        handle_event(
            &mut app,
            press(KeyCode::F(1), KeyModifiers::NONE),
            &mut clipboard,
            SCREEN,
        );
        render(&app, 20, 6);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = test_app();
        let mut clipboard = NullClipboard;
        let release = KeyEvent {
            code: KeyCode::F(1),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_event(&mut app, Event::Key(release), &mut clipboard, SCREEN);
        assert!(!app.is_modal());
    }

    #[test]
    fn ctrl_j_starts_generation_and_escape_quits() {
        let mut app = test_app();
        let mut clipboard = NullClipboard;
        handle_event(
            &mut app,
            press(KeyCode::Char('j'), KeyModifiers::CONTROL),
            &mut clipboard,
            SCREEN,
        );
        assert_eq!(app.status_text(), STATUS_GENERATING);
        let screen = render(&app, 120, 40);
        assert!(screen.contains(STATUS_GENERATING));

        handle_event(
            &mut app,
            press(KeyCode::Esc, KeyModifiers::NONE),
            &mut clipboard,
            SCREEN,
        );
        assert!(app.should_quit());
    }

    #[test]
    fn plain_keys_reach_focused_field() {
        let mut app = test_app();
        let mut clipboard = NullClipboard;
        handle_event(
            &mut app,
            press(KeyCode::Char('t'), KeyModifiers::CONTROL),
            &mut clipboard,
            SCREEN,
        );
        handle_event(
            &mut app,
            press(KeyCode::Char('x'), KeyModifiers::NONE),
            &mut clipboard,
            SCREEN,
        );
        handle_event(
            &mut app,
            Event::Paste("yz".to_string()),
            &mut clipboard,
            SCREEN,
        );
        assert_eq!(app.fields().context.text(), "xyz");
    }

    #[test]
    fn selection_is_split_into_reversed_span() {
        let mut buffer = TextBuffer::multi_line("abc\ndef");
        buffer.move_right(false);
        for _ in 0..4 {
            buffer.move_right(true);
        }
        let lines = buffer_lines(&buffer);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[1].content, "bc");
        assert!(lines[0].spans[1]
            .style
            .add_modifier
            .contains(Modifier::REVERSED));
        assert_eq!(lines[1].spans[0].content, "");
        assert_eq!(lines[1].spans[1].content, "d");
        assert_eq!(lines[1].spans[2].content, "ef");
    }

    #[test]
    fn centered_rect_fits_small_areas() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
        assert_eq!(rect, area);
        let rect = centered_rect(10, 4, area);
        assert_eq!(rect, Rect::new(15, 3, 10, 4));
    }

    #[test]
    fn clicking_a_field_focuses_it() {
        let mut app = test_app();
        let mut clipboard = NullClipboard;
        let screen = render(&app, SCREEN.width, SCREEN.height);
        let (column, row) = locate(&screen, "Contexto");
        handle_event(&mut app, left_click(column, row + 1), &mut clipboard, SCREEN);
        assert_eq!(app.focused(), Some(FocusTarget::Context));

        let (column, row) = locate(&screen, "Salida del modelo");
        handle_event(&mut app, left_click(column, row + 2), &mut clipboard, SCREEN);
        assert_eq!(app.focused(), Some(FocusTarget::Output));
    }

    #[test]
    fn clicking_an_option_selects_it() {
        let mut app = test_app();
        let mut clipboard = NullClipboard;
        let screen = render(&app, SCREEN.width, SCREEN.height);
        let (column, row) = locate(&screen, "English");
        handle_event(&mut app, left_click(column, row), &mut clipboard, SCREEN);
        assert_eq!(app.fields().language, Language::En);
        assert_eq!(app.focused(), Some(FocusTarget::Language));

        let (column, row) = locate(&screen, "flash");
        handle_event(&mut app, left_click(column, row), &mut clipboard, SCREEN);
        assert_eq!(app.fields().model, Model::Flash);
        assert!(render(&app, SCREEN.width, SCREEN.height).contains("(•) flash"));
    }

    #[test]
    fn clicking_a_button_presses_it() {
        let mut app = test_app();
        let mut clipboard = NullClipboard;
        let screen = render(&app, SCREEN.width, SCREEN.height);
        let (column, row) = locate(&screen, "[ Generar ]");
        handle_event(&mut app, left_click(column + 2, row), &mut clipboard, SCREEN);
        assert_eq!(app.status_text(), STATUS_GENERATING);

        let (column, row) = locate(&screen, "[ Salir ]");
        handle_event(&mut app, left_click(column, row), &mut clipboard, SCREEN);
        assert_eq!(app.focused(), Some(FocusTarget::QuitButton));
        assert!(app.should_quit());
    }

    #[test]
    fn clicks_are_ignored_under_help_overlay() {
        let mut app = test_app();
        let mut clipboard = NullClipboard;
        let screen = render(&app, SCREEN.width, SCREEN.height);
        let (column, row) = locate(&screen, "[ Salir ]");
        handle_event(
            &mut app,
            press(KeyCode::F(1), KeyModifiers::NONE),
            &mut clipboard,
            SCREEN,
        );
        handle_event(&mut app, left_click(column, row), &mut clipboard, SCREEN);
        assert!(app.is_modal());
        assert!(!app.should_quit());
    }

    #[test]
    fn non_left_clicks_do_nothing() {
        let mut app = test_app();
        let mut clipboard = NullClipboard;
        let screen = render(&app, SCREEN.width, SCREEN.height);
        let (column, row) = locate(&screen, "Contexto");
        let scroll = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column,
            row: row + 1,
            modifiers: KeyModifiers::NONE,
        });
        handle_event(&mut app, scroll, &mut clipboard, SCREEN);
        assert_eq!(app.focused(), Some(FocusTarget::Language));
    }
}
