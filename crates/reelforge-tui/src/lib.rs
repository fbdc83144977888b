//! Library entry point for the ReelForge TUI.
//!
//! Provides a reusable [`run`] function that launches the Ratatui terminal UI
//! against a loaded catalog and effective configuration.

mod app;
mod event;
mod ui;

use anyhow::anyhow;
use app::{App, Tab};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode, KeyEvent,
    KeyModifiers, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use event::AppEvent;
use log::{debug, info};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use reelforge_config::ReelForgeConfig;
use reelforge_core::{Catalog, generate};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Launch the ReelForge TUI with the given effective configuration.
///
/// The caller is responsible for initializing logging (e.g. `env_logger`)
/// before calling `run`.
///
/// # Errors
/// Returns an error if terminal setup or the event loop fails.
pub async fn run(config: ReelForgeConfig) -> anyhow::Result<()> {
    let mut app = App::new(Catalog::sample(), config);

    let mut terminal = setup_terminal()?;
    let (tx, mut rx) = mpsc::channel(256);
    spawn_input_handler(tx.clone());
    spawn_tick(tx.clone());

    let mut generation_handle: Option<JoinHandle<()>> = None;

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;
        let event = rx
            .recv()
            .await
            .ok_or_else(|| anyhow!("event channel closed unexpectedly"))?;
        if handle_app_event(event, &mut app, tx.clone(), &mut generation_handle) {
            break;
        }
    }

    if let Some(handle) = generation_handle.take() {
        handle.abort();
    }
    restore_terminal(&mut terminal)?;
    Ok(())
}

/// Dispatch a UI event and return true when the app should exit.
fn handle_app_event(
    event: AppEvent,
    app: &mut App,
    sender: mpsc::Sender<AppEvent>,
    generation_handle: &mut Option<JoinHandle<()>>,
) -> bool {
    match event {
        AppEvent::Input(key) => handle_input(key, app, sender, generation_handle),
        AppEvent::Generated(lines) => {
            app.finish_generation(lines);
            false
        }
        AppEvent::Scroll(delta) => {
            app.move_selection(delta);
            false
        }
        AppEvent::Tick => {
            app.tick = app.tick.wrapping_add(1);
            false
        }
    }
}

/// Handle keystrokes while the active search box is being edited.
fn handle_search_input(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.search_editing = false;
        }
        KeyCode::Backspace => {
            if let Some(search) = app.active_search_mut() {
                search.pop();
            }
            app.clamp_selection();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return key.code == KeyCode::Char('c');
            }
            if let Some(search) = app.active_search_mut() {
                search.push(ch);
            }
            app.clamp_selection();
        }
        _ => {}
    }
    false
}

/// Handle keyboard input and dispatch actions.
fn handle_input(
    key: KeyEvent,
    app: &mut App,
    sender: mpsc::Sender<AppEvent>,
    generation_handle: &mut Option<JoinHandle<()>>,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    if app.search_editing {
        return handle_search_input(key, app);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char(ch @ '1'..='6') => {
            let index = (ch as usize) - ('1' as usize);
            app.set_tab(Tab::ALL[index]);
        }
        KeyCode::Char('/') => {
            if matches!(app.tab, Tab::Projects | Tab::Templates | Tab::Generator) {
                app.search_editing = true;
            }
        }
        KeyCode::Char('f') => match app.tab {
            Tab::Projects => app.cycle_project_status(),
            Tab::Templates => app.cycle_template_category(),
            _ => {}
        },
        KeyCode::Char('s') => {
            if app.tab == Tab::Generator {
                app.selected_style =
                    (app.selected_style + 1) % reelforge_core::ContentStyle::ALL.len();
            }
        }
        KeyCode::Char('g') => {
            if app.tab == Tab::Generator {
                start_generation(app, sender, generation_handle);
            }
        }
        KeyCode::Up => {
            if app.tab == Tab::Settings && app.toggle_count() == 0 {
                app.move_section(-1);
            } else {
                app.move_selection(-1);
            }
        }
        KeyCode::Down => {
            if app.tab == Tab::Settings && app.toggle_count() == 0 {
                app.move_section(1);
            } else {
                app.move_selection(1);
            }
        }
        KeyCode::Left => {
            if app.tab == Tab::Settings {
                app.move_section(-1);
            }
        }
        KeyCode::Right => {
            if app.tab == Tab::Settings {
                app.move_section(1);
            }
        }
        KeyCode::Char(' ') => {
            if app.tab == Tab::Settings {
                app.toggle_selected();
            }
        }
        _ => {}
    }
    false
}

/// Kick off a generation run, aborting any run already in flight.
fn start_generation(
    app: &mut App,
    sender: mpsc::Sender<AppEvent>,
    generation_handle: &mut Option<JoinHandle<()>>,
) {
    if let Some(handle) = generation_handle.take() {
        debug!("aborting in-flight generation");
        handle.abort();
    }
    let kind = app.selected_content_kind();
    let settings = app.generator_settings();
    info!(
        "starting generation (kind={}, batch_size={}, delay_ms={})",
        kind.label(),
        settings.batch_size,
        settings.delay.as_millis()
    );
    app.generating = true;
    app.push_status("generating content");
    let handle = tokio::spawn(async move {
        let lines = generate(kind, settings).await;
        let _ = sender.send(AppEvent::Generated(lines)).await;
    });
    *generation_handle = Some(handle);
}

/// Spawn a task to poll for input events.
fn spawn_input_handler(sender: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        const MOUSE_SCROLL_LINES: i16 = 3;
        loop {
            if matches!(crossterm::event::poll(Duration::from_millis(30)), Ok(true)) {
                while matches!(crossterm::event::poll(Duration::from_millis(0)), Ok(true)) {
                    let event = match crossterm::event::read() {
                        Ok(event) => event,
                        Err(_) => break,
                    };
                    match event {
                        CrosstermEvent::Key(key) => {
                            let _ = sender.send(AppEvent::Input(key)).await;
                        }
                        CrosstermEvent::Mouse(mouse) => match mouse.kind {
                            MouseEventKind::ScrollUp => {
                                let _ = sender.send(AppEvent::Scroll(-MOUSE_SCROLL_LINES)).await;
                            }
                            MouseEventKind::ScrollDown => {
                                let _ = sender.send(AppEvent::Scroll(MOUSE_SCROLL_LINES)).await;
                            }
                            _ => {}
                        },
                        _ => {}
                    }
                }
            }
        }
    });
}

/// Spawn a periodic tick event generator.
fn spawn_tick(sender: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(250));
        loop {
            interval.tick().await;
            let _ = sender.send(AppEvent::Tick).await;
        }
    });
}

/// Configure terminal in raw mode with alternate screen.
fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    debug!("setting up terminal");
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal state on exit.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    debug!("restoring terminal");
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use pretty_assertions::assert_eq;
    use reelforge_core::ProjectStatus;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> App {
        App::new(Catalog::sample(), ReelForgeConfig::default())
    }

    #[tokio::test]
    async fn quit_keys_exit_the_loop() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = app();
        let mut handle = None;
        assert!(handle_input(key(KeyCode::Char('q')), &mut app, tx.clone(), &mut handle));
        assert!(handle_input(key(KeyCode::Esc), &mut app, tx, &mut handle));
    }

    #[tokio::test]
    async fn digit_keys_jump_to_screens() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = app();
        let mut handle = None;
        handle_input(key(KeyCode::Char('4')), &mut app, tx, &mut handle);
        assert_eq!(app.tab, Tab::Analytics);
    }

    #[tokio::test]
    async fn search_edit_consumes_filter_keys() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = app();
        let mut handle = None;
        handle_input(key(KeyCode::Char('2')), &mut app, tx.clone(), &mut handle);
        handle_input(key(KeyCode::Char('/')), &mut app, tx.clone(), &mut handle);
        assert!(app.search_editing);
        handle_input(key(KeyCode::Char('f')), &mut app, tx.clone(), &mut handle);
        assert_eq!(app.project_search, "f");
        assert_eq!(app.project_status, None);
        handle_input(key(KeyCode::Enter), &mut app, tx, &mut handle);
        assert!(!app.search_editing);
    }

    #[tokio::test]
    async fn filter_key_cycles_status_outside_search() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = app();
        let mut handle = None;
        handle_input(key(KeyCode::Char('2')), &mut app, tx.clone(), &mut handle);
        handle_input(key(KeyCode::Char('f')), &mut app, tx, &mut handle);
        assert_eq!(app.project_status, Some(ProjectStatus::Published));
    }

    #[tokio::test]
    async fn wheel_scroll_moves_selection_by_full_delta() {
        let (tx, _rx) = mpsc::channel(8);
        let mut app = app();
        let mut handle = None;
        handle_input(key(KeyCode::Char('2')), &mut app, tx.clone(), &mut handle);
        handle_app_event(AppEvent::Scroll(3), &mut app, tx.clone(), &mut handle);
        assert_eq!(app.selected_project, 3);
        handle_app_event(AppEvent::Scroll(-3), &mut app, tx, &mut handle);
        assert_eq!(app.selected_project, 0);
    }

    #[tokio::test]
    async fn generate_key_aborts_previous_run() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut app = app();
        app.config.generator.delay_ms = 10;
        app.config.generator.seed = Some(7);
        let mut handle = None;
        handle_input(key(KeyCode::Char('3')), &mut app, tx.clone(), &mut handle);
        handle_input(key(KeyCode::Char('g')), &mut app, tx.clone(), &mut handle);
        handle_input(key(KeyCode::Char('g')), &mut app, tx, &mut handle);
        assert!(handle.is_some());
        assert!(app.generating);
        let lines = loop {
            match rx.recv().await {
                Some(AppEvent::Generated(lines)) => break lines,
                Some(_) => continue,
                None => panic!("channel closed"),
            }
        };
        app.finish_generation(lines);
        assert_eq!(app.generated.len(), 3);
        assert!(!app.generating);
    }
}
