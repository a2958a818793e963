use std::{
    io,
    sync::mpsc::{Receiver, TryRecvError},
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};

use crate::{
    constants::TIME_SETTINGS,
    domain::HourSource,
    error::PickError,
    state::MenuState,
    storage::{self, LoadEvent, ResourcePaths},
};

mod alert_view;
mod category_modal_view;
mod event_handlers;
mod render_views;
mod ui_helpers;
mod view_style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UiMode {
    Main,
    CategoryModal,
    Alert(PickError),
}

struct App {
    state: MenuState,
    clock: Box<dyn HourSource>,
    loads: Option<Receiver<LoadEvent>>,
    ui_mode: UiMode,
    modal_index: usize,
    render_needed: bool,
}

impl App {
    fn new(loads: Receiver<LoadEvent>, clock: Box<dyn HourSource>) -> Self {
        Self {
            state: MenuState::new(),
            clock,
            loads: Some(loads),
            ui_mode: UiMode::Main,
            modal_index: 0,
            render_needed: true,
        }
    }

    /// Applies every load result that has arrived since the last call.
    fn drain_loads(&mut self) {
        let Some(loads) = &self.loads else {
            return;
        };

        let mut disconnected = false;
        loop {
            match loads.try_recv() {
                Ok(event) => {
                    self.state.apply_load(event);
                    self.render_needed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if disconnected {
            self.loads = None;
        }
    }

    fn open_modal(&mut self) {
        self.ui_mode = UiMode::CategoryModal;
        self.modal_index = self.state.chosen_index().unwrap_or(0);
        self.render_needed = true;
    }

    fn close_modal(&mut self) {
        self.ui_mode = UiMode::Main;
        self.render_needed = true;
    }

    fn show_alert(&mut self, error: PickError) {
        self.ui_mode = UiMode::Alert(error);
        self.render_needed = true;
    }

    fn dismiss_alert(&mut self) {
        self.ui_mode = UiMode::Main;
        self.render_needed = true;
    }

    fn randomize(&mut self) {
        let bucket = self.clock.current_bucket();
        let outcome = self
            .state
            .randomize(bucket, &mut rand::thread_rng())
            .map(|_| ());
        if let Err(e) = outcome {
            self.show_alert(e);
        }
        self.render_needed = true;
    }
}

pub fn run_ui(paths: &ResourcePaths, clock: Box<dyn HourSource>) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(storage::spawn_loaders(paths), clock);
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), io::Error> {
    let poll_rate = Duration::from_millis(TIME_SETTINGS.poll_ms);
    let render_rate = Duration::from_millis(1000 / TIME_SETTINGS.target_fps);
    let mut last_render: Option<Instant> = None;

    loop {
        app.drain_loads();

        let render_due = last_render.is_none_or(|at| at.elapsed() >= render_rate);
        if app.render_needed && render_due {
            terminal.draw(|f| app.draw_frame(f))?;
            app.render_needed = false;
            last_render = Some(Instant::now());
        }

        if !event::poll(poll_rate)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) {
                    break;
                }
            }
            Event::Resize(_, _) => app.render_needed = true,
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::domain::{Category, FixedHour, Recipe};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app(hour: u32) -> App {
        let (tx, rx) = mpsc::channel();
        tx.send(LoadEvent::Categories(Ok(vec![
            Category::new("Soup"),
            Category::new("Rice"),
        ])))
        .unwrap();
        tx.send(LoadEvent::Recipes(Ok(vec![
            Recipe::new("1", "Miso", "Soup", "M"),
            Recipe::new("2", "Consomme", "Soup", "D"),
        ])))
        .unwrap();
        drop(tx);

        let mut app = App::new(rx, Box::new(FixedHour(hour)));
        app.drain_loads();
        app
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| app.draw_frame(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_drain_loads_applies_both_lists() {
        let app = loaded_app(7);
        assert_eq!(app.state.chosen_category(), "Soup");
        assert_eq!(app.state.recipes().len(), 2);
        assert!(app.loads.is_none());
    }

    #[test]
    fn test_trigger_picks_single_candidate() {
        let mut app = loaded_app(7);
        assert!(!app.handle_key(key(KeyCode::Enter)));
        assert_eq!(app.state.last_result(), Some("Miso"));
        assert_eq!(app.ui_mode, UiMode::Main);
    }

    #[test]
    fn test_no_match_raises_blocking_alert() {
        let mut app = loaded_app(7);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.state.chosen_category(), "Rice");

        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.ui_mode, UiMode::Alert(PickError::NoMatch));
        assert_eq!(app.state.last_result(), None);

        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.ui_mode, UiMode::Alert(PickError::NoMatch));

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.ui_mode, UiMode::Main);
    }

    #[test]
    fn test_trigger_before_load_reports_missing_category() {
        let (_tx, rx) = mpsc::channel();
        let mut app = App::new(rx, Box::new(FixedHour(7)));
        app.drain_loads();

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.ui_mode, UiMode::Alert(PickError::NoCategory));
    }

    #[test]
    fn test_arrow_keys_cycle_through_duplicate_names() {
        let (tx, rx) = mpsc::channel();
        tx.send(LoadEvent::Categories(Ok(vec![
            Category::new("Soup"),
            Category::new("Soup"),
            Category::new("Rice"),
        ])))
        .unwrap();
        drop(tx);
        let mut app = App::new(rx, Box::new(FixedHour(7)));
        app.drain_loads();

        let mut seen = Vec::new();
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Right));
            seen.push((app.state.chosen_index(), app.state.chosen_category().to_string()));
        }
        assert_eq!(
            seen,
            vec![
                (Some(1), "Soup".to_string()),
                (Some(2), "Rice".to_string()),
                (Some(0), "Soup".to_string()),
            ]
        );

        let mut seen = Vec::new();
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Left));
            seen.push((app.state.chosen_index(), app.state.chosen_category().to_string()));
        }
        assert_eq!(
            seen,
            vec![
                (Some(2), "Rice".to_string()),
                (Some(1), "Soup".to_string()),
                (Some(0), "Soup".to_string()),
            ]
        );
    }

    #[test]
    fn test_modal_opens_on_chosen_duplicate_row() {
        let (tx, rx) = mpsc::channel();
        tx.send(LoadEvent::Categories(Ok(vec![
            Category::new("Soup"),
            Category::new("Soup"),
        ])))
        .unwrap();
        drop(tx);
        let mut app = App::new(rx, Box::new(FixedHour(7)));
        app.drain_loads();

        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.modal_index, 1);
    }

    #[test]
    fn test_category_modal_selects_row() {
        let mut app = loaded_app(13);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.ui_mode, UiMode::CategoryModal);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.ui_mode, UiMode::Main);
        assert_eq!(app.state.chosen_category(), "Rice");
    }

    #[test]
    fn test_category_modal_escape_keeps_choice() {
        let mut app = loaded_app(13);
        app.handle_key(key(KeyCode::Char('c')));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state.chosen_category(), "Soup");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = loaded_app(7);
        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert!(app.handle_key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn test_render_shows_category_and_result() {
        let mut app = loaded_app(7);
        app.handle_key(key(KeyCode::Enter));

        let text = screen_text(&app);
        assert!(text.contains("Soup"));
        assert!(text.contains("Miso"));
    }

    #[test]
    fn test_render_shows_alert_message() {
        let mut app = loaded_app(7);
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));

        let text = screen_text(&app);
        assert!(text.contains("No menu matches this category"));
    }
}
