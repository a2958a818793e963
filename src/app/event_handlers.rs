use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, UiMode, ui_helpers};

impl App {
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match self.ui_mode {
            UiMode::Alert(_) => {
                self.handle_alert_key(key);
                false
            }
            UiMode::CategoryModal => {
                self.handle_modal_key(key);
                false
            }
            UiMode::Main => self.handle_normal_key(key),
        }
    }

    fn handle_alert_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.dismiss_alert();
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let total_rows = self.state.categories().len();

        match key.code {
            KeyCode::Esc => self.close_modal(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.modal_index = ui_helpers::wrap_prev_index(self.modal_index, total_rows);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.modal_index = ui_helpers::wrap_next_index(self.modal_index, total_rows);
            }
            KeyCode::Home => self.modal_index = 0,
            KeyCode::End => self.modal_index = total_rows.saturating_sub(1),
            KeyCode::Enter => {
                self.state.choose_category_by_index(self.modal_index);
                self.close_modal();
            }
            _ => {}
        }

        self.render_needed = true;
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        let total = self.state.categories().len();

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Left | KeyCode::Char('h') => {
                if total > 0 {
                    let prev = match self.state.chosen_index() {
                        Some(current) => ui_helpers::wrap_prev_index(current, total),
                        None => total - 1,
                    };
                    self.state.choose_category_by_index(prev);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if total > 0 {
                    let next = match self.state.chosen_index() {
                        Some(current) => ui_helpers::wrap_next_index(current, total),
                        None => 0,
                    };
                    self.state.choose_category_by_index(next);
                }
            }
            KeyCode::Tab | KeyCode::Char('c') => self.open_modal(),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => self.randomize(),
            _ => {}
        }

        self.render_needed = true;
        false
    }
}
