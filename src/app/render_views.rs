use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    constants::{ACCENT, RESULT_BACKGROUND, RESULT_BORDER, RESULT_HEADING, RESULT_TEXT, ThemeColors},
    state::Phase,
};

use super::{App, UiMode, ui_helpers, view_style};

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 17;

impl App {
    pub(super) fn draw_frame(&self, f: &mut Frame) {
        let size = f.size();
        let bucket = self.clock.current_bucket();
        let theme = view_style::theme_for(bucket);

        let status = if self.state.is_loading() {
            "loading..."
        } else {
            bucket.label()
        };
        let background = Block::default()
            .style(Style::default().fg(theme.foreground).bg(theme.background))
            .title(
                Line::from(Span::styled(
                    " kondate ",
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Left),
            )
            .title(Line::from(format!(" {} ", status)).alignment(Alignment::Right));
        f.render_widget(background, size);

        let card_area = ui_helpers::centered_rect(size, CARD_WIDTH, CARD_HEIGHT);
        self.render_card(f, card_area, theme);

        if size.height > 0 {
            let footer_area = Rect::new(size.x, size.bottom() - 1, size.width, 1);
            let footer = Paragraph::new(self.footer_hint())
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.foreground).bg(theme.background));
            f.render_widget(footer, footer_area);
        }

        match self.ui_mode {
            UiMode::CategoryModal => self.render_modal(f, size, theme),
            UiMode::Alert(error) => self.render_alert(f, size, error),
            UiMode::Main => {}
        }
    }

    fn footer_hint(&self) -> &'static str {
        match self.ui_mode {
            UiMode::Main => "←/→ category  Tab list  Enter pick  q quit",
            UiMode::CategoryModal => "↑/↓ move  Enter choose  Esc cancel",
            UiMode::Alert(_) => "Enter dismiss",
        }
    }

    fn render_card(&self, f: &mut Frame, area: Rect, theme: ThemeColors) {
        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(view_style::card_style(theme))
            .title(Line::from(Span::styled(
                " Menu Lottery ",
                view_style::heading_style(theme),
            )))
            .title_alignment(Alignment::Center);
        let inner = card.inner(area);
        f.render_widget(card, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let label = Paragraph::new("Choose a category")
            .alignment(Alignment::Center)
            .style(view_style::card_style(theme));
        f.render_widget(label, rows[0]);

        let selector = Paragraph::new(self.selector_line(inner.width))
            .alignment(Alignment::Center)
            .style(view_style::heading_style(theme));
        f.render_widget(selector, rows[1]);

        let button = Paragraph::new(vec![
            Line::from(""),
            Line::from("Pick from this category"),
            Line::from(""),
        ])
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(button, rows[3]);

        if let Some(result) = self.state.last_result() {
            self.render_result(f, rows[5], result);
        }
    }

    fn selector_line(&self, width: u16) -> String {
        let categories = self.state.categories();
        if categories.is_empty() {
            return match self.state.phase() {
                Phase::Uninitialized => "loading categories...".to_string(),
                Phase::Ready => "(no categories)".to_string(),
            };
        }

        let max_chars = (width as usize).saturating_sub(12).max(4);
        let name = ui_helpers::truncate_label(self.state.chosen_category(), max_chars);
        match self.state.chosen_index() {
            Some(index) => format!("◀ {} ▶  {}/{}", name, index + 1, categories.len()),
            None => format!("◀ {} ▶", name),
        }
    }

    fn render_result(&self, f: &mut Frame, area: Rect, result: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(RESULT_BORDER).bg(RESULT_BACKGROUND))
            .style(Style::default().bg(RESULT_BACKGROUND));

        let max_chars = (area.width as usize).saturating_sub(4).max(4);
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "★ Today's menu is... ★",
                Style::default()
                    .fg(RESULT_HEADING)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                ui_helpers::truncate_label(result, max_chars),
                Style::default().fg(RESULT_TEXT).add_modifier(Modifier::BOLD),
            )),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
    }
}
