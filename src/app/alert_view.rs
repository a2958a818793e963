use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{constants::ALERT_BORDER, error::PickError};

use super::{App, ui_helpers};

const ALERT_WIDTH: u16 = 44;
const ALERT_HEIGHT: u16 = 7;

impl App {
    pub(super) fn render_alert(&self, f: &mut Frame, terminal_size: Rect, error: PickError) {
        let area = ui_helpers::centered_rect(terminal_size, ALERT_WIDTH, ALERT_HEIGHT);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(ALERT_BORDER))
            .style(Style::default().fg(Color::Black).bg(Color::White));

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                error.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[ OK ]",
                Style::default().fg(Color::White).bg(ALERT_BORDER),
            )),
        ];

        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
    }
}
