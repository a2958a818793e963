use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::constants::{ACCENT, ThemeColors};

use super::{App, ui_helpers, view_style};

impl App {
    pub(super) fn render_modal(&self, f: &mut Frame, terminal_size: Rect, theme: ThemeColors) {
        let modal_rect = ui_helpers::modal_rect_ratio(terminal_size, 1, 2);
        let categories = self.state.categories();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Line::from(Span::styled(
                "category",
                view_style::heading_style(theme),
            )))
            .title_alignment(Alignment::Center)
            .style(view_style::card_style(theme))
            .border_style(Style::default().fg(ACCENT));

        f.render_widget(Clear, modal_rect);

        if categories.is_empty() {
            let empty = Paragraph::new("(no categories)")
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, modal_rect);
            return;
        }

        let max_chars = modal_rect.width.saturating_sub(6) as usize;
        let chosen = self.state.chosen_index();
        let highlight_fg = view_style::text_color_for_bg(ACCENT);

        let items: Vec<ListItem> = categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let dot = if chosen == Some(i) { "● " } else { "  " };
                let label = ui_helpers::truncate_label(&category.name, max_chars);

                if i == self.modal_index {
                    ListItem::new(Line::from(vec![Span::raw(dot), Span::raw(label)]))
                        .style(Style::default().fg(highlight_fg).bg(ACCENT))
                } else {
                    ListItem::new(Line::from(vec![
                        Span::raw(dot).fg(ACCENT),
                        Span::raw(label).fg(theme.card_foreground),
                    ]))
                }
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(self.modal_index));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default());

        f.render_stateful_widget(list, modal_rect, &mut list_state);
    }
}
