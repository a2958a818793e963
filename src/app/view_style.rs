use ratatui::style::{Color, Modifier, Style};

use crate::{
    constants::{THEMES, ThemeColors},
    domain::MealBucket,
};

pub(super) fn theme_for(bucket: MealBucket) -> ThemeColors {
    match bucket {
        MealBucket::Morning => THEMES.morning,
        MealBucket::Lunch => THEMES.lunch,
        MealBucket::Dinner => THEMES.dinner,
    }
}

pub(super) fn text_color_for_bg(bg_color: Color) -> Color {
    if let Color::Rgb(r, g, b) = bg_color {
        let brightness = (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000;
        if brightness > 128 {
            Color::Black
        } else {
            Color::White
        }
    } else {
        Color::White
    }
}

pub(super) fn card_style(theme: ThemeColors) -> Style {
    Style::default()
        .fg(theme.card_foreground)
        .bg(theme.card_background)
}

pub(super) fn heading_style(theme: ThemeColors) -> Style {
    card_style(theme).add_modifier(Modifier::BOLD)
}
