use ratatui::layout::Rect;

pub fn wrap_prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 || current >= len {
        len - 1
    } else {
        current - 1
    }
}

pub fn wrap_next_index(current: usize, len: usize) -> usize {
    if len == 0 || current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

pub fn modal_rect_ratio(terminal_size: Rect, numerator: u16, denominator: u16) -> Rect {
    let target_width = terminal_size.width.saturating_mul(numerator) / denominator;
    let target_height = (terminal_size.height.saturating_mul(numerator) / denominator).max(10);

    let max_width = terminal_size.width.saturating_sub(2).max(1);
    let max_height = terminal_size.height.saturating_sub(2).max(1);

    let modal_width = target_width.clamp(1, max_width);
    let modal_height = target_height.clamp(1, max_height);

    let modal_x = (terminal_size.width.saturating_sub(modal_width)) / 2;
    let modal_y = (terminal_size.height.saturating_sub(modal_height)) / 2;

    Rect::new(modal_x, modal_y, modal_width, modal_height)
}

pub fn truncate_label(value: &str, max_chars: usize) -> String {
    let count = value.chars().count();
    if count <= max_chars {
        return value.to_string();
    }

    if max_chars <= 3 {
        return value.chars().take(max_chars).collect();
    }

    let prefix: String = value.chars().take(max_chars - 3).collect();
    format!("{}...", prefix)
}
