use ratatui::style::Color;

pub const FILE_NAMES: FileNames = FileNames {
    categories: "cat.csv",
    recipes: "menu_list.csv",
};

pub const TIME_SETTINGS: TimeSettings = TimeSettings {
    poll_ms: 50,
    target_fps: 24,
};

pub const MEAL_HOURS: MealHours = MealHours {
    morning_start: 5,
    lunch_start: 11,
    dinner_start: 16,
};

pub const THEMES: ThemeSettings = ThemeSettings {
    morning: ThemeColors {
        background: Color::Rgb(254, 215, 170),
        foreground: Color::White,
        card_background: Color::White,
        card_foreground: Color::Rgb(17, 24, 39),
    },
    lunch: ThemeColors {
        background: Color::Rgb(186, 230, 253),
        foreground: Color::White,
        card_background: Color::White,
        card_foreground: Color::Rgb(17, 24, 39),
    },
    dinner: ThemeColors {
        background: Color::Rgb(15, 23, 42),
        foreground: Color::White,
        card_background: Color::Rgb(30, 41, 59),
        card_foreground: Color::White,
    },
};

pub const ACCENT: Color = Color::Rgb(22, 163, 74);
pub const RESULT_BORDER: Color = Color::Rgb(187, 247, 208);
pub const RESULT_BACKGROUND: Color = Color::Rgb(240, 253, 244);
pub const RESULT_HEADING: Color = Color::Rgb(21, 128, 61);
pub const RESULT_TEXT: Color = Color::Rgb(31, 41, 55);
pub const ALERT_BORDER: Color = Color::Rgb(220, 38, 38);

pub struct FileNames {
    pub categories: &'static str,
    pub recipes: &'static str,
}

pub struct TimeSettings {
    pub poll_ms: u64,
    pub target_fps: u64,
}

pub struct MealHours {
    pub morning_start: u32,
    pub lunch_start: u32,
    pub dinner_start: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: Color,
    pub foreground: Color,
    pub card_background: Color,
    pub card_foreground: Color,
}

pub struct ThemeSettings {
    pub morning: ThemeColors,
    pub lunch: ThemeColors,
    pub dinner: ThemeColors,
}
