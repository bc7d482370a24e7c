use ratatui::style::Color;

/// Warm "sunshine" palette: yellow to orange on a dark background.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub highlight: Color,
    pub dimmed: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::sunshine()
    }
}

impl Theme {
    pub fn sunshine() -> Self {
        Self {
            background: Color::Rgb(28, 25, 23), // #1C1917 Warm Stone
            text: Color::Rgb(231, 229, 228),    // #E7E5E4 Stone Light
            accent: Color::Rgb(234, 179, 8),    // #EAB308 Yellow
            highlight: Color::Rgb(249, 115, 22), // #F97316 Orange
            dimmed: Color::Rgb(120, 113, 108),  // #78716C Stone Gray
            error: Color::Rgb(253, 186, 116),   // #FDBA74 Soft Orange
        }
    }

    pub fn current() -> Self {
        Self::sunshine()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn highlight() -> Color {
        Theme::current().highlight
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn error() -> Color {
        Theme::current().error
    }
}
