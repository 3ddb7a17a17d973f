use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderTheme {
    pub title_fg: Color,
    pub search_fg: Color,
    pub logged_in_fg: Color,
    pub logged_out_fg: Color,
    pub unknown_fg: Color,
}

impl Default for HeaderTheme {
    fn default() -> Self {
        Self {
            title_fg: Color::Indexed(6),
            search_fg: Color::Indexed(15),
            logged_in_fg: Color::Indexed(2),
            logged_out_fg: Color::Indexed(3),
            unknown_fg: Color::Indexed(8),
        }
    }
}

impl HeaderTheme {
    /// Unset or unparsable entries keep the default color.
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let base = Self::default();
        let pick = |value: &Option<String>, fallback: Color| {
            value.as_deref().and_then(parse_color).unwrap_or(fallback)
        };
        Self {
            title_fg: pick(&settings.title_fg, base.title_fg),
            search_fg: pick(&settings.search_fg, base.search_fg),
            logged_in_fg: pick(&settings.logged_in_fg, base.logged_in_fg),
            logged_out_fg: pick(&settings.logged_out_fg, base.logged_out_fg),
            unknown_fg: pick(&settings.unknown_fg, base.unknown_fg),
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/theme.rs"]
mod tests;
