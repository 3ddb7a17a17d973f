//! Banner row: title, search box and the account container.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::HeaderTheme;
use crate::kernel::{HeaderState, LOGGED_IN_CLASS, LOGGED_OUT_CLASS};

const SEARCH_LABEL: &str = "Search: ";
const SIGN_IN_LABEL: &str = "Sign in";
const SEARCH_MIN_WIDTH: u16 = 12;

pub struct HeaderWidget<'a> {
    state: &'a HeaderState,
    title: &'a str,
    theme: HeaderTheme,
    status: Option<&'a str>,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a HeaderState, title: &'a str) -> Self {
        Self {
            state,
            title,
            theme: HeaderTheme::default(),
            status: None,
        }
    }

    pub fn theme(mut self, theme: HeaderTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Optional second line, e.g. the last submitted search.
    pub fn status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }

    /// Text and style for the account container, driven by its classes.
    fn account_cell(&self) -> (String, Style) {
        let classes = self.state.account_container();
        if classes.contains(LOGGED_IN_CLASS) {
            let label = self
                .state
                .account()
                .map(|a| a.display_label().to_string())
                .unwrap_or_default();
            (label, Style::default().fg(self.theme.logged_in_fg))
        } else if classes.contains(LOGGED_OUT_CLASS) {
            (
                SIGN_IN_LABEL.to_string(),
                Style::default()
                    .fg(self.theme.logged_out_fg)
                    .add_modifier(Modifier::UNDERLINED),
            )
        } else {
            (String::new(), Style::default().fg(self.theme.unknown_fg))
        }
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let y = area.y;
        let right = area.x + area.width;

        let (account_text, account_style) = self.account_cell();
        let account_width = u16::try_from(account_text.width()).unwrap_or(u16::MAX);
        let account_x = right
            .saturating_sub(account_width.saturating_add(1))
            .max(area.x);

        let title_style = Style::default()
            .fg(self.theme.title_fg)
            .add_modifier(Modifier::BOLD);
        let (mut x, _) = buf.set_stringn(
            area.x,
            y,
            self.title,
            account_x.saturating_sub(area.x) as usize,
            title_style,
        );

        x = x.saturating_add(2);
        if x + SEARCH_MIN_WIDTH <= account_x {
            let search_style = Style::default().fg(self.theme.search_fg);
            let (after_label, _) = buf.set_stringn(
                x,
                y,
                SEARCH_LABEL,
                (account_x - x) as usize,
                search_style.add_modifier(Modifier::DIM),
            );
            let room = account_x.saturating_sub(after_label + 1) as usize;
            let query = self.state.search_query();
            let visible = tail_columns(query, room);
            buf.set_stringn(after_label, y, visible, room, search_style);
        }

        if account_width > 0 {
            buf.set_stringn(
                account_x,
                y,
                &account_text,
                right.saturating_sub(account_x) as usize,
                account_style,
            );
        }

        if area.height > 1 {
            if let Some(status) = self.status {
                buf.set_stringn(
                    area.x,
                    y + 1,
                    status,
                    area.width as usize,
                    Style::default().fg(self.theme.unknown_fg),
                );
            }
        }
    }
}

/// Longest suffix of `s` that fits in `max` terminal columns, so the end of
/// the query stays visible while typing past the box width.
fn tail_columns(s: &str, max: usize) -> &str {
    if s.width() <= max {
        return s;
    }
    let mut used = 0usize;
    let mut start = s.len();
    for (idx, ch) in s.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        start = idx;
    }
    &s[start..]
}

#[cfg(test)]
#[path = "../../tests/unit/tui/header.rs"]
mod tests;
