use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::kernel::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    Action(Action),
    Quit,
    Ignored,
}

pub fn map_key_event(event: KeyEvent) -> InputOutcome {
    if event.kind == KeyEventKind::Release {
        return InputOutcome::Ignored;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Esc => InputOutcome::Quit,
        KeyCode::Char('c') if ctrl => InputOutcome::Quit,
        KeyCode::Char('u') if ctrl => InputOutcome::Action(Action::SearchClear),
        KeyCode::Char(_) if ctrl || event.modifiers.contains(KeyModifiers::ALT) => {
            InputOutcome::Ignored
        }
        KeyCode::Char(ch) => InputOutcome::Action(Action::SearchAppend(ch)),
        KeyCode::Backspace => InputOutcome::Action(Action::SearchBackspace),
        KeyCode::Enter => InputOutcome::Action(Action::SearchSubmit),
        _ => InputOutcome::Ignored,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/input.rs"]
mod tests;
