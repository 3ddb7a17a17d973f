use super::*;

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

#[test]
fn printable_chars_edit_the_query() {
    assert_eq!(
        map_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)),
        InputOutcome::Action(Action::SearchAppend('x'))
    );
    assert_eq!(
        map_key_event(key(KeyCode::Char('X'), KeyModifiers::SHIFT)),
        InputOutcome::Action(Action::SearchAppend('X'))
    );
    assert_eq!(
        map_key_event(key(KeyCode::Backspace, KeyModifiers::NONE)),
        InputOutcome::Action(Action::SearchBackspace)
    );
    assert_eq!(
        map_key_event(key(KeyCode::Enter, KeyModifiers::NONE)),
        InputOutcome::Action(Action::SearchSubmit)
    );
}

#[test]
fn control_keys() {
    assert_eq!(
        map_key_event(key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
        InputOutcome::Action(Action::SearchClear)
    );
    assert_eq!(
        map_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        InputOutcome::Quit
    );
    assert_eq!(
        map_key_event(key(KeyCode::Esc, KeyModifiers::NONE)),
        InputOutcome::Quit
    );
    assert_eq!(
        map_key_event(key(KeyCode::Char('k'), KeyModifiers::ALT)),
        InputOutcome::Ignored
    );
    assert_eq!(
        map_key_event(key(KeyCode::F(5), KeyModifiers::NONE)),
        InputOutcome::Ignored
    );
}

#[test]
fn release_events_are_ignored() {
    let mut event = key(KeyCode::Char('a'), KeyModifiers::NONE);
    event.kind = KeyEventKind::Release;
    assert_eq!(map_key_event(event), InputOutcome::Ignored);
}
