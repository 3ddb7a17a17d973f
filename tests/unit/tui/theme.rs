use super::*;

#[test]
fn parses_names_and_hex() {
    assert_eq!(parse_color("green"), Some(Color::Indexed(2)));
    assert_eq!(parse_color(" Dark_Gray "), Some(Color::Indexed(8)));
    assert_eq!(parse_color("#FF8000"), Some(Color::Rgb(255, 128, 0)));
    assert_eq!(parse_color("#FFF"), None);
    assert_eq!(parse_color("chartreuse"), None);
    assert_eq!(parse_color(""), None);
}

#[test]
fn settings_override_only_valid_entries() {
    let settings = ThemeSettings {
        title_fg: Some("#010203".to_string()),
        search_fg: None,
        logged_in_fg: Some("nonsense".to_string()),
        logged_out_fg: Some("red".to_string()),
        unknown_fg: None,
    };
    let theme = HeaderTheme::from_settings(&settings);
    let base = HeaderTheme::default();
    assert_eq!(theme.title_fg, Color::Rgb(1, 2, 3));
    assert_eq!(theme.search_fg, base.search_fg);
    assert_eq!(theme.logged_in_fg, base.logged_in_fg);
    assert_eq!(theme.logged_out_fg, Color::Indexed(1));
}

#[test]
fn non_ascii_hex_is_rejected_without_panicking() {
    assert_eq!(parse_color("#aééb"), None);
    assert_eq!(parse_color("#12345g"), None);
    assert_eq!(parse_color("#ééé"), None);

    let settings = ThemeSettings {
        title_fg: None,
        search_fg: None,
        logged_in_fg: Some("#aééb".to_string()),
        logged_out_fg: None,
        unknown_fg: None,
    };
    let theme = HeaderTheme::from_settings(&settings);
    assert_eq!(theme.logged_in_fg, HeaderTheme::default().logged_in_fg);
}
