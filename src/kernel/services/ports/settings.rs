use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_file: Option<PathBuf>,
    #[serde(default)]
    pub theme: ThemeSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logged_in_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logged_out_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_fg: Option<String>,
}

fn default_title() -> String {
    "Code Review".to_string()
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            title_fg: Some("cyan".to_string()),
            search_fg: Some("white".to_string()),
            logged_in_fg: Some("green".to_string()),
            logged_out_fg: Some("yellow".to_string()),
            unknown_fg: Some("dark_gray".to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: default_title(),
            account_file: None,
            theme: ThemeSettings::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
