//! Table Settings
//!
//! Optional JSON embedded in the host page:
//! `<script id="nested-table-settings" type="application/json">{...}</script>`

use log::LevelFilter;
use serde::Deserialize;

const SETTINGS_ELEMENT_ID: &str = "nested-table-settings";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Heading above the form
    pub title: String,
    /// Indentation per nesting level, in pixels
    pub indent_px: u32,
    /// Ask before deleting a row and its subtree
    pub confirm_delete: bool,
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            title: "Dynamic Nested Table with Modal".to_string(),
            indent_px: 24,
            confirm_delete: true,
            log_level: "info".to_string(),
        }
    }
}

impl TableSettings {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Unrecognised levels fall back to `info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Read settings from the page. `Ok(None)` when none are embedded.
    pub fn from_document() -> serde_json::Result<Option<Self>> {
        let text = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(SETTINGS_ELEMENT_ID))
            .and_then(|element| element.text_content());
        match text {
            Some(text) if !text.trim().is_empty() => Self::from_json(&text).map(Some),
            _ => Ok(None),
        }
    }
}
