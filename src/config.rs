//! Board Configuration
//!
//! Mount-point selectors, storage key and log level.

use log::LevelFilter;

pub const DEFAULT_STORAGE_KEY: &str = "todos";
pub const DEFAULT_LIST_SELECTOR: &str = ".todo-list";
pub const DEFAULT_FORM_SELECTOR: &str = "form";
pub const DEFAULT_INPUT_SELECTOR: &str = "input";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Key the saved list is stored under
    pub storage_key: String,
    /// Container the rendered todos replace
    pub list_selector: String,
    /// Form whose submission adds a todo (saved board only)
    pub form_selector: String,
    /// Text input read on submission (saved board only)
    pub input_selector: String,
    pub log_level: LevelFilter,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            list_selector: DEFAULT_LIST_SELECTOR.to_string(),
            form_selector: DEFAULT_FORM_SELECTOR.to_string(),
            input_selector: DEFAULT_INPUT_SELECTOR.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl BoardConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_list_selector(mut self, selector: impl Into<String>) -> Self {
        self.list_selector = selector.into();
        self
    }

    pub fn with_form_selector(mut self, selector: impl Into<String>) -> Self {
        self.form_selector = selector.into();
        self
    }

    pub fn with_input_selector(mut self, selector: impl Into<String>) -> Self {
        self.input_selector = selector.into();
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_markup() {
        let config = BoardConfig::default();
        assert_eq!(config.storage_key, "todos");
        assert_eq!(config.list_selector, ".todo-list");
        assert_eq!(config.form_selector, "form");
        assert_eq!(config.input_selector, "input");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_builder_overrides() {
        let config = BoardConfig::default()
            .with_storage_key("chores")
            .with_list_selector("#list")
            .with_form_selector("#add")
            .with_input_selector("#add input")
            .with_log_level(LevelFilter::Debug);

        assert_eq!(config.storage_key, "chores");
        assert_eq!(config.list_selector, "#list");
        assert_eq!(config.form_selector, "#add");
        assert_eq!(config.input_selector, "#add input");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }
}
