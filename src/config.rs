// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Declarative widget configuration.
//!
//! A config file lists the images known to the host and named checkbox and
//! radio group definitions. TOML and JSON are both accepted:
//!
//! ```toml
//! [images]
//! "radio.png" = { width = 24, height = 24 }
//!
//! [checkbox.sound]
//! checked = true
//! style = { unchecked = "off.png", checked = "on.png", text = { text = "Sound" } }
//!
//! [radio.difficulty]
//! items = ["Easy", "Hard"]
//! type = "vertical"
//! elementsMargin = 10
//! selectedItem = 0
//! style = { bg = "radio.png", checked = { color = 0xffffff, fillColor = 0x00aa00, width = 24, height = 24, radius = 12, padding = 5 } }
//! ```

use crate::render::{ImageInfo, ImageRegistry};
use crate::ui::{Checkbox, CheckboxOptions, RadioGroup, RadioOptions, UIError, UIResult};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToggleConfig {
    #[serde(default)]
    pub images: HashMap<String, ImageInfo>,
    #[serde(default)]
    pub checkbox: HashMap<String, CheckboxOptions>,
    #[serde(default)]
    pub radio: HashMap<String, RadioOptions>,
}

impl ToggleConfig {
    pub fn from_toml(content: &str) -> UIResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> UIResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads a config file, `.json` files as JSON and anything else as TOML.
    pub fn load(path: &str) -> UIResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = Path::new(path)
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let config = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };
        info!(
            "config {} loaded: {} images, {} checkboxes, {} radio groups",
            path,
            config.images.len(),
            config.checkbox.len(),
            config.radio.len()
        );
        Ok(config)
    }

    pub fn image_registry(&self) -> ImageRegistry {
        ImageRegistry::from(self.images.clone())
    }

    pub fn build_checkbox(&self, name: &str) -> UIResult<Checkbox> {
        let options = self
            .checkbox
            .get(name)
            .ok_or_else(|| UIError::Config(format!("unknown checkbox: {}", name)))?;
        Checkbox::from_options(options, &self.image_registry())
    }

    pub fn build_radio(&self, name: &str) -> UIResult<RadioGroup> {
        let options = self
            .radio
            .get(name)
            .ok_or_else(|| UIError::Config(format!("unknown radio group: {}", name)))?;
        RadioGroup::new(options.clone(), &self.image_registry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Direction;

    const TOML: &str = r#"
        [images]
        "off.png" = { width = 30, height = 30 }
        "on.png" = { width = 30, height = 30 }
        "radio.png" = { width = 24, height = 24 }

        [checkbox.sound]
        checked = true
        style = { unchecked = "off.png", checked = "on.png", text = { text = "Sound" } }

        [radio.difficulty]
        items = ["Easy", "Normal", "Hard"]
        type = "horizontal"
        elementsMargin = 10
        selectedItem = 1
        style = { bg = "radio.png", checked = { color = 0xffffff, fillColor = 0x00aa00, width = 24, height = 24, radius = 12, padding = 5 } }
    "#;

    #[test]
    fn test_toml_builds_widgets() {
        let cfg = ToggleConfig::from_toml(TOML).unwrap();
        assert_eq!(cfg.images.len(), 3);

        let cb = cfg.build_checkbox("sound").unwrap();
        assert!(cb.is_checked());
        assert_eq!(cb.text(), Some("Sound"));

        let g = cfg.build_radio("difficulty").unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(g.value(), Some("Normal"));
        assert_eq!(cfg.radio["difficulty"].direction, Direction::Horizontal);
    }

    #[test]
    fn test_json_config() {
        let cfg = ToggleConfig::from_json(
            r#"{
                "images": { "a.png": { "width": 10, "height": 10 } },
                "radio": {
                    "r": {
                        "items": ["x", "y"],
                        "style": { "bg": "a.png", "checked": "a.png" }
                    }
                }
            }"#,
        )
        .unwrap();
        let g = cfg.build_radio("r").unwrap();
        assert_eq!(g.selected(), None);
        assert_eq!(cfg.radio["r"].direction, Direction::Vertical);
    }

    #[test]
    fn test_unknown_names_and_bad_input() {
        let cfg = ToggleConfig::default();
        assert!(matches!(cfg.build_checkbox("nope"), Err(UIError::Config(_))));
        assert!(matches!(cfg.build_radio("nope"), Err(UIError::Config(_))));
        assert!(matches!(
            ToggleConfig::from_toml("images = 3"),
            Err(UIError::Config(_))
        ));
    }

    #[test]
    fn test_missing_image_reported() {
        let cfg = ToggleConfig::from_toml(
            r#"
            [checkbox.c]
            style = { unchecked = "gone.png", checked = "gone.png" }
            "#,
        )
        .unwrap();
        assert!(matches!(
            cfg.build_checkbox("c"),
            Err(UIError::ImageNotFound(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(ToggleConfig::load("/nonexistent/toggles.toml").is_err());
    }
}
