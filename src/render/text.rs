// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Text node: content plus style, with a rendered size derived from the
//! display width of its characters.

use crate::render::style::Style;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Horizontal advance of one display column relative to the font size.
pub const GLYPH_ASPECT: f32 = 0.5;

fn default_font_size() -> f32 {
    26.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub style: Style,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            style: Style::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    style: TextStyle,
}

impl Text {
    pub fn new(content: &str, style: TextStyle) -> Self {
        Self {
            content: content.to_string(),
            style,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Widest line, CJK characters counting two columns.
    pub fn width(&self) -> f32 {
        let cols = self
            .content
            .lines()
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0);
        cols as f32 * self.style.font_size * GLYPH_ASPECT
    }

    pub fn height(&self) -> f32 {
        self.content.lines().count().max(1) as f32 * self.style.font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(font_size: f32) -> TextStyle {
        TextStyle {
            font_size,
            ..Default::default()
        }
    }

    #[test]
    fn test_width_follows_columns() {
        let t = Text::new("Enable", style(20.0));
        assert_eq!(t.width(), 60.0);
        assert_eq!(t.height(), 20.0);
    }

    #[test]
    fn test_cjk_counts_double() {
        let t = Text::new("你好", style(10.0));
        assert_eq!(t.width(), 20.0);
    }

    #[test]
    fn test_multiline_height() {
        let t = Text::new("a\nlonger", style(10.0));
        assert_eq!(t.width(), 30.0);
        assert_eq!(t.height(), 20.0);
    }

    #[test]
    fn test_empty_keeps_line_height() {
        let t = Text::new("", style(12.0));
        assert_eq!(t.width(), 0.0);
        assert_eq!(t.height(), 12.0);
    }
}
