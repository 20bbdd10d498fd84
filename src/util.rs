// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Geometry helpers shared by the scene graph and the widgets: PointF32, Rect
//! and path resolution for log/config files.

use serde::{Deserialize, Serialize};
use std::path::{Path, MAIN_SEPARATOR};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointF32 {
    pub x: f32,
    pub y: f32,
}

impl PointF32 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis aligned rectangle in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn right(self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    pub fn offset(self, dx: f32, dy: f32) -> Rect {
        Rect { x: self.x + dx, y: self.y + dy, ..self }
    }

    pub fn union(self, other: Rect) -> Rect {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Rect {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Half-open containment: right and bottom edges are outside.
    pub fn contains(self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Resolve a relative path against the current working directory.
pub fn get_abs_path(fpath: &str) -> String {
    if Path::new(fpath).is_relative() {
        match std::env::current_dir() {
            Ok(cwd) => format!("{}{}{}", cwd.display(), MAIN_SEPARATOR, fpath),
            Err(_) => fpath.to_string(),
        }
    } else {
        fpath.to_string()
    }
}
