// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Vector graphics made of layered filled shapes.
//!
//! Only geometry and fill colors are recorded; rasterising the layers is
//! left to the rendering adapter.

use crate::render::style::Color;
use crate::util::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle {
        x: f32,
        y: f32,
        radius: f32,
    },
    RoundedRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
    },
}

impl Shape {
    pub fn bounds(&self) -> Rect {
        match *self {
            Shape::Circle { x, y, radius } => {
                let r = radius.max(0.0);
                Rect::new(x - r, y - r, r * 2.0, r * 2.0)
            }
            Shape::RoundedRect { x, y, width, height, .. } => Rect::new(x, y, width, height),
        }
    }
}

/// One filled layer; later layers paint over earlier ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: Color,
    pub shape: Shape,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Graphics {
    fills: Vec<Fill>,
    color: Color,
}

impl Default for Graphics {
    fn default() -> Self {
        Self::new()
    }
}

impl Graphics {
    pub fn new() -> Self {
        Self {
            fills: vec![],
            color: Color::Reset,
        }
    }

    /// Select the color used by the shapes drawn next.
    pub fn begin_fill(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn draw_circle(mut self, x: f32, y: f32, radius: f32) -> Self {
        self.fills.push(Fill {
            color: self.color,
            shape: Shape::Circle { x, y, radius },
        });
        self
    }

    pub fn draw_rounded_rect(mut self, x: f32, y: f32, width: f32, height: f32, radius: f32) -> Self {
        self.fills.push(Fill {
            color: self.color,
            shape: Shape::RoundedRect {
                x,
                y,
                width,
                height,
                radius,
            },
        });
        self
    }

    pub fn fills(&self) -> &[Fill] {
        &self.fills
    }

    /// Union of every layer, None when nothing has been drawn.
    pub fn bounds(&self) -> Option<Rect> {
        self.fills
            .iter()
            .map(|f| f.shape.bounds())
            .reduce(|a, b| a.union(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_keep_their_own_color() {
        let g = Graphics::new()
            .begin_fill(Color::White)
            .draw_circle(10.0, 10.0, 10.0)
            .begin_fill(Color::Red)
            .draw_circle(10.0, 10.0, 6.0);
        assert_eq!(g.fills().len(), 2);
        assert_eq!(g.fills()[0].color, Color::White);
        assert_eq!(g.fills()[1].color, Color::Red);
        assert_eq!(g.bounds(), Some(Rect::new(0.0, 0.0, 20.0, 20.0)));
    }

    #[test]
    fn empty_graphics_has_no_bounds() {
        assert_eq!(Graphics::new().bounds(), None);
    }
}
