// RustPixel UI Framework - View Sources
// copyright zipxing@hotmail.com 2022～2025

//! Descriptors a control resolves into its visual nodes.
//!
//! A `ViewSource` is a template: every `build` call returns a new node, so
//! one descriptor can style any number of items independently.

use crate::render::{Color, Graphics, ImageSource, Node};
use crate::ui::{UIError, UIResult};
use serde::{Deserialize, Serialize};

/// Vector shape drawn instead of an image.
///
/// Square shapes whose radius reaches half the side become circles; anything
/// else is a rounded rectangle. A `fill_color` adds an inner layer inset by
/// `padding`, producing a ring with a dot or a bordered box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    pub color: Color,
    #[serde(default)]
    pub fill_color: Option<Color>,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub radius: f32,
    #[serde(default)]
    pub padding: f32,
}

impl ShapeStyle {
    pub fn new(color: Color, width: f32, height: f32) -> Self {
        Self {
            color,
            fill_color: None,
            width,
            height,
            radius: 0.0,
            padding: 0.0,
        }
    }

    pub fn with_fill(mut self, fill_color: Color, padding: f32) -> Self {
        self.fill_color = Some(fill_color);
        self.padding = padding;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn is_circle(&self) -> bool {
        self.width == self.height && self.radius >= self.width / 2.0
    }

    pub fn build(&self) -> Graphics {
        let (w, h, r, p) = (self.width, self.height, self.radius, self.padding);
        let circle = self.is_circle();
        let center = w / 2.0;

        let mut g = Graphics::new().begin_fill(self.color);
        g = if circle {
            g.draw_circle(center, center, center)
        } else {
            g.draw_rounded_rect(0.0, 0.0, w, h, r)
        };

        if let Some(fill) = self.fill_color {
            g = g.begin_fill(fill);
            g = if circle {
                g.draw_circle(center, center, center - p)
            } else {
                g.draw_rounded_rect(p, p, w - p * 2.0, h - p * 2.0, r)
            };
        }
        g
    }
}

/// Where a view comes from: an image id, a vector shape, or a ready node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewSource {
    Image(String),
    Shape(ShapeStyle),
    #[serde(skip)]
    Node(Node),
}

impl ViewSource {
    pub fn build(&self, images: &dyn ImageSource) -> UIResult<Node> {
        match self {
            ViewSource::Image(id) => images.resolve(id),
            ViewSource::Shape(shape) => {
                if shape.width <= 0.0 || shape.height <= 0.0 {
                    return Err(UIError::InvalidStyle(format!(
                        "shape needs a positive size, got {}x{}",
                        shape.width, shape.height
                    )));
                }
                Ok(Node::graphics(shape.build()))
            }
            ViewSource::Node(node) => Ok(node.clone()),
        }
    }
}

impl From<&str> for ViewSource {
    fn from(id: &str) -> Self {
        ViewSource::Image(id.to_string())
    }
}

impl From<ShapeStyle> for ViewSource {
    fn from(shape: ShapeStyle) -> Self {
        ViewSource::Shape(shape)
    }
}

impl From<Node> for ViewSource {
    fn from(node: Node) -> Self {
        ViewSource::Node(node)
    }
}
