// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Node is the visual element of the scene graph.
//!
//! A node carries at most one piece of content (image, vector graphics or
//! text), a position relative to its parent, and any number of children.
//! Its width and height are derived from the content and the children, so
//! adding a child or changing a text immediately changes the reported size.

use crate::render::{graphics::Graphics, text::Text};
use crate::util::{PointF32, Rect};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    #[default]
    Empty,
    /// Image resolved from an asset id, sized by the asset.
    Image { id: String, width: f32, height: f32 },
    Graphics(Graphics),
    Text(Text),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    content: Content,
    pub position: PointF32,
    children: Vec<Node>,
    hit_area: Option<Rect>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: Content) -> Self {
        Self {
            content,
            ..Default::default()
        }
    }

    pub fn image(id: &str, width: f32, height: f32) -> Self {
        Self::with_content(Content::Image {
            id: id.to_string(),
            width,
            height,
        })
    }

    pub fn graphics(graphics: Graphics) -> Self {
        Self::with_content(Content::Graphics(graphics))
    }

    pub fn text(text: Text) -> Self {
        Self::with_content(Content::Text(text))
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn as_text(&self) -> Option<&Text> {
        match &self.content {
            Content::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match &mut self.content {
            Content::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = PointF32::new(x, y);
    }

    /// Appends a child and returns its index.
    pub fn add_child(&mut self, child: Node) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.get_mut(index)
    }

    /// Bounds of the node's own content in local coordinates.
    pub fn content_bounds(&self) -> Option<Rect> {
        match &self.content {
            Content::Empty => None,
            Content::Image { width, height, .. } => Some(Rect::new(0.0, 0.0, *width, *height)),
            Content::Graphics(g) => g.bounds(),
            Content::Text(t) => Some(Rect::new(0.0, 0.0, t.width(), t.height())),
        }
    }

    /// Bounds of content and all descendants in local coordinates.
    pub fn local_bounds(&self) -> Rect {
        let children = self.children.iter().map(|c| {
            c.local_bounds().offset(c.position.x, c.position.y)
        });
        self.content_bounds()
            .into_iter()
            .chain(children)
            .reduce(|a, b| a.union(b))
            .unwrap_or_default()
    }

    pub fn width(&self) -> f32 {
        self.local_bounds().width
    }

    pub fn height(&self) -> f32 {
        self.local_bounds().height
    }

    pub fn set_hit_area(&mut self, area: Rect) {
        self.hit_area = Some(area);
    }

    pub fn hit_area(&self) -> Option<Rect> {
        self.hit_area
    }
}
