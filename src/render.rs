// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Scene graph collaborators consumed by the widgets.
//!
//! - `node`: visual node with content, position, children and hit area
//! - `graphics`: layered vector shapes (circles, rounded rects)
//! - `text`: text node and its metrics
//! - `image`: image id resolution
//! - `style`: colors and text attributes

pub mod graphics;
pub mod image;
pub mod node;
pub mod style;
pub mod text;

pub use graphics::{Fill, Graphics, Shape};
pub use image::{ImageInfo, ImageRegistry, ImageSource};
pub use node::{Content, Node};
pub use style::{Color, Modifier, Style};
pub use text::{Text, TextStyle};
