// RustPixel UI Framework - Components
// copyright zipxing@hotmail.com 2022～2025

//! Toggle controls and the pieces they are assembled from.

pub mod checkbox;
pub mod radio;
pub mod switch;
pub mod view;

// Re-exports
pub use checkbox::*;
pub use radio::*;
pub use switch::*;
pub use view::*;
