// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Toggle controls for the RustPixel scene graph: a two-view checkbox and a
//! mutually exclusive radio group.
//!
//! The controls compute their own state and geometry (active view, label
//! placement, hit areas, layout) over lightweight scene nodes. Drawing the
//! nodes and routing raw input to widgets is left to the host renderer.
//!
//! Modules render, ui, event, config, log and util are offered:
//! - `render`: visual nodes, vector graphics, text and image resolution
//! - `ui`: widget trait, signals, layout, switch, checkbox and radio group
//! - `event`: unified keyboard and mouse events
//! - `config`: TOML/JSON widget definitions
//! - `log`: log4rs file logging

/// declarative checkbox / radio group definitions
pub mod config;

/// unified input events
pub mod event;

/// log
pub mod log;

/// scene graph collaborators consumed by the widgets
pub mod render;

/// toggle widgets and their plumbing
pub mod ui;

/// rect, point and path helpers
pub mod util;
