// RustPixel UI Framework
// copyright zipxing@hotmail.com 2022～2025

//! # Toggle widgets
//!
//! Checkbox and radio group controls built on the scene graph in `render`.
//!
//! ## Core Concepts
//!
//! - **Widget**: common trait for positioned, event-handling components
//! - **Signal**: synchronous multi-subscriber change notification
//! - **Layout**: linear arrangement of a group's items
//! - **Switch**: a set of views with exactly one active
//!
//! ## Example Usage
//!
//! ```rust
//! use pixel_toggle::render::ImageRegistry;
//! use pixel_toggle::ui::*;
//!
//! let images = ImageRegistry::new()
//!     .with_image("radio.png", 24.0, 24.0)
//!     .with_image("radio_checked.png", 24.0, 24.0);
//!
//! let mut group = RadioGroup::new(
//!     RadioOptions {
//!         items: vec!["Option 1".into(), "Option 2".into()],
//!         direction: Direction::Vertical,
//!         elements_margin: 10.0,
//!         style: RadioStyle {
//!             bg: ViewSource::Image("radio.png".into()),
//!             checked: ViewSource::Image("radio_checked.png".into()),
//!             text_style: None,
//!         },
//!         selected_item: Some(0),
//!     },
//!     &images,
//! )
//! .unwrap();
//!
//! group.on_change(|change| println!("selected {} = {}", change.index, change.value));
//! group.select_item(1).unwrap();
//! assert_eq!(group.value(), Some("Option 2"));
//! ```

pub mod components;
pub mod event;
pub mod layout;
pub mod signal;
pub mod widget;

pub use components::*;
pub use event::*;
pub use layout::*;
pub use signal::*;
pub use widget::*;

/// UI Framework result type
pub type UIResult<T> = Result<T, UIError>;

/// UI Framework error types
#[derive(Debug)]
pub enum UIError {
    /// Image id unknown to the image source
    ImageNotFound(String),
    /// Style descriptor cannot produce a view
    InvalidStyle(String),
    /// Index outside the collection it addresses
    InvalidIndex { index: usize, len: usize },
    /// Configuration could not be read or parsed
    Config(String),
}

impl std::fmt::Display for UIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UIError::ImageNotFound(msg) => write!(f, "Image not found: {}", msg),
            UIError::InvalidStyle(msg) => write!(f, "Invalid style: {}", msg),
            UIError::InvalidIndex { index, len } => {
                write!(f, "Invalid index: {} (len {})", index, len)
            }
            UIError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for UIError {}

impl From<toml::de::Error> for UIError {
    fn from(e: toml::de::Error) -> Self {
        UIError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for UIError {
    fn from(e: serde_json::Error) -> Self {
        UIError::Config(e.to_string())
    }
}

impl From<std::io::Error> for UIError {
    fn from(e: std::io::Error) -> Self {
        UIError::Config(e.to_string())
    }
}

/// Checks `index < len`, the precondition of every indexed widget operation.
pub(crate) fn check_index(index: usize, len: usize) -> UIResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(UIError::InvalidIndex { index, len })
    }
}
