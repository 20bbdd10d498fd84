// RustPixel UI Framework - Widget System
// copyright zipxing@hotmail.com 2022～2025

//! Core widget trait shared by the toggle controls.

use crate::ui::{UIEvent, UIResult};
use crate::util::Rect;
use std::sync::atomic::{AtomicU32, Ordering};

/// Unique identifier for widgets
pub type WidgetId = u32;

/// Widget state flags
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetState {
    pub visible: bool,
    pub enabled: bool,
    pub focused: bool,
    pub dirty: bool, // needs redraw
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            visible: true,
            enabled: true,
            focused: false,
            dirty: true,
        }
    }
}

/// Core trait that all UI widgets must implement
pub trait Widget {
    /// Get widget's unique identifier
    fn id(&self) -> WidgetId;

    /// Get widget's current bounds, in parent coordinates
    fn bounds(&self) -> Rect;

    /// Set widget's bounds
    fn set_bounds(&mut self, bounds: Rect);

    fn state(&self) -> &WidgetState;

    fn state_mut(&mut self) -> &mut WidgetState;

    /// Handle input events, returns true when the event was consumed
    fn handle_event(&mut self, event: &UIEvent) -> UIResult<bool>;

    /// Calculate preferred size based on content
    fn preferred_size(&self, available: Rect) -> Rect;

    /// Check if point is inside widget bounds
    fn hit_test(&self, x: f32, y: f32) -> bool {
        self.bounds().contains(x, y)
    }

    /// Visible and enabled widgets react to input
    fn accepts_input(&self) -> bool {
        let s = self.state();
        s.visible && s.enabled
    }

    fn set_visible(&mut self, visible: bool) {
        self.state_mut().visible = visible;
        self.state_mut().dirty = true;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.state_mut().enabled = enabled;
        self.state_mut().dirty = true;
    }

    fn set_focused(&mut self, focused: bool) {
        self.state_mut().focused = focused;
        self.state_mut().dirty = true;
    }

    /// Mark widget as dirty (needs redraw)
    fn mark_dirty(&mut self) {
        self.state_mut().dirty = true;
    }

    fn clear_dirty(&mut self) {
        self.state_mut().dirty = false;
    }

    fn is_dirty(&self) -> bool {
        self.state().dirty
    }
}

/// Base widget implementation with common functionality
#[derive(Debug, Clone)]
pub struct BaseWidget {
    pub id: WidgetId,
    pub bounds: Rect,
    pub state: WidgetState,
}

impl BaseWidget {
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            bounds: Rect::default(),
            state: WidgetState::default(),
        }
    }
}

static WIDGET_ID_COUNTER: AtomicU32 = AtomicU32::new(1);

pub fn next_widget_id() -> WidgetId {
    WIDGET_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Helper macro for widget boilerplate.
///
/// `impl_widget_base!(base)` also implements `set_bounds`; widgets that need
/// to react to moves use `impl_widget_base!(base, custom_bounds)` and write
/// their own.
#[macro_export]
macro_rules! impl_widget_base {
    ($base_field:ident) => {
        $crate::impl_widget_base!($base_field, custom_bounds);

        fn set_bounds(&mut self, bounds: $crate::util::Rect) {
            self.$base_field.bounds = bounds;
            self.$base_field.state.dirty = true;
        }
    };
    ($base_field:ident, custom_bounds) => {
        fn id(&self) -> $crate::ui::WidgetId {
            self.$base_field.id
        }

        fn bounds(&self) -> $crate::util::Rect {
            self.$base_field.bounds
        }

        fn state(&self) -> &$crate::ui::WidgetState {
            &self.$base_field.state
        }

        fn state_mut(&mut self) -> &mut $crate::ui::WidgetState {
            &mut self.$base_field.state
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = next_widget_id();
        let b = next_widget_id();
        assert_ne!(a, b);
    }

    #[test]
    fn default_state_accepts_input() {
        let s = WidgetState::default();
        assert!(s.visible && s.enabled && !s.focused && s.dirty);
    }
}
