// RustPixel UI Framework - Event System
// copyright zipxing@hotmail.com 2022～2025

//! UI events built on top of the unified input events.

use crate::event::Event as InputEvent;
use crate::ui::WidgetId;

/// UI-specific events extending the base input events
#[derive(Debug, Clone, PartialEq)]
pub enum UIEvent {
    /// Raw input event from the host adapter
    Input(InputEvent),

    /// Widget-specific events
    Widget(WidgetEvent),
}

/// Widget-specific event types, addressed by widget id
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    FocusGained(WidgetId),
    FocusLost(WidgetId),
    /// Widget was activated by the host (pointer click routed by the scene)
    Click(WidgetId),
}

impl From<InputEvent> for UIEvent {
    fn from(event: InputEvent) -> Self {
        UIEvent::Input(event)
    }
}

impl From<WidgetEvent> for UIEvent {
    fn from(event: WidgetEvent) -> Self {
        UIEvent::Widget(event)
    }
}
