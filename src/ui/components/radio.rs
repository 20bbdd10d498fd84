// RustPixel UI Framework - Radio Component
// copyright zipxing@hotmail.com 2022～2025

//! Radio component - a group of checkboxes of which at most one is checked.
//!
//! Items report user toggles by posting their index to a pending cell; the
//! group applies it with `select_item` once the item has finished handling
//! the event. `select_item` itself only uses the silent `set_checked`, so the
//! exclusivity pass never feeds back into the item notifications.

use crate::event::{Event, KeyCode};
use crate::impl_widget_base;
use crate::render::{ImageSource, TextStyle};
use crate::ui::{
    check_index, next_widget_id, BaseWidget, Checkbox, Direction, LabelStyle, LinearLayout,
    Signal, SlotId, UIEvent, UIResult, ViewSource, Widget, WidgetEvent,
};
use crate::util::Rect;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

/// Appearance shared by every item of a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioStyle {
    /// Unchecked background
    pub bg: ViewSource,
    /// Checked appearance
    pub checked: ViewSource,
    #[serde(default)]
    pub text_style: Option<TextStyle>,
}

/// Construction options; file keys follow the camelCase spelling
/// (`elementsMargin`, `selectedItem`) and `type` names the direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioOptions {
    pub items: Vec<String>,
    #[serde(default, rename = "type")]
    pub direction: Direction,
    #[serde(default)]
    pub elements_margin: f32,
    pub style: RadioStyle,
    #[serde(default)]
    pub selected_item: Option<usize>,
}

/// Payload of the group's change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioChange {
    pub index: usize,
    pub value: String,
}

#[derive(Debug)]
pub struct RadioGroup {
    base: BaseWidget,
    labels: Vec<String>,
    items: Vec<Checkbox>,
    view: LinearLayout,
    selected: Option<usize>,
    value: Option<String>,
    pending: Rc<Cell<Option<usize>>>,
    on_change: Signal<RadioChange>,
}

impl RadioGroup {
    pub fn new(options: RadioOptions, images: &dyn ImageSource) -> UIResult<Self> {
        let len = options.items.len();
        if let Some(sel) = options.selected_item {
            check_index(sel, len)?;
        }

        let pending = Rc::new(Cell::new(None));
        let text_style = options.style.text_style.unwrap_or_default();
        let mut items = Vec::with_capacity(len);
        for (i, item) in options.items.iter().enumerate() {
            let unchecked = options.style.bg.build(images)?;
            let checked = options.style.checked.build(images)?;
            let label = LabelStyle {
                text: item.clone(),
                style: text_style,
            };
            let mut cb = Checkbox::from_views(
                unchecked,
                checked,
                Some(&label),
                options.selected_item == Some(i),
            )?;
            let p = pending.clone();
            cb.on_change(move |_| p.set(Some(i)));
            items.push(cb);
        }

        let mut group = Self {
            base: BaseWidget::new(next_widget_id()),
            value: options.selected_item.map(|i| options.items[i].clone()),
            selected: options.selected_item,
            labels: options.items,
            items,
            view: LinearLayout::new(options.direction, options.elements_margin),
            pending,
            on_change: Signal::new(),
        };
        group.relayout();
        info!(
            "radio group {} created with {} items, selected={:?}",
            group.base.id, len, group.selected
        );
        Ok(group)
    }

    /// Makes `id` the only checked item and publishes the new selection.
    pub fn select_item(&mut self, id: usize) -> UIResult<()> {
        check_index(id, self.items.len())?;
        self.selected = Some(id);
        for item in self.items.iter_mut() {
            item.set_checked(false);
        }
        self.items[id].set_checked(true);
        self.value = Some(self.labels[id].clone());
        // checked and unchecked views may differ in size
        self.relayout();

        let change = RadioChange {
            index: id,
            value: self.labels[id].clone(),
        };
        info!("radio group {} selected {} ({})", self.base.id, change.index, change.value);
        self.on_change.emit(&change);
        Ok(())
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn items(&self) -> &[Checkbox] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Checkbox> {
        self.items.get(index)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Changes an item's displayed text; the selection value keeps the
    /// label the group was built with.
    pub fn set_item_text(&mut self, index: usize, text: &str) -> UIResult<()> {
        check_index(index, self.items.len())?;
        self.items[index].set_text(text);
        self.relayout();
        Ok(())
    }

    pub fn on_change<F>(&mut self, slot: F) -> SlotId
    where
        F: FnMut(&RadioChange) + 'static,
    {
        self.on_change.connect(slot)
    }

    pub fn disconnect(&mut self, id: SlotId) -> bool {
        self.on_change.disconnect(id)
    }

    /// Re-arranges the items from the group's origin; the group's size
    /// becomes the extent of its items.
    pub fn relayout(&mut self) {
        let used = self.view.arrange(&mut self.items, self.base.bounds);
        self.base.bounds.width = used.width;
        self.base.bounds.height = used.height;
        self.base.state.dirty = true;
    }

    fn apply_pending(&mut self) -> UIResult<()> {
        if let Some(id) = self.pending.take() {
            debug!("radio group {} applying toggle of item {}", self.base.id, id);
            self.select_item(id)?;
        }
        Ok(())
    }

    fn step(&mut self, forward: bool) -> UIResult<bool> {
        let next = match (self.selected, forward) {
            (None, true) if !self.items.is_empty() => 0,
            (Some(cur), true) if cur + 1 < self.items.len() => cur + 1,
            (Some(cur), false) if cur > 0 => cur - 1,
            _ => return Ok(false),
        };
        self.select_item(next)?;
        Ok(true)
    }
}

impl Widget for RadioGroup {
    impl_widget_base!(base, custom_bounds);

    fn set_bounds(&mut self, bounds: Rect) {
        self.base.bounds = bounds;
        self.relayout();
    }

    fn hit_test(&self, x: f32, y: f32) -> bool {
        self.items.iter().any(|item| item.hit_test(x, y))
    }

    fn handle_event(&mut self, event: &UIEvent) -> UIResult<bool> {
        if !self.accepts_input() {
            return Ok(false);
        }

        match event {
            UIEvent::Widget(WidgetEvent::FocusGained(id)) if *id == self.id() => {
                self.set_focused(true);
                return Ok(true);
            }
            UIEvent::Widget(WidgetEvent::FocusLost(id)) if *id == self.id() => {
                self.set_focused(false);
                return Ok(true);
            }
            UIEvent::Input(Event::Key(key)) if self.state().focused && key.is_press() => {
                match key.code {
                    KeyCode::Up | KeyCode::Left => return self.step(false),
                    KeyCode::Down | KeyCode::Right => return self.step(true),
                    _ => {}
                }
            }
            _ => {}
        }

        // later items sit on top, so they get the first chance
        let mut consumed = false;
        for item in self.items.iter_mut().rev() {
            if item.handle_event(event)? {
                consumed = true;
                break;
            }
        }
        self.apply_pending()?;
        Ok(consumed)
    }

    fn preferred_size(&self, available: Rect) -> Rect {
        Rect::new(available.x, available.y, self.base.bounds.width, self.base.bounds.height)
    }
}
