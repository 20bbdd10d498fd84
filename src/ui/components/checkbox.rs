// RustPixel UI Framework - Checkbox Component
// copyright zipxing@hotmail.com 2022～2025

//! Checkbox component - a two-view switch (unchecked, checked) with an
//! optional label.
//!
//! The label is duplicated on both views so it stays in place whichever view
//! is active. The hit area always covers the active view and its label; it is
//! recomputed after construction, after every checked change and after every
//! text change.

use crate::event::{Event, KeyCode, MouseButton, MouseEventKind};
use crate::impl_widget_base;
use crate::render::{ImageSource, Node, Text, TextStyle};
use crate::ui::{
    next_widget_id, BaseWidget, SlotId, Switch, UIEvent, UIResult, ViewSource, Widget,
    WidgetEvent,
};
use crate::util::Rect;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub const UNCHECKED_VIEW: usize = 0;
pub const CHECKED_VIEW: usize = 1;

/// Horizontal gap between a view and its label.
pub const LABEL_GAP: f32 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub text: String,
    #[serde(default)]
    pub style: TextStyle,
}

impl LabelStyle {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            style: TextStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckboxStyle {
    pub unchecked: ViewSource,
    pub checked: ViewSource,
    #[serde(default)]
    pub text: Option<LabelStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckboxOptions {
    pub style: CheckboxStyle,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug)]
pub struct Checkbox {
    base: BaseWidget,
    switch: Switch,
    // child index of the label node inside each view
    labels: Option<[usize; 2]>,
    hit_area: Rect,
}

impl Checkbox {
    pub fn new(style: &CheckboxStyle, checked: bool, images: &dyn ImageSource) -> UIResult<Self> {
        let unchecked = style.unchecked.build(images)?;
        let checked_view = style.checked.build(images)?;
        Self::from_views(unchecked, checked_view, style.text.as_ref(), checked)
    }

    pub fn from_options(options: &CheckboxOptions, images: &dyn ImageSource) -> UIResult<Self> {
        Self::new(&options.style, options.checked, images)
    }

    /// Builds a checkbox from already resolved views.
    pub fn from_views(
        unchecked: Node,
        checked_view: Node,
        text: Option<&LabelStyle>,
        checked: bool,
    ) -> UIResult<Self> {
        let active = if checked { CHECKED_VIEW } else { UNCHECKED_VIEW };
        let switch = Switch::new(vec![unchecked, checked_view], active)?;
        let mut cb = Self {
            base: BaseWidget::new(next_widget_id()),
            switch,
            labels: None,
            hit_area: Rect::default(),
        };
        if let Some(label) = text {
            cb.attach_label(&label.text, label.style);
        }
        cb.update();
        debug!(
            "checkbox {} created, checked={} hit_area={:?}",
            cb.base.id, checked, cb.hit_area
        );
        Ok(cb)
    }

    fn attach_label(&mut self, text: &str, style: TextStyle) {
        let mut slots = [0usize; 2];
        for (i, slot) in slots.iter_mut().enumerate() {
            if let Some(view) = self.switch.view_mut(i) {
                let mut label = Node::text(Text::new(text, style));
                let x = view.width() + LABEL_GAP;
                let y = (view.height() - label.height()) / 2.0;
                label.set_position(x, y);
                *slot = view.add_child(label);
            }
        }
        self.labels = Some(slots);
    }

    pub fn is_checked(&self) -> bool {
        self.switch.active() == CHECKED_VIEW
    }

    /// Programmatic change: no notification is sent.
    pub fn set_checked(&mut self, checked: bool) {
        let target = if checked { CHECKED_VIEW } else { UNCHECKED_VIEW };
        if self.switch.active() != target {
            // both views exist by construction
            self.switch.show(target);
            self.mark_dirty();
        }
        self.update();
    }

    /// User-driven flip; notifies `on_change` subscribers.
    pub fn toggle(&mut self) -> bool {
        self.switch.toggle();
        self.update();
        self.mark_dirty();
        info!("checkbox {} toggled, checked={}", self.base.id, self.is_checked());
        self.is_checked()
    }

    pub fn text(&self) -> Option<&str> {
        let [idx, _] = self.labels?;
        self.switch
            .view(UNCHECKED_VIEW)
            .and_then(|v| v.child(idx))
            .and_then(Node::as_text)
            .map(Text::content)
    }

    pub fn set_text(&mut self, text: &str) {
        match self.labels {
            Some(slots) => {
                for (i, idx) in slots.into_iter().enumerate() {
                    if let Some(t) = self
                        .switch
                        .view_mut(i)
                        .and_then(|v| v.child_mut(idx))
                        .and_then(Node::as_text_mut)
                    {
                        t.set_content(text);
                    }
                }
            }
            None => self.attach_label(text, TextStyle::default()),
        }
        self.mark_dirty();
        self.update();
    }

    /// Recomputes the hit area from the active view, label included.
    pub fn update(&mut self) {
        let b = self.switch.active_view().local_bounds();
        self.hit_area = Rect::new(0.0, 0.0, b.width, b.height);
        let area = self.hit_area;
        self.switch.active_view_mut().set_hit_area(area);
    }

    pub fn hit_area(&self) -> Rect {
        self.hit_area
    }

    pub fn switch(&self) -> &Switch {
        &self.switch
    }

    pub fn active_view(&self) -> &Node {
        self.switch.active_view()
    }

    /// Subscribes to user-driven toggles; the slot receives the new state.
    pub fn on_change<F>(&mut self, mut slot: F) -> SlotId
    where
        F: FnMut(bool) + 'static,
    {
        self.switch.on_change(move |idx| slot(*idx == CHECKED_VIEW))
    }

    pub fn disconnect(&mut self, id: SlotId) -> bool {
        self.switch.disconnect(id)
    }
}

impl Widget for Checkbox {
    impl_widget_base!(base);

    fn hit_test(&self, x: f32, y: f32) -> bool {
        let b = self.bounds();
        self.hit_area.offset(b.x, b.y).contains(x, y)
    }

    fn handle_event(&mut self, event: &UIEvent) -> UIResult<bool> {
        if !self.accepts_input() {
            return Ok(false);
        }

        match event {
            UIEvent::Input(Event::Mouse(mouse)) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && self.hit_test(mouse.column as f32, mouse.row as f32)
                {
                    self.toggle();
                    return Ok(true);
                }
            }
            UIEvent::Input(Event::Key(key)) => {
                if self.state().focused && key.is_press() && key.code == KeyCode::Char(' ') {
                    self.toggle();
                    return Ok(true);
                }
            }
            UIEvent::Widget(WidgetEvent::Click(id)) if *id == self.id() => {
                self.toggle();
                return Ok(true);
            }
            UIEvent::Widget(WidgetEvent::FocusGained(id)) if *id == self.id() => {
                self.set_focused(true);
                return Ok(true);
            }
            UIEvent::Widget(WidgetEvent::FocusLost(id)) if *id == self.id() => {
                self.set_focused(false);
                return Ok(true);
            }
            _ => {}
        }

        Ok(false)
    }

    fn preferred_size(&self, available: Rect) -> Rect {
        Rect::new(available.x, available.y, self.hit_area.width, self.hit_area.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyEvent, KeyEventKind, MouseEvent};
    use crate::render::ImageRegistry;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn images() -> ImageRegistry {
        ImageRegistry::new()
            .with_image("switch_off.png", 40.0, 20.0)
            .with_image("switch_on.png", 50.0, 30.0)
    }

    fn label(text: &str) -> LabelStyle {
        LabelStyle {
            text: text.to_string(),
            style: TextStyle {
                font_size: 10.0,
                ..Default::default()
            },
        }
    }

    fn style(text: Option<&str>) -> CheckboxStyle {
        CheckboxStyle {
            unchecked: "switch_off.png".into(),
            checked: "switch_on.png".into(),
            text: text.map(label),
        }
    }

    #[test]
    fn test_checked_round_trip() {
        let mut cb = Checkbox::new(&style(None), false, &images()).unwrap();
        for v in [true, true, false, true, false, false] {
            cb.set_checked(v);
            assert_eq!(cb.is_checked(), v);
            assert_eq!(cb.hit_area().width, cb.active_view().width());
            assert_eq!(cb.hit_area().height, cb.active_view().height());
        }
    }

    #[test]
    fn test_checked_with_label_at_construction() {
        let cb = Checkbox::new(&style(Some("Enable")), true, &images()).unwrap();
        assert!(cb.is_checked());
        assert_eq!(cb.text(), Some("Enable"));

        // "Enable" is 6 columns * 10 * 0.5 = 30 wide, 10 high
        let lbl = cb.active_view().child(0).unwrap();
        assert_eq!(lbl.position.x, 50.0 + LABEL_GAP);
        assert_eq!(lbl.position.y, 10.0);
        assert_eq!(cb.hit_area(), Rect::new(0.0, 0.0, 90.0, 30.0));
    }

    #[test]
    fn test_label_on_both_views() {
        let cb = Checkbox::new(&style(Some("Go")), false, &images()).unwrap();
        for v in cb.switch().views() {
            let t = v.child(0).and_then(Node::as_text).unwrap();
            assert_eq!(t.content(), "Go");
        }
        assert_eq!(cb.switch().view(UNCHECKED_VIEW).unwrap().child(0).unwrap().position.x, 50.0);
    }

    #[test]
    fn test_set_text_replaces_hit_area() {
        let mut cb = Checkbox::new(&style(Some("Enable")), true, &images()).unwrap();
        let old = cb.hit_area();
        cb.set_text("Longer label text");
        assert_eq!(cb.text(), Some("Longer label text"));
        // 17 columns * 5 = 85
        assert_eq!(cb.hit_area(), Rect::new(0.0, 0.0, 60.0 + 85.0, 30.0));
        assert!(cb.hit_area().width > old.width);

        cb.set_text("Hi");
        assert_eq!(cb.hit_area().width, 60.0 + 10.0);
        cb.set_checked(false);
        assert_eq!(cb.hit_area().width, 50.0 + 10.0);
    }

    #[test]
    fn test_set_text_without_label_attaches_one() {
        let mut cb = Checkbox::new(&style(None), false, &images()).unwrap();
        assert_eq!(cb.text(), None);
        assert_eq!(cb.hit_area(), Rect::new(0.0, 0.0, 40.0, 20.0));
        cb.set_text("Late");
        assert_eq!(cb.text(), Some("Late"));
        assert!(cb.hit_area().width > 40.0);
    }

    #[test]
    fn test_set_checked_is_silent_toggle_notifies() {
        let mut cb = Checkbox::new(&style(None), false, &images()).unwrap();
        let seen = Rc::new(RefCell::new(vec![]));
        let s = seen.clone();
        cb.on_change(move |checked| s.borrow_mut().push(checked));

        cb.set_checked(true);
        cb.set_checked(true);
        assert!(seen.borrow().is_empty());

        assert!(!cb.toggle());
        assert!(cb.toggle());
        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn test_mouse_click_inside_hit_area() {
        let mut cb = Checkbox::new(&style(None), false, &images()).unwrap();
        cb.set_bounds(Rect::new(100.0, 100.0, 40.0, 20.0));

        let miss = UIEvent::Input(MouseEvent::left_down(10, 10).into());
        assert!(!cb.handle_event(&miss).unwrap());
        assert!(!cb.is_checked());

        let hit = UIEvent::Input(MouseEvent::left_down(139, 119).into());
        assert!(cb.handle_event(&hit).unwrap());
        assert!(cb.is_checked());
    }

    #[test]
    fn test_space_needs_focus() {
        let mut cb = Checkbox::new(&style(None), false, &images()).unwrap();
        let space = UIEvent::Input(KeyEvent::from(KeyCode::Char(' ')).into());
        assert!(!cb.handle_event(&space).unwrap());

        let id = cb.id();
        assert!(cb.handle_event(&WidgetEvent::FocusGained(id).into()).unwrap());
        assert!(cb.handle_event(&space).unwrap());
        assert!(cb.is_checked());
    }

    #[test]
    fn test_space_auto_repeat_does_not_toggle() {
        let mut cb = Checkbox::new(&style(None), false, &images()).unwrap();
        let id = cb.id();
        cb.handle_event(&WidgetEvent::FocusGained(id).into()).unwrap();

        let press = KeyEvent::from(KeyCode::Char(' '));
        assert!(cb.handle_event(&UIEvent::Input(press.into())).unwrap());
        for kind in [KeyEventKind::Repeat, KeyEventKind::Repeat, KeyEventKind::Release] {
            let held = KeyEvent { kind, ..press };
            assert!(!cb.handle_event(&UIEvent::Input(held.into())).unwrap());
        }
        assert!(cb.is_checked());
    }

    #[test]
    fn test_disabled_ignores_clicks() {
        let mut cb = Checkbox::new(&style(None), false, &images()).unwrap();
        cb.set_enabled(false);
        let id = cb.id();
        assert!(!cb.handle_event(&WidgetEvent::Click(id).into()).unwrap());
        assert!(!cb.is_checked());
    }

    #[test]
    fn test_unknown_image_fails() {
        let st = CheckboxStyle {
            unchecked: "nope.png".into(),
            checked: "switch_on.png".into(),
            text: None,
        };
        assert!(Checkbox::new(&st, false, &images()).is_err());
    }

    #[test]
    fn test_options_from_toml() {
        let opts: CheckboxOptions = toml::from_str(
            r#"
            checked = true
            [style]
            unchecked = "switch_off.png"
            checked = "switch_on.png"
            text = { text = "Sound" }
            "#,
        )
        .unwrap();
        let cb = Checkbox::from_options(&opts, &images()).unwrap();
        assert!(cb.is_checked());
        assert_eq!(cb.text(), Some("Sound"));
    }
}
