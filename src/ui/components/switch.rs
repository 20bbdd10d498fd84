// RustPixel UI Framework - Switch Component
// copyright zipxing@hotmail.com 2022～2025

//! Multi-view switch: an ordered list of views with exactly one active.

use crate::render::Node;
use crate::ui::{check_index, Signal, SlotId, UIError, UIResult};
use log::debug;

#[derive(Debug)]
pub struct Switch {
    views: Vec<Node>,
    active: usize,
    on_change: Signal<usize>,
}

impl Switch {
    pub fn new(views: Vec<Node>, active: usize) -> UIResult<Self> {
        if views.is_empty() {
            return Err(UIError::InvalidStyle("switch needs at least one view".into()));
        }
        check_index(active, views.len())?;
        Ok(Self {
            views,
            active,
            on_change: Signal::new(),
        })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn view(&self, index: usize) -> Option<&Node> {
        self.views.get(index)
    }

    pub fn view_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.views.get_mut(index)
    }

    pub fn views(&self) -> &[Node] {
        &self.views
    }

    pub fn active_view(&self) -> &Node {
        &self.views[self.active]
    }

    pub fn active_view_mut(&mut self) -> &mut Node {
        &mut self.views[self.active]
    }

    /// Programmatic switch, does not notify subscribers.
    pub fn switch_to(&mut self, index: usize) -> UIResult<()> {
        check_index(index, self.views.len())?;
        self.show(index);
        Ok(())
    }

    /// Silent switch to an index the owner knows exists.
    pub(crate) fn show(&mut self, index: usize) {
        debug_assert!(index < self.views.len());
        self.active = index.min(self.views.len() - 1);
    }

    /// User-driven switch to the next view; notifies with the new index.
    pub fn toggle(&mut self) -> usize {
        self.active = (self.active + 1) % self.views.len();
        debug!("switch toggled to view {}", self.active);
        self.on_change.emit(&self.active);
        self.active
    }

    pub fn on_change<F>(&mut self, slot: F) -> SlotId
    where
        F: FnMut(&usize) + 'static,
    {
        self.on_change.connect(slot)
    }

    pub fn disconnect(&mut self, id: SlotId) -> bool {
        self.on_change.disconnect(id)
    }
}
