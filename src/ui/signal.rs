// RustPixel UI Framework - Signal
// copyright zipxing@hotmail.com 2022～2025

//! Synchronous change notification with any number of subscribers.
//!
//! `emit` needs `&mut self`, so a slot can never reach back into the signal
//! it is being called from.

use std::fmt;

pub type SlotId = u32;

pub struct Signal<T> {
    slots: Vec<(SlotId, Box<dyn FnMut(&T)>)>,
    next_id: SlotId,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self {
            slots: vec![],
            next_id: 1,
        }
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal").field("slots", &self.slots.len()).finish()
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect<F>(&mut self, slot: F) -> SlotId
    where
        F: FnMut(&T) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.slots.push((id, Box::new(slot)));
        id
    }

    /// Removes a slot, returns false when the id was not connected.
    pub fn disconnect(&mut self, id: SlotId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|(sid, _)| *sid != id);
        self.slots.len() != before
    }

    /// Calls every slot in connection order.
    pub fn emit(&mut self, value: &T) {
        for (_, slot) in self.slots.iter_mut() {
            slot(value);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_in_connection_order() {
        let log = Rc::new(RefCell::new(vec![]));
        let mut sig: Signal<i32> = Signal::new();
        let l1 = log.clone();
        sig.connect(move |v| l1.borrow_mut().push(("a", *v)));
        let l2 = log.clone();
        sig.connect(move |v| l2.borrow_mut().push(("b", *v)));
        sig.emit(&7);
        assert_eq!(*log.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_disconnect() {
        let count = Rc::new(RefCell::new(0));
        let mut sig: Signal<()> = Signal::new();
        let c = count.clone();
        let id = sig.connect(move |_| *c.borrow_mut() += 1);
        sig.emit(&());
        assert!(sig.disconnect(id));
        assert!(!sig.disconnect(id));
        sig.emit(&());
        assert_eq!(*count.borrow(), 1);
        assert!(sig.is_empty());
    }
}
