// RustPixel UI Framework - Layout System
// copyright zipxing@hotmail.com 2022～2025

//! Linear layout: places widgets one after another along a direction,
//! separated by a fixed margin, each at its preferred size.

use crate::ui::Widget;
use crate::util::Rect;
use serde::{Deserialize, Serialize};

/// Layout direction for linear layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    #[default]
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearLayout {
    pub direction: Direction,
    pub spacing: f32,
}

impl LinearLayout {
    pub fn new(direction: Direction, spacing: f32) -> Self {
        Self { direction, spacing }
    }

    /// Positions `widgets` starting at the origin of `bounds` and returns the
    /// rectangle they occupy.
    pub fn arrange<W: Widget>(&self, widgets: &mut [W], bounds: Rect) -> Rect {
        let (x0, y0) = (bounds.x, bounds.y);
        let mut main = 0.0f32;
        let mut cross = 0.0f32;
        for (i, widget) in widgets.iter_mut().enumerate() {
            if i > 0 {
                main += self.spacing;
            }
            let size = widget.preferred_size(Rect::new(x0, y0, bounds.width, bounds.height));
            let rect = match self.direction {
                Direction::Horizontal => {
                    cross = cross.max(size.height);
                    Rect::new(x0 + main, y0, size.width, size.height)
                }
                Direction::Vertical => {
                    cross = cross.max(size.width);
                    Rect::new(x0, y0 + main, size.width, size.height)
                }
            };
            widget.set_bounds(rect);
            main += match self.direction {
                Direction::Horizontal => size.width,
                Direction::Vertical => size.height,
            };
        }

        match self.direction {
            Direction::Horizontal => Rect::new(x0, y0, main, cross),
            Direction::Vertical => Rect::new(x0, y0, cross, main),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_widget_base;
    use crate::ui::{next_widget_id, BaseWidget, UIEvent, UIResult};

    struct Block {
        base: BaseWidget,
        w: f32,
        h: f32,
    }

    impl Block {
        fn new(w: f32, h: f32) -> Self {
            Self { base: BaseWidget::new(next_widget_id()), w, h }
        }
    }

    impl Widget for Block {
        impl_widget_base!(base);

        fn handle_event(&mut self, _event: &UIEvent) -> UIResult<bool> {
            Ok(false)
        }

        fn preferred_size(&self, available: Rect) -> Rect {
            Rect::new(available.x, available.y, self.w, self.h)
        }
    }

    #[test]
    fn test_vertical_stacks_with_spacing() {
        let mut items = vec![Block::new(30.0, 10.0), Block::new(50.0, 20.0)];
        let used = LinearLayout::new(Direction::Vertical, 5.0)
            .arrange(&mut items, Rect::new(2.0, 3.0, 100.0, 100.0));
        assert_eq!(items[0].bounds(), Rect::new(2.0, 3.0, 30.0, 10.0));
        assert_eq!(items[1].bounds(), Rect::new(2.0, 18.0, 50.0, 20.0));
        assert_eq!(used, Rect::new(2.0, 3.0, 50.0, 35.0));
    }

    #[test]
    fn test_horizontal_rows_up_with_spacing() {
        let mut items = vec![Block::new(10.0, 10.0), Block::new(10.0, 30.0)];
        let used = LinearLayout::new(Direction::Horizontal, 4.0)
            .arrange(&mut items, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(items[0].bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(items[1].bounds(), Rect::new(14.0, 0.0, 10.0, 30.0));
        assert_eq!(used, Rect::new(0.0, 0.0, 24.0, 30.0));
    }

    #[test]
    fn test_empty_is_noop() {
        let mut items: Vec<Block> = vec![];
        let used = LinearLayout::new(Direction::Vertical, 8.0)
            .arrange(&mut items, Rect::new(1.0, 1.0, 5.0, 5.0));
        assert_eq!(used, Rect::new(1.0, 1.0, 0.0, 0.0));
    }
}
