use crate::tree::WidgetId;
use crate::ui::Ui;

use super::widget::Rect;

/// Stacks fixed-height children top to bottom inside a container node.
pub struct Column {
    widget_id: WidgetId,
    bounds: Rect,
    spacing: f32,
    next_y: f32,
}

impl Column {
    pub fn new(ui: &mut Ui, parent: WidgetId, bounds: Rect) -> Self {
        Self {
            widget_id: ui.add_widget(parent, bounds),
            bounds,
            spacing: 0.0,
            next_y: bounds.y,
        }
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn id(&self) -> WidgetId {
        self.widget_id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Claim the next slot of `height`, spanning the column's width.
    pub fn next_rect(&mut self, height: f32) -> Rect {
        let rect = Rect::new(self.bounds.x, self.next_y, self.bounds.width, height);
        self.next_y += height + self.spacing;
        rect
    }

    /// Height needed for `count` children of `height`.
    pub fn content_height(count: usize, height: f32, spacing: f32) -> f32 {
        if count == 0 {
            return 0.0;
        }
        height * count as f32 + spacing * (count - 1) as f32
    }
}

pub fn column(ui: &mut Ui, parent: WidgetId, bounds: Rect) -> Column {
    Column::new(ui, parent, bounds)
}
