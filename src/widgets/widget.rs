/// Screen-space rectangle in pixels.
///
/// The origin is the top-left corner and y grows downwards, matching the
/// cursor position reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rect from its top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the two rects overlap. Rects that only share an edge do not.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Top and left edges are inside, bottom and right edges are not.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Rect of the given size centered inside this one.
    pub fn centered(&self, width: f32, height: f32) -> Self {
        Self {
            x: self.x + (self.width - width) / 2.0,
            y: self.y + (self.height - height) / 2.0,
            width,
            height,
        }
    }
}

/// Visual variant of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Normal,
    /// Used for "Back" buttons that pop the current panel.
    Back,
}

/// Presentation state a renderer reads back from a node.
///
/// Widgets update these flags from their interaction hooks; the dispatcher
/// itself never touches them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    /// Text drawn on the widget, if any
    pub label: Option<String>,
    pub style: ButtonStyle,
    /// The cursor rests on the widget
    pub hovered: bool,
    /// A press started on the widget and has not been released
    pub pressed: bool,
}

impl WidgetState {
    /// Default state carrying `label`.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }
}
