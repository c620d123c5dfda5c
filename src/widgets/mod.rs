pub mod button;
pub mod column;
pub mod widget;

pub use button::{button, set_button_style};
pub use column::{column, Column};
pub use widget::{ButtonStyle, Rect, WidgetState};
