//! Menu panels built from the widget system.

pub mod options;

pub use options::create_options_panel;
