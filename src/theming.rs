//! Color themes for rendered output.
//!
//! Themes drive the renderers that produce colored output directly (such as
//! the terminal format); the HTML format instead emits semantic CSS classes
//! and leaves coloring to a stylesheet.

mod color;
mod theme;

pub use color::Color;
pub use theme::{Theme, ThemeError};
