//! Word cloud module
//!
//! Turns word counts into the JSON payload the browser renders.

pub mod renderer;

pub use renderer::{render_palettes, render_word_cloud, PaletteList, WordCloud};
