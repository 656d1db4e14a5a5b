//! Palette handlers

use axum::Json;

use crate::cloud::{render_palettes, PaletteList};

/// GET /palettes
///
/// List the colour palettes the word cloud can be drawn with.
pub async fn list_palettes() -> Json<PaletteList> {
    Json(render_palettes())
}
