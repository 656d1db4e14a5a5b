//! Analyze handler
//!
//! Endpoint the browser form posts to.

use axum::{extract::State, Form, Json};
use serde::Deserialize;

use crate::cloud::{render_word_cloud, WordCloud};
use crate::domain::entities::{Category, Palette};
use crate::error::AppError;
use crate::AppState;

/// Form body for POST /analyze
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Category name, with or without the `Category:` prefix
    #[serde(default)]
    pub category: String,
    /// Palette name; unknown names fall back to `default`
    #[serde(default)]
    pub palette: Option<String>,
}

/// POST /analyze
///
/// Count the words of every page in a category and return the most frequent
/// ones as `{text, size}` pairs.
pub async fn analyze(
    State(state): State<AppState>,
    Form(request): Form<AnalyzeRequest>,
) -> Result<Json<WordCloud>, AppError> {
    let category = Category::parse(&request.category)?;
    let palette = Palette::get_or_default(request.palette.as_deref());

    let analysis = state.analysis_service.analyze(&category).await?;

    Ok(Json(render_word_cloud(&analysis, palette, state.config.top_n)))
}
