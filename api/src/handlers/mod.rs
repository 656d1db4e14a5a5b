//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod analyze;
pub mod index;
pub mod palettes;

pub use analyze::analyze;
pub use index::index;
pub use palettes::list_palettes;
