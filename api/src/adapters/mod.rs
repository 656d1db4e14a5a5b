//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod mediawiki;

pub use mediawiki::MediaWikiClient;
