//! MediaWiki adapter
//!
//! Implementation of the MediaWiki API client.

pub mod client;

pub use client::MediaWikiClient;
