//! Domain types
//!
//! - Post entities and page envelopes
//! - The ordered, id-deduplicated post collection
//! - Text helpers used by the card renderer

pub mod collections;
pub mod post;
pub mod text;
