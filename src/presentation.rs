//! Presentation layer
//!
//! Stateless components and widgets that render `AppState`.

pub mod components;
pub mod widgets;
