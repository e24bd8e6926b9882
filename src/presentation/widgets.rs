//! Reusable UI widgets
//!
//! This module contains reusable widgets that can be used
//! across different components.

pub mod post_card;
pub mod status_bar;
