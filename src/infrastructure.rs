//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - The post repository and its HTTP implementation

pub mod cli;
pub mod config;
pub mod http;
pub mod repository;
pub mod tui;
