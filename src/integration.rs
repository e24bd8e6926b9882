//! Integration layer
//!
//! Wires the pure core to the outside world:
//! - `Runtime` owns state and the message/command queues
//! - `AppRunner` drives the terminal loop (or the headless walk)

pub mod app_runner;
pub mod runtime;
