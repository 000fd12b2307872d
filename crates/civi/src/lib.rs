//! Civi - terminal client for political stance profiling
//!
//! Library surface for the `civi` binary. The TUI reducers live here so
//! they stay testable without a terminal.

pub mod cli;
pub mod commands;
pub mod display;
pub mod logging;
pub mod tui;
