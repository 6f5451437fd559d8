//! neochron: a terminal stopwatch with lap splits.
//!
//! The [`stopwatch`] module holds the terminal-independent core; everything
//! else wires it to a ratatui/crossterm terminal.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod stopwatch;
pub mod ui;
