//! Application logic: state, user commands, event handling and frame
//! scheduling.

pub mod action;
pub mod command;
pub mod event;
pub mod frame;
pub mod handler;
pub mod state;
