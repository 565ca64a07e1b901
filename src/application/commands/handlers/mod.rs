//! Command Handlers

mod dub_command_handlers;

pub use dub_command_handlers::*;
