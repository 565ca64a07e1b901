//! 应用层 - 命令（写操作）

mod dub_commands;

pub mod handlers;

pub use dub_commands::*;
