//! HTTP Handlers

mod dub;
mod ping;

pub use dub::*;
pub use ping::*;
