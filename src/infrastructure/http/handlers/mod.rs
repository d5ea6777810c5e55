//! HTTP Handlers

mod ping;
mod tools;

pub use ping::*;
pub use tools::*;
