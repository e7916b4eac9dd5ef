//! HTTP Handlers

mod recommendation;
mod root;
mod summarization;
mod tts;

pub use recommendation::*;
pub use root::*;
pub use summarization::*;
pub use tts::*;
