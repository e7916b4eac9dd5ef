//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod placeholder;
pub mod storage;
pub mod tts;

pub use placeholder::*;
pub use storage::*;
pub use tts::*;
