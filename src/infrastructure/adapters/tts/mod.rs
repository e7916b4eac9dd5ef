//! TTS Adapter - TTS 引擎实现

mod fake_engine;
mod vieneu_client;

pub use fake_engine::{FakeEngineConfig, FakeTtsEngine};
pub use vieneu_client::{VieneuClient, VieneuClientConfig};
