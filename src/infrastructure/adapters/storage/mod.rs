//! Storage Adapter - 文件系统产物存储

mod file_store;

pub use file_store::FileAudioStore;
