// Adapters layer: concrete implementations for external systems (clipboard, local disk).

pub mod clipboard;
pub mod storage;

pub use clipboard::SystemClipboard;
pub use storage::{LocalStorage, DEFAULT_OUTPUT_DIR};
