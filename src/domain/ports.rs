use crate::domain::model::{ClipboardText, LineEnding, OutputRecord, SkipReason};
use crate::utils::error::Result;
use std::ops::ControlFlow;
use std::path::PathBuf;

/// Read access to the system clipboard.
pub trait ClipboardSource {
    /// `Ok(None)` means the clipboard holds no text representation.
    fn read_text(&mut self) -> Result<Option<String>>;
}

/// 輸出目錄的檔案存取
pub trait Storage {
    fn ensure_root(&self) -> Result<()>;
    fn exists(&self, name: &str) -> bool;
    fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf>;
}

pub trait ConfigProvider {
    fn output_dir(&self) -> &str;
    fn line_ending(&self) -> LineEnding;
}

/// Each stage either hands a value to the next one or stops the run
/// (`Break`) with a benign reason; fatal failures travel through `Err`.
pub trait Pipeline {
    fn prepare(&mut self) -> Result<()>;
    fn extract(&mut self) -> Result<ControlFlow<SkipReason, ClipboardText>>;
    fn transform(&self, text: ClipboardText) -> Result<ControlFlow<SkipReason, OutputRecord>>;
    fn load(&mut self, record: OutputRecord) -> Result<PathBuf>;
}
