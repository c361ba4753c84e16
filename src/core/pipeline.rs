use crate::core::{csv_rows, sanitize, text};
use crate::core::{ClipboardSource, ClipboardText, OutputRecord, Pipeline, SkipReason, Storage};
use crate::domain::model::LineEnding;
use crate::utils::error::Result;
use std::ops::ControlFlow;
use std::path::PathBuf;

pub struct ClipboardPipeline<C: ClipboardSource, S: Storage> {
    clipboard: C,
    storage: S,
    line_ending: LineEnding,
}

impl<C: ClipboardSource, S: Storage> ClipboardPipeline<C, S> {
    pub fn new(clipboard: C, storage: S) -> Self {
        Self {
            clipboard,
            storage,
            line_ending: LineEnding::default(),
        }
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<C: ClipboardSource, S: Storage> Pipeline for ClipboardPipeline<C, S> {
    fn prepare(&mut self) -> Result<()> {
        self.storage.ensure_root()
    }

    fn extract(&mut self) -> Result<ControlFlow<SkipReason, ClipboardText>> {
        let content = match self.clipboard.read_text()? {
            Some(content) => ClipboardText::new(content),
            None => {
                tracing::debug!("Clipboard holds no text content");
                return Ok(ControlFlow::Break(SkipReason::EmptyClipboard));
            }
        };

        if content.is_blank() {
            return Ok(ControlFlow::Break(SkipReason::EmptyClipboard));
        }

        tracing::debug!("Read {} bytes from clipboard", content.as_str().len());
        Ok(ControlFlow::Continue(content))
    }

    fn transform(&self, content: ClipboardText) -> Result<ControlFlow<SkipReason, OutputRecord>> {
        let lines = text::split_lines(content.as_str());
        if lines.len() < 2 {
            return Ok(ControlFlow::Break(SkipReason::NotEnoughLines {
                found: lines.len(),
            }));
        }

        let first_line = lines[0];
        let Some(filename) = sanitize::csv_filename(first_line) else {
            return Ok(ControlFlow::Break(SkipReason::InvalidFilename {
                first_line: first_line.to_string(),
            }));
        };

        // 資料列使用原始 (未清理) 的第 2..N 行
        let rows = csv_rows::parse_lines(lines[1..].iter().copied())?;
        tracing::debug!("Parsed {} rows for {}", rows.len(), filename);

        Ok(ControlFlow::Continue(OutputRecord { filename, rows }))
    }

    fn load(&mut self, record: OutputRecord) -> Result<PathBuf> {
        let data = csv_rows::write_rows(&record.rows, self.line_ending)?;

        if self.storage.exists(&record.filename) {
            tracing::warn!("⚠️ Overwriting existing file: {}", record.filename);
        }

        tracing::debug!("Writing {} bytes to {}", data.len(), record.filename);
        self.storage.write_file(&record.filename, &data)
    }
}
