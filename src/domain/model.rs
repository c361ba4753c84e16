use std::fmt;
use std::path::PathBuf;

/// 剪貼簿當下的原始文字
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardText(String);

impl ClipboardText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty or whitespace-only content carries nothing to convert.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// 一次轉換的輸出：檔名 + 解析後的資料列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub filename: String,
    pub rows: Vec<Vec<String>>,
}

/// Benign conditions that end a run without writing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    EmptyClipboard,
    NotEnoughLines { found: usize },
    InvalidFilename { first_line: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyClipboard => {
                write!(f, "Clipboard is empty. Please copy some text first.")
            }
            SkipReason::NotEnoughLines { .. } => write!(
                f,
                "Error: Not enough content on the clipboard.\n\
                 You need at least two lines: one for the filename and one for the data."
            ),
            SkipReason::InvalidFilename { .. } => {
                write!(f, "Error: The first line is not a valid base for a filename.")
            }
        }
    }
}

/// Row terminator written after every CSV record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LineEnding {
    /// CRLF on Windows, LF elsewhere
    #[default]
    Native,
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Native if cfg!(windows) => b"\r\n",
            LineEnding::Native | LineEnding::Lf => b"\n",
            LineEnding::Crlf => b"\r\n",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    Skipped(SkipReason),
}

impl Outcome {
    pub fn written_path(&self) -> Option<&PathBuf> {
        match self {
            Outcome::Written(path) => Some(path),
            Outcome::Skipped(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_clipboard_text() {
        assert!(ClipboardText::new("").is_blank());
        assert!(ClipboardText::new(" \r\n\t ").is_blank());
        assert!(!ClipboardText::new("report").is_blank());
    }

    #[test]
    fn test_skip_reason_messages() {
        assert_eq!(
            SkipReason::EmptyClipboard.to_string(),
            "Clipboard is empty. Please copy some text first."
        );
        let not_enough = SkipReason::NotEnoughLines { found: 1 }.to_string();
        assert!(not_enough.contains("at least two lines"));
    }

    #[test]
    fn test_line_ending_bytes() {
        assert_eq!(LineEnding::Lf.as_bytes(), b"\n");
        assert_eq!(LineEnding::Crlf.as_bytes(), b"\r\n");
        if cfg!(windows) {
            assert_eq!(LineEnding::Native.as_bytes(), b"\r\n");
        } else {
            assert_eq!(LineEnding::Native.as_bytes(), b"\n");
        }
    }
}
