use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Clipboard unavailable: {reason}")]
    ClipboardUnavailable { reason: String },

    #[error("Failed to create output directory '{}': {source}", .path.display())]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Unexpected error: {message}")]
    Unclassified { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Environment,
    Io,
    Data,
    Configuration,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::ClipboardUnavailable { .. } => ErrorCategory::Environment,
            ConvertError::DirectoryError { .. }
            | ConvertError::WriteError { .. }
            | ConvertError::IoError(_) => ErrorCategory::Io,
            ConvertError::CsvError(_) => ErrorCategory::Data,
            ConvertError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            ConvertError::Unclassified { .. } => ErrorCategory::Unknown,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Environment | ErrorCategory::Unknown | ErrorCategory::Data => {
                ErrorSeverity::High
            }
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
        }
    }

    /// 給使用者的處理建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::ClipboardUnavailable { .. } => clipboard_hint().to_string(),
            ConvertError::DirectoryError { path, .. } => format!(
                "Check that '{}' can be created in the current directory",
                path.display()
            ),
            ConvertError::WriteError { .. } | ConvertError::IoError(_) => {
                "Check free disk space and write permissions of the output directory".to_string()
            }
            ConvertError::CsvError(_) => "Check the copied data for unusual characters".to_string(),
            ConvertError::ConfigValidationError { field, .. } => {
                format!("Fix the value passed for '{}' and try again", field)
            }
            ConvertError::Unclassified { .. } => "Run again with --verbose for details".to_string(),
        }
    }

    /// Turn a caught panic payload into an error the top level can report.
    pub fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        ConvertError::Unclassified { message }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::ClipboardUnavailable { reason } => {
                format!("Error: could not access the clipboard ({}).", reason)
            }
            ConvertError::Unclassified { message } => {
                format!("An unexpected error occurred: {}", message)
            }
            other => format!("Error: {}", other),
        }
    }
}

fn clipboard_hint() -> &'static str {
    if cfg!(target_os = "linux") {
        "On Linux, you may need to install 'xclip' or 'xsel' (try: sudo apt-get install xclip), or run inside an X11/Wayland session"
    } else if cfg!(target_os = "macos") {
        "Check that 'pbpaste' works from a terminal"
    } else if cfg!(windows) {
        "Another application may be holding the clipboard; close it and try again"
    } else {
        "No supported clipboard service was found on this platform"
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_severity() {
        let clipboard = ConvertError::ClipboardUnavailable {
            reason: "no display".to_string(),
        };
        assert_eq!(clipboard.category(), ErrorCategory::Environment);
        assert_eq!(clipboard.severity().exit_code(), 1);

        let write = ConvertError::WriteError {
            path: PathBuf::from("CSV Files/report.csv"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(write.severity(), ErrorSeverity::Critical);
        assert_eq!(write.severity().exit_code(), 3);

        let config = ConvertError::ConfigValidationError {
            field: "output_dir".to_string(),
            message: "empty".to_string(),
        };
        assert_eq!(config.severity().exit_code(), 2);
    }

    #[test]
    fn test_user_friendly_message_keeps_cause() {
        let err = ConvertError::DirectoryError {
            path: PathBuf::from("CSV Files"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.user_friendly_message();
        assert!(message.contains("CSV Files"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_panic_payloads_become_unclassified() {
        let cases: Vec<(Box<dyn std::any::Any + Send>, &str)> = vec![
            (Box::new("static message"), "static message"),
            (Box::new(String::from("owned message")), "owned message"),
            (Box::new(42_u32), "unknown panic"),
        ];

        for (payload, expected) in cases {
            match ConvertError::from_panic(payload) {
                ConvertError::Unclassified { message } => assert_eq!(message, expected),
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_io_error_converts_and_is_critical() {
        let err: ConvertError = std::io::Error::new(std::io::ErrorKind::WriteZero, "short write").into();
        assert!(matches!(err, ConvertError::IoError(_)));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity().exit_code(), 3);
    }

    #[test]
    fn test_clipboard_error_has_hint() {
        let err = ConvertError::ClipboardUnavailable {
            reason: "x".to_string(),
        };
        assert!(!err.recovery_suggestion().is_empty());
    }
}
