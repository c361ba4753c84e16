use crate::domain::model::Outcome;
use crate::utils::error::{ConvertError, Result};
use std::panic::{self, AssertUnwindSafe};

/// Run the conversion, turning a panic into `ConvertError::Unclassified`.
pub fn run_guarded<F>(run: F) -> Result<Outcome>
where
    F: FnOnce() -> Result<Outcome>,
{
    panic::catch_unwind(AssertUnwindSafe(run))
        .unwrap_or_else(|payload| Err(ConvertError::from_panic(payload)))
}

/// 最終要輸出給使用者的訊息與結束碼
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub message: String,
    pub to_stderr: bool,
    pub exit_code: u8,
}

impl Report {
    pub fn from_result(result: &Result<Outcome>) -> Self {
        match result {
            Ok(Outcome::Written(path)) => Self {
                message: format!("Successfully created CSV file: '{}'", path.display()),
                to_stderr: false,
                exit_code: 0,
            },
            Ok(Outcome::Skipped(reason)) => Self {
                message: reason.to_string(),
                to_stderr: false,
                exit_code: 0,
            },
            Err(e) => Self::from_error(e),
        }
    }

    pub fn from_error(e: &ConvertError) -> Self {
        tracing::error!(
            "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        Self {
            message: format!("{}\n{}", e.user_friendly_message(), e.recovery_suggestion()),
            to_stderr: true,
            exit_code: e.severity().exit_code(),
        }
    }

    pub fn emit(&self) {
        if self.to_stderr {
            eprintln!("{}", self.message);
        } else {
            println!("{}", self.message);
        }
    }
}
