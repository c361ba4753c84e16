pub mod csv_rows;
pub mod engine;
pub mod pipeline;
pub mod sanitize;
pub mod text;

pub use crate::domain::model::{ClipboardText, OutputRecord, Outcome, SkipReason};
pub use crate::domain::ports::{ClipboardSource, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
