pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{LocalStorage, SystemClipboard};
pub use crate::core::{engine::ConvertEngine, pipeline::ClipboardPipeline};
pub use crate::domain::model::{LineEnding, Outcome, SkipReason};
pub use crate::utils::error::{ConvertError, Result};
