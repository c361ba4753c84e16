use crate::adapters::storage::DEFAULT_OUTPUT_DIR;
use crate::core::ConfigProvider;
use crate::domain::model::LineEnding;
use crate::utils::validation::{validate_path, Validate};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "clip-csv")]
#[command(about = "Save clipboard text as a CSV file: the first line names the file, the rest are rows")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    #[arg(long, value_enum, default_value_t = LineEnding::Native)]
    pub line_ending: LineEnding,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            line_ending: LineEnding::Native,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn line_ending(&self) -> LineEnding {
        self.line_ending
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_dir", &self.output_dir)
    }
}
