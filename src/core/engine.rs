use crate::core::{Outcome, Pipeline};
use crate::utils::error::Result;
use std::ops::ControlFlow;

/// Runs prepare → extract → transform → load, stopping early on the first
/// benign skip.
pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&mut self) -> Result<Outcome> {
        tracing::debug!("Preparing output directory...");
        self.pipeline.prepare()?;

        tracing::debug!("Reading clipboard...");
        let content = match self.pipeline.extract()? {
            ControlFlow::Continue(content) => content,
            ControlFlow::Break(reason) => return Ok(skipped(reason)),
        };

        tracing::debug!("Parsing clipboard content...");
        let record = match self.pipeline.transform(content)? {
            ControlFlow::Continue(record) => record,
            ControlFlow::Break(reason) => return Ok(skipped(reason)),
        };

        let path = self.pipeline.load(record)?;
        tracing::info!("✅ CSV file written: {}", path.display());
        Ok(Outcome::Written(path))
    }
}

fn skipped(reason: crate::core::SkipReason) -> Outcome {
    tracing::info!("Nothing written: {:?}", reason);
    Outcome::Skipped(reason)
}
