use clap::Parser;
use clip_csv::core::ConfigProvider;
use clip_csv::utils::report::{run_guarded, Report};
use clip_csv::utils::{logger, validation::Validate};
use clip_csv::{CliConfig, ClipboardPipeline, ConvertEngine, LocalStorage, SystemClipboard};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    let report = match config.validate() {
        Ok(()) => {
            let storage = LocalStorage::from_config(&config);
            let pipeline = ClipboardPipeline::new(SystemClipboard::new(), storage)
                .with_line_ending(config.line_ending());
            let mut engine = ConvertEngine::new(pipeline);

            Report::from_result(&run_guarded(|| engine.run()))
        }
        Err(e) => Report::from_error(&e),
    };

    report.emit();
    ExitCode::from(report.exit_code)
}
