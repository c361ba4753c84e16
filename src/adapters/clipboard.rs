use crate::core::ClipboardSource;
use crate::utils::error::{ConvertError, Result};
use anyhow::{anyhow, Context};
use arboard::Clipboard;
use std::process::Command;

/// 外部剪貼簿工具 (原生剪貼簿無法開啟時使用)
#[derive(Debug, Clone, Copy)]
struct HelperCommand {
    program: &'static str,
    args: &'static [&'static str],
}

#[cfg(target_os = "linux")]
const HELPERS: &[HelperCommand] = &[
    HelperCommand {
        program: "xclip",
        args: &["-selection", "clipboard", "-o"],
    },
    HelperCommand {
        program: "xsel",
        args: &["--clipboard", "--output"],
    },
];

#[cfg(target_os = "macos")]
const HELPERS: &[HelperCommand] = &[HelperCommand {
    program: "pbpaste",
    args: &[],
}];

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
const HELPERS: &[HelperCommand] = &[];

/// The OS clipboard: `arboard` first, then platform helper commands.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<Option<String>> {
        let mut clipboard = match Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(native) => {
                tracing::debug!("Native clipboard unavailable ({}), trying helpers", native);
                return read_with_helpers(HELPERS).map(Some).map_err(|helper| {
                    ConvertError::ClipboardUnavailable {
                        reason: format!("{}; {:#}", native, helper),
                    }
                });
            }
        };

        match clipboard.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(ConvertError::ClipboardUnavailable {
                reason: e.to_string(),
            }),
        }
    }
}

/// Only helpers that cannot be started fall through to the next one; the
/// first failure is the one reported.
fn read_with_helpers(helpers: &[HelperCommand]) -> anyhow::Result<String> {
    let mut first_error = None;
    for helper in helpers {
        match run_helper(helper) {
            Ok(text) => {
                tracing::debug!("Clipboard read through '{}'", helper.program);
                return Ok(text);
            }
            Err(e) => {
                tracing::debug!("{:#}", e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }
    Err(first_error.unwrap_or_else(|| anyhow!("no clipboard helper is known for this platform")))
}

fn run_helper(helper: &HelperCommand) -> anyhow::Result<String> {
    let output = Command::new(helper.program)
        .args(helper.args)
        .output()
        .with_context(|| format!("failed to run '{}'", helper.program))?;

    // xclip 在剪貼簿沒有文字時會回傳 1 且沒有輸出，視為空剪貼簿
    if !output.status.success() {
        tracing::debug!(
            "'{}' exited with {}: {}",
            helper.program,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        if output.stdout.is_empty() {
            return Ok(String::new());
        }
    }

    String::from_utf8(output.stdout)
        .with_context(|| format!("'{}' returned non UTF-8 text", helper.program))
}
