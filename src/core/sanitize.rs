use regex::Regex;
use std::sync::LazyLock;

// Windows, macOS 與 Linux 檔名中不允許的字元
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/*?:"<>|]"#).expect("static filename pattern"));

pub const CSV_EXTENSION: &str = "csv";

/// Strip characters that are invalid in common filesystems, then trim.
pub fn sanitize_filename(filename: &str) -> String {
    DISALLOWED.replace_all(filename, "").trim().to_string()
}

/// `None` when nothing usable is left after sanitizing.
pub fn csv_filename(first_line: &str) -> Option<String> {
    let base = sanitize_filename(first_line);
    if base.is_empty() {
        None
    } else {
        Some(format!("{}.{}", base, CSV_EXTENSION))
    }
}
