use crate::domain::model::LineEnding;
use crate::utils::error::Result;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};

/// Parse one clipboard line as a single CSV record.
///
/// Lenient: an unterminated quoted field runs to the end of the line, and a
/// blank line yields an empty row.
pub fn parse_line(line: &str) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Ok(Vec::new());
    }
    Ok(record.iter().map(str::to_string).collect())
}

pub fn parse_lines<'a, I>(lines: I) -> Result<Vec<Vec<String>>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().map(parse_line).collect()
}

/// Serialize rows with minimal quoting, one record per line.
///
/// Rows may have different lengths. Empty rows become a bare line terminator.
pub fn write_rows(rows: &[Vec<String>], line_ending: LineEnding) -> Result<Vec<u8>> {
    let terminator = if line_ending.as_bytes() == b"\r\n" {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    };

    let mut builder = WriterBuilder::new();
    builder
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(terminator);

    let mut out = Vec::new();
    for row in rows {
        if row.is_empty() {
            // csv 會把空紀錄寫成 `""`，這裡直接輸出換行
            out.extend_from_slice(line_ending.as_bytes());
            continue;
        }
        let mut writer = builder.from_writer(&mut out);
        writer.write_record(row)?;
        writer.flush()?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let parsed = parse_line(r#""Smith, John",42"#).unwrap();
        assert_eq!(parsed, row(&["Smith, John", "42"]));

        let out = write_rows(&[parsed], LineEnding::Lf).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\"Smith, John\",42\n");
    }

    #[test]
    fn test_escaped_quotes_are_doubled_again() {
        let parsed = parse_line(r#"id,"He said ""hi""""#).unwrap();
        assert_eq!(parsed, row(&["id", r#"He said "hi""#]));

        let out = write_rows(&[parsed], LineEnding::Lf).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id,\"He said \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_unterminated_quote_absorbs_rest_of_line() {
        let parsed = parse_line(r#"a,"b,c"#).unwrap();
        assert_eq!(parsed, row(&["a", "b,c"]));
    }

    #[test]
    fn test_blank_line_is_empty_row() {
        assert!(parse_line("").unwrap().is_empty());
        // whitespace is data, not a blank line
        assert_eq!(parse_line("  ").unwrap(), row(&["  "]));
    }

    #[test]
    fn test_ragged_rows_and_empty_rows() {
        let rows = parse_lines(["name,age", "", "Alice,30,extra", "Bob"]).unwrap();
        let out = write_rows(&rows, LineEnding::Crlf).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "name,age\r\n\r\nAlice,30,extra\r\nBob\r\n"
        );
    }

    #[test]
    fn test_unquoted_output_stays_plain() {
        let rows = parse_lines(["\"plain\",\"text\""]).unwrap();
        let out = write_rows(&rows, LineEnding::Lf).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "plain,text\n");
    }

    #[test]
    fn test_no_rows_writes_nothing() {
        assert!(write_rows(&[], LineEnding::Lf).unwrap().is_empty());
    }
}
