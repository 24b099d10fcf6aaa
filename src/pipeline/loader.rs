//! Question table loader for comma and tab delimited files

use std::path::Path;

use crate::cli::Delimiter;

use super::error::{ConvertError, QuoteError};

/// Read the whole input file into memory
pub fn read_input(path: &Path) -> Result<Vec<u8>, ConvertError> {
    std::fs::read(path).map_err(|source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Split raw bytes into rows of fields.
///
/// There is no header row and rows may have any number of fields.
/// Quoted fields may contain the delimiter or embedded newlines; a CRLF
/// inside a quoted field is read as a single `\n`. Blank lines produce no row.
/// Every record is checked against the strict quoting rules before it is
/// accepted (see [`check_quotes`]).
pub fn parse_records(bytes: &[u8], delimiter: Delimiter) -> Result<Vec<Vec<String>>, ConvertError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter.as_byte())
        .from_reader(bytes);

    let mut records = Vec::new();
    let mut record = csv::StringRecord::new();
    loop {
        let start = reader.position().clone();
        let more = reader.read_record(&mut record).map_err(ConvertError::parse)?;
        let end = reader.position().byte() as usize;

        let raw = bytes.get(start.byte() as usize..end).unwrap_or_default();
        check_quotes(raw, delimiter.as_byte(), start.line())?;

        if !more {
            break;
        }
        records.push(record.iter().map(normalize_line_breaks).collect());
    }

    Ok(records)
}

/// Validate the quote structure of one raw record.
///
/// A field that does not start with `"` may not contain `"`. A quoted field
/// must close with `"` followed by the delimiter, a line break or the end of
/// input, and quotes inside it must be doubled. `first_line` is the 1-based
/// line the slice starts on and is used for error positions.
pub fn check_quotes(raw: &[u8], delimiter: u8, first_line: u64) -> Result<(), ConvertError> {
    #[derive(Clone, Copy)]
    enum State {
        FieldStart,
        Unquoted,
        Quoted,
        QuoteInQuoted,
    }

    let mut state = State::FieldStart;
    let mut line = first_line;
    let mut column = 0u64;
    let malformed = |line, column, source| ConvertError::MalformedQuote {
        line,
        column,
        source,
    };

    for &b in raw {
        column += 1;
        state = match (state, b) {
            (State::Quoted, b'"') => State::QuoteInQuoted,
            (State::Quoted, _) => State::Quoted,
            (State::QuoteInQuoted, b'"') => State::Quoted,
            (_, b'\n' | b'\r') => State::FieldStart,
            (_, d) if d == delimiter => State::FieldStart,
            (State::FieldStart, b'"') => State::Quoted,
            (State::Unquoted, b'"') => {
                return Err(malformed(line, column, QuoteError::BareQuote));
            }
            (State::FieldStart | State::Unquoted, _) => State::Unquoted,
            (State::QuoteInQuoted, _) => {
                return Err(malformed(line, column, QuoteError::ExtraneousQuote));
            }
        };
        if b == b'\n' {
            line += 1;
            column = 0;
        }
    }

    if let State::Quoted = state {
        return Err(malformed(line, column, QuoteError::Unterminated));
    }

    Ok(())
}

fn normalize_line_breaks(field: &str) -> String {
    if field.contains("\r\n") {
        field.replace("\r\n", "\n")
    } else {
        field.to_string()
    }
}

/// Read and parse a question table in one step
pub fn load_records(path: &Path, delimiter: Delimiter) -> Result<Vec<Vec<String>>, ConvertError> {
    let bytes = read_input(path)?;
    parse_records(&bytes, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_rows_with_varying_width() {
        let input = b"Q1,A,1,B,2\nQ2\nQ3,C,3\n";
        let records = parse_records(input, Delimiter::Comma).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], vec!["Q1", "A", "1", "B", "2"]);
        assert_eq!(records[1], vec!["Q2"]);
        assert_eq!(records[2], vec!["Q3", "C", "3"]);
    }

    #[test]
    fn test_tab_delimiter_keeps_commas() {
        let input = b"Name a fruit, any fruit\tApple\t5\n";
        let records = parse_records(input, Delimiter::Tab).unwrap();
        assert_eq!(records, vec![vec!["Name a fruit, any fruit", "Apple", "5"]]);
    }

    #[test]
    fn test_quoted_fields() {
        let input = b"\"Who said \"\"hi\"\"?\",\"Smith, J\",1\n\"Multi\nline\",x,2\n";
        let records = parse_records(input, Delimiter::Comma).unwrap();
        assert_eq!(records[0], vec!["Who said \"hi\"?", "Smith, J", "1"]);
        assert_eq!(records[1], vec!["Multi\nline", "x", "2"]);
    }

    #[test]
    fn test_empty_input() {
        let records = parse_records(b"", Delimiter::Comma).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_fields_preserved() {
        let records = parse_records(b"Q,A,,1,\n", Delimiter::Comma).unwrap();
        assert_eq!(records[0], vec!["Q", "A", "", "1", ""]);
    }

    #[test]
    fn test_invalid_utf8_errors() {
        let result = parse_records(b"Q,\xff\xfe,1\n", Delimiter::Comma);
        assert!(matches!(result, Err(ConvertError::Parse { .. })));
    }

    fn quote_error(input: &[u8]) -> Option<(u64, QuoteError)> {
        match parse_records(input, Delimiter::Comma) {
            Err(ConvertError::MalformedQuote { line, source, .. }) => Some((line, source)),
            _ => None,
        }
    }

    #[test]
    fn test_bare_quote_in_unquoted_field_errors() {
        assert_eq!(quote_error(b"Q,a\"b,1\n"), Some((1, QuoteError::BareQuote)));
    }

    #[test]
    fn test_text_after_closing_quote_errors() {
        assert_eq!(
            quote_error(b"Q,\"a\"b,1\n"),
            Some((1, QuoteError::ExtraneousQuote))
        );
    }

    #[test]
    fn test_unterminated_quote_errors() {
        assert_eq!(
            quote_error(b"Q,\"unterminated,1\nQ2,a,1\n"),
            Some((3, QuoteError::Unterminated))
        );
    }

    #[test]
    fn test_bad_quote_reports_its_line() {
        assert_eq!(
            quote_error(b"Q1,a,1\n\"Multi\nline\",x,2\nQ3,b\"ad,3\n"),
            Some((4, QuoteError::BareQuote))
        );
    }

    #[test]
    fn test_quoted_field_ending_at_eof() {
        let records = parse_records(b"Q,\"a\"\"b\"", Delimiter::Comma).unwrap();
        assert_eq!(records, vec![vec!["Q", "a\"b"]]);
    }

    #[test]
    fn test_quoted_field_before_tab() {
        let records = parse_records(b"\"Q, really\"\t\"A\"\t1\n", Delimiter::Tab).unwrap();
        assert_eq!(records, vec![vec!["Q, really", "A", "1"]]);
    }

    #[test]
    fn test_crlf_inside_quoted_field_becomes_lf() {
        let records = parse_records(b"\"Multi\r\nline\",x,2\r\n", Delimiter::Comma).unwrap();
        assert_eq!(records, vec![vec!["Multi\nline", "x", "2"]]);
    }

    #[test]
    fn test_missing_file_errors() {
        let result = read_input(Path::new("definitely/not/here.csv"));
        assert!(matches!(result, Err(ConvertError::ReadInput { .. })));
    }
}
