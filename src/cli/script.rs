//! Move script parsing.
//!
//! One move per line: `from_row from_col to_row to_col`, separated by spaces
//! and/or commas. `#` starts a comment; blank lines are skipped.

use super::CliError;
use marble_solitaire::Move;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// A move together with the 1-based script line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScriptedMove {
    pub(crate) line: usize,
    pub(crate) mv: Move,
}

/// Parse a single line. Returns `Ok(None)` for blank or comment-only lines.
pub(crate) fn parse_line(line: &str) -> Result<Option<Move>, String> {
    let content = line.split('#').next().unwrap_or("").trim();
    if content.is_empty() {
        return Ok(None);
    }

    let values = content
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i32>()
                .map_err(|e| format!("invalid coordinate '{part}': {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        &[from_row, from_col, to_row, to_col] => {
            Ok(Some(Move::from_parts(from_row, from_col, to_row, to_col)))
        }
        other => Err(format!("expected 4 coordinates, found {}", other.len())),
    }
}

/// Parse a whole script.
///
/// # Errors
///
/// Returns an error naming the first malformed line.
pub(crate) fn parse_script(text: &str) -> Result<Vec<ScriptedMove>, CliError> {
    let mut moves = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        match parse_line(line) {
            Ok(Some(mv)) => moves.push(ScriptedMove { line: line_no, mv }),
            Ok(None) => {}
            Err(e) => return Err(CliError::new(format!("line {line_no}: {e}"))),
        }
    }
    Ok(moves)
}

/// Read script text from a file, or from stdin when no path is given.
///
/// # Errors
///
/// Returns an error if the source cannot be read.
pub(crate) fn read_script(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display()))),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_line_separators() {
        let expected = Some(Move::from_parts(5, 3, 3, 3));
        assert_eq!(parse_line("5 3 3 3"), Ok(expected));
        assert_eq!(parse_line("5,3,3,3"), Ok(expected));
        assert_eq!(parse_line("  5, 3  3,3  # opening"), Ok(expected));
    }

    #[test]
    fn test_parse_line_blank_and_comment() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# just a note"), Ok(None));
    }

    #[test]
    fn test_parse_line_negative_coordinates() {
        assert_eq!(
            parse_line("-1 3 1 3"),
            Ok(Some(Move::from_parts(-1, 3, 1, 3)))
        );
    }

    #[test]
    fn test_parse_line_errors() {
        assert_eq!(
            parse_line("5 3 3"),
            Err("expected 4 coordinates, found 3".to_string())
        );
        assert!(parse_line("5 3 x 3").unwrap_err().contains("invalid coordinate 'x'"));
    }

    #[test]
    fn test_parse_script_reports_line_number() {
        let err = parse_script("5 3 3 3\n\n2 3 4\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3: expected 4 coordinates, found 3");
    }

    #[test]
    fn test_read_and_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# standard opening").unwrap();
        writeln!(file, "5 3 3 3").unwrap();
        writeln!(file, "2,3,4,3").unwrap();

        let text = read_script(Some(file.path())).unwrap();
        let moves = parse_script(&text).unwrap();
        assert_eq!(
            moves,
            vec![
                ScriptedMove {
                    line: 2,
                    mv: Move::from_parts(5, 3, 3, 3),
                },
                ScriptedMove {
                    line: 3,
                    mv: Move::from_parts(2, 3, 4, 3),
                },
            ]
        );
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = read_script(Some(&missing)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
