use std::io::{self, BufRead, IsTerminal};

use crate::error::LxError;

/// File paths piped on stdin, one per line. Empty when stdin is a terminal.
pub fn stdin_paths() -> Result<Vec<String>, LxError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }
    read_paths(stdin.lock()).map_err(|source| LxError::Stdin { source })
}

/// Trim each line and skip blank ones.
pub fn read_paths<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(trimmed.to_string());
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn trims_and_skips_blank_lines() {
        let input = "file1.txt\n\nfile2.txt \n  \nfile3\n";
        let got = read_paths(Cursor::new(input)).unwrap();
        assert_eq!(got, ["file1.txt", "file2.txt", "file3"]);
    }

    #[test]
    fn crlf_and_missing_final_newline() {
        let got = read_paths(Cursor::new("a.rs\r\nb.rs")).unwrap();
        assert_eq!(got, ["a.rs", "b.rs"]);
    }

    #[test]
    fn empty_input() {
        assert!(read_paths(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let err = read_paths(Cursor::new(&b"ok\n\xff\xfe\n"[..])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
