// macicon - app/prompt.rs
//
// Interactive fallback when no input path is given on the command line.

use crate::util::constants;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Write the input prompt to `output` and read one line from `input`.
///
/// Returns `None` for an empty answer or end of input. Surrounding
/// whitespace, including the newline, is stripped.
pub fn read_input_path<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<Option<PathBuf>> {
    write!(output, "{}", constants::INPUT_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        tracing::debug!("Input closed before a path was entered");
        return Ok(None);
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(trimmed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(text: &str) -> (Option<PathBuf>, String) {
        let mut shown = Vec::new();
        let path = read_input_path(Cursor::new(text.as_bytes()), &mut shown).unwrap();
        (path, String::from_utf8(shown).unwrap())
    }

    #[test]
    fn prompt_is_shown() {
        let (_, shown) = answer("icon.png\n");
        assert_eq!(shown, constants::INPUT_PROMPT);
    }

    #[test]
    fn answer_is_trimmed() {
        let (path, _) = answer("  art/icon 1024.png \r\n");
        assert_eq!(path, Some(PathBuf::from("art/icon 1024.png")));
    }

    #[test]
    fn empty_answer_gives_none() {
        assert_eq!(answer("\n").0, None);
        assert_eq!(answer("   \n").0, None);
    }

    #[test]
    fn end_of_input_gives_none() {
        assert_eq!(answer("").0, None);
    }
}
