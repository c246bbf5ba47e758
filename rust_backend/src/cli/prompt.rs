//! Sort-order prompt.
//!
//! The menu accepts `1` (distance), `2` (name) or `3` (time). Anything else,
//! including non-numeric input and end of input, falls back to sorting by
//! name after printing a warning.

use std::io::{self, BufRead, Write};

use log::warn;

use crate::core::domain::SortKey;

/// Question printed before reading the choice.
pub const PROMPT: &str = "Select sorting type (1 - by distance, 2 - by name, 3 - by time): ";

/// Warning printed when the choice is not one of the menu entries.
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Sorting by name by default.";

/// Extract a leading integer the way a formatted input stream does.
///
/// Leading whitespace is skipped, then an optional sign and as many digits as
/// follow are taken; the rest of the input is ignored. Returns `None` when no
/// digits are found or the number does not fit.
///
/// # Examples
///
/// ```
/// use point_grouper::cli::parse_choice;
///
/// assert_eq!(parse_choice("  2\n"), Some(2));
/// assert_eq!(parse_choice("3abc"), Some(3));
/// assert_eq!(parse_choice("-1"), Some(-1));
/// assert_eq!(parse_choice("abc"), None);
/// ```
pub fn parse_choice(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits_len == 0 {
        return None;
    }

    trimmed[..sign_len + digits_len].parse().ok()
}

/// Map a menu choice to a sort key.
///
/// Returns the key and whether the choice was a valid menu entry; invalid or
/// missing choices resolve to [`SortKey::Name`].
pub fn resolve_choice(choice: Option<i64>) -> (SortKey, bool) {
    match choice.and_then(SortKey::from_choice) {
        Some(key) => (key, true),
        None => (SortKey::Name, false),
    }
}

/// Print the prompt to `output`, read the answer from `input` and resolve it.
///
/// Blank lines are skipped like a formatted stream skips whitespace. On an
/// invalid answer the warning goes to `diagnostics`.
pub fn prompt_sort_key<R, W, E>(
    input: &mut R,
    output: &mut W,
    diagnostics: &mut E,
) -> io::Result<SortKey>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    let answer = loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break None;
        }
        if !line.trim().is_empty() {
            break parse_choice(&line);
        }
    };

    let (key, valid) = resolve_choice(answer);
    if !valid {
        warn!("Unrecognized sort choice {:?}, using {}", line.trim(), key);
        writeln!(diagnostics, "{}", INVALID_CHOICE_MESSAGE)?;
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_prompt(answer: &str) -> (SortKey, String, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        let mut diagnostics = Vec::new();
        let key = prompt_sort_key(&mut input, &mut output, &mut diagnostics).unwrap();
        (
            key,
            String::from_utf8(output).unwrap(),
            String::from_utf8(diagnostics).unwrap(),
        )
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Some(1));
        assert_eq!(parse_choice("\t 3 4"), Some(3));
        assert_eq!(parse_choice("+2"), Some(2));
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("-"), None);
        assert_eq!(parse_choice("x1"), None);
        assert_eq!(parse_choice("99999999999999999999999"), None);
    }

    #[test]
    fn test_resolve_choice() {
        assert_eq!(resolve_choice(Some(1)), (SortKey::Distance, true));
        assert_eq!(resolve_choice(Some(2)), (SortKey::Name, true));
        assert_eq!(resolve_choice(Some(3)), (SortKey::Time, true));
        assert_eq!(resolve_choice(Some(4)), (SortKey::Name, false));
        assert_eq!(resolve_choice(None), (SortKey::Name, false));
    }

    #[test]
    fn test_prompt_valid_choice() {
        let (key, output, diagnostics) = run_prompt("1\n");
        assert_eq!(key, SortKey::Distance);
        assert_eq!(output, PROMPT);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_prompt_skips_blank_lines() {
        let (key, _, diagnostics) = run_prompt("\n   \n3\n");
        assert_eq!(key, SortKey::Time);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_prompt_invalid_choice_warns() {
        let (key, _, diagnostics) = run_prompt("7\n");
        assert_eq!(key, SortKey::Name);
        assert_eq!(diagnostics, format!("{}\n", INVALID_CHOICE_MESSAGE));
    }

    #[test]
    fn test_prompt_non_numeric_warns() {
        let (key, _, diagnostics) = run_prompt("distance\n");
        assert_eq!(key, SortKey::Name);
        assert!(diagnostics.contains("Invalid choice"));
    }

    #[test]
    fn test_prompt_end_of_input_warns() {
        let (key, _, diagnostics) = run_prompt("");
        assert_eq!(key, SortKey::Name);
        assert!(!diagnostics.is_empty());
    }
}
