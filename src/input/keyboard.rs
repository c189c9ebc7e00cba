//! Keyboard - the fixed key vocabulary understood by the widgets.
//!
//! # Example
//!
//! ```
//! use spark_widgets::input::{KeyCode, is_printable};
//!
//! assert!(is_printable('a'));
//! assert!(is_printable('ñ'));
//! assert!(!is_printable('\u{7f}'));
//! assert_eq!(KeyCode::from_char('\t'), KeyCode::Tab);
//! ```

/// Accented Latin characters accepted on top of printable ASCII.
pub const ACCENTED_LATIN: &str = "ñÑáéíóúÁÉÍÓÚ";

/// Key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Tab,
    Backspace,
    Escape,
    Up,
    Down,
    Left,
    Right,
    /// Anything outside the recognized set. Widgets ignore it.
    Unknown,
}

impl KeyCode {
    /// Map a raw character to a key code.
    ///
    /// Control characters that have a dedicated code (`\t`, `\n`, `\r`,
    /// ESC, DEL, BS) are folded into it.
    pub fn from_char(ch: char) -> Self {
        match ch {
            '\t' => KeyCode::Tab,
            '\n' | '\r' => KeyCode::Enter,
            '\u{1b}' => KeyCode::Escape,
            '\u{7f}' | '\u{8}' => KeyCode::Backspace,
            c => KeyCode::Char(c),
        }
    }

    /// The character carried by this key, if it is in the printable set.
    #[inline]
    pub fn printable(&self) -> Option<char> {
        match *self {
            KeyCode::Char(c) if is_printable(c) => Some(c),
            _ => None,
        }
    }
}

impl From<char> for KeyCode {
    fn from(ch: char) -> Self {
        KeyCode::from_char(ch)
    }
}

/// Check if a character is in the recognized printable set:
/// ASCII 32..=126 plus [`ACCENTED_LATIN`].
pub fn is_printable(ch: char) -> bool {
    (' '..='~').contains(&ch) || ACCENTED_LATIN.contains(ch)
}

/// Convert a string into the key presses that would type it.
///
/// Handy for scripting input; every character goes through
/// [`KeyCode::from_char`].
pub fn keys_for(text: &str) -> Vec<KeyCode> {
    text.chars().map(KeyCode::from_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(' ', true ; "space")]
    #[test_case('~', true ; "tilde")]
    #[test_case('A', true ; "ascii letter")]
    #[test_case('ñ', true ; "n tilde")]
    #[test_case('Ú', true ; "accented capital")]
    #[test_case('ü', false ; "umlaut not in set")]
    #[test_case('\u{7f}', false ; "delete")]
    #[test_case('\u{1f}', false ; "unit separator")]
    fn test_is_printable(ch: char, expected: bool) {
        assert_eq!(is_printable(ch), expected);
    }

    #[test]
    fn test_from_char_folds_controls() {
        assert_eq!(KeyCode::from_char('\t'), KeyCode::Tab);
        assert_eq!(KeyCode::from_char('\n'), KeyCode::Enter);
        assert_eq!(KeyCode::from_char('\r'), KeyCode::Enter);
        assert_eq!(KeyCode::from_char('\u{1b}'), KeyCode::Escape);
        assert_eq!(KeyCode::from_char('\u{7f}'), KeyCode::Backspace);
        assert_eq!(KeyCode::from_char('x'), KeyCode::Char('x'));
    }

    #[test]
    fn test_printable_filters_non_chars() {
        assert_eq!(KeyCode::Char('é').printable(), Some('é'));
        assert_eq!(KeyCode::Char('ü').printable(), None);
        assert_eq!(KeyCode::Enter.printable(), None);
        assert_eq!(KeyCode::Unknown.printable(), None);
    }

    #[test]
    fn test_keys_for() {
        assert_eq!(
            keys_for("a\tb"),
            vec![KeyCode::Char('a'), KeyCode::Tab, KeyCode::Char('b')]
        );
    }
}
