use super::Operation;

/// A single user event forwarded to the [`Calculator`](super::Calculator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A digit `0`-`9` or the decimal point `.`.
    Digit(char),
    Delete,
    Choose(Operation),
    Calculate,
    ToggleSign,
    Percent,
    Clear,
}

impl Input {
    /// Maps a keyboard key to an input event.
    ///
    /// | Key | Event |
    /// |-----|-------|
    /// | `0`-`9`, `.` | [`Input::Digit`] |
    /// | `+ - * /`, `x × ÷` | [`Input::Choose`] |
    /// | `=`, newline | [`Input::Calculate`] |
    /// | `%` | [`Input::Percent`] |
    /// | `~` | [`Input::ToggleSign`] |
    /// | `<`, backspace | [`Input::Delete`] |
    /// | `c`, `C` | [`Input::Clear`] |
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '0'..='9' | '.' => Some(Self::Digit(key)),
            '=' | '\n' | '\r' => Some(Self::Calculate),
            '%' => Some(Self::Percent),
            '~' => Some(Self::ToggleSign),
            '<' | '\u{8}' => Some(Self::Delete),
            'c' | 'C' => Some(Self::Clear),
            other => {
                let mut buf = [0u8; 4];
                Operation::parse(other.encode_utf8(&mut buf)).map(Self::Choose)
            }
        }
    }
}
