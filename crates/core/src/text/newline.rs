//! Newline style conversion

use serde::{Deserialize, Serialize};

/// Target newline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlineStyle {
    /// `\r\n`
    Windows,
    /// `\n`
    Unix,
    /// `\r`
    Mac,
}

impl NewlineStyle {
    pub fn sequence(&self) -> &'static str {
        match self {
            NewlineStyle::Windows => "\r\n",
            NewlineStyle::Unix => "\n",
            NewlineStyle::Mac => "\r",
        }
    }
}

impl std::str::FromStr for NewlineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "crlf" => Ok(NewlineStyle::Windows),
            "unix" | "lf" => Ok(NewlineStyle::Unix),
            "mac" | "cr" => Ok(NewlineStyle::Mac),
            other => Err(format!(
                "Invalid newline style: {other}. Valid styles: windows, unix, mac"
            )),
        }
    }
}

/// Convert any mix of `\r\n`, `\r`, and `\n` to the target style.
///
/// The input is normalized to `\n` first, then re-expanded, so the function
/// is idempotent per target style.
pub fn convert_newlines(input: &str, style: NewlineStyle) -> String {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");

    match style {
        NewlineStyle::Unix => normalized,
        _ => normalized.replace('\n', style.sequence()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_input_to_unix() {
        assert_eq!(
            convert_newlines("a\r\nb\nc\rd", NewlineStyle::Unix),
            "a\nb\nc\nd"
        );
    }

    #[test]
    fn test_mixed_input_to_windows() {
        assert_eq!(
            convert_newlines("a\r\nb\nc\rd", NewlineStyle::Windows),
            "a\r\nb\r\nc\r\nd"
        );
    }

    #[test]
    fn test_mixed_input_to_mac() {
        assert_eq!(
            convert_newlines("a\r\nb\nc\rd", NewlineStyle::Mac),
            "a\rb\rc\rd"
        );
    }

    #[test]
    fn test_idempotent_per_style() {
        let input = "a\r\nb\nc\rd";
        for style in [NewlineStyle::Windows, NewlineStyle::Unix, NewlineStyle::Mac] {
            let once = convert_newlines(input, style);
            let twice = convert_newlines(&once, style);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_windows_then_unix_round_trips() {
        let input = "a\rb\r\nc";
        let windows = convert_newlines(input, NewlineStyle::Windows);
        assert_eq!(convert_newlines(&windows, NewlineStyle::Unix), "a\nb\nc");
    }

    #[test]
    fn test_no_newlines_unchanged() {
        assert_eq!(convert_newlines("plain", NewlineStyle::Windows), "plain");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert_newlines("", NewlineStyle::Mac), "");
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("unix".parse::<NewlineStyle>().unwrap(), NewlineStyle::Unix);
        assert_eq!("CRLF".parse::<NewlineStyle>().unwrap(), NewlineStyle::Windows);
        assert!("dos2".parse::<NewlineStyle>().is_err());
    }
}
