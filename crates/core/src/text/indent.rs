//! Leading-indentation conversion
//!
//! Operates line by line and only on leading whitespace. Indentation-like
//! whitespace elsewhere in a line is never touched.

use serde::{Deserialize, Serialize};

/// Direction of the indentation conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndentDirection {
    /// Replace each leading tab with `width` spaces
    ToSpaces,
    /// Replace each full group of `width` leading spaces with one tab
    ToTabs,
}

impl std::str::FromStr for IndentDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "to-spaces" | "spaces" => Ok(IndentDirection::ToSpaces),
            "to-tabs" | "tabs" => Ok(IndentDirection::ToTabs),
            other => Err(format!(
                "Invalid direction: {other}. Valid directions: to-spaces, to-tabs"
            )),
        }
    }
}

/// Convert the leading indentation of every line.
///
/// `width` is the number of spaces per tab; a width of 0 falls back to 1 so
/// the space-to-tab division is always defined. In `to-tabs` mode, leftover
/// spaces that do not fill a full group are kept as spaces.
pub fn convert_indentation(input: &str, direction: IndentDirection, width: usize) -> String {
    let width = width.max(1);

    let lines: Vec<String> = input
        .split('\n')
        .map(|line| convert_line(line, direction, width))
        .collect();

    lines.join("\n")
}

fn convert_line(line: &str, direction: IndentDirection, width: usize) -> String {
    match direction {
        IndentDirection::ToSpaces => {
            let tabs = line.chars().take_while(|c| *c == '\t').count();
            if tabs == 0 {
                return line.to_string();
            }
            let rest = &line[tabs..];
            format!("{}{}", " ".repeat(tabs * width), rest)
        }
        IndentDirection::ToTabs => {
            let spaces = line.chars().take_while(|c| *c == ' ').count();
            let tabs = spaces / width;
            if tabs == 0 {
                return line.to_string();
            }
            let rest = &line[spaces..];
            format!("{}{}{}", "\t".repeat(tabs), " ".repeat(spaces % width), rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_to_spaces() {
        assert_eq!(
            convert_indentation("\t\tfoo", IndentDirection::ToSpaces, 2),
            "    foo"
        );
    }

    #[test]
    fn test_spaces_to_tabs_round_trip() {
        let spaced = convert_indentation("\t\tfoo", IndentDirection::ToSpaces, 2);
        assert_eq!(
            convert_indentation(&spaced, IndentDirection::ToTabs, 2),
            "\t\tfoo"
        );
    }

    #[test]
    fn test_leftover_spaces_are_kept() {
        assert_eq!(
            convert_indentation("     foo", IndentDirection::ToTabs, 2),
            "\t\t foo"
        );
    }

    #[test]
    fn test_interior_whitespace_untouched() {
        assert_eq!(
            convert_indentation("\tfoo\tbar  baz", IndentDirection::ToSpaces, 4),
            "    foo\tbar  baz"
        );
        assert_eq!(
            convert_indentation("  foo  bar", IndentDirection::ToTabs, 2),
            "\tfoo  bar"
        );
    }

    #[test]
    fn test_multiline() {
        let input = "\tfn main() {\n\t\tbody\n\t}";
        assert_eq!(
            convert_indentation(input, IndentDirection::ToSpaces, 4),
            "    fn main() {\n        body\n    }"
        );
    }

    #[test]
    fn test_unindented_lines_unchanged() {
        assert_eq!(
            convert_indentation("foo\nbar", IndentDirection::ToSpaces, 4),
            "foo\nbar"
        );
    }

    #[test]
    fn test_zero_width_is_treated_as_one() {
        assert_eq!(
            convert_indentation("\tfoo", IndentDirection::ToSpaces, 0),
            " foo"
        );
        assert_eq!(
            convert_indentation("  foo", IndentDirection::ToTabs, 0),
            "\t\tfoo"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert_indentation("", IndentDirection::ToSpaces, 4), "");
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!(
            "to-spaces".parse::<IndentDirection>().unwrap(),
            IndentDirection::ToSpaces
        );
        assert_eq!(
            "TABS".parse::<IndentDirection>().unwrap(),
            IndentDirection::ToTabs
        );
        assert!("sideways".parse::<IndentDirection>().is_err());
    }
}
