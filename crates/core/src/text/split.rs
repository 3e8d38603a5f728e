//! Literal text splitting

/// Split `input` on a literal separator.
///
/// An empty separator splits into individual characters. When both options
/// are set, items are trimmed first and empties removed after, so
/// "ignore empty" means "empty after trimming".
pub fn split_text(input: &str, separator: &str, trim: bool, ignore_empty: bool) -> Vec<String> {
    let mut items: Vec<String> = if separator.is_empty() {
        input.chars().map(|c| c.to_string()).collect()
    } else {
        input.split(separator).map(|s| s.to_string()).collect()
    };

    if trim {
        items = items.iter().map(|s| s.trim().to_string()).collect();
    }

    if ignore_empty {
        items.retain(|s| !s.is_empty());
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        assert_eq!(split_text("a,b,c", ",", false, false), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_trim_then_ignore_empty() {
        assert_eq!(
            split_text("a, b ,, c", ",", true, true),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_whitespace_only_item_survives_without_trim() {
        // "   " is not empty unless trimmed first.
        assert_eq!(
            split_text("a,   ,b", ",", false, true),
            vec!["a", "   ", "b"]
        );
    }

    #[test]
    fn test_empty_separator_splits_chars() {
        assert_eq!(split_text("abc", "", false, false), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_separator_multibyte_chars() {
        assert_eq!(split_text("a世🦀", "", false, false), vec!["a", "世", "🦀"]);
    }

    #[test]
    fn test_multi_char_separator() {
        assert_eq!(
            split_text("a--b--c", "--", false, false),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split_text("", ",", false, false), vec![""]);
        assert_eq!(split_text("", ",", false, true), Vec::<String>::new());
        assert_eq!(split_text("", "", false, false), Vec::<String>::new());
    }

    #[test]
    fn test_separator_not_found() {
        assert_eq!(split_text("abc", ";", false, false), vec!["abc"]);
    }
}
