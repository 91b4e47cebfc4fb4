use regex::Regex;
use std::sync::OnceLock;

fn bold_pattern() -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    BOLD.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"))
}

fn italic_pattern() -> &'static Regex {
    static ITALIC: OnceLock<Regex> = OnceLock::new();
    ITALIC.get_or_init(|| Regex::new(r"\*(.*?)\*").expect("italic pattern is valid"))
}

/// Remove markdown emphasis markers, keeping the emphasized text.
///
/// `**bold**` is unwrapped first, then `*italic*`. Matches are non-greedy
/// and never span a line break, so stray asterisks on separate lines survive.
pub fn strip_emphasis(text: &str) -> String {
    let without_bold = bold_pattern().replace_all(text, "$1");
    italic_pattern()
        .replace_all(&without_bold, "$1")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bold_and_italic() {
        assert_eq!(strip_emphasis("**Be** *bold*"), "Be bold");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(
            strip_emphasis("Life is like riding a bicycle."),
            "Life is like riding a bicycle."
        );
    }

    #[test]
    fn keeps_unpaired_asterisk() {
        assert_eq!(strip_emphasis("2 * 3 = 6"), "2 * 3 = 6");
    }

    #[test]
    fn does_not_match_across_lines() {
        assert_eq!(strip_emphasis("*first\nsecond*"), "*first\nsecond*");
    }

    #[test]
    fn handles_multiple_spans_per_line() {
        assert_eq!(
            strip_emphasis("**Thou** art *more* lovely and **more** *temperate*"),
            "Thou art more lovely and more temperate"
        );
    }

    #[test]
    fn unwraps_bold_italic() {
        assert_eq!(strip_emphasis("***wow***"), "wow");
    }
}
