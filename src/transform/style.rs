use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tone requested from the transform service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Formal,
    Poetic,
    Humorous,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown style '{0}' (expected formal, poetic or humorous)")]
pub struct StyleParseError(String);

impl Style {
    /// Selector order.
    pub const ALL: [Style; 3] = [Style::Formal, Style::Poetic, Style::Humorous];

    /// Name used on the wire and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Formal => "formal",
            Style::Poetic => "poetic",
            Style::Humorous => "humorous",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Style::Formal => "Formal",
            Style::Poetic => "Poetic",
            Style::Humorous => "Humorous",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Style::Formal => 0,
            Style::Poetic => 1,
            Style::Humorous => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next style in selector order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous style in selector order, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| StyleParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_formal() {
        assert_eq!(Style::default(), Style::Formal);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Style::Formal.next(), Style::Poetic);
        assert_eq!(Style::Humorous.next(), Style::Formal);
        assert_eq!(Style::Formal.prev(), Style::Humorous);
        assert_eq!(Style::Poetic.prev(), Style::Formal);
    }

    #[test]
    fn parses_wire_names_case_insensitively() {
        assert_eq!("formal".parse::<Style>(), Ok(Style::Formal));
        assert_eq!("Poetic".parse::<Style>(), Ok(Style::Poetic));
        assert_eq!(" HUMOROUS ".parse::<Style>(), Ok(Style::Humorous));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "sarcastic".parse::<Style>().unwrap_err();
        assert!(err.to_string().contains("sarcastic"));
    }

    #[test]
    fn index_round_trips_through_selector_order() {
        for style in Style::ALL {
            assert_eq!(Style::from_index(style.index()), Some(style));
        }
        assert_eq!(Style::from_index(3), None);
    }
}
