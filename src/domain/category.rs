use serde::Serialize;
use std::str::FromStr;
use strum_macros::EnumIter;
use thiserror::Error;

use crate::config::SERVER;

/// The four numeric sequence kinds served by the test server.
#[derive(Serialize, Debug, Clone, Copy, Default, Hash, Eq, PartialEq, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Prime,
    Fibonacci,
    #[default]
    Even,
    Random,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category '{0}' (expected one of p, f, e, r)")]
pub struct ParseCategoryError(String);

impl Category {
    /// Single-letter code used in the public endpoint contract.
    pub fn code(self) -> char {
        match self {
            Category::Prime => 'p',
            Category::Fibonacci => 'f',
            Category::Even => 'e',
            Category::Random => 'r',
        }
    }

    /// Path segment on the remote number service.
    pub fn segment(self) -> &'static str {
        match self {
            Category::Prime => "primes",
            Category::Fibonacci => "fibo",
            Category::Even => "even",
            Category::Random => "rand",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Prime => "Prime",
            Category::Fibonacci => "Fibonacci",
            Category::Even => "Even",
            Category::Random => "Random",
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'p' => Some(Category::Prime),
            'f' => Some(Category::Fibonacci),
            'e' => Some(Category::Even),
            'r' => Some(Category::Random),
            _ => None,
        }
    }

    // Informational only: the results panel shows it, nothing requests it.
    pub fn display_endpoint(self) -> String {
        format!("{}/{}", SERVER.display_endpoint_base, self.code())
    }
}

/// Accepts the one-letter code, the label, or the remote segment.
impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Category::from_code(c).ok_or_else(|| ParseCategoryError(s.to_string()));
        }

        use strum::IntoEnumIterator;
        Category::iter()
            .find(|cat| {
                cat.label().eq_ignore_ascii_case(trimmed)
                    || cat.segment().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn segments_match_endpoint_contract() {
        let pairs: Vec<(char, &str)> = Category::iter().map(|c| (c.code(), c.segment())).collect();
        assert_eq!(
            pairs,
            vec![('p', "primes"), ('f', "fibo"), ('e', "even"), ('r', "rand")]
        );
    }

    #[test]
    fn parses_codes_labels_and_segments() {
        assert_eq!("p".parse::<Category>(), Ok(Category::Prime));
        assert_eq!("Fibonacci".parse::<Category>(), Ok(Category::Fibonacci));
        assert_eq!("rand".parse::<Category>(), Ok(Category::Random));
        assert!("x".parse::<Category>().is_err());
        assert!("odd".parse::<Category>().is_err());
    }

    #[test]
    fn display_endpoint_uses_category_code() {
        assert_eq!(
            Category::Even.display_endpoint(),
            "http://localhost:9876/numbers/e"
        );
    }
}
