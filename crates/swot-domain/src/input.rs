//! User input for one analysis request

use crate::Category;
use serde::{Deserialize, Serialize};

/// The four free-text blocks a user submits for review
///
/// Each block is opaque text that the caller treats as newline-separated
/// items. Any block may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwotInput {
    /// Internal positive attributes
    pub strengths: String,

    /// Internal negative attributes
    pub weaknesses: String,

    /// External positive factors
    pub opportunities: String,

    /// External negative factors
    pub threats: String,
}

impl SwotInput {
    /// Create an input from the four blocks in canonical order
    pub fn new(
        strengths: impl Into<String>,
        weaknesses: impl Into<String>,
        opportunities: impl Into<String>,
        threats: impl Into<String>,
    ) -> Self {
        Self {
            strengths: strengths.into(),
            weaknesses: weaknesses.into(),
            opportunities: opportunities.into(),
            threats: threats.into(),
        }
    }

    /// Text block for a category
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Strengths => &self.strengths,
            Category::Weaknesses => &self.weaknesses,
            Category::Opportunities => &self.opportunities,
            Category::Threats => &self.threats,
        }
    }

    /// Replace the text block for a category
    pub fn set(&mut self, category: Category, text: impl Into<String>) {
        let slot = match category {
            Category::Strengths => &mut self.strengths,
            Category::Weaknesses => &mut self.weaknesses,
            Category::Opportunities => &mut self.opportunities,
            Category::Threats => &mut self.threats,
        };
        *slot = text.into();
    }

    /// Builder-style variant of [`SwotInput::set`]
    pub fn with(mut self, category: Category, text: impl Into<String>) -> Self {
        self.set(category, text);
        self
    }

    /// Whether the block for a category holds only whitespace
    pub fn is_blank(&self, category: Category) -> bool {
        self.get(category).trim().is_empty()
    }

    /// Whether every block is blank
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.is_blank(*c))
    }

    /// Non-blank lines of a block, trimmed
    pub fn items(&self, category: Category) -> Vec<&str> {
        self.get(category)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Total number of characters across all four blocks
    pub fn char_count(&self) -> usize {
        Category::ALL
            .iter()
            .map(|c| self.get(*c).chars().count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let mut input = SwotInput::default();
        input.set(Category::Threats, "Recesión económica");
        assert_eq!(input.get(Category::Threats), "Recesión económica");
        assert_eq!(input.threats, "Recesión económica");
        assert!(input.is_blank(Category::Strengths));
    }

    #[test]
    fn test_blank_detection() {
        assert!(SwotInput::default().is_empty());
        assert!(SwotInput::new("  ", "\n", "\t", "").is_empty());
        assert!(!SwotInput::default().with(Category::Weaknesses, "Costos altos").is_empty());
    }

    #[test]
    fn test_items_splits_lines() {
        let input = SwotInput::new("Marca fuerte\n\n  Equipo experimentado  \n", "", "", "");
        assert_eq!(
            input.items(Category::Strengths),
            vec!["Marca fuerte", "Equipo experimentado"]
        );
        assert!(input.items(Category::Weaknesses).is_empty());
    }

    #[test]
    fn test_char_count_counts_chars_not_bytes() {
        let input = SwotInput::new("ñ", "é", "", "ab");
        assert_eq!(input.char_count(), 4);
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_empty() {
        let input: SwotInput = serde_json::from_str(r#"{"strengths": "Marca fuerte"}"#).unwrap();
        assert_eq!(input.strengths, "Marca fuerte");
        assert_eq!(input.threats, "");
    }
}
