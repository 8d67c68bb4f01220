//! Category module - the four SWOT buckets

use serde::{Deserialize, Serialize};

/// One of the four fixed SWOT categories
///
/// Strengths and weaknesses are internal attributes of the organization,
/// opportunities and threats are external factors.
///
/// Serialized with its English label (`"Strengths"`, ...), which is the form
/// the model uses for recategorization suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Internal and positive
    Strengths,

    /// Internal and negative
    Weaknesses,

    /// External and positive
    Opportunities,

    /// External and negative
    Threats,
}

impl Category {
    /// All categories in canonical display order
    pub const ALL: [Category; 4] = [
        Category::Strengths,
        Category::Weaknesses,
        Category::Opportunities,
        Category::Threats,
    ];

    /// Position of the category in [`Category::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Category::Strengths => 0,
            Category::Weaknesses => 1,
            Category::Opportunities => 2,
            Category::Threats => 3,
        }
    }

    /// Field name used for the category in the result wire shape
    pub fn key(&self) -> &'static str {
        match self {
            Category::Strengths => "strengths",
            Category::Weaknesses => "weaknesses",
            Category::Opportunities => "opportunities",
            Category::Threats => "threats",
        }
    }

    /// English label, also the suggestion value on the wire
    pub fn label(&self) -> &'static str {
        match self {
            Category::Strengths => "Strengths",
            Category::Weaknesses => "Weaknesses",
            Category::Opportunities => "Opportunities",
            Category::Threats => "Threats",
        }
    }

    /// Spanish display title
    pub fn spanish_label(&self) -> &'static str {
        match self {
            Category::Strengths => "Fortalezas",
            Category::Weaknesses => "Debilidades",
            Category::Opportunities => "Oportunidades",
            Category::Threats => "Amenazas",
        }
    }

    /// Fixed rubric the model classifies against
    pub fn definition(&self) -> &'static str {
        match self {
            Category::Strengths => {
                "Atributos internos y positivos de la empresa. Cosas que controlan y hacen bien."
            }
            Category::Weaknesses => {
                "Atributos internos y negativos de la empresa. Cosas que controlan pero que hacen mal o de las que carecen."
            }
            Category::Opportunities => {
                "Factores externos y positivos que la empresa puede aprovechar. Tendencias del mercado, vulnerabilidades de la competencia, etc."
            }
            Category::Threats => {
                "Factores externos y negativos que podrían dañar a la empresa. Recesiones económicas, nuevas regulaciones, fuerte competencia, etc."
            }
        }
    }

    /// Whether the category describes the organization itself
    pub fn is_internal(&self) -> bool {
        matches!(self, Category::Strengths | Category::Weaknesses)
    }

    /// Whether the category is favorable to the organization
    pub fn is_positive(&self) -> bool {
        matches!(self, Category::Strengths | Category::Opportunities)
    }

    /// The three categories an item filed here could be moved to
    pub fn others(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(move |c| c != self)
    }

    /// Parse a category from its key, English label or Spanish label
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strengths" | "fortalezas" => Some(Category::Strengths),
            "weaknesses" | "debilidades" => Some(Category::Weaknesses),
            "opportunities" | "oportunidades" => Some(Category::Opportunities),
            "threats" | "amenazas" => Some(Category::Threats),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrants() {
        assert!(Category::Strengths.is_internal() && Category::Strengths.is_positive());
        assert!(Category::Weaknesses.is_internal() && !Category::Weaknesses.is_positive());
        assert!(!Category::Opportunities.is_internal() && Category::Opportunities.is_positive());
        assert!(!Category::Threats.is_internal() && !Category::Threats.is_positive());
    }

    #[test]
    fn test_index_matches_all() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_others_excludes_self() {
        let others: Vec<_> = Category::Threats.others().collect();
        assert_eq!(
            others,
            vec![Category::Strengths, Category::Weaknesses, Category::Opportunities]
        );
    }

    #[test]
    fn test_parse_accepts_all_spellings() {
        assert_eq!(Category::parse("strengths"), Some(Category::Strengths));
        assert_eq!(Category::parse("Weaknesses"), Some(Category::Weaknesses));
        assert_eq!(Category::parse(" Oportunidades "), Some(Category::Opportunities));
        assert_eq!(Category::parse("AMENAZAS"), Some(Category::Threats));
        assert_eq!(Category::parse("risks"), None);
        assert!("risks".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_english_label() {
        let json = serde_json::to_string(&Category::Opportunities).unwrap();
        assert_eq!(json, "\"Opportunities\"");

        let parsed: Category = serde_json::from_str("\"Threats\"").unwrap();
        assert_eq!(parsed, Category::Threats);

        assert!(serde_json::from_str::<Category>("\"Risks\"").is_err());
    }
}
