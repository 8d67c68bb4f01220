//! Analysis result types
//!
//! These types mirror the JSON shape the generation service is asked to emit:
//!
//! ```text
//! {
//!   "strengths":     { "items": [ { "item", "isCorrect", "reasoning", "suggestion"? } ] },
//!   "weaknesses":    { "items": [...] },
//!   "opportunities": { "items": [...] },
//!   "threats":       { "items": [...] },
//!   "overallFeedback": "..."
//! }
//! ```
//!
//! In memory the four categories are held as one table indexed by
//! [`Category`]; the named wire fields only exist at the serde boundary.

use crate::Category;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

const SUGGESTION_LABELS: &[&str] = &["Strengths", "Weaknesses", "Opportunities", "Threats"];

/// Verdict for one entry of the user's input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisItem {
    /// The entry as the model segmented it
    pub item: String,

    /// Whether the entry sits in the right category
    pub is_correct: bool,

    /// Explanation of the verdict
    pub reasoning: String,

    /// Category the entry should move to, only for incorrect entries
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_suggestion"
    )]
    pub suggestion: Option<Category>,
}

impl AnalysisItem {
    /// An entry the model judged correctly placed
    pub fn correct(item: impl Into<String>, reasoning: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            is_correct: true,
            reasoning: reasoning.into(),
            suggestion: None,
        }
    }

    /// An entry the model judged misplaced
    pub fn incorrect(
        item: impl Into<String>,
        reasoning: impl Into<String>,
        suggestion: Option<Category>,
    ) -> Self {
        Self {
            item: item.into(),
            is_correct: false,
            reasoning: reasoning.into(),
            suggestion,
        }
    }
}

/// A blank suggestion reads as no suggestion; anything else must be one of
/// the four English labels.
fn deserialize_suggestion<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(label) => Category::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .map(Some)
            .ok_or_else(|| de::Error::unknown_variant(label, SUGGESTION_LABELS)),
    }
}

/// Ordered verdicts for one category, in the model's emission order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisCategory {
    /// Verdicts for each entry of the category
    pub items: Vec<AnalysisItem>,
}

impl AnalysisCategory {
    /// Wrap a list of verdicts
    pub fn new(items: Vec<AnalysisItem>) -> Self {
        Self { items }
    }

    /// Whether the category holds no entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of entries judged correctly placed
    pub fn correct_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_correct).count()
    }

    /// Number of entries judged misplaced
    pub fn incorrect_count(&self) -> usize {
        self.len() - self.correct_count()
    }
}

/// Full critique of one SWOT submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireResult", into = "WireResult")]
pub struct AnalysisResult {
    categories: [AnalysisCategory; 4],
    overall_feedback: String,
}

impl AnalysisResult {
    /// A result with four empty categories
    pub fn new(overall_feedback: impl Into<String>) -> Self {
        Self {
            categories: Default::default(),
            overall_feedback: overall_feedback.into(),
        }
    }

    /// Builder-style replacement of one category
    pub fn with_category(mut self, category: Category, analysis: AnalysisCategory) -> Self {
        self.categories[category.index()] = analysis;
        self
    }

    /// Verdicts for a category
    pub fn category(&self, category: Category) -> &AnalysisCategory {
        &self.categories[category.index()]
    }

    pub(crate) fn category_mut(&mut self, category: Category) -> &mut AnalysisCategory {
        &mut self.categories[category.index()]
    }

    /// All categories in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &AnalysisCategory)> {
        Category::ALL.into_iter().zip(self.categories.iter())
    }

    /// Summary of the submission's quality
    pub fn overall_feedback(&self) -> &str {
        &self.overall_feedback
    }

    /// Number of entries across all categories
    pub fn total_items(&self) -> usize {
        self.categories.iter().map(AnalysisCategory::len).sum()
    }

    /// Misplaced entries together with the category they were filed under
    pub fn misplaced(&self) -> impl Iterator<Item = (Category, &AnalysisItem)> {
        self.iter()
            .flat_map(|(category, analysis)| analysis.items.iter().map(move |i| (category, i)))
            .filter(|(_, item)| !item.is_correct)
    }
}

/// Named-field shape used on the wire
#[derive(Clone, Serialize, Deserialize)]
struct WireResult {
    strengths: AnalysisCategory,
    weaknesses: AnalysisCategory,
    opportunities: AnalysisCategory,
    threats: AnalysisCategory,
    #[serde(rename = "overallFeedback")]
    overall_feedback: String,
}

impl From<WireResult> for AnalysisResult {
    fn from(wire: WireResult) -> Self {
        Self {
            categories: [wire.strengths, wire.weaknesses, wire.opportunities, wire.threats],
            overall_feedback: wire.overall_feedback,
        }
    }
}

impl From<AnalysisResult> for WireResult {
    fn from(result: AnalysisResult) -> Self {
        let [strengths, weaknesses, opportunities, threats] = result.categories;
        Self {
            strengths,
            weaknesses,
            opportunities,
            threats,
            overall_feedback: result.overall_feedback,
        }
    }
}
