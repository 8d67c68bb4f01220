//! Data-quality rules for analysis results
//!
//! The response schema only constrains what the generation service emits.
//! A syntactically valid response can still be illogical, e.g. suggesting
//! that an item move to the category it already sits in. These rules are
//! checked locally after parsing.

use crate::{AnalysisResult, Category};

/// A rule violated by a parsed analysis result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConformanceIssue {
    /// An item judged correct carries a recategorization suggestion
    SuggestionOnCorrectItem {
        /// Category the item was filed under
        category: Category,
        /// Position of the item in its category
        index: usize,
    },

    /// An item is suggested to move to the category it is already in
    SelfSuggestion {
        /// Category the item was filed under
        category: Category,
        /// Position of the item in its category
        index: usize,
    },

    /// An item judged incorrect has no reasoning
    MissingReasoning {
        /// Category the item was filed under
        category: Category,
        /// Position of the item in its category
        index: usize,
    },

    /// An item has blank text
    EmptyItemText {
        /// Category the item was filed under
        category: Category,
        /// Position of the item in its category
        index: usize,
    },

    /// The overall feedback is blank
    EmptyOverallFeedback,
}

impl ConformanceIssue {
    /// Whether normalization can repair the issue by dropping a suggestion
    pub fn is_repairable(&self) -> bool {
        matches!(
            self,
            ConformanceIssue::SuggestionOnCorrectItem { .. } | ConformanceIssue::SelfSuggestion { .. }
        )
    }
}

impl std::fmt::Display for ConformanceIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConformanceIssue::SuggestionOnCorrectItem { category, index } => write!(
                f,
                "{}[{}] is marked correct but carries a suggestion",
                category.key(),
                index
            ),
            ConformanceIssue::SelfSuggestion { category, index } => write!(
                f,
                "{}[{}] suggests moving to its own category",
                category.key(),
                index
            ),
            ConformanceIssue::MissingReasoning { category, index } => write!(
                f,
                "{}[{}] is marked incorrect without reasoning",
                category.key(),
                index
            ),
            ConformanceIssue::EmptyItemText { category, index } => {
                write!(f, "{}[{}] has empty item text", category.key(), index)
            }
            ConformanceIssue::EmptyOverallFeedback => f.write_str("overallFeedback is empty"),
        }
    }
}

impl AnalysisResult {
    /// Check every rule, returning all violations found
    pub fn conformance_issues(&self) -> Vec<ConformanceIssue> {
        let mut issues = Vec::new();

        for (category, analysis) in self.iter() {
            for (index, item) in analysis.items.iter().enumerate() {
                if item.item.trim().is_empty() {
                    issues.push(ConformanceIssue::EmptyItemText { category, index });
                }
                match item.suggestion {
                    Some(_) if item.is_correct => {
                        issues.push(ConformanceIssue::SuggestionOnCorrectItem { category, index });
                    }
                    Some(target) if target == category => {
                        issues.push(ConformanceIssue::SelfSuggestion { category, index });
                    }
                    _ => {}
                }
                if !item.is_correct && item.reasoning.trim().is_empty() {
                    issues.push(ConformanceIssue::MissingReasoning { category, index });
                }
            }
        }

        if self.overall_feedback().trim().is_empty() {
            issues.push(ConformanceIssue::EmptyOverallFeedback);
        }

        issues
    }

    /// Whether the result satisfies every rule
    pub fn is_conformant(&self) -> bool {
        self.conformance_issues().is_empty()
    }

    /// Drop suggestions that violate the rules
    ///
    /// Returns the repaired result and every issue found before repair,
    /// including the ones normalization cannot fix.
    pub fn normalized(mut self) -> (Self, Vec<ConformanceIssue>) {
        let issues = self.conformance_issues();

        for issue in &issues {
            if let ConformanceIssue::SuggestionOnCorrectItem { category, index }
            | ConformanceIssue::SelfSuggestion { category, index } = *issue
            {
                if let Some(item) = self.category_mut(category).items.get_mut(index) {
                    item.suggestion = None;
                }
            }
        }

        (self, issues)
    }
}
