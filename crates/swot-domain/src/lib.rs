//! SWOT Domain Layer
//!
//! Core vocabulary of the SWOT classification reviewer: the four categories,
//! the user's input, the typed analysis result returned by the model, and the
//! trait boundary towards generation services.
//!
//! ## Key Concepts
//!
//! - **Category**: one of the four fixed SWOT buckets, used both as an input
//!   grouping and as the domain of recategorization suggestions
//! - **SwotInput**: four free-text blocks, one per category
//! - **AnalysisResult**: per-item verdicts for every category plus an overall
//!   feedback string
//! - **Conformance**: data-quality rules a parsed result must satisfy
//!
//! ## Architecture
//!
//! Pure types and rules only. Network providers live in `swot-llm` and the
//! request pipeline lives in `swot-analyzer`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod category;
pub mod conformance;
pub mod input;
pub mod traits;

// Re-exports for convenience
pub use analysis::{AnalysisCategory, AnalysisItem, AnalysisResult};
pub use category::Category;
pub use conformance::ConformanceIssue;
pub use input::SwotInput;
