//! SWOT Analyzer
//!
//! Reviews the classification of a user's SWOT entries with a generative
//! model and returns a typed critique.
//!
//! # Architecture
//!
//! ```text
//! SwotInput → AnalysisRequest (prompt + schema) → LlmProvider → parser → AnalysisResult
//! ```
//!
//! # Key Features
//!
//! - **Fixed rubric prompt**: category definitions, output language and
//!   placeholders for empty quadrants are always the same
//! - **Schema-constrained output**: the service is asked for JSON of one
//!   declared shape
//! - **Local conformance check**: parsed results are validated instead of
//!   trusted
//! - **Opaque failures**: every failure reaches the caller as one fixed,
//!   localized message; the cause is logged
//!
//! # Example Usage
//!
//! ```no_run
//! use swot_analyzer::{Analyzer, AnalyzerConfig};
//! use swot_domain::{Category, SwotInput};
//! use swot_llm::GeminiProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = GeminiProvider::new("api-key", "gemini-2.5-flash");
//! let analyzer = Analyzer::new(provider, AnalyzerConfig::default());
//!
//! let input = SwotInput::default()
//!     .with(Category::Strengths, "Marca fuerte\nEquipo experimentado")
//!     .with(Category::Threats, "Mercados emergentes");
//!
//! let result = analyzer.analyze(&input).await?;
//! for (category, item) in result.misplaced() {
//!     println!("{} ({}) → {:?}", item.item, category, item.suggestion);
//! }
//! println!("{}", result.overall_feedback());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod parser;
mod prompt;
mod request;
mod schema;
mod session;


pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, ANALYSIS_FAILED_MESSAGE};
pub use prompt::{PromptBuilder, NO_INPUT_PLACEHOLDER};
pub use request::AnalysisRequest;
pub use schema::response_schema;
pub use session::{AnalysisSession, AnalysisState};
