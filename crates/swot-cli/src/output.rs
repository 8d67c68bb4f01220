//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use swot_domain::{AnalysisCategory, AnalysisItem, AnalysisResult, Category};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Shown under a category the model returned no items for
pub const EMPTY_CATEGORY_MESSAGE: &str = "No se proporcionaron elementos para esta categoría.";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis result.
    pub fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Text => Ok(self.format_result_text(result)),
        }
    }

    fn format_result_text(&self, result: &AnalysisResult) -> String {
        let mut out = String::new();

        out.push_str(&self.colorize("Resultados del Análisis", "bold"));
        out.push_str("\n\n");

        for (category, analysis) in result.iter() {
            self.push_category(&mut out, category, analysis);
            out.push('\n');
        }

        out.push_str(&self.summary_table(result));
        out.push_str("\n\n");

        let feedback = result.overall_feedback().trim();
        if !feedback.is_empty() {
            out.push_str(&self.colorize("Comentarios Generales", "bold"));
            out.push('\n');
            out.push_str(feedback);
            out.push('\n');
        }

        out
    }

    fn push_category(&self, out: &mut String, category: Category, analysis: &AnalysisCategory) {
        out.push_str(&self.colorize(category.spanish_label(), category_color(category)));
        out.push('\n');

        if analysis.is_empty() {
            out.push_str(&format!("  {}\n", EMPTY_CATEGORY_MESSAGE));
            return;
        }

        for item in &analysis.items {
            self.push_item(out, item);
        }
    }

    fn push_item(&self, out: &mut String, item: &AnalysisItem) {
        let mark = if item.is_correct {
            self.colorize("✔", "green")
        } else {
            self.colorize("✘", "red")
        };
        out.push_str(&format!("  {} {}\n", mark, item.item));

        if !item.reasoning.is_empty() {
            out.push_str(&format!("    {}\n", item.reasoning));
        }

        if let (false, Some(target)) = (item.is_correct, item.suggestion) {
            let hint = format!("Sugerencia: Mover a {}", target.spanish_label());
            out.push_str(&format!("    {}\n", self.colorize(&hint, "yellow")));
        }
    }

    /// Correct/incorrect counts per category.
    fn summary_table(&self, result: &AnalysisResult) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Categoría", "Correctos", "Incorrectos"]);

        for (category, analysis) in result.iter() {
            builder.push_record([
                category.spanish_label().to_string(),
                analysis.correct_count().to_string(),
                analysis.incorrect_count().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "bold" => text.bold().to_string(),
            _ => text.to_string(),
        }
    }
}

fn category_color(category: Category) -> &'static str {
    match category {
        Category::Strengths => "green",
        Category::Weaknesses => "red",
        Category::Opportunities => "blue",
        Category::Threats => "yellow",
    }
}
