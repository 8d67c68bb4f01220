//! LLM prompt engineering for SWOT classification review

use swot_domain::{Category, SwotInput};

/// Substituted for a quadrant the user left blank
pub const NO_INPUT_PLACEHOLDER: &str = "No se proporcionó ninguna entrada.";

/// Builds the review prompt for one submission
pub struct PromptBuilder<'a> {
    input: &'a SwotInput,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(input: &'a SwotInput) -> Self {
        Self { input }
    }

    /// Build the complete review prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Role and task
        prompt.push_str(REVIEW_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Fixed rubric
        prompt.push_str("Aquí están las definiciones a utilizar para tu análisis:\n");
        for category in Category::ALL {
            prompt.push_str(&format!(
                "- {} ({}): {}\n",
                category.spanish_label(),
                category.label(),
                category.definition()
            ));
        }
        prompt.push('\n');

        // 3. The user's quadrants
        prompt.push_str(INPUT_INTRODUCTION);
        prompt.push_str("\n\n");
        for category in Category::ALL {
            prompt.push_str(&format!("{}:\n", category.spanish_label()));
            prompt.push_str(self.quadrant_text(category));
            prompt.push_str("\n\n");
        }

        // 4. Output contract
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }

    fn quadrant_text(&self, category: Category) -> &str {
        if self.input.is_blank(category) {
            NO_INPUT_PLACEHOLDER
        } else {
            self.input.get(category).trim()
        }
    }
}

const REVIEW_INSTRUCTIONS: &str = "Eres un estratega de negocios experto especializado en análisis FODA. \
Tu tarea es evaluar la corrección del análisis FODA enviado por un usuario. \
Identifica los elementos colocados en la categoría incorrecta y proporciona comentarios claros y concisos en español.";

const INPUT_INTRODUCTION: &str = "Analiza la entrada del usuario a continuación, que se proporciona como listas \
separadas por saltos de línea para cada categoría. Si una categoría está vacía, analízala como tal.";

const OUTPUT_FORMAT_REMINDER: &str = r#"Proporciona tu análisis en el formato JSON estructurado que he especificado.
- Para cada elemento, indica si es correcto (isCorrect: true) y explica brevemente por qué (reasoning).
- Si es incorrecto, proporciona una razón y sugiere la categoría correcta (suggestion: 'Strengths', 'Weaknesses', 'Opportunities' o 'Threats'). La sugerencia debe ser una de las otras tres categorías, nunca la categoría en la que ya está el elemento.
- Si el elemento es correcto, no incluyas 'suggestion'.
- Si un usuario no proporcionó elementos para una categoría, devuelve un array 'items' vacío para ella; no omitas la categoría.
- Además, proporciona un breve comentario general sobre el análisis (overallFeedback).
- Toda la salida de texto (reasoning, overallFeedback) debe estar en español, sin importar el idioma de la entrada."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_quadrant_text() {
        let input = SwotInput::new(
            "Marca fuerte\nEquipo experimentado",
            "Costos operativos altos",
            "Mercados emergentes",
            "Competencia intensa",
        );
        let prompt = PromptBuilder::new(&input).build();

        assert!(prompt.contains("Fortalezas:\nMarca fuerte\nEquipo experimentado\n"));
        assert!(prompt.contains("Debilidades:\nCostos operativos altos\n"));
        assert!(prompt.contains("Oportunidades:\nMercados emergentes\n"));
        assert!(prompt.contains("Amenazas:\nCompetencia intensa\n"));
        assert!(!prompt.contains(NO_INPUT_PLACEHOLDER));
    }

    #[test]
    fn test_all_blank_uses_placeholder_everywhere() {
        let input = SwotInput::new("", "   ", "\n", "\t");
        let prompt = PromptBuilder::new(&input).build();

        assert_eq!(prompt.matches(NO_INPUT_PLACEHOLDER).count(), 4);
        for category in Category::ALL {
            let header = format!("{}:\n{}", category.spanish_label(), NO_INPUT_PLACEHOLDER);
            assert!(prompt.contains(&header), "missing placeholder for {}", category);
            let raw_empty = format!("{}:\n\n", category.spanish_label());
            assert!(!prompt.contains(&raw_empty));
        }
    }

    #[test]
    fn test_partial_input_only_fills_blank_quadrants() {
        let input = SwotInput::default().with(Category::Strengths, "Marca fuerte");
        let prompt = PromptBuilder::new(&input).build();

        assert!(prompt.contains("Fortalezas:\nMarca fuerte"));
        assert_eq!(prompt.matches(NO_INPUT_PLACEHOLDER).count(), 3);
    }

    #[test]
    fn test_prompt_states_every_definition() {
        let prompt = PromptBuilder::new(&SwotInput::default()).build();
        for category in Category::ALL {
            assert!(prompt.contains(category.definition()));
            assert!(prompt.contains(category.label()));
        }
        assert!(prompt.contains("internos y positivos"));
        assert!(prompt.contains("internos y negativos"));
        assert!(prompt.contains("externos y positivos"));
        assert!(prompt.contains("externos y negativos"));
    }

    #[test]
    fn test_prompt_fixes_output_language_and_contract() {
        let prompt = PromptBuilder::new(&SwotInput::default()).build();
        assert!(prompt.contains("debe estar en español"));
        assert!(prompt.contains("isCorrect"));
        assert!(prompt.contains("suggestion"));
        assert!(prompt.contains("overallFeedback"));
        assert!(prompt.contains("otras tres categorías"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let input = SwotInput::new("a", "b", "c", "d");
        assert_eq!(PromptBuilder::new(&input).build(), PromptBuilder::new(&input).build());
    }
}
