//! LLM prompt engineering for span extraction

use serde_json::json;
use spanlift_domain::ExampleData;

/// Builds prompts for the LLM to extract labeled spans
pub struct PromptBuilder {
    prompt_description: String,
    text: String,
    examples: Vec<ExampleData>,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(prompt_description: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            prompt_description: prompt_description.into(),
            text: text.into(),
            examples: Vec::new(),
        }
    }

    /// Add few-shot examples to steer the model
    pub fn with_examples(mut self, examples: Vec<ExampleData>) -> Self {
        self.examples = examples;
        self
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Task description and format specification
        prompt.push_str(&self.prompt_description);
        prompt.push_str("\n\n");
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Few-shot examples
        if !self.examples.is_empty() {
            prompt.push_str("Examples:\n\n");
            for example in &self.examples {
                prompt.push_str("Text:\n");
                prompt.push_str(&example.text);
                prompt.push_str("\nExtractions:\n");
                prompt.push_str(&render_extractions(example));
                prompt.push_str("\n\n");
            }
        }

        // 3. The text to analyze
        prompt.push_str("Text to analyze:\n");
        prompt.push_str("---\n");
        prompt.push_str(&self.text);
        prompt.push_str("\n---\n\n");

        // 4. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

/// Render an example's expected answer in the same JSON shape the model
/// must produce
fn render_extractions(example: &ExampleData) -> String {
    let items: Vec<_> = example
        .extractions
        .iter()
        .map(|extraction| {
            json!({
                "extraction_class": extraction.extraction_class,
                "extraction_text": extraction.extraction_text,
            })
        })
        .collect();
    json!({ "extractions": items }).to_string()
}

const EXTRACTION_INSTRUCTIONS: &str = r#"Extract spans from the text below.
Each span must follow this format:

{
  "extraction_class": "class tag, e.g. person, event, location, date",
  "extraction_text": "the exact substring from the source text"
}

Rules:
- extraction_text must be copied verbatim from the source text, never paraphrased
- Report spans in the order they appear in the text
- One span per extracted item; do not merge distinct items
- Do not invent spans that are not present in the text"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (JSON only, no additional text):
{
  "extractions": [
    {"extraction_class": "class", "extraction_text": "exact text"}
  ]
}

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations."#;
