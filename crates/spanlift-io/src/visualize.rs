//! Standalone HTML reports for annotated documents

use crate::error::IoError;
use crate::jsonl::load_annotated_documents;
use askama::Template;
use spanlift_domain::{AnnotatedDocument, Extraction};
use std::path::Path;

/// Background colors cycled through for extraction classes
const PALETTE: [&str; 8] = [
    "#fde68a", "#bfdbfe", "#bbf7d0", "#fbcfe8", "#ddd6fe", "#fed7aa", "#a5f3fc", "#e5e7eb",
];

#[derive(Template)]
#[template(
    source = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Extraction report</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 60rem; margin: 2rem auto; padding: 0 1rem; color: #1f2937; }
h2 { font-size: 1rem; color: #6b7280; font-weight: normal; }
.legend span { display: inline-block; padding: 0.1rem 0.5rem; margin: 0 0.4rem 0.4rem 0; border-radius: 0.25rem; }
.text-panel { white-space: pre-wrap; border: 1px solid #e5e7eb; border-radius: 0.5rem; padding: 1rem; line-height: 1.7; }
.hl { border-radius: 0.2rem; padding: 0 0.1rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0 2rem; }
th, td { border: 1px solid #e5e7eb; padding: 0.4rem 0.6rem; text-align: left; }
th { background: #f9fafb; }
</style>
</head>
<body>
<h1>Extraction report</h1>
{% for doc in documents %}
<section>
<h2>{{ doc.document_id }}</h2>
<p class="legend">{% for entry in doc.legend %}<span style="background: {{ entry.color }}">{{ entry.label }}</span>{% endfor %}</p>
<div class="text-panel">{{ doc.body_html|safe }}</div>
{% if doc.rows.is_empty() %}
<p>No spans were extracted from this document.</p>
{% else %}
<table>
<tr><th>Class</th><th>Text</th><th>Position</th></tr>
{% for row in doc.rows %}
<tr><td><span class="hl" style="background: {{ row.color }}">{{ row.label }}</span></td><td>{{ row.text }}</td><td>{{ row.position }}</td></tr>
{% endfor %}
</table>
{% endif %}
</section>
{% endfor %}
</body>
</html>
"##,
    ext = "html"
)]
struct ReportTemplate {
    documents: Vec<DocumentView>,
}

struct DocumentView {
    document_id: String,
    legend: Vec<LegendEntry>,
    body_html: String,
    rows: Vec<ExtractionRow>,
}

struct LegendEntry {
    label: String,
    color: String,
}

struct ExtractionRow {
    label: String,
    color: String,
    text: String,
    position: String,
}

/// Render a persisted record file as a standalone HTML report.
///
/// Takes the nested `data.jsonl` path returned by `save_annotated_documents`.
pub fn visualize(records_path: &Path) -> Result<String, IoError> {
    let documents = load_annotated_documents(records_path)?;

    let views = documents.iter().map(document_view).collect();
    let template = ReportTemplate { documents: views };
    Ok(template.render()?)
}

fn document_view(document: &AnnotatedDocument) -> DocumentView {
    let palette = ClassPalette::from_extractions(&document.extractions);

    let legend = palette
        .classes
        .iter()
        .map(|class| LegendEntry {
            label: class.clone(),
            color: palette.color_for(class).to_string(),
        })
        .collect();

    let rows = document
        .extractions
        .iter()
        .map(|extraction| ExtractionRow {
            label: extraction.extraction_class.clone(),
            color: palette.color_for(&extraction.extraction_class).to_string(),
            text: extraction.extraction_text.clone(),
            position: match &extraction.char_interval {
                Some(interval) => format!("{}..{}", interval.start_pos, interval.end_pos),
                None => "unaligned".to_string(),
            },
        })
        .collect();

    DocumentView {
        document_id: document.document_id.clone(),
        legend,
        body_html: highlight_text(&document.text, &document.extractions, &palette),
        rows,
    }
}

/// Class-to-color assignment in first-appearance order
struct ClassPalette {
    classes: Vec<String>,
}

impl ClassPalette {
    fn from_extractions(extractions: &[Extraction]) -> Self {
        let mut classes: Vec<String> = Vec::new();
        for extraction in extractions {
            if !classes.contains(&extraction.extraction_class) {
                classes.push(extraction.extraction_class.clone());
            }
        }
        Self { classes }
    }

    fn color_for(&self, class: &str) -> &'static str {
        let idx = self
            .classes
            .iter()
            .position(|c| c == class)
            .unwrap_or(0);
        PALETTE[idx % PALETTE.len()]
    }
}

/// Render the source text with aligned spans wrapped in highlight markup.
///
/// Spans are sorted by start position; overlapping spans keep the first one
/// and drop the rest so the markup stays well-formed.
fn highlight_text(text: &str, extractions: &[Extraction], palette: &ClassPalette) -> String {
    let chars: Vec<char> = text.chars().collect();

    let mut spans: Vec<(usize, usize, &str)> = extractions
        .iter()
        .filter_map(|extraction| {
            extraction.char_interval.as_ref().and_then(|interval| {
                if interval.is_empty() || interval.end_pos > chars.len() {
                    None
                } else {
                    Some((
                        interval.start_pos,
                        interval.end_pos,
                        extraction.extraction_class.as_str(),
                    ))
                }
            })
        })
        .collect();
    spans.sort_by_key(|&(start, end, _)| (start, end));

    let mut html = String::new();
    let mut cursor = 0usize;
    for (start, end, class) in spans {
        if start < cursor {
            continue; // overlaps the previous span
        }
        html.push_str(&escape_html(&collect_range(&chars, cursor, start)));
        html.push_str(&format!(
            r#"<span class="hl" style="background: {}" title="{}">"#,
            palette.color_for(class),
            escape_html(class)
        ));
        html.push_str(&escape_html(&collect_range(&chars, start, end)));
        html.push_str("</span>");
        cursor = end;
    }
    html.push_str(&escape_html(&collect_range(&chars, cursor, chars.len())));
    html
}

fn collect_range(chars: &[char], start: usize, end: usize) -> String {
    chars[start..end].iter().collect()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
