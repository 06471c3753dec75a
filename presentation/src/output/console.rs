//! Console output formatter for answers

use crate::output::citations::{CitationView, NO_CITATIONS_NOTICE};
use colored::Colorize;
use policyq_domain::{format_answer, truncate_str, Answer, Block, Confidence, Span};

/// Escalation notice rendered after every answer.
pub const ESCALATION_NOTICE: &str =
    "Can't find an answer? Contact HR: hr@abc.example or the Teams/Slack HR channel.";

/// Force colored output on or off, overriding terminal detection.
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Rendering knobs the formatter cannot decide for itself.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Collapsed citation previews are cut to this many bytes.
    pub preview_bytes: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { preview_bytes: 240 }
    }
}

/// Formats answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete answer view: badge, body blocks, disclaimer,
    /// citation panel, escalation notice.
    pub fn format(answer: &Answer, citations: &[CitationView], opts: &RenderOptions) -> String {
        let mut output = String::new();

        // Header with confidence badge
        output.push_str(&format!(
            "{}  [{}]\n{}\n",
            "Answer".bold(),
            Self::badge(answer.confidence),
            "-".repeat(40)
        ));

        for block in format_answer(&answer.text) {
            match block {
                Block::Paragraph { spans } => {
                    output.push_str(&Self::render_spans(&spans, false));
                    output.push('\n');
                    output.push('\n');
                }
                Block::PolicyReference { lines } => {
                    for line in &lines {
                        output.push_str(&format!(
                            "  {} {}\n",
                            "|".cyan(),
                            Self::render_spans(line, true)
                        ));
                    }
                    output.push('\n');
                }
            }
        }

        if let Some(disclaimer) = &answer.disclaimer {
            output.push_str(&format!("{} {}\n\n", "Disclaimer:".yellow().bold(), disclaimer));
        }

        output.push_str(&Self::citations_section(citations, opts));

        output.push_str(&format!("\n{}\n", ESCALATION_NOTICE.dimmed()));
        output
    }

    /// Format as JSON
    pub fn format_json(answer: &Answer) -> String {
        serde_json::to_string_pretty(answer).unwrap_or_else(|_| "{}".to_string())
    }

    fn badge(confidence: Confidence) -> String {
        let label = confidence.badge();
        match confidence {
            Confidence::High => label.green().bold().to_string(),
            Confidence::Medium => label.yellow().bold().to_string(),
            Confidence::Low => label.dimmed().bold().to_string(),
            Confidence::Unknown => label.dimmed().to_string(),
        }
    }

    fn render_spans(spans: &[Span], brand: bool) -> String {
        let mut out = String::new();
        for span in spans {
            match span {
                Span::Text(text) => out.push_str(text),
                Span::Bold(text) => {
                    if brand {
                        out.push_str(&text.cyan().bold().to_string());
                    } else {
                        out.push_str(&text.bold().to_string());
                    }
                }
            }
        }
        out
    }

    fn citations_section(views: &[CitationView], opts: &RenderOptions) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n{}\n",
            "Policy References".cyan().bold(),
            "-".repeat(40)
        ));

        if views.is_empty() {
            output.push_str(&format!("{}\n", NO_CITATIONS_NOTICE.dimmed()));
            return output;
        }

        for (index, view) in views.iter().enumerate() {
            output.push_str(&format!(
                "{}. {}  [{}]\n",
                index + 1,
                view.title.bold(),
                view.page_label.dimmed()
            ));

            let preview = if view.expanded {
                view.preview.clone()
            } else {
                let cut = truncate_str(&view.preview, opts.preview_bytes);
                if cut.len() < view.preview.len() {
                    format!("{}...", cut)
                } else {
                    cut.to_string()
                }
            };
            if !preview.is_empty() {
                output.push_str(&Self::indent(&preview, "   "));
                output.push('\n');
            }
        }
        output
    }

    /// Indent a multi-line string
    fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
