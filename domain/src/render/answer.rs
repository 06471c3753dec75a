//! Markdown-lite answer formatter
//!
//! The backend emits answers in a small markdown subset: paragraphs separated
//! by blank lines, `**bold**` emphasis, and "policy reference" sections marked
//! by a literal `**Policy Reference:**` token. Anything else is plain text.
//!
//! Formatting is an explicit two-pass scan — block segmentation first, then
//! an inline marker scan per block — so the unterminated-marker edge case is
//! deterministic instead of an artifact of regex backtracking.

use serde::{Deserialize, Serialize};

/// The token that classifies a block as a policy reference section.
pub const POLICY_REFERENCE_TOKEN: &str = "**Policy Reference:**";

/// An inline run of text within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Span {
    /// Literal text, rendered as-is.
    Text(String),
    /// Emphasized text with its `**` markers already stripped.
    Bold(String),
}

impl Span {
    /// The displayable text of this span (markers absent either way).
    pub fn text(&self) -> &str {
        match self {
            Span::Text(s) | Span::Bold(s) => s,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Span::Bold(_))
    }
}

/// A displayable segment of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A prose paragraph: one sequence of inline spans.
    Paragraph { spans: Vec<Span> },
    /// A policy reference section: each source line renders as its own row.
    PolicyReference { lines: Vec<Vec<Span>> },
}

impl Block {
    /// Reconstruct the displayable text of this block, newline-joined for
    /// policy reference rows. Equals the source text minus `**` delimiters.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph { spans } => spans.iter().map(Span::text).collect(),
            Block::PolicyReference { lines } => lines
                .iter()
                .map(|line| line.iter().map(Span::text).collect::<String>())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Format an answer body into displayable blocks.
///
/// Empty input yields an empty sequence; the caller decides whether that
/// means "render nothing" or a placeholder.
pub fn format_answer(text: &str) -> Vec<Block> {
    split_blocks(text)
        .into_iter()
        .map(|piece| {
            if piece.contains(POLICY_REFERENCE_TOKEN) {
                Block::PolicyReference {
                    lines: piece.split('\n').map(scan_spans).collect(),
                }
            } else {
                Block::Paragraph {
                    spans: scan_spans(piece),
                }
            }
        })
        .collect()
}

/// Split text on runs of two or more newlines, preserving order.
///
/// Pieces that end up empty (leading/trailing blank lines) are skipped; they
/// carry no displayable characters.
fn split_blocks(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\n' {
            let mut j = i;
            while j < bytes.len() && bytes[j] == b'\n' {
                j += 1;
            }
            if j - i >= 2 {
                if i > start {
                    pieces.push(&text[start..i]);
                }
                start = j;
            }
            i = j;
        } else {
            i += 1;
        }
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

/// Scan one line or paragraph into alternating plain and bold spans.
///
/// A bold run is a maximal `**…**` substring with no inner `**`. Edge cases:
/// - an unterminated `**` has no closing pair, so everything from it onward
///   stays plain text;
/// - `****` (zero-width content) is treated as plain text, not an empty
///   emphasis span;
/// - a run may cross a single newline inside a paragraph (block splitting
///   only happens on blank lines). Policy reference blocks scan each line
///   separately, so markers never pair across their rows.
fn scan_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while let Some(rel) = text[pos..].find("**") {
        let open = pos + rel;
        let body_start = open + 2;
        match text[body_start..].find("**") {
            Some(0) => {
                // "****": nothing between the markers, keep them literal and
                // resume scanning after the second pair.
                pos = body_start + 2;
            }
            Some(body_len) => {
                let close = body_start + body_len;
                if open > plain_start {
                    spans.push(Span::Text(text[plain_start..open].to_string()));
                }
                spans.push(Span::Bold(text[body_start..close].to_string()));
                plain_start = close + 2;
                pos = plain_start;
            }
            None => break,
        }
    }

    if plain_start < text.len() {
        spans.push(Span::Text(text[plain_start..].to_string()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(blocks: &[Block]) -> String {
        blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    #[test]
    fn plain_text_is_single_paragraph() {
        let blocks = format_answer("You get 12 days of casual leave.");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                spans: vec![Span::Text("You get 12 days of casual leave.".to_string())],
            }]
        );
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(format_answer("").is_empty());
    }

    #[test]
    fn blank_lines_split_paragraphs_in_order() {
        let blocks = format_answer("First.\n\nSecond.\n\n\n\nThird.");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].plain_text(), "First.");
        assert_eq!(blocks[1].plain_text(), "Second.");
        assert_eq!(blocks[2].plain_text(), "Third.");
    }

    #[test]
    fn bold_run_strips_markers() {
        let blocks = format_answer("You get **12 days**.");
        let Block::Paragraph { spans } = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(
            spans,
            &vec![
                Span::Text("You get ".to_string()),
                Span::Bold("12 days".to_string()),
                Span::Text(".".to_string()),
            ]
        );
    }

    #[test]
    fn multiple_bold_runs_alternate() {
        let blocks = format_answer("**a** and **b**");
        let Block::Paragraph { spans } = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(
            spans,
            &vec![
                Span::Bold("a".to_string()),
                Span::Text(" and ".to_string()),
                Span::Bold("b".to_string()),
            ]
        );
    }

    #[test]
    fn unterminated_marker_stays_plain() {
        let blocks = format_answer("Notice period is **30 days with extras");
        let Block::Paragraph { spans } = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(
            spans,
            &vec![Span::Text(
                "Notice period is **30 days with extras".to_string()
            )]
        );
    }

    #[test]
    fn trailing_fragment_after_balanced_pair_stays_plain() {
        let blocks = format_answer("**bold** then ** dangling");
        assert_eq!(blocks[0].plain_text(), "bold then ** dangling");
    }

    #[test]
    fn zero_width_bold_is_plain_text() {
        // Documented policy: "****" never becomes an empty emphasis span.
        let blocks = format_answer("before **** after");
        let Block::Paragraph { spans } = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(spans, &vec![Span::Text("before **** after".to_string())]);
    }

    #[test]
    fn bold_run_crosses_single_newline_within_paragraph() {
        // A lone newline does not end a paragraph, so it does not end a
        // bold run either.
        let blocks = format_answer("see **leave\npolicy** for details");
        let Block::Paragraph { spans } = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(
            spans,
            &vec![
                Span::Text("see ".to_string()),
                Span::Bold("leave\npolicy".to_string()),
                Span::Text(" for details".to_string()),
            ]
        );
    }

    #[test]
    fn markers_never_pair_across_policy_reference_rows() {
        let text = "**Policy Reference:**\n- **Leave\n- Policy** page 2";
        let blocks = format_answer(text);
        let Block::PolicyReference { lines } = &blocks[0] else {
            panic!("expected policy reference block");
        };
        // Each row is scanned on its own, so both dangling markers survive.
        assert_eq!(lines[1], vec![Span::Text("- **Leave".to_string())]);
        assert_eq!(lines[2], vec![Span::Text("- Policy** page 2".to_string())]);
    }

    #[test]
    fn policy_reference_block_has_one_row_per_line() {
        let text = "**Policy Reference:**\n- **Leave Policy** section 2\n- Travel Policy page 4";
        let blocks = format_answer(text);
        assert_eq!(blocks.len(), 1);
        let Block::PolicyReference { lines } = &blocks[0] else {
            panic!("expected policy reference block");
        };
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], vec![Span::Bold("Policy Reference:".to_string())]);
        assert_eq!(
            lines[1],
            vec![
                Span::Text("- ".to_string()),
                Span::Bold("Leave Policy".to_string()),
                Span::Text(" section 2".to_string()),
            ]
        );
        assert_eq!(
            lines[2],
            vec![Span::Text("- Travel Policy page 4".to_string())]
        );
    }

    #[test]
    fn mixed_answer_classifies_each_block_independently() {
        let text = "You get 12 days.\n\n**Policy Reference:**\nLeave Policy";
        let blocks = format_answer(text);
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], Block::Paragraph { .. }));
        assert!(matches!(blocks[1], Block::PolicyReference { .. }));
    }

    #[test]
    fn reconstruction_loses_only_markers() {
        let text = "Intro with **bold** text.\n\n**Policy Reference:**\n- **Doc** p.2";
        let blocks = format_answer(text);
        let expected = text.replace("**", "");
        assert_eq!(reconstruct(&blocks), expected);
    }

    #[test]
    fn reconstruction_keeps_unpaired_markers() {
        let text = "odd ** marker count ** here **";
        let blocks = format_answer(text);
        // One balanced pair is consumed; the dangling third marker survives.
        assert_eq!(reconstruct(&blocks), "odd  marker count  here **");
    }

    #[test]
    fn leading_and_trailing_blank_lines_drop_no_content() {
        let blocks = format_answer("\n\nOnly paragraph\n\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].plain_text(), "Only paragraph");
    }
}
