//! Citation snippet normalizer
//!
//! Retrieved excerpts arrive with ingestion artifacts: a `# policies/<path>`
//! source-path header, stray markdown marker runs, and doubled blank lines.
//! Rather than rendering that noise, the normalizer strips it so the preview
//! reads as plain prose.

/// Normalize a raw citation snippet into readable prose.
///
/// Applied in order: drop one leading `# policies/…` header line, delete any
/// run of two or more of `#`/`*`/`_`, collapse blank lines, trim. The result
/// contains no marker runs and no blank lines; empty input yields empty
/// output.
pub fn normalize_snippet(raw: &str) -> String {
    let text = strip_source_header(raw);

    // Delete marker runs of length >= 2; a lone marker is real content.
    let mut cleaned = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if is_marker(c) {
            let mut run = 1;
            while chars.peek().copied().is_some_and(is_marker) {
                chars.next();
                run += 1;
            }
            if run == 1 {
                cleaned.push(c);
            }
        } else {
            cleaned.push(c);
        }
    }

    // Collapse newline runs to a single newline.
    let mut out = String::with_capacity(cleaned.len());
    let mut prev_newline = false;
    for c in cleaned.chars() {
        if c == '\n' {
            if !prev_newline {
                out.push('\n');
            }
            prev_newline = true;
        } else {
            out.push(c);
            prev_newline = false;
        }
    }

    out.trim().to_string()
}

fn is_marker(c: char) -> bool {
    matches!(c, '#' | '*' | '_')
}

/// Strip one leading `# policies/<path>` header line, newline included.
///
/// Only a complete line counts: a headerless snippet, or one where the
/// marker line is the whole snippet without a trailing newline, passes
/// through untouched.
fn strip_source_header(text: &str) -> &str {
    let Some(rest) = text.strip_prefix('#') else {
        return text;
    };
    if !rest.trim_start_matches([' ', '\t']).starts_with("policies/") {
        return text;
    }
    match text.find('\n') {
        Some(idx) => &text[idx + 1..],
        None => text,
    }
}
