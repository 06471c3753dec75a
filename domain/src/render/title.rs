//! Document title formatter

/// Derive a human-readable title from a document identifier.
///
/// `casual_leave_policy.md` becomes `Casual Leave Policy`: underscores turn
/// into spaces, one trailing `.txt`/`.md`/`.pdf` extension is dropped, and
/// the first letter of every word is upper-cased. Empty input yields an
/// empty string.
pub fn titleize_doc_id(doc_id: &str) -> String {
    let spaced = doc_id.replace('_', " ");

    let base = [".txt", ".md", ".pdf"]
        .iter()
        .find_map(|ext| spaced.strip_suffix(ext))
        .unwrap_or(&spaced);

    let mut out = String::with_capacity(base.len());
    let mut prev_was_word = false;
    for c in base.chars() {
        let is_word = c.is_alphanumeric();
        if is_word && !prev_was_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_was_word = is_word;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titleizes_snake_case_markdown_file() {
        assert_eq!(titleize_doc_id("casual_leave_policy.md"), "Casual Leave Policy");
    }

    #[test]
    fn drops_each_known_extension() {
        assert_eq!(titleize_doc_id("travel.pdf"), "Travel");
        assert_eq!(titleize_doc_id("benefits.txt"), "Benefits");
    }

    #[test]
    fn keeps_unknown_extension() {
        assert_eq!(titleize_doc_id("notes.doc"), "Notes.Doc");
    }

    #[test]
    fn drops_only_one_trailing_extension() {
        assert_eq!(titleize_doc_id("archive.md.txt"), "Archive.Md");
    }

    #[test]
    fn empty_id_yields_empty_title() {
        assert_eq!(titleize_doc_id(""), "");
    }

    #[test]
    fn words_after_digits_are_not_recapitalized() {
        // "401k" is one word run; only its first character is affected.
        assert_eq!(titleize_doc_id("401k_plan.md"), "401k Plan");
    }
}
