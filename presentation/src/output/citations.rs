//! Citation view models
//!
//! Turns raw citations into what the panel actually shows: a readable title,
//! a normalized preview, a page label, and the per-citation disclosure flag.
//! Identity is the domain's `(doc_id, rank)` key, so the flag of one
//! citation never bleeds into another even when doc ids repeat.

use policyq_domain::{Citation, CitationKey, normalize_snippet, titleize_doc_id};

/// Shown in place of the citation list when an answer cites nothing.
pub const NO_CITATIONS_NOTICE: &str = "No specific references used in this response.";

/// Everything the panel needs to render one citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationView {
    pub key: CitationKey,
    pub title: String,
    pub preview: String,
    pub page_label: String,
    pub expanded: bool,
}

/// Build view models for a citation list, in relevance order.
///
/// `is_expanded` supplies the disclosure flag per identity key; pass
/// `|_| false` for surfaces without disclosure state.
pub fn build_citation_views(
    citations: &[Citation],
    is_expanded: impl Fn(&CitationKey) -> bool,
) -> Vec<CitationView> {
    citations
        .iter()
        .enumerate()
        .map(|(rank, citation)| {
            let key = CitationKey::new(citation.doc_id.clone(), rank);
            let expanded = is_expanded(&key);
            CitationView {
                title: titleize_doc_id(&citation.doc_id),
                preview: normalize_snippet(&citation.snippet),
                page_label: match citation.page {
                    Some(page) => format!("Page {}", page),
                    None => "Relevant section".to_string(),
                },
                expanded,
                key,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_combines_title_preview_and_label() {
        let citations = vec![
            Citation::new(
                "casual_leave_policy.md",
                "# policies/leave.md\nEmployees receive 12 days annually.",
            )
            .with_page(3),
        ];

        let views = build_citation_views(&citations, |_| false);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].title, "Casual Leave Policy");
        assert_eq!(views[0].preview, "Employees receive 12 days annually.");
        assert_eq!(views[0].page_label, "Page 3");
        assert!(!views[0].expanded);
    }

    #[test]
    fn missing_page_gets_generic_label() {
        let citations = vec![Citation::new("travel_policy.md", "Some excerpt")];
        let views = build_citation_views(&citations, |_| false);
        assert_eq!(views[0].page_label, "Relevant section");
    }

    #[test]
    fn duplicate_doc_ids_expand_independently() {
        let citations = vec![
            Citation::new("leave_policy.md", "first"),
            Citation::new("leave_policy.md", "second"),
        ];

        let only_second = CitationKey::new("leave_policy.md", 1);
        let views = build_citation_views(&citations, |key| *key == only_second);
        assert!(!views[0].expanded);
        assert!(views[1].expanded);
    }

    #[test]
    fn empty_list_builds_no_views() {
        assert!(build_citation_views(&[], |_| false).is_empty());
    }
}
