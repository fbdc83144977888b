//! Search and tag filtering over record collections.
//!
//! Every list screen applies the same shape of query: a free-text search
//! term matched case-insensitively against the record's title (and
//! description when present), plus an optional exact-match tag constraint.
//! Filtering is a pure, stable subsequence selection; there is no ranking
//! and no incremental index, the result is recomputed fully per query.

use crate::types::{Project, Template, TopVideo, VideoSummary};
use serde::{Deserialize, Serialize};

/// Tag constraint attached to a query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TagFilter {
    /// Match every record regardless of tag.
    #[default]
    All,
    /// Match records whose tag equals the value exactly (case-sensitive).
    Tag(String),
}

/// A screen's current search term and tag constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Query {
    /// Free-text search term; empty matches everything.
    pub search: String,
    /// Tag constraint; `All` matches everything.
    pub tag: TagFilter,
}

impl Query {
    /// Build a query with a search term and no tag constraint.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            tag: TagFilter::All,
        }
    }

    /// Build a query with a tag constraint and no search term.
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            search: String::new(),
            tag: TagFilter::Tag(tag.into()),
        }
    }

    /// Whether the query matches every record (empty search, no tag).
    pub fn is_identity(&self) -> bool {
        self.search.is_empty() && self.tag == TagFilter::All
    }
}

/// A record the filter engine can inspect.
pub trait Searchable {
    /// Primary display string, searched case-insensitively.
    fn title(&self) -> &str;

    /// Optional secondary string, also searched when present.
    fn description(&self) -> Option<&str> {
        None
    }

    /// The record's tag from its closed set.
    fn tag(&self) -> &str;
}

/// Decide whether a single record satisfies a query.
///
/// The tag clause is an exact, case-sensitive comparison; the text clause
/// is a case-insensitive substring test against the title or, when one
/// exists, the description. A record matches only when both clauses pass.
pub fn matches<R: Searchable>(record: &R, query: &Query) -> bool {
    if let TagFilter::Tag(tag) = &query.tag
        && record.tag() != tag
    {
        return false;
    }
    if query.search.is_empty() {
        return true;
    }
    let needle = query.search.to_lowercase();
    if record.title().to_lowercase().contains(&needle) {
        return true;
    }
    record
        .description()
        .is_some_and(|description| description.to_lowercase().contains(&needle))
}

/// Return the ordered subsequence of records matching the query.
pub fn filter_records<'a, R: Searchable>(records: &'a [R], query: &Query) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| matches(*record, query))
        .collect()
}

impl Searchable for Project {
    fn title(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        Some(&self.product)
    }

    fn tag(&self) -> &str {
        self.status.as_str()
    }
}

impl Searchable for Template {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }

    fn tag(&self) -> &str {
        self.category.as_str()
    }
}

impl Searchable for VideoSummary {
    fn title(&self) -> &str {
        &self.product
    }

    fn tag(&self) -> &str {
        self.status.as_str()
    }
}

impl Searchable for TopVideo {
    fn title(&self) -> &str {
        &self.hook
    }

    fn description(&self) -> Option<&str> {
        Some(&self.product)
    }

    fn tag(&self) -> &str {
        &self.product
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Minimal record for exercising the predicate in isolation.
    struct Item {
        title: &'static str,
        description: Option<&'static str>,
        tag: &'static str,
    }

    impl Searchable for Item {
        fn title(&self) -> &str {
            self.title
        }

        fn description(&self) -> Option<&str> {
            self.description
        }

        fn tag(&self) -> &str {
            self.tag
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            Item {
                title: "Controversial Hooks",
                description: None,
                tag: "controversial",
            },
            Item {
                title: "Testimonial Style",
                description: None,
                tag: "testimonial",
            },
        ]
    }

    fn titles<'a>(records: &[&'a Item]) -> Vec<&'a str> {
        records.iter().map(|item| item.title).collect()
    }

    #[test]
    fn identity_query_returns_input_unchanged() {
        let items = sample();
        let out = filter_records(&items, &Query::default());
        assert_eq!(titles(&out), vec!["Controversial Hooks", "Testimonial Style"]);
    }

    #[test]
    fn search_term_matches_title_substring() {
        let items = sample();
        let out = filter_records(&items, &Query::search("hook"));
        assert_eq!(titles(&out), vec!["Controversial Hooks"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let items = sample();
        let upper = filter_records(&items, &Query::search("HOOK"));
        let lower = filter_records(&items, &Query::search("hook"));
        assert_eq!(titles(&upper), titles(&lower));
    }

    #[test]
    fn tag_filter_is_exact() {
        let items = sample();
        let out = filter_records(&items, &Query::tagged("testimonial"));
        assert_eq!(titles(&out), vec!["Testimonial Style"]);
    }

    #[test]
    fn tag_comparison_is_case_sensitive() {
        let items = sample();
        let out = filter_records(&items, &Query::tagged("Testimonial"));
        assert!(out.is_empty());
    }

    #[test]
    fn unknown_tag_yields_empty_not_error() {
        let items = sample();
        let out = filter_records(&items, &Query::tagged("nonexistent"));
        assert!(out.is_empty());
    }

    #[test]
    fn no_match_yields_empty() {
        let items = sample();
        let out = filter_records(&items, &Query::search("zzz"));
        assert!(out.is_empty());
    }

    #[test]
    fn both_clauses_are_anded() {
        let items = sample();
        let query = Query {
            search: "hook".to_string(),
            tag: TagFilter::Tag("testimonial".to_string()),
        };
        assert!(filter_records(&items, &query).is_empty());
    }

    #[test]
    fn description_participates_in_search() {
        let items = vec![Item {
            title: "Summer Launch",
            description: Some("Fashion Items"),
            tag: "published",
        }];
        let out = filter_records(&items, &Query::search("fashion"));
        assert_eq!(titles(&out), vec!["Summer Launch"]);
    }

    #[test]
    fn missing_description_cannot_satisfy_text_clause() {
        let items = vec![Item {
            title: "Summer Launch",
            description: None,
            tag: "published",
        }];
        assert!(filter_records(&items, &Query::search("fashion")).is_empty());
    }

    #[test]
    fn result_preserves_relative_order() {
        let items = vec![
            Item {
                title: "alpha hook",
                description: None,
                tag: "a",
            },
            Item {
                title: "beta",
                description: None,
                tag: "a",
            },
            Item {
                title: "gamma hook",
                description: None,
                tag: "a",
            },
        ];
        let out = filter_records(&items, &Query::search("hook"));
        assert_eq!(titles(&out), vec!["alpha hook", "gamma hook"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let items = sample();
        let query = Query::search("hook");
        let once: Vec<&Item> = filter_records(&items, &query);
        let owned: Vec<Item> = once
            .iter()
            .map(|item| Item {
                title: item.title,
                description: item.description,
                tag: item.tag,
            })
            .collect();
        let twice = filter_records(&owned, &query);
        assert_eq!(titles(&twice), titles(&once));
    }
}
