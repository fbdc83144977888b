//! End-to-end filtering over the sample catalog through the public API.

use pretty_assertions::assert_eq;
use reelforge_core::{Catalog, Query, TagFilter, filter_records};

fn project_names<'a>(catalog: &'a Catalog, query: &Query) -> Vec<&'a str> {
    filter_records(&catalog.projects, query)
        .into_iter()
        .map(|project| project.name.as_str())
        .collect()
}

#[test]
fn identity_query_lists_every_project_in_order() {
    let catalog = Catalog::sample();
    assert_eq!(
        project_names(&catalog, &Query::default()),
        vec![
            "Summer Collection Launch",
            "Tech Gadgets Promo",
            "Home & Garden Essentials",
            "Beauty Must-Haves",
        ]
    );
}

#[test]
fn search_covers_name_and_product_line() {
    let catalog = Catalog::sample();
    assert_eq!(
        project_names(&catalog, &Query::search("electronics")),
        vec!["Tech Gadgets Promo"]
    );
    assert_eq!(
        project_names(&catalog, &Query::search("SUMMER")),
        vec!["Summer Collection Launch"]
    );
}

#[test]
fn status_and_search_combine_as_and() {
    let catalog = Catalog::sample();
    let query = Query {
        search: "beauty".to_string(),
        tag: TagFilter::Tag("scheduled".to_string()),
    };
    assert_eq!(project_names(&catalog, &query), vec!["Beauty Must-Haves"]);

    let mismatched = Query {
        search: "beauty".to_string(),
        tag: TagFilter::Tag("published".to_string()),
    };
    assert!(project_names(&catalog, &mismatched).is_empty());
}

#[test]
fn templates_filter_by_category() {
    let catalog = Catalog::sample();
    let testimonials = filter_records(&catalog.templates, &Query::tagged("testimonial"));
    let titles: Vec<&str> = testimonials
        .iter()
        .map(|template| template.title.as_str())
        .collect();
    assert_eq!(titles, vec!["First Person Experience"]);
}

#[test]
fn unmatched_search_returns_empty() {
    let catalog = Catalog::sample();
    assert!(project_names(&catalog, &Query::search("zzz")).is_empty());
    assert!(filter_records(&catalog.templates, &Query::search("zzz")).is_empty());
}
