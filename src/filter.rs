// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Typed model of the search script embedded in the index page.
//!
//! The browser runs the script on every `input` event; this module computes
//! the same visibility state from the catalog so the behaviour can be pinned
//! down in tests. Each call recomputes everything from the query alone, as
//! the script does, so no state is carried between keystrokes.

use crate::normalizer::Catalog;

/// Visibility of every card, section and the no-results placeholder after a
/// single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Sections in catalog order.
    pub sections:        Vec<SectionVisibility>,
    /// Whether the "no results" placeholder is displayed.
    pub show_no_results: bool
}

/// Visibility of one category section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionVisibility {
    /// Category slug.
    pub slug:    String,
    /// `false` once every card in the section is hidden.
    pub visible: bool,
    /// Cards in catalog order.
    pub cards:   Vec<CardVisibility>
}

/// Visibility of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardVisibility {
    /// Repository name.
    pub name:    String,
    /// `false` when the card carries the `hidden` class.
    pub visible: bool
}

impl FilterOutcome {
    /// Names of the cards left visible, in document order.
    pub fn visible_cards(&self) -> Vec<&str> {
        self.sections
            .iter()
            .flat_map(|section| section.cards.iter())
            .filter(|card| card.visible)
            .map(|card| card.name.as_str())
            .collect()
    }

    /// Slugs of the sections left visible, in document order.
    pub fn visible_sections(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|section| section.visible)
            .map(|section| section.slug.as_str())
            .collect()
    }
}

/// Applies `query` to the catalog the way the page script reacts to an
/// `input` event.
///
/// The query is lowercased and trimmed. A card matches when the query is
/// empty or occurs in its lowercased name or description. A section stays
/// visible while any of its cards does, and the placeholder shows only when
/// nothing matched at all. An empty section therefore collapses under any
/// query, including the empty one.
///
/// # Examples
///
/// ```
/// use arch_docs::{apply_filter, parse_catalog};
///
/// let catalog = parse_catalog(
///     "categories:\n  - slug: ui\n    repos:\n      - name: react\n      - name: vue\n",
/// )?;
/// let outcome = apply_filter(&catalog, "  VU ");
/// assert_eq!(outcome.visible_cards(), ["vue"]);
/// assert!(!outcome.show_no_results);
/// # Ok::<(), arch_docs::Error>(())
/// ```
pub fn apply_filter(catalog: &Catalog, query: &str) -> FilterOutcome {
    let needle = query.to_lowercase();
    let needle = needle.trim();
    let mut any_visible = false;

    let sections = catalog
        .categories()
        .iter()
        .map(|category| {
            let cards: Vec<CardVisibility> = category
                .repos
                .iter()
                .map(|repo| {
                    let visible = needle.is_empty()
                        || repo.name.to_lowercase().contains(needle)
                        || repo.description.to_lowercase().contains(needle);
                    any_visible |= visible;
                    CardVisibility {
                        name: repo.name.clone(),
                        visible
                    }
                })
                .collect();

            SectionVisibility {
                slug: category.slug.clone(),
                visible: cards.iter().any(|card| card.visible),
                cards
            }
        })
        .collect();

    FilterOutcome {
        sections,
        show_no_results: !any_visible
    }
}

#[cfg(test)]
mod tests {
    use super::apply_filter;
    use crate::normalizer::{Catalog, parse_catalog};

    fn sample() -> Catalog {
        parse_catalog(
            r#"
categories:
  - name: Libraries
    slug: libraries
    repos:
      - name: react
        description: UI library from Meta
  - name: Frameworks
    slug: frameworks
    repos:
      - name: vue
        description: Progressive framework
      - name: svelte-kit
        description: Web development, streamlined
"#
        )
        .expect("valid catalog")
    }

    #[test]
    fn empty_query_shows_everything() {
        let outcome = apply_filter(&sample(), "   ");
        assert_eq!(outcome.visible_cards(), ["react", "vue", "svelte-kit"]);
        assert_eq!(outcome.visible_sections(), ["libraries", "frameworks"]);
        assert!(!outcome.show_no_results);
    }

    #[test]
    fn partial_match_collapses_other_sections() {
        let outcome = apply_filter(&sample(), "sv");
        assert_eq!(outcome.visible_cards(), ["svelte-kit"]);
        assert_eq!(outcome.visible_sections(), ["frameworks"]);
        assert!(!outcome.show_no_results);
    }

    #[test]
    fn unmatched_query_hides_everything() {
        let outcome = apply_filter(&sample(), "zzz-nomatch");
        assert!(outcome.visible_cards().is_empty());
        assert!(outcome.visible_sections().is_empty());
        assert!(outcome.show_no_results);
    }

    #[test]
    fn query_matches_description_case_insensitively() {
        let outcome = apply_filter(&sample(), "  META ");
        assert_eq!(outcome.visible_cards(), ["react"]);
        assert_eq!(outcome.visible_sections(), ["libraries"]);
    }

    #[test]
    fn hidden_cards_stay_in_the_outcome() {
        let outcome = apply_filter(&sample(), "vue");
        let total: usize = outcome
            .sections
            .iter()
            .map(|section| section.cards.len())
            .sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn consecutive_queries_do_not_depend_on_each_other() {
        let catalog = sample();
        let fresh = apply_filter(&catalog, "react");
        let _ = apply_filter(&catalog, "zzz-nomatch");
        assert_eq!(apply_filter(&catalog, "react"), fresh);
    }

    #[test]
    fn empty_catalog_shows_placeholder() {
        let catalog = parse_catalog("").expect("empty catalog");
        let outcome = apply_filter(&catalog, "");
        assert!(outcome.sections.is_empty());
        assert!(outcome.show_no_results);
    }

    #[test]
    fn empty_section_is_hidden_even_without_query() {
        let catalog = parse_catalog(
            "categories:\n  - slug: soon\n  - slug: ui\n    repos:\n      - name: vue\n"
        )
        .expect("valid catalog");
        let outcome = apply_filter(&catalog, "");
        assert_eq!(outcome.visible_sections(), ["ui"]);
    }
}
