// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Index page rendering.
//!
//! The page layout, inline styles and the search script live in
//! `templates/index.html`, compiled into the binary by askama. Auto-escaping
//! is switched off there: every dynamic value is escaped here, through the
//! resolver, before it reaches the template.

use askama::Template;
use tracing::debug;

use crate::{
    error::Error,
    normalizer::{Catalog, Category, Repository},
    resolve::{badge_url, escape_path, escape_text, pill_class_of, total_repo_count}
};

/// Compiled index page template.
#[derive(Debug, Template)]
#[template(path = "index.html", escape = "none")]
pub struct IndexTemplate {
    /// Total repositories across the catalog.
    pub total_repos: usize,
    /// One hero stat per category.
    pub stats:       Vec<HeroStat>,
    /// One section per category.
    pub sections:    Vec<SectionView>
}

/// Per-category counter shown in the hero block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroStat {
    /// Repositories in the category.
    pub count: usize,
    /// Escaped category name.
    pub label: String
}

/// Template-ready category section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    /// Escaped `data-section` value.
    pub slug:  String,
    /// Escaped heading.
    pub title: String,
    /// Cards in catalog order.
    pub cards: Vec<CardView>
}

/// Template-ready repository card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Percent-encoded path segment used in the card link.
    pub href_segment: String,
    /// Escaped display name, also used for `data-name`.
    pub name:         String,
    /// Escaped description, also used for `data-desc`.
    pub description:  String,
    /// Escaped pill label.
    pub pill:         String,
    /// Escaped pill class list.
    pub pill_class:   String,
    /// Star badge source, present only for entries with an upstream.
    pub badge_url:    Option<String>
}

impl IndexTemplate {
    /// Resolves every derived value the page needs from `catalog`.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            total_repos: total_repo_count(catalog),
            stats:       catalog.categories().iter().map(hero_stat).collect(),
            sections:    catalog.categories().iter().map(section_view).collect()
        }
    }
}

fn hero_stat(category: &Category) -> HeroStat {
    HeroStat {
        count: category.repo_count(),
        label: escape_text(&category.name).into_owned()
    }
}

fn section_view(category: &Category) -> SectionView {
    SectionView {
        slug:  escape_text(&category.slug).into_owned(),
        title: escape_text(&category.name).into_owned(),
        cards: category.repos.iter().map(card_view).collect()
    }
}

fn card_view(repo: &Repository) -> CardView {
    let pill_class = pill_class_of(repo.pill_class.as_deref());
    CardView {
        href_segment: escape_path(&repo.name).into_owned(),
        name:         escape_text(&repo.name).into_owned(),
        description:  escape_text(&repo.description).into_owned(),
        pill:         escape_text(&repo.pill).into_owned(),
        pill_class:   escape_text(&pill_class).into_owned(),
        badge_url:    badge_url(repo.upstream.as_deref())
    }
}

/// Renders the self-contained `index.html` document for `catalog`.
///
/// # Errors
///
/// Returns [`Error::Template`](Error::Template) if askama fails while
/// writing the page.
pub fn render_index(catalog: &Catalog) -> Result<String, Error> {
    let template = IndexTemplate::from_catalog(catalog);
    debug!(
        "Rendering index with {} sections and {} repositories",
        template.sections.len(),
        template.total_repos
    );
    Ok(template.render()?)
}
