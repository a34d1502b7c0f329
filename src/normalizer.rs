//! Transformation logic that converts the raw catalog document into the
//! immutable model consumed by the renderers.
//!
//! Normalization keeps display text as written, defaults missing text to an
//! empty string, resolves optional fields into explicit `None` cases and
//! rejects catalogs whose keys would collide in the generated output: two
//! sections sharing a `data-section` anchor, or two repositories writing to
//! the same `/{name}/` path and sitemap URL. Blank keys never collide.

use std::{collections::HashSet, fs, path::Path};

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::{CatalogConfig, CategoryEntry, RepositoryEntry, non_blank},
    error::{self, Error},
};

/// Validated catalog driving a single generation run.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default,)]
pub struct Catalog
{
    categories: Vec<Category,>,
}

/// Named group of repositories rendered as one page section.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
pub struct Category
{
    /// Display label.
    pub name:  String,
    /// Stable anchor used as `data-section`.
    pub slug:  String,
    /// Repositories in display order.
    pub repos: Vec<Repository,>,
}

/// Single catalog entry rendered as a card.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
pub struct Repository
{
    /// Display name and subsite path segment.
    pub name:        String,
    /// `owner/repo` of the original project, if any.
    pub upstream:    Option<String,>,
    /// Free-text summary.
    pub description: String,
    /// Pill label.
    pub pill:        String,
    /// Pill style suffix, if any.
    pub pill_class:  Option<String,>,
}

impl Catalog
{
    /// Builds a catalog from already validated categories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when slugs or
    /// repository names collide.
    pub fn new(categories: Vec<Category,>,) -> Result<Self, Error,>
    {
        validate_unique_keys(&categories,)?;
        Ok(Self {
            categories,
        },)
    }

    /// Categories in catalog order.
    pub fn categories(&self,) -> &[Category]
    {
        &self.categories
    }

    /// Iterates every repository in traversal order, paired with its
    /// category.
    pub fn repositories(&self,) -> impl Iterator<Item = (&Category, &Repository,),>
    {
        self.categories
            .iter()
            .flat_map(|category| category.repos.iter().map(move |repo| (category, repo,),),)
    }

    /// Returns `true` when the catalog lists no categories.
    pub fn is_empty(&self,) -> bool
    {
        self.categories.is_empty()
    }
}

impl Category
{
    /// Number of repositories listed in this category.
    pub fn repo_count(&self,) -> usize
    {
        self.repos.len()
    }
}

/// Loads the catalog from the provided YAML file path.
///
/// # Errors
///
/// Returns [`Error::CatalogRead`](Error::CatalogRead) when the file cannot be
/// read, [`Error::CatalogParse`](Error::CatalogParse) when it is not a
/// well-formed catalog, and [`Error::Validation`](Error::Validation) when keys
/// collide.
pub fn load_catalog(path: &Path,) -> Result<Catalog, Error,>
{
    debug!("Reading catalog from {}", path.display());
    let contents =
        fs::read_to_string(path,).map_err(|source| error::catalog_read_error(path, source,),)?;
    let catalog = parse_catalog(&contents,)?;
    info!(
        "Loaded {} categories with {} repositories from {}",
        catalog.categories().len(),
        crate::total_repo_count(&catalog),
        path.display()
    );
    Ok(catalog,)
}

/// Parses the catalog from a YAML document string.
///
/// An empty document is a valid, empty catalog.
///
/// # Errors
///
/// Propagates [`Error::CatalogParse`](Error::CatalogParse) when the YAML
/// cannot be decoded and [`Error::Validation`](Error::Validation) when keys
/// collide.
pub fn parse_catalog(contents: &str,) -> Result<Catalog, Error,>
{
    let config: CatalogConfig = if contents.trim().is_empty() {
        CatalogConfig::default()
    } else {
        serde_yaml::from_str(contents,)?
    };

    let categories = config.categories.iter().map(normalize_category,).collect();
    Catalog::new(categories,)
}

fn normalize_category(entry: &CategoryEntry,) -> Category
{
    Category {
        name:  entry.name.clone().unwrap_or_default(),
        slug:  entry.slug.clone().unwrap_or_default(),
        repos: entry.repos.iter().map(normalize_repository,).collect(),
    }
}

fn normalize_repository(entry: &RepositoryEntry,) -> Repository
{
    Repository {
        name:        entry.name.clone().unwrap_or_default(),
        upstream:    non_blank(entry.upstream.as_ref(),),
        description: entry.description.clone().unwrap_or_default(),
        pill:        entry.pill.clone().unwrap_or_default(),
        pill_class:  non_blank(entry.pill_class.as_ref(),),
    }
}

/// Rejects duplicate section slugs and repository names.
///
/// Only non-blank values take part: categories without a slug and entries
/// without a name are tolerated, however many there are.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) naming the first
/// offending value.
fn validate_unique_keys(categories: &[Category],) -> Result<(), Error,>
{
    let mut seen_slugs = HashSet::with_capacity(categories.len(),);
    let mut seen_names = HashSet::new();

    for category in categories {
        if !is_blank(&category.slug,) && !seen_slugs.insert(category.slug.as_str(),) {
            return Err(Error::validation(format!("duplicate category slug '{}'", category.slug),),);
        }

        for repo in &category.repos {
            if !is_blank(&repo.name,) && !seen_names.insert(repo.name.as_str(),) {
                return Err(Error::validation(format!(
                    "duplicate repository name '{}'",
                    repo.name
                ),),);
            }
        }
    }

    Ok((),)
}

fn is_blank(value: &str,) -> bool
{
    value.trim().is_empty()
}
