//! Raw catalog document types.
//!
//! The types in this module mirror the structure of `repos.yaml` as written
//! by hand. Every field is optional at this layer so that sparse entries load
//! without ceremony; [`crate::normalizer`] turns them into the validated
//! [`Catalog`](crate::Catalog).

use serde::{Deserialize, Serialize};

/// Root catalog document.
///
/// # Examples
///
/// ```
/// use arch_docs::CatalogConfig;
///
/// let yaml = r#"
/// categories:
///   - name: Frontend Frameworks
///     slug: frontend
///     repos:
///       - name: react
///         upstream: facebook/react
/// "#;
/// let config: CatalogConfig = serde_yaml::from_str(yaml,).expect("valid catalog",);
/// assert_eq!(config.categories.len(), 1);
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct CatalogConfig
{
    /// Categories in display order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<CategoryEntry,>,
}

/// Raw category entry before validation.
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct CategoryEntry
{
    /// Display label shown as the section heading.
    #[serde(default)]
    pub name: Option<String,>,

    /// Section anchor; must be unique across the catalog.
    #[serde(default)]
    pub slug: Option<String,>,

    /// Repositories in display order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub repos: Vec<RepositoryEntry,>,
}

/// Raw repository entry before validation.
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct RepositoryEntry
{
    /// Entry identifier, also the path segment of the generated subsite.
    #[serde(default)]
    pub name: Option<String,>,

    /// Optional `owner/repo` of the original project.
    #[serde(default)]
    pub upstream: Option<String,>,

    /// Free-text summary shown on the card.
    #[serde(default, alias = "desc")]
    pub description: Option<String,>,

    /// Label shown inside the card pill.
    #[serde(default)]
    pub pill: Option<String,>,

    /// Optional style-class suffix for the pill.
    #[serde(default, alias = "pill-class", alias = "pillClass")]
    pub pill_class: Option<String,>,
}

/// Accepts an explicit `null` (a bare `repos:` key) as an empty sequence.
fn null_as_empty<'de, D, T,>(deserializer: D,) -> Result<Vec<T,>, D::Error,>
where
    D: serde::Deserializer<'de,>,
    T: Deserialize<'de,>,
{
    let value: Option<Vec<T,>,> = Option::deserialize(deserializer,)?;
    Ok(value.unwrap_or_default(),)
}

/// Trims the value and collapses blank strings into `None`.
///
/// YAML gives three spellings of "not set" (missing key, `~`, `""`); they
/// all end up here as the same absent case.
pub(crate) fn non_blank(value: Option<&String,>,) -> Option<String,>
{
    value.map(|raw| raw.trim(),).filter(|trimmed| !trimmed.is_empty(),).map(str::to_owned,)
}
