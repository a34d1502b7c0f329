//! Static documentation-portal generator for a curated repository catalog.
//!
//! The library loads `repos.yaml`, derives the display values every card
//! needs, renders a single searchable `index.html` and a `sitemap.xml` index
//! pointing at per-repository sitemaps, and assembles them into the output
//! directory. Every run regenerates the output from scratch; nothing is
//! fetched over the network.

mod config;
mod error;
mod filter;
mod normalizer;
mod render;
mod resolve;
mod site;
mod sitemap;

pub use config::{CatalogConfig, CategoryEntry, RepositoryEntry};
pub use error::{Error, catalog_read_error, output_dir_error, render_write_error};
pub use filter::{CardVisibility, FilterOutcome, SectionVisibility, apply_filter};
pub use normalizer::{Catalog, Category, Repository, load_catalog, parse_catalog};
pub use render::{CardView, HeroStat, IndexTemplate, SectionView, render_index};
pub use resolve::{badge_url, escape_path, escape_text, pill_class_of, total_repo_count};
pub use site::{
    BuildSummary, DEFAULT_OUTPUT_DIR, DEFAULT_PASSTHROUGH_FILES, INDEX_FILE, SITEMAP_FILE,
    SiteOptions, build_site,
};
pub use sitemap::{DEFAULT_BASE_URL, render_sitemap};
