// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Sitemap index rendering.
//!
//! The index only references per-repository sitemaps; those documents are
//! published by each repository's own pipeline and are never checked here.

use std::fmt::Write as _;

use crate::{
    normalizer::Catalog,
    resolve::{escape_path, escape_text}
};

/// Host serving the per-repository subsites.
pub const DEFAULT_BASE_URL: &str = "https://repos.supermodeltools.com";

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Renders a `<sitemapindex>` with one entry per repository, in catalog
/// traversal order.
///
/// Each `<loc>` is `{base_url}/{escaped name}/sitemap.xml`. A trailing `/` on
/// `base_url` is ignored.
///
/// # Examples
///
/// ```
/// use arch_docs::{parse_catalog, render_sitemap};
///
/// let catalog = parse_catalog("categories:\n  - slug: ui\n    repos:\n      - name: vue\n")?;
/// let xml = render_sitemap(&catalog, "https://docs.example.com/");
/// assert!(xml.contains("<loc>https://docs.example.com/vue/sitemap.xml</loc>"));
/// # Ok::<(), arch_docs::Error>(())
/// ```
pub fn render_sitemap(catalog: &Catalog, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let mut buffer = String::with_capacity(256);

    buffer.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(buffer, "<sitemapindex xmlns=\"{SITEMAP_NAMESPACE}\">");
    for (_, repo) in catalog.repositories() {
        let loc = format!("{base}/{}/sitemap.xml", escape_path(&repo.name));
        let _ = writeln!(
            buffer,
            "  <sitemap>\n    <loc>{}</loc>\n  </sitemap>",
            escape_text(&loc)
        );
    }
    buffer.push_str("</sitemapindex>\n");

    buffer
}
