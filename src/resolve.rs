// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Derived values computed from catalog entries.
//!
//! Nothing here touches the filesystem or the network. The badge URL in
//! particular is only a string; the browser fetches it when the page loads.

use std::{borrow::Cow, fmt::Write as _};

use crate::normalizer::Catalog;

/// Shields endpoint serving GitHub star badges.
const BADGE_ENDPOINT: &str = "https://img.shields.io/github/stars";
/// Fixed style parameters appended to every badge URL.
const BADGE_PARAMS: &str = "style=flat&logo=github&color=818cf8&labelColor=1a1d27";
/// Base class shared by every pill.
const PILL_CLASS: &str = "pill";

/// Escapes `value` for HTML text nodes and quoted attributes.
///
/// # Examples
///
/// ```
/// use arch_docs::escape_text;
///
/// assert_eq!(escape_text("A & B <script>"), "A &amp; B &lt;script&gt;");
/// ```
pub fn escape_text(value: &str) -> Cow<'_, str> {
    if !value
        .chars()
        .any(|character| matches!(character, '&' | '<' | '>' | '"' | '\''))
    {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for character in value.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other)
        }
    }
    Cow::Owned(escaped)
}

/// Percent-encodes `value` as a single URL path segment.
///
/// ASCII alphanumerics and `-_.~` pass through; every other byte of the
/// UTF-8 encoding becomes `%XX` with uppercase hex.
///
/// # Examples
///
/// ```
/// use arch_docs::escape_path;
///
/// assert_eq!(escape_path("svelte-kit"), "svelte-kit");
/// assert_eq!(escape_path("a/b c"), "a%2Fb%20c");
/// ```
pub fn escape_path(value: &str) -> Cow<'_, str> {
    if value.bytes().all(is_unreserved) {
        return Cow::Borrowed(value);
    }

    let mut encoded = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        if is_unreserved(byte) {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    Cow::Owned(encoded)
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

/// Composes the class list of a card pill.
///
/// Unknown suffixes are accepted as-is; they simply match no style rule.
///
/// # Examples
///
/// ```
/// use arch_docs::pill_class_of;
///
/// assert_eq!(pill_class_of(None), "pill");
/// assert_eq!(pill_class_of(Some("orange")), "pill orange");
/// ```
pub fn pill_class_of(pill_class: Option<&str>) -> Cow<'static, str> {
    match pill_class {
        Some(suffix) => Cow::Owned(format!("{PILL_CLASS} {suffix}")),
        None => Cow::Borrowed(PILL_CLASS)
    }
}

/// Builds the star badge URL for an upstream `owner/repo`.
///
/// Returns `None` when the entry has no upstream. Each `/`-separated segment
/// is path-escaped, which leaves ordinary GitHub identifiers untouched.
///
/// # Examples
///
/// ```
/// use arch_docs::badge_url;
///
/// assert_eq!(badge_url(None), None);
/// assert_eq!(
///     badge_url(Some("facebook/react")).as_deref(),
///     Some(
///         "https://img.shields.io/github/stars/facebook/react?style=flat&logo=github&color=818cf8&labelColor=1a1d27"
///     )
/// );
/// ```
pub fn badge_url(upstream: Option<&str>) -> Option<String> {
    let upstream = upstream?;
    let mut url = String::with_capacity(BADGE_ENDPOINT.len() + upstream.len() + BADGE_PARAMS.len() + 2);
    url.push_str(BADGE_ENDPOINT);
    for segment in upstream.split('/') {
        url.push('/');
        url.push_str(&escape_path(segment));
    }
    url.push('?');
    url.push_str(BADGE_PARAMS);
    Some(url)
}

/// Total number of repositories across all categories.
pub fn total_repo_count(catalog: &Catalog) -> usize {
    catalog
        .categories()
        .iter()
        .map(|category| category.repo_count())
        .sum()
}
