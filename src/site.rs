// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Output directory assembly.
//!
//! Both documents are rendered in memory first, then written to sibling
//! staging files. Only once both are staged are they renamed into place, so
//! a failed run leaves the previous `index.html` and `sitemap.xml` pair
//! untouched.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf}
};

use tracing::{debug, info, warn};

use crate::{
    error::{self, Error},
    normalizer::Catalog,
    render::render_index,
    resolve::total_repo_count,
    sitemap::{DEFAULT_BASE_URL, render_sitemap}
};

/// File name of the rendered page inside the output directory.
pub const INDEX_FILE: &str = "index.html";
/// File name of the sitemap index inside the output directory.
pub const SITEMAP_FILE: &str = "sitemap.xml";
/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "site";
/// Optional files copied verbatim when present: the custom-domain marker and
/// the search-console verification page.
pub const DEFAULT_PASSTHROUGH_FILES: [&str; 2] = ["CNAME", "google3f45b72e3ef79ea3.html"];

/// Where and how a site is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Directory receiving the generated files.
    pub output_dir:  PathBuf,
    /// Host prefix for sitemap entries.
    pub base_url:    String,
    /// Files copied into `output_dir` under their own file name if present.
    pub passthrough: Vec<PathBuf>
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            output_dir:  PathBuf::from(DEFAULT_OUTPUT_DIR),
            base_url:    DEFAULT_BASE_URL.to_owned(),
            passthrough: DEFAULT_PASSTHROUGH_FILES.iter().map(PathBuf::from).collect()
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Path of the written page.
    pub index_path:       PathBuf,
    /// Path of the written sitemap index.
    pub sitemap_path:     PathBuf,
    /// Destination paths of the passthrough files that were copied.
    pub copied:           Vec<PathBuf>,
    /// Repositories rendered.
    pub repository_count: usize
}

/// Regenerates the whole output directory from `catalog`.
///
/// The directory is created if needed and existing documents are replaced.
/// Missing or uncopyable passthrough files are skipped.
///
/// # Errors
///
/// Returns [`Error::OutputDir`](Error::OutputDir) when the directory cannot
/// be created, [`Error::Template`](Error::Template) when the page fails to
/// render, and [`Error::RenderWrite`](Error::RenderWrite) when either
/// document cannot be written.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use arch_docs::{SiteOptions, build_site, load_catalog};
///
/// # fn main() -> Result<(), arch_docs::Error> {
/// let catalog = load_catalog(Path::new("repos.yaml"))?;
/// let summary = build_site(&catalog, &SiteOptions::default())?;
/// println!("{} repos", summary.repository_count);
/// # Ok(())
/// # }
/// ```
pub fn build_site(catalog: &Catalog, options: &SiteOptions) -> Result<BuildSummary, Error> {
    let output_dir = options.output_dir.as_path();
    fs::create_dir_all(output_dir).map_err(|source| error::output_dir_error(output_dir, source))?;

    let index = render_index(catalog)?;
    let sitemap = render_sitemap(catalog, &options.base_url);

    let index_path = output_dir.join(INDEX_FILE);
    let sitemap_path = output_dir.join(SITEMAP_FILE);
    publish_documents(&[
        (index_path.as_path(), index.as_str()),
        (sitemap_path.as_path(), sitemap.as_str())
    ])?;
    info!(
        "Wrote {} and {} to {}",
        INDEX_FILE,
        SITEMAP_FILE,
        output_dir.display()
    );

    let copied = options
        .passthrough
        .iter()
        .filter_map(|source| copy_passthrough(source, output_dir))
        .collect();

    Ok(BuildSummary {
        index_path,
        sitemap_path,
        copied,
        repository_count: total_repo_count(catalog)
    })
}

/// Stages every document, then renames them in order.
///
/// A staging failure removes all staging files and leaves every target as it
/// was.
fn publish_documents(documents: &[(&Path, &str)]) -> Result<(), Error> {
    let mut staged = Vec::with_capacity(documents.len());
    for &(path, contents) in documents {
        let staging = staging_path(path);
        if let Err(error) = write_staged(&staging, contents) {
            discard_staged(staged.iter().map(|(staging, _)| staging));
            let _ = fs::remove_file(&staging);
            return Err(error);
        }
        staged.push((staging, path));
    }

    for (index, (staging, path)) in staged.iter().enumerate() {
        if let Err(source) = fs::rename(staging, path) {
            discard_staged(staged[index..].iter().map(|(staging, _)| staging));
            return Err(error::render_write_error(path, source));
        }
    }
    Ok(())
}

fn discard_staged<'a>(paths: impl Iterator<Item = &'a PathBuf>) {
    for path in paths {
        let _ = fs::remove_file(path);
    }
}

fn write_staged(path: &Path, contents: &str) -> Result<(), Error> {
    let file = File::create(path).map_err(|source| error::render_write_error(path, source))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|source| error::render_write_error(path, source))?;
    writer
        .flush()
        .map_err(|source| error::render_write_error(path, source))
}

/// `site/index.html` stages as `site/.index.html.tmp`.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

fn copy_passthrough(source: &Path, output_dir: &Path) -> Option<PathBuf> {
    if !source.is_file() {
        debug!("Passthrough {} not present; skipping", source.display());
        return None;
    }
    let file_name = source.file_name()?;
    let destination = output_dir.join(file_name);

    match fs::copy(source, &destination) {
        Ok(_) => {
            debug!(
                "Copied {} to {}",
                source.display(),
                destination.display()
            );
            Some(destination)
        }
        Err(error) => {
            warn!("Skipping passthrough {}: {error}", source.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::normalizer::parse_catalog;

    const SAMPLE: &str = r#"
categories:
  - name: Frontend
    slug: frontend
    repos:
      - name: react
        upstream: facebook/react
      - name: vue
  - name: Meta
    slug: meta
    repos:
      - name: svelte-kit
"#;

    fn options_in(root: &Path) -> SiteOptions {
        SiteOptions {
            output_dir:  root.join("site"),
            base_url:    DEFAULT_BASE_URL.to_owned(),
            passthrough: DEFAULT_PASSTHROUGH_FILES
                .iter()
                .map(|name| root.join(name))
                .collect()
        }
    }

    #[test]
    fn build_writes_both_documents_and_counts_repositories() {
        let temp = tempdir().expect("failed to create tempdir");
        let catalog = parse_catalog(SAMPLE).expect("valid catalog");
        let options = options_in(temp.path());

        let summary = build_site(&catalog, &options).expect("build succeeds");

        assert_eq!(summary.repository_count, 3);
        assert_eq!(summary.index_path, options.output_dir.join("index.html"));
        assert_eq!(summary.sitemap_path, options.output_dir.join("sitemap.xml"));
        assert!(summary.copied.is_empty());

        let index = fs::read_to_string(&summary.index_path).expect("index readable");
        assert!(index.contains(r#"data-section="meta""#));
        let sitemap = fs::read_to_string(&summary.sitemap_path).expect("sitemap readable");
        assert_eq!(sitemap.matches("<sitemap>").count(), 3);
    }

    #[test]
    fn build_copies_present_passthrough_files_verbatim() {
        let temp = tempdir().expect("failed to create tempdir");
        fs::write(temp.path().join("CNAME"), "repos.example.com\n").expect("write CNAME");
        let catalog = parse_catalog(SAMPLE).expect("valid catalog");
        let options = options_in(temp.path());

        let summary = build_site(&catalog, &options).expect("build succeeds");

        assert_eq!(summary.copied, [options.output_dir.join("CNAME")]);
        let copied = fs::read(options.output_dir.join("CNAME")).expect("copied CNAME");
        assert_eq!(copied, b"repos.example.com\n");
        assert!(!options.output_dir.join("google3f45b72e3ef79ea3.html").exists());
    }

    #[test]
    fn passthrough_directories_are_skipped() {
        let temp = tempdir().expect("failed to create tempdir");
        fs::create_dir(temp.path().join("CNAME")).expect("create directory named CNAME");
        let catalog = parse_catalog(SAMPLE).expect("valid catalog");

        let summary = build_site(&catalog, &options_in(temp.path())).expect("build succeeds");
        assert!(summary.copied.is_empty());
    }

    #[test]
    fn rebuild_is_idempotent_and_byte_identical() {
        let temp = tempdir().expect("failed to create tempdir");
        let catalog = parse_catalog(SAMPLE).expect("valid catalog");
        let options = options_in(temp.path());

        let first = build_site(&catalog, &options).expect("first build");
        let index = fs::read(&first.index_path).expect("index");
        let sitemap = fs::read(&first.sitemap_path).expect("sitemap");

        let second = build_site(&catalog, &options).expect("second build");
        assert_eq!(fs::read(&second.index_path).expect("index"), index);
        assert_eq!(fs::read(&second.sitemap_path).expect("sitemap"), sitemap);
    }

    #[test]
    fn no_staging_files_remain_after_build() {
        let temp = tempdir().expect("failed to create tempdir");
        let catalog = parse_catalog(SAMPLE).expect("valid catalog");
        let options = options_in(temp.path());
        build_site(&catalog, &options).expect("build succeeds");

        let mut names: Vec<String> = fs::read_dir(&options.output_dir)
            .expect("list output")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, ["index.html", "sitemap.xml"]);
    }

    #[test]
    fn output_dir_blocked_by_file_is_fatal() {
        let temp = tempdir().expect("failed to create tempdir");
        let blocked = temp.path().join("site");
        File::create(&blocked).expect("create blocking file");
        let catalog = parse_catalog(SAMPLE).expect("valid catalog");

        let error = build_site(&catalog, &options_in(temp.path())).expect_err("expected failure");
        match error {
            Error::OutputDir {
                path, ..
            } => assert_eq!(path, blocked),
            other => panic!("unexpected error variant: {other:?}")
        }
    }

    #[test]
    fn unwritable_document_is_fatal() {
        let temp = tempdir().expect("failed to create tempdir");
        let options = options_in(temp.path());
        fs::create_dir_all(options.output_dir.join("index.html")).expect("block index path");
        fs::write(options.output_dir.join("index.html").join("keep"), "x").expect("non-empty");
        let catalog = parse_catalog(SAMPLE).expect("valid catalog");

        let error = build_site(&catalog, &options).expect_err("expected failure");
        match error {
            Error::RenderWrite {
                path, ..
            } => assert_eq!(path, options.output_dir.join("index.html")),
            other => panic!("unexpected error variant: {other:?}")
        }
        assert!(!options.output_dir.join(".index.html.tmp").exists());
    }

    #[test]
    fn failed_sitemap_write_keeps_previous_index() {
        let temp = tempdir().expect("failed to create tempdir");
        let options = options_in(temp.path());
        fs::create_dir_all(&options.output_dir).expect("create output dir");
        fs::write(options.output_dir.join("index.html"), "previous").expect("seed index");
        fs::create_dir_all(options.output_dir.join(".sitemap.xml.tmp").join("keep"))
            .expect("block sitemap staging path");
        let catalog = parse_catalog(SAMPLE).expect("valid catalog");

        let error = build_site(&catalog, &options).expect_err("expected failure");
        match error {
            Error::RenderWrite {
                path, ..
            } => assert_eq!(path, options.output_dir.join(".sitemap.xml.tmp")),
            other => panic!("unexpected error variant: {other:?}")
        }
        let index = fs::read_to_string(options.output_dir.join("index.html")).expect("index");
        assert_eq!(index, "previous");
        assert!(!options.output_dir.join(".index.html.tmp").exists());
        assert!(!options.output_dir.join("sitemap.xml").exists());
    }

    #[test]
    fn staging_path_is_hidden_sibling() {
        assert_eq!(
            staging_path(Path::new("site/index.html")),
            PathBuf::from("site/.index.html.tmp")
        );
    }

    #[test]
    fn default_options_match_fixed_layout() {
        let options = SiteOptions::default();
        assert_eq!(options.output_dir, PathBuf::from("site"));
        assert_eq!(options.base_url, "https://repos.supermodeltools.com");
        assert_eq!(
            options.passthrough,
            [PathBuf::from("CNAME"), PathBuf::from("google3f45b72e3ef79ea3.html")]
        );
    }
}
