#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the site generator."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! Every variant is fatal for a generation run. Passthrough copy failures are
//! deliberately absent: they are logged and skipped by the assembler.

use std::path::{Path, PathBuf};

/// Unified error type returned by the catalog loader, renderers and CLI.
///
/// Each variant names the pipeline stage that failed so the CLI message
/// alone tells the operator where the run stopped.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// The catalog file is missing or unreadable.
    #[error("failed to read catalog from {path:?}: {source}")]
    CatalogRead {
        /// Location of the catalog file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// The catalog is not well-formed YAML or has the wrong shape.
    #[error("failed to parse catalog: {source}")]
    CatalogParse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// The catalog parsed but violates a cross-entry invariant.
    #[error("invalid catalog: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// The output directory could not be created.
    #[error("failed to create output directory {path:?}: {source}")]
    OutputDir {
        /// Directory that could not be created.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// A rendered document could not be written.
    #[error("failed to write {path:?}: {source}")]
    RenderWrite {
        /// Document being written.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// The page template failed while rendering.
    #[error("failed to render page template: {source}")]
    Template {
        /// Error reported by askama.
        source: askama::Error
    },
    /// Wraps serialization errors when dumping the catalog as JSON.
    #[error("failed to serialize catalog: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::CatalogParse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

impl From<askama::Error> for Error {
    fn from(source: askama::Error) -> Self {
        Self::Template {
            source
        }
    }
}

/// Creates an [`Error::CatalogRead`] variant capturing the failing path.
pub fn catalog_read_error(path: &Path, source: std::io::Error) -> Error {
    Error::CatalogRead {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::OutputDir`] variant capturing the failing directory.
pub fn output_dir_error(path: &Path, source: std::io::Error) -> Error {
    Error::OutputDir {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::RenderWrite`] variant capturing the failing document.
pub fn render_write_error(path: &Path, source: std::io::Error) -> Error {
    Error::RenderWrite {
        path: path.to_path_buf(),
        source
    }
}
