//! Error types for xslview
//!
//! Every failure the viewer can report is a [`ViewError`]. None of them is
//! fatal: the front end shows the message and carries on.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::stylesheet::ResolveError;

/// Classification of a [`ViewError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidInput,
    NotFound,
    Unreadable,
    NoStylesheetDeclared,
    StylesheetMissing,
    NoActiveFile,
    FileRemoved,
    TransformFailure,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::InvalidInput => "invalid_input",
            FailureKind::NotFound => "not_found",
            FailureKind::Unreadable => "unreadable",
            FailureKind::NoStylesheetDeclared => "no_stylesheet_declared",
            FailureKind::StylesheetMissing => "stylesheet_missing",
            FailureKind::NoActiveFile => "no_active_file",
            FailureKind::FileRemoved => "file_removed",
            FailureKind::TransformFailure => "transform_failure",
        }
    }

    /// Short heading shown above the message
    pub fn title(&self) -> &'static str {
        match self {
            FailureKind::InvalidInput => "Invalid file path",
            FailureKind::NotFound => "File not found",
            FailureKind::Unreadable => "Cannot read file",
            FailureKind::NoStylesheetDeclared => "No XSLT stylesheet declared",
            FailureKind::StylesheetMissing => "XSLT stylesheet not found",
            FailureKind::NoActiveFile => "Nothing to refresh",
            FailureKind::FileRemoved => "File was deleted or moved",
            FailureKind::TransformFailure => "Transformation failed",
        }
    }
}

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("invalid input {input:?}: {reason}")]
    InvalidInput { input: String, reason: &'static str },

    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "{} does not declare an XSLT stylesheet, expected e.g. <?xml-stylesheet type=\"text/xsl\" href=\"your_style.xsl\"?>",
        .path.display()
    )]
    NoStylesheetDeclared { path: PathBuf },

    #[error("stylesheet \"{href}\" is declared but {} does not exist", .path.display())]
    StylesheetMissing { href: String, path: PathBuf },

    #[error("no file is open, nothing to refresh")]
    NoActiveFile,

    #[error("{} has been deleted or moved", .path.display())]
    FileRemoved { path: PathBuf },

    #[error("transformation of {} failed: {source}", .path.display())]
    TransformFailure {
        path: PathBuf,
        #[source]
        source: xslview_traits::Error,
    },
}

impl ViewError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ViewError::InvalidInput { .. } => FailureKind::InvalidInput,
            ViewError::NotFound { .. } => FailureKind::NotFound,
            ViewError::Unreadable { .. } => FailureKind::Unreadable,
            ViewError::NoStylesheetDeclared { .. } => FailureKind::NoStylesheetDeclared,
            ViewError::StylesheetMissing { .. } => FailureKind::StylesheetMissing,
            ViewError::NoActiveFile => FailureKind::NoActiveFile,
            ViewError::FileRemoved { .. } => FailureKind::FileRemoved,
            ViewError::TransformFailure { .. } => FailureKind::TransformFailure,
        }
    }
}

impl From<ResolveError> for ViewError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Unreadable { path, source } => ViewError::Unreadable { path, source },
            ResolveError::NoStylesheetDeclared { path } => ViewError::NoStylesheetDeclared { path },
            ResolveError::StylesheetMissing { href, path } => {
                ViewError::StylesheetMissing { href, path }
            }
        }
    }
}
