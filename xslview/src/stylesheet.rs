//! Locating the XSLT stylesheet a document declares
//!
//! Documents name their stylesheet with a processing instruction such as
//! `<?xml-stylesheet type="text/xsl" href="report.xsl"?>`. The href is
//! resolved against the directory of the XML file itself, never against the
//! working directory: the viewer is often started by double-click or drop,
//! where the working directory has nothing to do with the document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::path::{normalize, FilePath};

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static STYLESHEET_PI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<\?xml-stylesheet(\s.*?)?\?>").unwrap());

static HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)(?:^|\s)href\s*=\s*(?:"([^"]+)"|'([^']+)')"#).unwrap()
});

/// The stylesheet a document declares, and where it lives on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylesheetReference {
    /// The href exactly as declared, trimmed
    pub href: String,
    /// The href resolved against the document's directory
    pub path: PathBuf,
}

/// A document's text together with its resolved stylesheet
#[derive(Debug, Clone)]
pub struct ResolvedDocument {
    pub source: String,
    pub stylesheet: StylesheetReference,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} does not declare an XSLT stylesheet", .path.display())]
    NoStylesheetDeclared { path: PathBuf },

    #[error("stylesheet \"{href}\" not found at {}", .path.display())]
    StylesheetMissing { href: String, path: PathBuf },
}

/// Find and resolve the stylesheet declared by the XML file at `xml_path`
pub fn resolve(xml_path: &FilePath) -> Result<StylesheetReference, ResolveError> {
    resolve_document(xml_path).map(|doc| doc.stylesheet)
}

/// Like [`resolve`], also handing back the document text that was read
pub fn resolve_document(xml_path: &FilePath) -> Result<ResolvedDocument, ResolveError> {
    let source = read_text(xml_path.as_path()).map_err(|source| ResolveError::Unreadable {
        path: xml_path.to_path_buf(),
        source,
    })?;

    let href = find_stylesheet_href(&source).ok_or_else(|| ResolveError::NoStylesheetDeclared {
        path: xml_path.to_path_buf(),
    })?;

    let path = resolve_href(xml_path.as_path(), &href);
    debug!(href = %href, resolved = %path.display(), "found stylesheet declaration");

    if !path.is_file() {
        return Err(ResolveError::StylesheetMissing { href, path });
    }

    Ok(ResolvedDocument {
        source,
        stylesheet: StylesheetReference { href, path },
    })
}

/// Extract the href of the first `xml-stylesheet` instruction carrying a
/// non-blank one.
///
/// Commented-out instructions are ignored; the whole text is scanned since
/// other instructions or comments may come first.
pub fn find_stylesheet_href(xml: &str) -> Option<String> {
    let uncommented = COMMENT.replace_all(xml, "");
    STYLESHEET_PI
        .captures_iter(&uncommented)
        .filter_map(|pi| pi.get(1))
        .find_map(|body| {
            let caps = HREF.captures(body.as_str())?;
            let value = caps.get(1).or_else(|| caps.get(2))?.as_str().trim();
            (!value.is_empty()).then(|| value.to_string())
        })
}

/// Resolve `href` against the absolute directory containing `xml_path`
pub fn resolve_href(xml_path: &Path, href: &str) -> PathBuf {
    let absolute = std::path::absolute(xml_path).unwrap_or_else(|_| xml_path.to_path_buf());
    let dir = absolute.parent().unwrap_or(Path::new(""));
    normalize(&dir.join(href))
}

/// Read a file as UTF-8, dropping a leading byte-order mark
pub(crate) fn read_text(path: &Path) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text),
    }
}
