//! XML to HTML transformation
//!
//! [`Transformer::transform`] resolves the declared stylesheet, runs it
//! through an [`XsltEngine`] and turns every failure into a [`ViewError`].
//! A fresh engine is built for each call and dropped before returning, so
//! parsed trees never outlive the transformation.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, info, warn};
use url::Url;
use xee_adapter::XeeXsltEngine;
use xslview_traits::{Error as EngineError, ExtendedXsltEngine, XsltEngine};

use crate::error::ViewError;
use crate::html;
use crate::path::FilePath;
use crate::stylesheet::{self, read_text, StylesheetReference};

/// Outcome of rendering one document
pub type TransformResult = Result<RenderedDocument, ViewError>;

/// A successfully rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Complete HTML document with a UTF-8 charset declaration
    pub html: String,
    /// The XML file that was rendered
    pub source: FilePath,
    /// The stylesheet that was applied
    pub stylesheet: StylesheetReference,
    /// `file://` URL of the XML file's directory, for resolving relative resources
    pub base_url: Option<Url>,
}

/// Renders XML files with engine `E`
pub struct Transformer<E = XeeXsltEngine> {
    _engine: PhantomData<fn() -> E>,
}

impl Transformer {
    /// Transformer backed by the xee engine
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E> Default for Transformer<E> {
    fn default() -> Self {
        Self {
            _engine: PhantomData,
        }
    }
}

impl<E> Clone for Transformer<E> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<E> fmt::Debug for Transformer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformer")
            .field("engine", &std::any::type_name::<E>())
            .finish()
    }
}

impl<E: XsltEngine + Default> Transformer<E> {
    /// Render the XML file at `xml_path` through its declared stylesheet
    pub fn transform(&self, xml_path: &FilePath) -> TransformResult {
        let result = self.render(xml_path);
        match &result {
            Ok(doc) => info!(
                path = %xml_path,
                stylesheet = %doc.stylesheet.path.display(),
                bytes = doc.html.len(),
                "rendered document"
            ),
            Err(err) => warn!(path = %xml_path, kind = err.kind().as_str(), "{err}"),
        }
        result
    }

    fn render(&self, xml_path: &FilePath) -> TransformResult {
        debug!(path = %xml_path, "resolving stylesheet");
        let resolved = stylesheet::resolve_document(xml_path)?;

        let xslt = read_text(&resolved.stylesheet.path).map_err(|source| ViewError::Unreadable {
            path: resolved.stylesheet.path.clone(),
            source,
        })?;

        let stylesheet_dir = resolved.stylesheet.path.parent();
        let output = run_engine::<E>(&resolved.source, &xslt, stylesheet_dir).map_err(
            |source| ViewError::TransformFailure {
                path: xml_path.to_path_buf(),
                source,
            },
        )?;

        Ok(RenderedDocument {
            html: html::ensure_html_shell(&output),
            source: xml_path.clone(),
            stylesheet: resolved.stylesheet,
            base_url: base_url_for(xml_path),
        })
    }
}

fn run_engine<E: XsltEngine + Default>(
    source: &str,
    xslt: &str,
    stylesheet_dir: Option<&Path>,
) -> Result<String, EngineError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut engine = E::default();
        debug!(
            engine = engine.engine_name(),
            xslt_version = engine.xslt_version(),
            "applying stylesheet"
        );
        engine.transform_with_base(xslt, stylesheet_dir, source)
    }));

    match outcome {
        Ok(result) => result,
        Err(panic_info) => Err(panic_error(&panic_message(&*panic_info))),
    }
}

/// xee reports features it cannot compile by panicking with `Unsupported`
fn panic_error(message: &str) -> EngineError {
    if message.contains("Unsupported") {
        EngineError::Unsupported(
            "the stylesheet uses an instruction or declaration the xee engine cannot run yet"
                .to_string(),
        )
    } else {
        EngineError::Other(format!("Engine panic: {message}"))
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// `file://` URL of the directory holding `xml_path`, with a trailing slash
pub fn base_url_for(xml_path: &FilePath) -> Option<Url> {
    let absolute = std::path::absolute(xml_path.as_path()).ok()?;
    let dir = absolute.parent()?;
    Url::from_directory_path(dir).ok()
}
