//! The "current file" a viewer is displaying
//!
//! A [`Session`] is either idle (nothing open) or active (one file open, which
//! may since have disappeared from disk). Opening moves it to active, reset
//! moves it back to idle, refresh re-renders without changing state.

use tracing::{debug, info};
use xee_adapter::XeeXsltEngine;
use xslview_traits::XsltEngine;

use crate::error::ViewError;
use crate::path::{self, FilePath};
use crate::transform::{TransformResult, Transformer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
}

/// Holder of the current file, rendering through engine `E`
#[derive(Debug)]
pub struct Session<E = XeeXsltEngine> {
    transformer: Transformer<E>,
    current: Option<FilePath>,
}

impl Session {
    /// Idle session backed by the xee engine
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E> Default for Session<E> {
    fn default() -> Self {
        Self {
            transformer: Transformer::default(),
            current: None,
        }
    }
}

impl<E: XsltEngine + Default> Session<E> {
    /// Open the file named by `raw` and render it.
    ///
    /// Empty, non-`.xml` and missing paths are rejected without touching the
    /// session. Otherwise the cleaned path becomes the current file whatever
    /// the transformation outcome, so a failed render can be refreshed.
    pub fn open(&mut self, raw: &str) -> TransformResult {
        let path = path::clean(raw);
        debug!(raw, cleaned = %path, "open requested");

        if path.is_empty() {
            return Err(ViewError::InvalidInput {
                input: raw.to_string(),
                reason: "empty file path",
            });
        }
        if !path.has_extension("xml") {
            return Err(ViewError::InvalidInput {
                input: raw.to_string(),
                reason: "only .xml files can be opened",
            });
        }
        if !path.is_file() {
            return Err(ViewError::NotFound {
                path: path.to_path_buf(),
            });
        }

        info!(path = %path, "opening document");
        let result = self.transformer.transform(&path);
        self.current = Some(path);
        result
    }

    /// Render the current file again
    pub fn refresh(&self) -> TransformResult {
        let Some(path) = &self.current else {
            return Err(ViewError::NoActiveFile);
        };
        if !path.is_file() {
            return Err(ViewError::FileRemoved {
                path: path.to_path_buf(),
            });
        }

        info!(path = %path, "refreshing document");
        self.transformer.transform(path)
    }
}

impl<E> Session<E> {
    /// Forget the current file
    pub fn reset(&mut self) {
        if let Some(path) = self.current.take() {
            debug!(path = %path, "session reset");
        }
    }

    pub fn current_file(&self) -> Option<&FilePath> {
        self.current.as_ref()
    }

    pub fn state(&self) -> SessionState {
        match self.current {
            Some(_) => SessionState::Active,
            None => SessionState::Idle,
        }
    }
}
