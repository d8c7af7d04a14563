//! Surface that shows each view as an HTML file on disk

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;
use xslview::page::{self, WELCOME_HTML};
use xslview::{html, Surface, TransformResult};

/// Writes every view to `path`, reporting a one-line status to `status`.
///
/// Open the file in a browser and reload it after each command. Failure
/// pages keep showing which file was last rendered.
pub struct FileSurface<W> {
    path: PathBuf,
    status: W,
    shown: Option<String>,
}

impl<W: Write> FileSurface<W> {
    pub fn new(path: impl Into<PathBuf>, status: W) -> Self {
        Self {
            path: path.into(),
            status,
            shown: None,
        }
    }

    pub fn status(&self) -> &W {
        &self.status
    }

    fn write_page(&self, page: &str) -> io::Result<()> {
        fs::write(&self.path, page)?;
        debug!(path = %self.path.display(), bytes = page.len(), "view written");
        Ok(())
    }
}

impl<W: Write> Surface for FileSurface<W> {
    fn render(&mut self, result: &TransformResult) -> io::Result<()> {
        let page = match result {
            Ok(doc) => {
                let line = page::status_line(&doc.source.display_slashes());
                writeln!(self.status, "{line}")?;
                self.shown = Some(line);
                match &doc.base_url {
                    Some(base) => html::inject_base(&doc.html, base.as_str()),
                    None => doc.html.clone(),
                }
            }
            Err(err) => {
                writeln!(self.status, "error [{}]: {err}", err.kind().as_str())?;
                page::frame(&err.to_html(), self.shown.as_deref())
            }
        };
        self.write_page(&page)
    }

    fn clear(&mut self) -> io::Result<()> {
        writeln!(self.status, "home")?;
        self.shown = None;
        self.write_page(&page::frame(WELCOME_HTML, None))
    }
}
