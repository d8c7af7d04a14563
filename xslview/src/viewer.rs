//! Front-end plumbing: requests in, rendered results out
//!
//! A front end translates user actions (file dialog, drop, buttons) into a
//! [`Request`] and hands it to a [`Viewer`], which drives the [`Session`] and
//! shows the outcome on a [`Surface`]. The viewer never exits the process
//! itself; [`Request::Exit`] is reported back as [`ControlFlow::Break`].

use std::io;
use std::ops::ControlFlow;

use tracing::debug;
use xee_adapter::XeeXsltEngine;
use xslview_traits::XsltEngine;

use crate::error::ViewError;
use crate::session::Session;
use crate::transform::TransformResult;

/// Where the path of an open request came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenSource {
    /// A single path, from a file dialog or the command line
    Path(String),
    /// Paths of dropped files; only the first one is opened
    Dropped(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Open(OpenSource),
    Refresh,
    Home,
    Exit,
}

/// Something that can display rendered documents
pub trait Surface {
    /// Show a rendered document, or the failure in its place
    fn render(&mut self, result: &TransformResult) -> io::Result<()>;

    /// Replace the content with the welcome view
    fn clear(&mut self) -> io::Result<()>;
}

/// A session bound to the surface that displays it
#[derive(Debug)]
pub struct Viewer<S, E = XeeXsltEngine> {
    session: Session<E>,
    surface: S,
}

impl<S: Surface> Viewer<S> {
    /// Viewer over a fresh xee-backed session
    pub fn new(surface: S) -> Self {
        Self::with_session(Session::new(), surface)
    }
}

impl<S: Surface, E: XsltEngine + Default> Viewer<S, E> {
    pub fn with_session(session: Session<E>, surface: S) -> Self {
        Self { session, surface }
    }

    /// Show the first view: `initial` opened as if requested, else the welcome view
    pub fn start(&mut self, initial: Option<&str>) -> io::Result<()> {
        match initial {
            Some(path) => self
                .handle(Request::Open(OpenSource::Path(path.to_string())))
                .map(|_| ()),
            None => self.surface.clear(),
        }
    }

    /// Carry out one request
    pub fn handle(&mut self, request: Request) -> io::Result<ControlFlow<()>> {
        debug!(?request, "handling request");
        match request {
            Request::Open(source) => {
                let result = match first_path(&source) {
                    Some(path) => self.session.open(path),
                    None => Err(ViewError::InvalidInput {
                        input: String::new(),
                        reason: "no files were dropped",
                    }),
                };
                self.surface.render(&result)?;
            }
            Request::Refresh => {
                let result = self.session.refresh();
                self.surface.render(&result)?;
            }
            Request::Home => {
                self.session.reset();
                self.surface.clear()?;
            }
            Request::Exit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    pub fn session(&self) -> &Session<E> {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

fn first_path(source: &OpenSource) -> Option<&str> {
    match source {
        OpenSource::Path(path) => Some(path.as_str()),
        OpenSource::Dropped(paths) => paths.first().map(String::as_str),
    }
}
