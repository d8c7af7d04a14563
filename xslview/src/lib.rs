//! xslview: render XML documents through their declared XSLT stylesheet
//!
//! The crate covers everything between "the user picked a file" and "here is
//! HTML to show": cleaning the path, finding the stylesheet the document
//! declares, running the transformation and keeping track of the file being
//! displayed. Windows, dialogs and drag-and-drop belong to the front end,
//! which talks to this crate through [`Viewer`] and [`Surface`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xslview::Session;
//!
//! let mut session = Session::new();
//! match session.open("reports/daily.xml") {
//!     Ok(doc) => println!("{}", doc.html),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

pub mod error;
pub mod html;
pub mod page;
pub mod path;
pub mod report;
pub mod session;
pub mod stylesheet;
pub mod transform;
pub mod viewer;

// Re-export core types
pub use error::{FailureKind, ViewError};
pub use path::{clean, FilePath};
pub use report::{OutcomeReport, OutcomeStatus};
pub use session::{Session, SessionState};
pub use stylesheet::{resolve, ResolveError, StylesheetReference};
pub use transform::{RenderedDocument, TransformResult, Transformer};
pub use viewer::{OpenSource, Request, Surface, Viewer};

// Engine abstractions, for front ends that plug in their own backend
pub use xslview_traits::{XmlTree, XsltEngine};
