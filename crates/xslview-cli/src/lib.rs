//! Terminal front end for xslview
//!
//! The binary wires these pieces to clap; they live in a library so the
//! shell and surface can be driven from tests.

pub mod logging;
pub mod shell;
pub mod surface;
