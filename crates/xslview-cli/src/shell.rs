//! Line-driven viewer shell
//!
//! Each line read from the input becomes one [`Request`]; this is the
//! terminal counterpart of the buttons and drop target of a window.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use xslview::{OpenSource, Request, Surface, Viewer, XsltEngine};

pub const HELP: &str = "\
commands:
  open <path>          open an XML file (quotes allowed)
  drop <path> [...]    simulate dropping files (shell quoting); only the first is opened
  refresh              render the current file again
  home                 close the current file and show the welcome view
  exit                 leave the viewer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Request(Request),
    Help,
    Nothing,
}

/// Parse one input line. `Err` carries a message for the user.
pub fn parse_command(line: &str) -> std::result::Result<ShellCommand, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ShellCommand::Nothing);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let request = match word.to_ascii_lowercase().as_str() {
        "open" if rest.is_empty() => return Err("usage: open <path>".to_string()),
        "open" => Request::Open(OpenSource::Path(rest.to_string())),
        "drop" => {
            let paths = shlex::split(rest)
                .ok_or_else(|| "unbalanced quotes in dropped paths".to_string())?;
            Request::Open(OpenSource::Dropped(paths))
        }
        "refresh" => Request::Refresh,
        "home" => Request::Home,
        "exit" | "quit" => Request::Exit,
        "help" | "?" => return Ok(ShellCommand::Help),
        other => return Err(format!("unknown command `{other}`, try `help`")),
    };
    Ok(ShellCommand::Request(request))
}

/// Read commands from `input` until it ends or `exit` is entered
pub fn run<S, E, R, W>(viewer: &mut Viewer<S, E>, input: R, mut out: W) -> Result<()>
where
    S: Surface,
    E: XsltEngine + Default,
    R: BufRead,
    W: Write,
{
    prompt(&mut out)?;
    for line in input.lines() {
        let line = line.context("failed to read command")?;
        match parse_command(&line) {
            Ok(ShellCommand::Request(request)) => {
                let flow = viewer
                    .handle(request)
                    .context("failed to update the view")?;
                if flow.is_break() {
                    return Ok(());
                }
            }
            Ok(ShellCommand::Help) => writeln!(out, "{HELP}")?,
            Ok(ShellCommand::Nothing) => {}
            Err(message) => writeln!(out, "{message}")?,
        }
        prompt(&mut out)?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
