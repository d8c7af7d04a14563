//! xslview: render XML reports through their declared XSLT stylesheet

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use xslview::{html, path, stylesheet, OutcomeReport, Session, Viewer};
use xslview_cli::{logging, shell, surface::FileSurface};

#[derive(Parser, Debug)]
#[command(
    name = "xslview",
    version,
    about = "Render XML reports through their declared XSLT stylesheet"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a document to HTML
    Render {
        /// XML file declaring an xml-stylesheet
        file: String,
        /// Write the HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print a JSON outcome report instead of the HTML
        #[arg(long)]
        json: bool,
    },
    /// Show which stylesheet a document declares and where it resolves
    Resolve {
        file: String,
        #[arg(long)]
        json: bool,
    },
    /// Interactive viewer that writes every view to an HTML file
    View {
        /// Document to open before the first prompt
        file: Option<String>,
        /// HTML file to write views to (default: xslview.html in the temp dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let outcome = match cli.command {
        Command::Render { file, output, json } => render(&file, output, json),
        Command::Resolve { file, json } => resolve(&file, json),
        Command::View { file, output } => view(file.as_deref(), output),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn render(file: &str, output: Option<PathBuf>, json: bool) -> Result<ExitCode> {
    let mut session = Session::new();
    let result = session.open(file);

    if json {
        println!("{}", OutcomeReport::from_result(&result).to_json());
    }

    let doc = match result {
        Ok(doc) => doc,
        Err(err) => {
            if !json {
                eprintln!("error: {err}");
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    match output {
        Some(path) => {
            let page = match &doc.base_url {
                Some(base) => html::inject_base(&doc.html, base.as_str()),
                None => doc.html,
            };
            fs::write(&path, page)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None if !json => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(doc.html.as_bytes())?;
            writeln!(stdout)?;
        }
        None => {}
    }

    Ok(ExitCode::SUCCESS)
}

fn resolve(file: &str, json: bool) -> Result<ExitCode> {
    match stylesheet::resolve(&path::clean(file)) {
        Ok(reference) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&reference)?);
            } else {
                println!("href: {}", reference.href);
                println!("path: {}", reference.path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn view(file: Option<&str>, output: Option<PathBuf>) -> Result<ExitCode> {
    let output = output.unwrap_or_else(|| std::env::temp_dir().join("xslview.html"));
    println!("views are written to {}", output.display());
    println!("type `help` for commands");

    let mut viewer = Viewer::new(FileSurface::new(output, io::stdout()));
    viewer.start(file).context("failed to show the first view")?;
    shell::run(&mut viewer, io::stdin().lock(), io::stdout())?;

    Ok(ExitCode::SUCCESS)
}
