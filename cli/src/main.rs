use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use helpdoc_core::ParsedDocument;
use helpdoc_parser::output::{OutputError, OutputFormat, format_document};
use helpdoc_parser::parse_help_text;
use helpdoc_parser::quality::{Choice, choose, needs_fallback};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "helpdoc")]
#[command(about = "Offline parsing of captured CLI help output")]
struct Cli {
    /// Log parser decisions to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse help text from a file.
    ParseFile(ParseFileArgs),
    /// Parse help text from stdin.
    ParseStdin(ParseStdinArgs),
    /// Parse many help files in parallel and print one summary row per file.
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
struct ParseFileArgs {
    /// Path to file containing help text.
    #[arg(long)]
    input: PathBuf,
    /// Help text from a second invocation, used when the primary parse is degraded.
    #[arg(long)]
    fallback: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct ParseStdinArgs {
    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Help text files to parse.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("{failed} of {total} file(s) could not be read")]
    Batch { failed: usize, total: usize },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::ParseFile(args) => run_parse_file(args),
        Command::ParseStdin(args) => run_parse_stdin(args),
        Command::Batch(args) => run_batch(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();
}

fn run_parse_file(args: ParseFileArgs) -> Result<(), CliError> {
    let primary = parse_help_text(&read_help_file(&args.input)?);

    let document = match args.fallback {
        Some(ref path) if needs_fallback(&primary) => {
            let fallback = parse_help_text(&read_help_file(path)?);
            match choose(&primary, &fallback) {
                Choice::Primary => {
                    info!(path = %path.display(), "fallback parse was not better; keeping primary");
                    primary
                }
                Choice::Fallback => {
                    info!(path = %path.display(), "using fallback parse");
                    fallback
                }
            }
        }
        Some(ref path) => {
            debug!(path = %path.display(), "primary parse is usable; fallback not read");
            primary
        }
        None => primary,
    };

    print_document(&document, args.format)
}

fn run_parse_stdin(args: ParseStdinArgs) -> Result<(), CliError> {
    let mut help_text = String::new();
    io::stdin()
        .read_to_string(&mut help_text)
        .map_err(CliError::Stdin)?;
    print_document(&parse_help_text(&help_text), args.format)
}

fn run_batch(args: BatchArgs) -> Result<(), CliError> {
    let results = args
        .inputs
        .par_iter()
        .map(|path| read_help_file(path).map(|text| parse_help_text(&text)))
        .collect::<Vec<_>>();

    let mut failed = 0usize;
    for (path, result) in args.inputs.iter().zip(&results) {
        match result {
            Ok(document) => println!("{}", summary_row(path, document)),
            Err(err) => {
                warn!("{err}");
                println!("{}\terror", path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Batch {
            failed,
            total: args.inputs.len(),
        });
    }
    Ok(())
}

fn summary_row(path: &Path, document: &ParsedDocument) -> String {
    let status = if document.warnings.is_empty() {
        "ok".to_string()
    } else {
        document.warnings.join("; ")
    };
    format!(
        "{}\tcommands={}\toptions={}\tusage={}\t{status}",
        path.display(),
        document.commands.len(),
        document.options.len(),
        document.usage_lines.len(),
    )
}

fn print_document(document: &ParsedDocument, format: OutputFormat) -> Result<(), CliError> {
    let rendered = format_document(document, format)?;
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
    Ok(())
}

fn read_help_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}
