use std::{fs, io, io::Write, path::{Path, PathBuf}, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use loxscan::{ConsoleReporter, Scanner};

/// Exit status when the script contained scan errors (`EX_DATAERR`).
const EXIT_DATA_ERROR: u8 = 65;

#[derive(Parser)]
#[command(name = "loxscan", version, about = "Print the tokens of a Lox script")]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted.
    script: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Driver code.
fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.script {
        Some(path) => run_file(&path),
        None => {
            // No arguments were given. In this case, we run the REPL interface.
            run_repl()?;
            Ok(ExitCode::SUCCESS)
        },
    }
}

/// `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "loxscan=debug" } else { "loxscan=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Scans the source code at the file path and prints its tokens.
fn run_file(path: &Path) -> anyhow::Result<ExitCode> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;
    info!(path = %path.display(), bytes = source.len(), "scanning file");

    let mut reporter = ConsoleReporter::new();
    run(&source, &mut reporter)?;

    if reporter.had_error() {
        return Ok(ExitCode::from(EXIT_DATA_ERROR));
    }
    Ok(ExitCode::SUCCESS)
}

/// Runs the interactive prompt until stdin is closed.
fn run_repl() -> anyhow::Result<()> {
    let mut reporter = ConsoleReporter::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;  // to flush out "> "

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            debug!("end of input, leaving prompt");
            break;
        }

        run(&line, &mut reporter)?;
        // A mistake on one line should not mark the rest of the session.
        reporter.reset();
    }

    Ok(())
}

/// Scans the source code string and prints one token per line.
fn run(source: &str, reporter: &mut ConsoleReporter) -> io::Result<()> {
    let tokens = Scanner::new(source, reporter).scan_tokens();

    let mut out = io::stdout().lock();
    for token in &tokens {
        writeln!(out, "{}", token)?;
    }
    out.flush()
}
