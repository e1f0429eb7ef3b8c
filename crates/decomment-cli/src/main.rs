//! Command-line wrapper around the `decomment` scanner.
//!
//! All validation lives here: the scanner itself is total and cannot fail,
//! so every diagnostic this binary prints concerns user input (flags,
//! paths) or ambient I/O, never the scan.

use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use decomment::{ScannerOptions, StreamingScanner};

const READ_CHUNK: usize = 8 * 1024;

#[derive(Debug, Parser)]
#[command(
    name = "decomment",
    about = "Strip comments from source code, selectively by style",
    version
)]
struct Cli {
    /// Strip single-line comments    //...
    #[arg(short = 'L', long)]
    line: bool,

    /// Strip C-style comments        /*...*/
    #[arg(short = 'C', long)]
    cstyle: bool,

    /// Strip Javadoc comments        /**...*/
    #[arg(short = 'J', long)]
    javadoc: bool,

    /// Strip HeaderDoc comments      /*!...*/
    #[arg(short = 'H', long)]
    headerdoc: bool,

    /// File from which to read input
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
}

impl Cli {
    fn options(&self) -> ScannerOptions {
        ScannerOptions {
            strip_line: self.line,
            strip_block: self.cstyle,
            strip_javadoc: self.javadoc,
            strip_headerdoc: self.headerdoc,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("must specify at least one comment style (options include -L, -C, -J, and -H)")]
    NoStyleSelected,

    #[error("input file `{}` does not exist", .0.display())]
    InputMissing(PathBuf),

    #[error("failed to read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// Every violated rule produces its own diagnostic before the process
/// gives up; the core is never invoked on invalid input.
fn validate(cli: &Cli) -> Vec<CliError> {
    let mut errors = Vec::new();
    if !(cli.line || cli.cstyle || cli.javadoc || cli.headerdoc) {
        errors.push(CliError::NoStyleSelected);
    }
    if !cli.input.exists() {
        errors.push(CliError::InputMissing(cli.input.clone()));
    }
    errors
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut file = File::open(&cli.input).map_err(|source| CliError::Read {
        path: cli.input.clone(),
        source,
    })?;

    let mut scanner = StreamingScanner::new(cli.options());
    let mut out = BufWriter::new(io::stdout().lock());
    let mut chunk = [0u8; READ_CHUNK];
    let mut pending = String::new();

    loop {
        let n = file.read(&mut chunk).map_err(|source| CliError::Read {
            path: cli.input.clone(),
            source,
        })?;
        if n == 0 {
            break;
        }
        scanner.feed_bytes(&chunk[..n]);
        pending.clear();
        pending.extend(scanner.by_ref());
        out.write_all(pending.as_bytes())?;
    }

    pending.clear();
    pending.extend(scanner.finish());
    out.write_all(pending.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let errors = validate(&cli);
    if !errors.is_empty() {
        for err in &errors {
            eprintln!("error: {err}");
        }
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
