// ABOUTME: CLI for rewriting root-relative src/href paths in an HTML file.
// ABOUTME: Reads index.html next to the executable (or --dir/--input) and writes output.html.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{debug, info};
use relpath::{Options, QuoteMode};

const EXIT_READ: u8 = 1;

/// Rewrite src="/..." and href="/..." attributes to ./-relative paths.
#[derive(Parser, Debug)]
#[command(name = "relpath")]
#[command(about = "Rewrite root-relative src/href paths in HTML to relative ones", long_about = None)]
struct Args {
    /// Directory holding index.html and output.html (default: the executable's directory).
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Input HTML file (overrides <dir>/index.html).
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Output HTML file (overrides <dir>/output.html).
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Accept mismatched quote pairs such as src="/a.png'.
    #[arg(long, default_value_t = false)]
    loose_quotes: bool,

    /// Log each pipeline step to stderr.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    let options = match build_options(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {:#}", err);
            return ExitCode::from(EXIT_READ);
        }
    };
    debug!(
        "input {}, output {}, {} quotes",
        options.input.display(),
        options.output.display(),
        options.quote_mode
    );

    match relpath::run(&options) {
        Ok(summary) => {
            info!(
                "{} path(s) rewritten into {}",
                summary.rewritten,
                summary.output.display()
            );
            println!("HTML file updated successfully!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_logging(args: &Args) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn build_options(args: &Args) -> Result<Options> {
    let mut builder = Options::builder();

    // The executable's directory is only needed when a default name is in play.
    if args.input.is_none() || args.output.is_none() {
        let dir = match &args.dir {
            Some(dir) => dir.clone(),
            None => program_dir()?,
        };
        builder = builder.dir(dir);
    }
    if let Some(input) = &args.input {
        builder = builder.input(input);
    }
    if let Some(output) = &args.output {
        builder = builder.output(output);
    }
    if args.loose_quotes {
        builder = builder.quote_mode(QuoteMode::Loose);
    }

    Ok(builder.build())
}

fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate the relpath executable")?;
    exe.parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe.display()))
}
