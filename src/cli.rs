// Command-line interface.
//
// Thin wrapper over the file helpers: compute the delta between two
// files and write it to a file or stdout, with an optional JSON stats
// summary on stderr.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::engine::{DEFAULT_CHUNK_SIZE, DeltaOptions};
use crate::io::{MAX_CONTENT_SIZE, diff_files_capped};

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// rsync-style chunk delta encoder.
#[derive(Parser, Debug)]
#[command(
    name = "chunkdelta",
    version,
    about = "Chunk-level delta encoder",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Increase verbosity (repeatable).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Compute the delta that turns DESTINATION into SOURCE.
    Diff(DiffArgs),
    /// Print build configuration.
    Config,
}

#[derive(Args, Debug)]
struct DiffArgs {
    /// The new file (what the receiver should end up with).
    source: PathBuf,

    /// The known file (what the receiver already has).
    destination: PathBuf,

    /// Output file (stdout when omitted).
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Chunk width in bytes.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Largest accepted input file in bytes.
    #[arg(long, default_value_t = MAX_CONTENT_SIZE)]
    max_content_size: u64,

    /// Print a JSON stats summary to stderr.
    #[arg(long)]
    stats: bool,
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_diff(args: &DiffArgs, force: bool, quiet: bool, verbose: u8) -> i32 {
    let opts = DeltaOptions {
        chunk_size: args.chunk_size,
    };

    let delta = match diff_files_capped(
        &args.source,
        &args.destination,
        &opts,
        args.max_content_size,
    ) {
        Ok(delta) => delta,
        Err(e) => {
            eprintln!("chunkdelta: {e}");
            return 1;
        }
    };

    if args.stats {
        let modified = !delta.starts_with(br#"{"m":false"#);
        let source_bytes = fs::metadata(&args.source).map(|m| m.len()).unwrap_or(0);
        let stats = serde_json::json!({
            "source_bytes": source_bytes,
            "delta_bytes": delta.len(),
            "chunk_size": args.chunk_size,
            "modified": modified,
            "ratio": if source_bytes > 0 {
                delta.len() as f64 / source_bytes as f64
            } else {
                0.0
            },
        });
        eprintln!("{stats}");
    }

    match &args.output {
        Some(path) => {
            if path.exists() && !force {
                eprintln!(
                    "chunkdelta: output file exists, use --force to overwrite: {}",
                    path.display()
                );
                return 1;
            }
            if let Err(e) = fs::write(path, &delta) {
                eprintln!("chunkdelta: output file: {}: {e}", path.display());
                return 1;
            }
            if verbose > 0 && !quiet {
                eprintln!(
                    "chunkdelta: wrote {} bytes to {}",
                    delta.len(),
                    path.display()
                );
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            if handle.write_all(&delta).and_then(|()| handle.flush()).is_err() {
                return 1;
            }
        }
    }

    0
}

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("chunkdelta version {version}");
    eprintln!("DEFAULT_CHUNK_SIZE={DEFAULT_CHUNK_SIZE}");
    eprintln!("MAX_CONTENT_SIZE={MAX_CONTENT_SIZE}");
    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Cmd::Diff(args) => cmd_diff(args, cli.force, cli.quiet, cli.verbose),
        Cmd::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
