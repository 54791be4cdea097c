//! new3 CLI
//!
//! Usage:
//!   new3 [--hive <DIR>] [TOKENS]...
//!
//! Every token after the program options is handed to the help engine as
//! is, including `-h`/`--help`. Set `RUST_LOG=debug` to trace resolution on
//! stderr.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use new3::{load_catalog, show_help};

#[derive(Parser)]
#[command(name = "new3")]
#[command(about = "Shows help for installed project templates")]
#[command(disable_help_flag = true)]
struct Cli {
    /// Directory holding catalog.toml (uses the builtin catalog if not provided)
    #[arg(long, value_name = "DIR")]
    hive: Option<PathBuf>,

    /// Template selector, help flag and template options
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    tokens: Vec<String>,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let catalog = load_catalog(cli.hive.as_deref());
    let output = show_help(cli.tokens, &catalog);

    if !output.stdout.is_empty() {
        print!("{}", output.stdout);
    }
    if !output.stderr.is_empty() {
        eprint!("{}", output.stderr);
    }

    std::process::exit(output.exit_code());
}

// Silent unless RUST_LOG is set, so stderr only carries diagnostics.
fn init_logging() {
    let default_level = "off";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
