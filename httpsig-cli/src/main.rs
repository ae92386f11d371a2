//! httpsig CLI - Sign and verify RFC 9421 HTTP message signatures with JSON Web Keys.

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod options;
mod output;

use commands::{sign, verify};
use error::CliResult;
use options::{MessageArgs, SignConfig, VerifyConfig};
use output::OutputSelection;

#[derive(Parser)]
#[command(name = "httpsig")]
#[command(about = "RFC 9421 HTTP message signing and verification CLI")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a message described by its component lines
    Sign {
        #[command(flatten)]
        message: MessageArgs,
        /// Dictionary label for the header output
        #[arg(long)]
        label: Option<String>,
        /// Set `alg` from the key's algorithm when --alg is not given
        #[arg(long)]
        alg_from_key: bool,
        /// Print the signature as base64 (default when no output is chosen)
        #[arg(long)]
        signature: bool,
        /// Print Signature-Input and Signature header values
        #[arg(long)]
        headers: bool,
        /// Print the @signature-params value
        #[arg(long)]
        metadata: bool,
        /// Print the signature base
        #[arg(long)]
        base: bool,
    },
    /// Verify a signature over a message described by its component lines
    Verify {
        #[command(flatten)]
        message: MessageArgs,
        /// Signature to check, `:<base64>:` or bare base64
        #[arg(long = "signature-value", value_name = "SIG")]
        signature: Option<String>,
        /// Exit with error code if verification fails
        #[arg(long)]
        strict: bool,
        /// Print the verification result (default when no output is chosen)
        #[arg(long)]
        result: bool,
        /// Print the @signature-params value
        #[arg(long)]
        metadata: bool,
        /// Print the signature base
        #[arg(long)]
        base: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Sign { message, label, alg_from_key, signature, headers, metadata, base } => {
            let config = SignConfig::new(message, label, alg_from_key)?;
            debug!("Sign config: {}", serde_json::to_string(&config).unwrap_or_default());
            let selection =
                OutputSelection { signature, headers, metadata, base, ..Default::default() };
            sign::run(config, selection)
        }
        Commands::Verify { message, signature, strict, result, metadata, base } => {
            let config = VerifyConfig::new(message, signature, strict)?;
            debug!("Verify config: {}", serde_json::to_string(&config).unwrap_or_default());
            let selection = OutputSelection { result, metadata, base, ..Default::default() };
            verify::run(config, selection)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
