//! Unravel Command-Line Interface
//!
//! Builds the textbook algorithm circuits, draws them and runs them on the
//! simulator backends from a terminal.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;
use unravel_algos::{AlgorithmSelection, BitString, DjFunction, Scheme};
use unravel_hal::Provider;

mod commands;

use commands::{algorithms, backends, draw, run, version};

/// Unravel - explore quantum algorithms one circuit at a time
#[derive(Parser)]
#[command(name = "unravel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Parameters that select and shape an algorithm circuit.
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Algorithm (deutsch-jozsa, bernstein-vazirani, entanglement, or dj, bv, ghz, w)
    pub algorithm: AlgorithmSelection,

    /// Number of qubits (algorithm default when omitted)
    #[arg(short = 'n', long)]
    pub qubits: Option<u32>,

    /// Deutsch-Jozsa oracle function (constant0, constant1, balanced)
    #[arg(short, long)]
    pub function: Option<DjFunction>,

    /// Balanced oracle X gate pattern, e.g. 101
    #[arg(long)]
    pub x_gates: Option<BitString>,

    /// Balanced oracle CX gate pattern, e.g. 101
    #[arg(long)]
    pub cx_gates: Option<BitString>,

    /// Bernstein-Vazirani secret (random when omitted)
    #[arg(long)]
    pub secret: Option<BitString>,

    /// Entangled state (ghz, w)
    #[arg(long)]
    pub scheme: Option<Scheme>,

    /// Seed for random secrets and sampling
    #[arg(long, env = "UNRAVEL_SEED")]
    pub seed: Option<u64>,
}

/// Output format for results.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an algorithm circuit and run it on a simulator backend
    Run {
        #[command(flatten)]
        build: BuildArgs,

        /// Provider (basic_aer, aer)
        #[arg(short, long, env = "UNRAVEL_PROVIDER", default_value = "basic_aer")]
        provider: Provider,

        /// Backend (the provider's first backend when omitted)
        #[arg(short, long)]
        backend: Option<String>,

        /// Number of shots
        #[arg(short, long, env = "UNRAVEL_SHOTS", default_value = "1024")]
        shots: u32,

        /// Output format (table, json)
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Draw an algorithm circuit
    Draw {
        #[command(flatten)]
        build: BuildArgs,

        /// Draw the oracle on its own
        #[arg(long)]
        oracle: bool,
    },

    /// List providers and their backends
    Backends,

    /// List the available algorithms
    Algorithms,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Run {
            build,
            provider,
            backend,
            shots,
            format,
        } => run::execute(&build, provider, backend.as_deref(), shots, format).await,

        Commands::Draw { build, oracle } => draw::execute(&build, oracle),

        Commands::Backends => backends::execute().await,

        Commands::Algorithms => {
            algorithms::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unravel_algos::AlgorithmKind;

    #[test]
    fn test_parse_run_defaults() {
        let cli = Cli::try_parse_from(["unravel", "run", "dj"]).unwrap();
        match cli.command {
            Commands::Run {
                build,
                provider,
                backend,
                shots,
                format,
            } => {
                assert_eq!(build.algorithm.kind, AlgorithmKind::DeutschJozsa);
                assert_eq!(build.qubits, None);
                assert_eq!(provider, Provider::BasicAer);
                assert_eq!(backend, None);
                assert_eq!(shots, 1024);
                assert_eq!(format, OutputFormat::Table);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_run_with_options() {
        let cli = Cli::try_parse_from([
            "unravel",
            "-vv",
            "run",
            "bernstein-vazirani",
            "-n",
            "4",
            "--secret",
            "1011",
            "--provider",
            "Aer",
            "--backend",
            "aer_simulator_statevector",
            "--shots",
            "100",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Run {
                build,
                provider,
                backend,
                shots,
                format,
            } => {
                assert_eq!(build.algorithm.kind, AlgorithmKind::BernsteinVazirani);
                assert_eq!(build.qubits, Some(4));
                assert_eq!(build.secret.map(|s| s.to_string()).as_deref(), Some("1011"));
                assert_eq!(provider, Provider::Aer);
                assert_eq!(backend.as_deref(), Some("aer_simulator_statevector"));
                assert_eq!(shots, 100);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_draw_oracle() {
        let cli = Cli::try_parse_from([
            "unravel", "draw", "dj", "--function", "balanced", "--cx-gates", "011", "--oracle",
        ])
        .unwrap();
        match cli.command {
            Commands::Draw { build, oracle } => {
                assert!(oracle);
                assert_eq!(build.function, Some(DjFunction::Balanced));
                assert_eq!(build.cx_gates.map(|s| s.to_string()).as_deref(), Some("011"));
            }
            _ => panic!("expected draw"),
        }
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Cli::try_parse_from(["unravel", "run", "grover"]).is_err());
        assert!(Cli::try_parse_from(["unravel", "run", "bv", "--secret", "12"]).is_err());
        assert!(Cli::try_parse_from(["unravel", "run", "ghz", "--provider", "ibmq"]).is_err());
        assert!(Cli::try_parse_from(["unravel", "run"]).is_err());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert!(matches!(
            Cli::try_parse_from(["unravel", "backends"]).unwrap().command,
            Commands::Backends
        ));
        assert!(matches!(
            Cli::try_parse_from(["unravel", "algorithms"]).unwrap().command,
            Commands::Algorithms
        ));
        assert!(matches!(
            Cli::try_parse_from(["unravel", "version"]).unwrap().command,
            Commands::Version
        ));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
