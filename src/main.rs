use clap::{Parser, Subcommand};
use req2uv::config::Config;
use req2uv::core::error_help::format_error_with_help;
use req2uv::core::MigrateResult;
use req2uv::di::ServiceContainer;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "req2uv")]
#[command(about = "Migrate a compiled requirements.txt to a uv project")]
#[command(version)]
struct Cli {
    /// Requirements file to read [default: requirements.txt]
    #[arg(short, long, global = true)]
    requirements: Option<PathBuf>,
    /// Manifest marker identifying direct dependencies [default: pyproject.toml]
    #[arg(short, long, global = true)]
    marker: Option<String>,
    /// Manifest tool to invoke as `<TOOL> add ...` [default: uv]
    #[arg(long, global = true)]
    tool: Option<String>,
    /// Config file to use instead of the per-user one
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add the direct dependencies to pyproject.toml (default)
    Migrate {
        /// Print the command instead of running it
        #[arg(long)]
        dry_run: bool,
    },
    /// Show how each pinned package is classified
    List {
        /// Include transitive dependencies
        #[arg(short, long)]
        all: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn run(cli: Cli) -> MigrateResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    }
    .with_overrides(cli.requirements, cli.marker, cli.tool)?;
    tracing::debug!(?config, "resolved config");

    let container = ServiceContainer::new(config);

    match cli.command.unwrap_or(Commands::Migrate { dry_run: false }) {
        Commands::Migrate { dry_run } => cli::migrate::run(&container, dry_run),
        Commands::List { all, json } => cli::list::run(container.config.as_ref(), all, json),
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so `list --json` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
