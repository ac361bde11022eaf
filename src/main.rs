use anyhow::Result;
use clap::Parser;
use loadkit::commands::{self, Command, CommandContext};
use loadkit::config::{self, ConfigBuilder, ConfigInput, DiagnosticsInput};
use loadkit::constants::CONFIG_FILENAME;
use loadkit::diagnostics::{self, ColorMode};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = CONFIG_FILENAME, global = true)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    /// When to color diagnostics
    #[arg(long, value_enum, global = true)]
    color: Option<ColorMode>,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    initialize_logging(&cli);

    if let Err(e) = run_main(cli) {
        diagnostics::exit_with_failure(&e);
    }
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_main(cli: Cli) -> Result<()> {
    if let Some(color) = cli.color {
        color.apply();
    }

    let (file_config, config_dir) = config::load_config(&cli.config_file)?;
    info!("Configuration directory: {}", config_dir.display());

    let cli_config = ConfigInput {
        paths: cli.command.path_args().cloned().map(Into::into),
        diagnostics: cli.color.map(|color| DiagnosticsInput { color: Some(color) }),
        yaml: cli.command.yaml_args().cloned().map(Into::into),
    };

    let config = ConfigBuilder::new()
        .with_file(file_config)
        .with_cli_args(cli_config)
        .resolve()?;
    config.diagnostics.color.apply();

    let ctx = CommandContext::new(config, &cli.config_file);
    commands::run(cli.command, &ctx)
}
