pub mod config;
pub mod file;
pub mod parse;
pub mod path;

// Re-export all command functions
pub use config::{ConfigCommands, cmd_config};
pub use file::{cmd_cat, cmd_write};
pub use parse::cmd_parse;
pub use path::{cmd_check_dir, cmd_prefix_match, cmd_resolve};

use crate::config::{Config, PathArgs, YamlArgs};
use crate::document::DocumentFormat;
use crate::handler::{ExitOnFailure, FailureHandler};
use crate::loader::Loader;
use crate::paths::PathResolver;
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve a path expression against the base directory
    Resolve {
        /// Path expression (/abs, ~/home, ./relative or bare)
        expression: String,

        #[command(flatten)]
        path_args: PathArgs,
    },

    /// Check whether the absolute path of SECOND starts with that of FIRST
    PrefixMatch { first: PathBuf, second: PathBuf },

    /// Fail unless the path is an existing directory
    CheckDir {
        path: String,

        #[command(flatten)]
        path_args: PathArgs,
    },

    /// Print a file with surrounding whitespace trimmed
    Cat {
        path: String,

        /// Print the file line by line, terminators preserved
        #[arg(long)]
        lines: bool,

        #[command(flatten)]
        path_args: PathArgs,
    },

    /// Parse a JSON or YAML document and print it
    Parse {
        path: String,

        /// Input format (inferred from the file extension when omitted)
        #[arg(long, value_enum)]
        format: Option<DocumentFormat>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        output: DocumentFormat,

        #[command(flatten)]
        path_args: PathArgs,

        #[command(flatten)]
        yaml_args: YamlArgs,
    },

    /// Write content to a file, creating parent directories
    Write {
        path: String,
        content: String,

        #[command(flatten)]
        path_args: PathArgs,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

impl Command {
    /// Per-command path overrides
    pub fn path_args(&self) -> Option<&PathArgs> {
        match self {
            Command::Resolve { path_args, .. }
            | Command::CheckDir { path_args, .. }
            | Command::Cat { path_args, .. }
            | Command::Parse { path_args, .. }
            | Command::Write { path_args, .. } => Some(path_args),
            Command::PrefixMatch { .. } | Command::Config { .. } => None,
        }
    }

    pub fn yaml_args(&self) -> Option<&YamlArgs> {
        match self {
            Command::Parse { yaml_args, .. } => Some(yaml_args),
            _ => None,
        }
    }
}

/// Everything a command needs once configuration is resolved
pub struct CommandContext<H: FailureHandler = ExitOnFailure> {
    pub config: Config,
    pub config_file: String,
    pub resolver: PathResolver,
    pub loader: Loader<H>,
}

impl CommandContext<ExitOnFailure> {
    pub fn new(config: Config, config_file: &str) -> Self {
        Self::with_handler(config, config_file, PathResolver::from_env(), ExitOnFailure)
    }
}

impl<H: FailureHandler> CommandContext<H> {
    pub fn with_handler(
        config: Config,
        config_file: &str,
        resolver: PathResolver,
        handler: H,
    ) -> Self {
        let loader = Loader::with_handler(handler, config.yaml);
        Self {
            config,
            config_file: config_file.to_string(),
            resolver,
            loader,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.config.paths.base_dir
    }

    /// Resolve a CLI path argument against the configured base directory
    pub fn resolve(&self, expression: &str) -> anyhow::Result<PathBuf> {
        self.resolver.resolve(self.base_dir(), expression)
    }
}

/// Run a command, printing its output
pub fn run<H: FailureHandler>(command: Command, ctx: &CommandContext<H>) -> anyhow::Result<()> {
    match command {
        Command::Resolve { expression, .. } => {
            println!("{}", cmd_resolve(ctx, &expression)?.display());
        }
        Command::PrefixMatch { first, second } => {
            println!("{}", cmd_prefix_match(&first, &second));
        }
        Command::CheckDir { path, .. } => {
            let dir = cmd_check_dir(ctx, &path)?;
            crate::diagnostics::info(&format!("{} is a directory", dir.display()));
        }
        Command::Cat { path, lines, .. } => {
            for chunk in cmd_cat(ctx, &path, lines)? {
                print!("{}", chunk);
            }
        }
        Command::Parse {
            path,
            format,
            output,
            ..
        } => {
            print!("{}", cmd_parse(ctx, &path, format, output)?);
        }
        Command::Write { path, content, .. } => {
            let written = cmd_write(ctx, &path, &content)?;
            crate::diagnostics::info(&format!("Wrote {}", written.display()));
        }
        Command::Config { command } => {
            cmd_config(&ctx.config, &ctx.config_file, command)?;
        }
    }
    Ok(())
}
