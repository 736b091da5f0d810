use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use std::path::PathBuf;

use satchel_config::ConfigLoader;

mod bootstrap;
mod skills;

/// 🎒 Satchel — skill packs for AI agent sessions
#[derive(Parser)]
#[command(name = "satchel", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to satchel.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Skills root override (takes precedence over config and env)
    #[arg(short = 'r', long, global = true)]
    skills_root: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List skills in the skills root
    List {
        /// Include reserved template directories (names starting with `_`)
        #[arg(long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show details of a skill
    Show { name: String },
    /// Emit the bootstrap context for a host integration
    Bootstrap {
        /// Host to emit for
        #[arg(value_enum)]
        host: HostKind,
    },
    /// Scaffold a new skill directory with a SKILL.md template
    Create { name: String },
    /// Show current configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions for bash, zsh, or fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// The host integrations `satchel bootstrap` can target.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum HostKind {
    /// Claude Code SessionStart hook (JSON line on stdout)
    Claude,
    /// OpenCode chat-transform plugin (in-process append)
    Opencode,
    /// Pi session-start extension (in-process append)
    Pi,
}

impl Cli {
    pub fn run(self) -> satchel_core::Result<()> {
        // Load config first so we can use it for log format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();

        // Resolve log level: --verbose > --quiet > --log-level > config default
        let log_level = if self.verbose {
            "debug".to_string()
        } else if self.quiet {
            "error".to_string()
        } else {
            self.log_level
                .clone()
                .unwrap_or_else(|| config.logging.level.clone())
        };

        // Initialize tracing with appropriate format. Logs go to stderr —
        // `bootstrap claude` owns stdout for the hook line.
        if config.logging.format == "json" {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
                )
                .with_writer(std::io::stderr)
                .json()
                .with_target(true)
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
                )
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }

        // The skills root is resolved exactly once; everything below works
        // against this explicit path.
        let skills_root = self
            .skills_root
            .clone()
            .unwrap_or_else(|| config.skills_root());

        match self.command {
            Commands::List { all, json } => skills::cmd_list(&skills_root, all, json),
            Commands::Show { name } => skills::cmd_show(&skills_root, &name),
            Commands::Bootstrap { host } => bootstrap::cmd_bootstrap(&skills_root, host),
            Commands::Create { name } => skills::cmd_create(&skills_root, &name),
            Commands::Config { json } => Self::cmd_config(config, json),
            Commands::Completions { shell } => Self::cmd_completions(shell),
        }
    }

    fn cmd_config(config: satchel_config::SatchelConfig, json: bool) -> satchel_core::Result<()> {
        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&config)
                    .map_err(satchel_core::SatchelError::Serialization)?
            );
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&config)
                    .map_err(|e| satchel_core::SatchelError::Config(e.to_string()))?
            );
        }
        Ok(())
    }

    fn cmd_completions(shell: Shell) -> satchel_core::Result<()> {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "satchel", &mut std::io::stdout());
        Ok(())
    }
}
