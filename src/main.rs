//! userdeck: browse randomly generated user profiles in the terminal.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userdeck::{
    cli::{self, OutputFormat},
    config::{self, AppConfig, ConfigOverrides},
};

#[derive(Parser)]
#[command(name = "userdeck")]
#[command(version)]
#[command(about = "Browse randomly generated user profiles", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    3  The users request failed (fetch)

EXAMPLES:
    # Open the browser (same as `userdeck browse`)
    userdeck

    # Portuguese labels, light theme
    userdeck browse --locale pt-br --theme light

    # Print one page as JSON
    userdeck fetch --format json > users.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log file used while the terminal UI is running
    #[arg(long, global = true, env = "USERDECK_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// API flags shared by `browse` and `fetch`
#[derive(Args, Default)]
struct ApiArgs {
    /// Users API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Number of users to request
    #[arg(long)]
    page_size: Option<u32>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

/// Arguments for the `browse` subcommand
#[derive(Args, Default)]
struct BrowseArgs {
    #[command(flatten)]
    api: ApiArgs,

    /// Color theme (dark, light, high-contrast)
    #[arg(long)]
    theme: Option<String>,

    /// UI language (en, pt-br)
    #[arg(long)]
    locale: Option<String>,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,
}

/// Arguments for the `fetch` subcommand
#[derive(Args)]
struct FetchArgs {
    #[command(flatten)]
    api: ApiArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive users browser (default)
    Browse(BrowseArgs),

    /// Fetch one page of users and print it
    Fetch(FetchArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .userdeck.yaml in the current directory
    Init,
}

impl ApiArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            page_size: self.page_size,
            timeout_secs: self.timeout,
            ..Default::default()
        }
    }
}

impl BrowseArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            theme: self.theme.clone(),
            locale: self.locale.clone(),
            mouse_enabled: self.no_mouse.then_some(false),
            ..self.api.overrides()
        }
    }
}

/// Where log output goes.
enum LogTarget<'a> {
    Stderr,
    /// The TUI owns the terminal, so logs go to a file or nowhere
    File(Option<&'a Path>),
}

fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("userdeck").join("userdeck.log"))
}

fn open_log_file(explicit: Option<&Path>) -> Option<File> {
    let path = explicit.map(Path::to_path_buf).or_else(default_log_file)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    File::options().create(true).append(true).open(path).ok()
}

fn init_logging(verbose: bool, target: &LogTarget<'_>) {
    let log_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
    );

    let (stderr_layer, file_layer) = match target {
        LogTarget::Stderr => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(io::stderr),
            ),
            None,
        ),
        LogTarget::File(path) => (
            None,
            open_log_file(*path).map(|file| {
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
            }),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Browse(BrowseArgs::default()));

    let log_target = match command {
        Commands::Browse(_) => LogTarget::File(cli.log_file.as_deref()),
        _ => LogTarget::Stderr,
    };
    init_logging(cli.verbose, &log_target);

    // Dispatch to command handlers
    match command {
        Commands::Browse(args) => {
            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &args.overrides());
            if let Some(path) = loaded_from {
                tracing::info!("config loaded from {}", path.display());
            }
            let exit_code = cli::run_browse(&config, args.theme.is_some())?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Fetch(args) => {
            let (config, _) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &args.api.overrides());
            let exit_code = cli::run_fetch(&config, args.format)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "userdeck", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to generate schema")?;
            match output {
                Some(path) => {
                    fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config::config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".userdeck.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
