//! duet CLI: two-panel list/table browser

use clap::{Parser, Subcommand};
use duet_engine::{init_logging, Config, SelectionTrigger};
use duet_tui::{parse_script, run_headless, App, HeadlessConfig, UiConfig};
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default path written by `duet init`.
const DEFAULT_CONFIG_FILE: &str = "duet.json";

/// Browse a list of items with a detail table beside it
#[derive(Parser, Debug)]
#[command(name = "duet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// When a list selection regenerates the table
    #[arg(long, global = true, value_parser = parse_trigger)]
    trigger: Option<SelectionTrigger>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Replay a key script without a terminal and print the result
    Headless {
        /// Comma-separated keys, e.g. down,enter,tab,q
        #[arg(long)]
        keys: String,

        /// Terminal width
        #[arg(long, default_value_t = duet_tui::headless::DEFAULT_WIDTH)]
        width: u16,

        /// Terminal height
        #[arg(long, default_value_t = duet_tui::headless::DEFAULT_HEIGHT)]
        height: u16,

        /// Output the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default configuration file
    Init {
        /// Where to write it
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

fn parse_trigger(value: &str) -> Result<SelectionTrigger, String> {
    value.parse()
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(Commands::Init { path }) = &cli.command {
        return cmd_init(path);
    }

    let config = resolve_config(&cli)?;
    if init_logging(&config.log)? {
        info!(trigger = ?config.selection_trigger, "configuration loaded");
    }

    match cli.command {
        None | Some(Commands::Tui) => duet_tui::run_tui(&config)?,
        Some(Commands::Headless {
            keys,
            width,
            height,
            json,
        }) => cmd_headless(&config, &keys, HeadlessConfig { width, height }, json)?,
        Some(Commands::Init { .. }) => {}
    }
    Ok(())
}

/// Load the config file (or defaults) and apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config, duet_engine::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(trigger) = cli.trigger {
        config.selection_trigger = trigger;
    }
    if let Some(file) = &cli.log_file {
        config.log.file = Some(file.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log.level.clone_from(level);
    }
    Ok(config)
}

fn cmd_headless(
    config: &Config,
    keys: &str,
    size: HeadlessConfig,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let events = parse_script(keys)?;
    let app = App::new(config, &UiConfig::from_env())?;
    let state = run_headless(app, size, &events)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!("{}", state.screen_contents);
    Ok(())
}

fn cmd_init(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    Config::default().save(path)?;
    println!("Created {}", path.display());
    Ok(())
}
