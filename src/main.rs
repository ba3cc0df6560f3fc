//! `streamkeys-host` command-line interface.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use streamkeys_host::{deps, Browser, Config, Environment, Installer, SystemProbe};

#[derive(Parser)]
#[command(
    name = "streamkeys-host",
    about = "Install the Streamkeys MPRIS native messaging host"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// The directory to install the host script
    #[arg(long, global = true, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Host script to copy (default: mpris.py next to this executable)
    #[arg(long, global = true, value_name = "PATH")]
    source: Option<PathBuf>,

    /// Log every file touched
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the native messaging host
    Install {
        /// The extension ID
        id: String,
    },

    /// Uninstall the native messaging host
    Uninstall,

    /// Install the native messaging host for Firefox instead of Chrome
    InstallFf {
        /// The extension ID (default: the published Streamkeys add-on)
        #[arg(long)]
        id: Option<String>,
    },

    /// Uninstall the native messaging host for Firefox instead of Chrome
    UninstallFf,

    /// Show what is installed and whether the host's dependencies are present
    Status {
        /// Inspect the Firefox registration instead of Chrome
        #[arg(long)]
        firefox: bool,
    },

    /// Inspect the installer configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Print the configuration file path
    Path,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stdout at info, or debug with `--verbose`; `RUST_LOG` wins.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let env = Environment::from_process().context("Failed to resolve user directories")?;
    run_in(cli, &env)
}

fn run_in(cli: Cli, env: &Environment) -> Result<()> {
    let Cli {
        command, dir, source, ..
    } = cli;

    match command {
        Commands::Install { id } => {
            let config = Config::load(env)?;
            let install_dir = install_dir(dir, env, &config);
            cmd_install(env, &config, source, &id, &install_dir, Browser::Chrome)?;
        }
        Commands::InstallFf { id } => {
            let config = Config::load(env)?;
            let install_dir = install_dir(dir, env, &config);
            let id = id.unwrap_or_else(|| config.firefox_extension_id().to_string());
            cmd_install(env, &config, source, &id, &install_dir, Browser::Firefox)?;
        }
        Commands::Uninstall => cmd_uninstall(env, &resolve_dir(dir, env)?, Browser::Chrome)?,
        Commands::UninstallFf => cmd_uninstall(env, &resolve_dir(dir, env)?, Browser::Firefox)?,
        Commands::Status { firefox } => {
            let browser = if firefox { Browser::Firefox } else { Browser::Chrome };
            cmd_status(env, &resolve_dir(dir, env)?, browser);
        }
        Commands::Config { action } => cmd_config(env, action)?,
    }

    Ok(())
}

fn install_dir(dir: Option<PathBuf>, env: &Environment, config: &Config) -> PathBuf {
    dir.unwrap_or_else(|| config.install_dir(env))
}

/// `--dir` if given; the config file is only read when it is not.
fn resolve_dir(dir: Option<PathBuf>, env: &Environment) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(Config::load(env)?.install_dir(env)),
    }
}

fn cmd_install(
    env: &Environment,
    config: &Config,
    source: Option<PathBuf>,
    id: &str,
    install_dir: &Path,
    browser: Browser,
) -> Result<()> {
    let source = match source {
        Some(path) => path,
        None => config.host_source()?,
    };
    let installer = Installer::new(env, source, &SystemProbe);
    let installed = installer.install(id, install_dir, browser)?;
    tracing::info!(
        "Installed {browser} host {} with {} manifest(s)",
        installed.host_path.display(),
        installed.manifests.len()
    );
    Ok(())
}

fn cmd_uninstall(env: &Environment, install_dir: &Path, browser: Browser) -> Result<()> {
    // The host source is never read on uninstall.
    let installer = Installer::new(env, PathBuf::new(), &SystemProbe);
    let removal = installer.uninstall(install_dir, browser)?;
    tracing::debug!("removed {} file(s)", removal.removed.len());
    Ok(())
}

fn cmd_status(env: &Environment, install_dir: &Path, browser: Browser) {
    let probe = SystemProbe;
    let installer = Installer::new(env, PathBuf::new(), &probe);
    print!("{}", installer.status(install_dir, browser));
    for (dep, available) in deps::report(&probe) {
        let mark = if available { "found" } else { "not found" };
        println!("dependency {dep}: {mark}");
    }
}

fn cmd_config(env: &Environment, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load(env)?;
            let pretty = toml::to_string_pretty(&config)?;
            print!("{pretty}");
        }
        ConfigAction::Path => println!("{}", Config::path(env).display()),
    }
    Ok(())
}
