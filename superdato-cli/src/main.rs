//! SuperDato CLI: restoration catalog and site config tooling.
//!
//! Commands:
//! - `scan`: list the before/after pairs found under the gallery root
//! - `config check`: load and validate a site config, print a summary
//! - `config init`: write the built-in config as a starting point

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use superdato_core::config::{CONFIG_ENV, DEFAULT_CONFIG_FILE};
use superdato_core::{config_path, scan, Restoration, SiteConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "superdato",
    about = "SuperDato CLI: restoration catalog and site config tooling"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List restorations discovered under the gallery root.
    Scan {
        /// Folder to scan. Defaults to `gallery.root` from the config.
        #[arg(long)]
        root: Option<PathBuf>,

        /// Site config file. Defaults to $SUPERDATO_CONFIG, then ./superdato.toml.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the catalog as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Site config commands.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate a config file.
    Check {
        /// Site config file. Defaults to $SUPERDATO_CONFIG, then ./superdato.toml.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write the built-in config to a file.
    Init {
        /// Output path.
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { root, config, json } => run_scan(root, config, json),
        Commands::Config { action } => match action {
            ConfigAction::Check { config } => run_config_check(config),
            ConfigAction::Init { output, force } => run_config_init(&output, force),
        },
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SUPERDATO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Explicit `--config`, else the environment/working-directory lookup.
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, SiteConfig)> {
    match explicit {
        Some(path) => {
            let config = SiteConfig::load(&path)?;
            Ok((path, config))
        }
        None => {
            let env_value = std::env::var(CONFIG_ENV).ok();
            let path = config_path(env_value.as_deref());
            let config = SiteConfig::load_or_default(&path)?;
            Ok((path, config))
        }
    }
}

fn run_scan(root: Option<PathBuf>, config: Option<PathBuf>, json: bool) -> Result<()> {
    let root = match root {
        Some(root) => root,
        None => resolve_config(config)?.1.gallery.root,
    };
    let restorations = scan(&root)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&restorations)?);
        return Ok(());
    }

    if restorations.is_empty() {
        println!("No restorations found in {}", root.display());
        return Ok(());
    }
    print!("{}", format_table(&root, &restorations));
    Ok(())
}

fn format_table(root: &Path, restorations: &[Restoration]) -> String {
    let mut out = format!("Gallery: {}\nRestorations: {}\n\n", root.display(), restorations.len());
    out.push_str(&format!("{:<24} {:<28} {:<28}\n", "Id", "Title", "Tag"));
    out.push_str(&format!("{}\n", "-".repeat(82)));
    for r in restorations {
        out.push_str(&format!("{:<24} {:<28} {:<28}\n", r.id, r.title, r.tag));
    }
    out
}

fn run_config_check(config: Option<PathBuf>) -> Result<()> {
    let (path, config) = resolve_config(config)?;
    let origin = if path.exists() {
        path.display().to_string()
    } else {
        format!("built-in defaults ({} not found)", path.display())
    };

    println!("Config: {origin}");
    println!("Studio: {}", config.studio.name);
    println!(
        "Gallery: {} ({} per page)",
        config.gallery.root.display(),
        config.gallery.per_page
    );
    println!("Services: {}", config.services.len());
    println!("Stats: {}", config.stats.len());
    println!("Testimonials: {}", config.testimonials.len());
    println!("Tick: {} ms", config.ui.tick_ms);
    println!("OK");
    Ok(())
}

fn run_config_init(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }
    let text = SiteConfig::default().to_toml_string()?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(output, text).with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(path = %output.display(), "wrote default config");
    println!("Wrote {}", output.display());
    Ok(())
}
