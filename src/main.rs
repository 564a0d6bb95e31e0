use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kakapoly::{build, import_and_export, Config};

#[derive(Parser)]
#[command(name = "kakapoly")]
#[command(about = "Import SVG icon packs and render a static icon browsing site")]
#[command(version)]
struct Cli {
    /// Directory holding one subdirectory per icon pack
    #[arg(long, global = true, env = "KAKAPOLY_ICONS_DIR")]
    icons_dir: Option<PathBuf>,

    /// Directory for iconSets.json and icons.json
    #[arg(long, global = true, env = "KAKAPOLY_FIXTURES_DIR")]
    fixtures_dir: Option<PathBuf>,

    /// Output directory for the rendered site
    #[arg(long, global = true, env = "KAKAPOLY_OUT_DIR")]
    out_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import icon packs and export the JSON fixtures
    Import,
    /// Render the site from existing fixtures
    Build,
    /// Import, export, then render
    All,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: KAKAPOLY_ICONS_DIR, KAKAPOLY_FIXTURES_DIR, KAKAPOLY_OUT_DIR");
            eprintln!("Optional: KAKAPOLY_SITE_TITLE");
            return Ok(ExitCode::FAILURE);
        }
    };
    if let Some(dir) = cli.icons_dir {
        config.icons_dir = dir;
    }
    if let Some(dir) = cli.fixtures_dir {
        config.fixtures_dir = dir;
    }
    if let Some(dir) = cli.out_dir {
        config.out_dir = dir;
    }

    tracing::info!("Icons: {}", config.icons_dir.display());
    tracing::info!("Fixtures: {}", config.fixtures_dir.display());

    let mut ok = true;

    if matches!(cli.command, Command::Import | Command::All) {
        let run = import_and_export(&config).await;
        tracing::info!(
            "Imported {} icons from {} packs ({} failed)",
            run.import.icons_imported(),
            run.import.packs.len(),
            run.import.failed().count()
        );
        ok &= run.is_ok();
    }

    if matches!(cli.command, Command::Build | Command::All) {
        tracing::info!("Site: {}", config.out_dir.display());
        let report = build(&config)
            .await
            .with_context(|| format!("building site into {}", config.out_dir.display()))?;
        ok &= report.skipped == 0;
    }

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
