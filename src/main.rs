//! Publication site tool - builds and previews an academic homepage.
//!
//! - `build`: generate details pages, the sitemap and (optionally) a
//!   prerendered index, and delete stale pages
//! - `serve`: preview server rendering pages from the current data

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{ArgAction, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pubsite::{build_site, handlers, AppState, SiteConfig, SiteError};

// ============================================================================
// CLI
// ============================================================================

#[derive(Parser)]
#[command(version, about = "Build and preview a publication website")]
struct Cli {
    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Site root containing data/publications.json
    #[arg(long, env = "PUBSITE_ROOT", default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate details pages, sitemap.xml and index.html
    Build {
        /// Absolute URL the site is deployed at
        #[arg(long, env = "PUBSITE_BASE_URL")]
        base_url: String,
    },
    /// Serve the site with pages rendered on request
    Serve {
        #[arg(long, env = "PUBSITE_ADDR")]
        addr: Option<SocketAddr>,

        /// Fetch publication data from this URL instead of the site root
        #[arg(long, env = "PUBSITE_DATA_URL")]
        data_url: Option<String>,

        #[arg(long, env = "PUBSITE_BASE_URL")]
        base_url: Option<String>,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "pubsite=info",
        1 => "pubsite=debug",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

// ============================================================================
// Main
// ============================================================================

async fn run(cli: Cli) -> Result<(), SiteError> {
    match cli.command {
        Command::Build { base_url } => {
            let config = SiteConfig::new(&cli.root, Some(base_url.as_str()), None, None)?;
            let client = reqwest::Client::new();
            let report = build_site(&config, &client).await?;
            info!(
                pages = report.pages.len(),
                deleted = report.deleted.len(),
                index = report.index_rendered,
                "build complete"
            );
            Ok(())
        }
        Command::Serve {
            addr,
            data_url,
            base_url,
        } => {
            let config =
                SiteConfig::new(&cli.root, base_url.as_deref(), data_url.as_deref(), addr)?;
            let addr = config.addr;
            let root = config.root.clone();
            let source = config.source.to_string();
            let app = handlers::router(Arc::new(AppState::new(config)));

            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .map_err(SiteError::Server)?;

            println!("Site server running at http://{}", addr);
            println!("Site root: {}", root.display());
            println!("Publication data: {}", source);

            axum::serve(listener, app).await.map_err(SiteError::Server)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "pubsite failed");
            ExitCode::FAILURE
        }
    }
}
