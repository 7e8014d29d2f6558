use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use meraki_config::{DashboardSettings, load_config};
use merakidash::{AppState, StartupError, build_router};

/// Web dashboard for the first network of your first Meraki organization.
///
/// Reads the API key from MERAKI_API_KEY (a `.env` file in the working
/// directory is loaded first, if present).
#[derive(Parser, Debug)]
#[command(name = "merakidash", version, about)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:5000
    #[arg(short, long, env = "MERAKIDASH_BIND")]
    bind: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Before tracing, so RUST_LOG from .env is honoured.
    let dotenv_loaded = dotenv::dotenv().is_ok();

    init_tracing(cli.verbose);
    if dotenv_loaded {
        info!("loaded environment from .env");
    }

    if let Err(err) = run(cli).await {
        error!(error = %err, "startup failed");
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let default_filter = format!(
        "warn,merakidash={level},meraki_core={level},meraki_api={level},\
         meraki_config={level},tower_http={level}"
    );

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), StartupError> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }

    let settings = DashboardSettings::from_config(config)?;
    let client = settings.client()?;
    let app = build_router(AppState::new(client, settings.client_timespan_secs));

    let addr = settings.bind;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    info!(
        base_url = %settings.base_url,
        client_timespan_secs = settings.client_timespan_secs,
        "dashboard running at http://{addr}/"
    );
    if settings.api_key_is_placeholder {
        warn!("no API key configured; /api/meraki-data will report an organizations error");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
