use clap::Parser;
use std::path::PathBuf;
use tavola::config::SiteConfig;
use tavola::error::Result;
use tavola::server::serve;
use tavola::state::AppState;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "tavola", version, about = "Restaurant website backend: orders, bookings, contact messages")]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, default_value = "tavola.json")]
    config: PathBuf,

    /// Listen port (overrides the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Directory for the record files (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let mut config = SiteConfig::load(&cli.config)?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    info!("Storing records under {}", config.data_dir.display());
    let state = AppState::open(&config)?;

    serve(state, config.port).await
}
