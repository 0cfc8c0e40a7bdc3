use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// The main entry point for the records application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from the .env file, when present.
    dotenvy::dotenv().ok();

    // Parse the CLI before touching the environment-backed settings, so
    // `--help` and argument errors work even with a malformed environment.
    let cli = Cli::parse();
    let settings = configuration::load_settings()?;

    match cli.command {
        Commands::Serve(args) => {
            // Logging goes to stdout only for the server; the terminal
            // client owns the screen and must not be written over.
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .init();

            let port = args.port.unwrap_or(settings.server_port);
            let addr = SocketAddr::from(([0, 0, 0, 0], port));
            web_server::run_server(addr).await
        }
        Commands::Ui(args) => {
            let api_url = args.api_url.unwrap_or(settings.records_api_url);
            ui::run(&api_url).await
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A two-tier records application: REST API server and terminal client.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve(ServeArgs),
    /// Run the terminal client.
    Ui(UiArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Port to listen on; falls back to SERVER_PORT (default 5000).
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Parser)]
struct UiArgs {
    /// Base URL of the records API; falls back to RECORDS_API_URL.
    #[arg(long)]
    api_url: Option<String>,
}
