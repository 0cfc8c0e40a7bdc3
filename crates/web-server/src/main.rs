use tracing_subscriber::EnvFilter;

// This main function is the entry point when running `cargo run -p web-server`.
// Its only job is to call the `run_server` function from the crate's library.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = configuration::load_settings()?;
    web_server::run_server(settings.server_addr()).await
}
