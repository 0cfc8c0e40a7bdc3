// This main function is the entry point when running `cargo run -p ui`.
// Its only job is to resolve the API base URL and call the run loop.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = configuration::load_settings()?;
    ui::run(&settings.records_api_url).await
}
