use gcal_agenda::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting gcal-agenda");

    // Load configuration
    let config = startup::load_config()?;

    // Fetch, merge and print the agenda
    startup::run(config).await
}
