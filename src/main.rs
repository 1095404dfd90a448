use clap::Parser;
use morning_brief::utils::{logger, validation::Validate};
use morning_brief::{BriefConfig, BriefingEngine, Credentials};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = BriefConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting morning-brief");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let credentials = Credentials::from_env();

    let engine = match BriefingEngine::with_smtp(config, credentials) {
        Ok(engine) => engine,
        Err(e) => {
            // Relay host was rejected before any fetch ran.
            println!("Failed to send email. Error: {}", e);
            return;
        }
    };

    let status = engine.run().await;
    println!("{}", status);
}
