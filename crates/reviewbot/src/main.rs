//! Homework review status watcher binary.
//!
//! Start the watcher with:
//! ```bash
//! PRACTICUM_TOKEN=xxx TELEGRAM_TOKEN=xxx TELEGRAM_CHAT_ID=123 cargo run -p reviewbot
//! ```

use chrono::Utc;
use clap::Parser;

use reviewbot::logging;
use reviewbot::watcher::Watcher;
use reviewbot_api::HomeworkClient;
use reviewbot_core::Config;
use reviewbot_telegram::StatusNotifier;

/// Watch one homework submission and report review status changes to Telegram.
#[derive(Parser, Debug)]
#[command(name = "reviewbot")]
#[command(about = "Polls the homework review API and notifies a Telegram chat")]
struct Args {
    /// Run a single poll cycle and exit
    #[arg(long)]
    once: bool,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load secrets from .env.local or .env when present.
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());

    logging::init(args.verbose)?;

    // The credential check gates everything: no loop without a full set
    // of secrets.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "refusing to start without required configuration");
            std::process::exit(2);
        }
    };

    let client = HomeworkClient::new(&config);
    let notifier = StatusNotifier::new(&config);
    let mut watcher = Watcher::new(
        client,
        notifier,
        config.poll_interval,
        Utc::now().timestamp(),
    );

    tracing::info!(
        endpoint = %config.endpoint,
        chat_id = config.telegram_chat_id,
        "reviewbot starting"
    );

    if args.once {
        watcher.tick().await;
        return Ok(());
    }

    watcher.run().await;
    Ok(())
}
