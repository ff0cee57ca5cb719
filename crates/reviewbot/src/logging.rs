//! Process-wide logging initialization.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log file, written append-mode in the working directory.
pub const LOG_FILE: &str = "reviewbot.log";

/// Initialize tracing with stdout and file output.
///
/// The default filter follows the `-v` count; `RUST_LOG` wins when set.
pub fn init(verbose: u8) -> io::Result<()> {
    let filter = match verbose {
        0 => "reviewbot=info,reviewbot_core=info,reviewbot_api=info,\
              reviewbot_telegram=info,teloxide=warn,reqwest=warn",
        1 => "debug,teloxide=info,reqwest=info",
        _ => "trace",
    };

    let file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();

    Ok(())
}
