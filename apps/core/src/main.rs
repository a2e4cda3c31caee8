// prefprobe: classify response preferences from the command line.
// Texts come from arguments, or one per line on stdin.

use anyhow::Context;
use std::io;
use tracing::info;

use prefsense_core::config::AppConfig;
use prefsense_core::logging;
use prefsense_core::probe::Probe;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    logging::init(config.log_format, &config.log_filter);
    info!(
        vocabulary = %config.vocabulary,
        mode = %config.mode,
        "Starting preference probe"
    );

    let probe = Probe::new(config);
    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.is_empty() {
        probe
            .run_lines(io::stdin().lock(), &mut out)
            .context("Failed to process stdin")?;
    } else {
        probe
            .run_all(&args, &mut out)
            .context("Failed to process arguments")?;
    }

    Ok(())
}
