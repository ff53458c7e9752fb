mod cli;
mod replay;
mod settings;

use std::fs::File;
use std::io::{self, BufReader};

use tracing_subscriber::EnvFilter;

use crate::replay::Replayer;

fn main() {
    let args = cli::parse();

    // Config first: it decides the log level.
    let (config, config_error) = appwin_config::load_config_or_default(args.config.as_deref());
    let (log_directive, options) = settings::resolve(&args, &config);

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(settings::parse_directive(&log_directive)),
        )
        .init();

    if let Some(e) = config_error {
        tracing::warn!("config load failed, using defaults: {e}");
    }

    let mut replayer = Replayer::new(options);
    let correlation = appwin_common::new_correlation_id();
    tracing::info!(
        replay = %correlation,
        context = %replayer.context().id(),
        "replay starting"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match args.input_path() {
        Some(path) => match File::open(path) {
            Ok(file) => replayer.run(BufReader::new(file), &mut out),
            Err(e) => {
                tracing::error!("failed to open {}: {e}", path.display());
                std::process::exit(2);
            }
        },
        None => replayer.run(io::stdin().lock(), &mut out),
    };

    match result {
        Ok(summary) => tracing::info!(
            replay = %correlation,
            messages = summary.messages,
            skipped = summary.skipped,
            notifications = summary.notifications,
            "replay complete"
        ),
        Err(e) => {
            tracing::error!(replay = %correlation, "replay failed: {e}");
            std::process::exit(1);
        }
    }
}
