//! Effective run settings: CLI flags layered over the config file.

use appwin_config::AppWinConfig;
use tracing_subscriber::filter::Directive;

use crate::cli::Args;
use crate::replay::ReplayOptions;

const FALLBACK_DIRECTIVE: &str = "appwin=info";

/// Log directive and replay options for this run.
///
/// `--log-level` wins over `logging.level`; strict mode is on when either
/// `--strict` or `replay.strict` asks for it.
pub fn resolve(args: &Args, config: &AppWinConfig) -> (String, ReplayOptions) {
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive().to_string());

    let options = ReplayOptions {
        strict: args.strict || config.replay.strict,
        json: args.json,
        bus_capacity: config.events.bus_capacity as usize,
    };
    (log_directive, options)
}

/// Parse a log directive, falling back to `appwin=info` when it is invalid.
pub fn parse_directive(raw: &str) -> Directive {
    raw.parse().unwrap_or_else(|_| {
        FALLBACK_DIRECTIVE
            .parse()
            .expect("fallback directive is valid")
    })
}
