use std::path::PathBuf;

use clap::Parser;

/// appwin: replay host window-state traffic through a state bridge.
#[derive(Parser, Debug)]
#[command(name = "appwin", version, about)]
pub struct Args {
    /// JSON-lines file of host messages. Reads stdin when absent or `-`.
    pub input: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print notifications as JSON objects instead of plain lines.
    #[arg(long)]
    pub json: bool,

    /// Stop at the first malformed message.
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    /// Input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_read_stdin() {
        let args = Args::parse_from(["appwin"]);
        assert!(args.input_path().is_none());
        assert!(!args.json);
        assert!(!args.strict);
    }

    #[test]
    fn dash_means_stdin() {
        let args = Args::parse_from(["appwin", "-"]);
        assert!(args.input_path().is_none());
    }

    #[test]
    fn all_flags() {
        let args = Args::parse_from([
            "appwin",
            "--config",
            "/tmp/appwin.toml",
            "--log-level",
            "appwin=debug",
            "--json",
            "--strict",
            "trace.jsonl",
        ]);
        assert_eq!(args.input_path(), Some(&PathBuf::from("trace.jsonl")));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/appwin.toml")));
        assert_eq!(args.log_level.as_deref(), Some("appwin=debug"));
        assert!(args.json);
        assert!(args.strict);
    }
}
