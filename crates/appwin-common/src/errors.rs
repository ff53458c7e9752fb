use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("no window state: the bridge has not been initialized")]
    NotInitialized,
}

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed host message: {0}")]
    Malformed(String),

    #[error("unknown host message kind: {0}")]
    UnknownKind(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AppWinError {
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_error_display() {
        let err = BridgeError::NotInitialized;
        assert_eq!(
            err.to_string(),
            "no window state: the bridge has not been initialized"
        );
    }

    #[test]
    fn protocol_error_display() {
        let err = ProtocolError::Malformed("expected value at line 1".into());
        assert_eq!(
            err.to_string(),
            "malformed host message: expected value at line 1"
        );

        let err = ProtocolError::UnknownKind("teleport".into());
        assert_eq!(err.to_string(), "unknown host message kind: teleport");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("events.bus_capacity out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: events.bus_capacity out of range"
        );
    }

    #[test]
    fn appwin_error_from_bridge() {
        let err: AppWinError = BridgeError::NotInitialized.into();
        assert!(matches!(err, AppWinError::Bridge(BridgeError::NotInitialized)));
        assert!(err.to_string().contains("not been initialized"));
    }

    #[test]
    fn appwin_error_from_protocol() {
        let err: AppWinError = ProtocolError::UnknownKind("resize".into()).into();
        assert!(matches!(err, AppWinError::Protocol(_)));
        assert!(err.to_string().contains("resize"));
    }

    #[test]
    fn appwin_error_from_config() {
        let err: AppWinError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, AppWinError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn appwin_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: AppWinError = io_err.into();
        assert!(matches!(err, AppWinError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn appwin_error_other() {
        let err = AppWinError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
