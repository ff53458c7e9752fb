//! Config validation. Collects every violation before failing.

use crate::schema::AppWinConfig;
use appwin_common::ConfigError;

/// Run all validations on a config.
pub fn validate(config: &AppWinConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "events.bus_capacity",
        config.events.bus_capacity,
        8,
        4096,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&AppWinConfig::default()).is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut config = AppWinConfig::default();
        config.events.bus_capacity = 0;
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("events.bus_capacity = 0"));
    }

    #[test]
    fn capacity_below_one_update_is_rejected() {
        let mut config = AppWinConfig::default();
        config.events.bus_capacity = 4;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn oversized_capacity_is_rejected() {
        let mut config = AppWinConfig::default();
        config.events.bus_capacity = 5000;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let mut config = AppWinConfig::default();
        config.events.bus_capacity = 8;
        assert!(validate(&config).is_ok());
        config.events.bus_capacity = 4096;
        assert!(validate(&config).is_ok());
    }
}
