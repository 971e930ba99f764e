//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::render::parse_color;

/// Validate the entire configuration.
///
/// Configuration errors are fatal and surfaced before any image is touched.
pub fn validate_config(config: &Config) -> Result<()> {
    let overlay = &config.overlay;

    if overlay.map_size == 0 || overlay.map_size > 100 {
        return Err(Error::ConfigValidation {
            message: format!(
                "map_size must be in (0, 100], got {}",
                overlay.map_size
            ),
        });
    }

    if overlay.map_dpi == 0 {
        return Err(Error::ConfigValidation {
            message: "map_dpi must be at least 1".to_string(),
        });
    }

    for (name, value) in [("map_x", overlay.map_x), ("map_y", overlay.map_y)] {
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::ConfigValidation {
                message: format!("{name} must be between 0.0 and 1.0, got {value}"),
            });
        }
    }

    if !(0.0..=1.0).contains(&overlay.alpha) {
        return Err(Error::ConfigValidation {
            message: format!("alpha must be between 0.0 and 1.0, got {}", overlay.alpha),
        });
    }

    if overlay.line_width <= 0.0 {
        return Err(Error::ConfigValidation {
            message: format!("line_width must be positive, got {}", overlay.line_width),
        });
    }

    for (name, value) in [
        ("point_size", overlay.point_size),
        ("breadcrumb_size", overlay.breadcrumb_size),
    ] {
        if value <= 0.0 {
            return Err(Error::ConfigValidation {
                message: format!("{name} must be positive, got {value}"),
            });
        }
    }

    for (name, value) in [
        ("line_color", &overlay.line_color),
        ("point_color", &overlay.point_color),
        ("breadcrumb_color", &overlay.breadcrumb_color),
    ] {
        if parse_color(value).is_err() {
            return Err(Error::ConfigValidation {
                message: format!("{name}: unrecognized color '{value}'"),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_zero_map_size() {
        let mut config = Config::default();
        config.overlay.map_size = 0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_map() {
        let mut config = Config::default();
        config.overlay.map_size = 101;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_placement() {
        let mut config = Config::default();
        config.overlay.map_x = 1.5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_bad_alpha() {
        let mut config = Config::default();
        config.overlay.alpha = -0.1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_unknown_color() {
        let mut config = Config::default();
        config.overlay.point_color = "chartreuse-ish".to_string();
        assert!(validate_config(&config).is_err());
    }
}
