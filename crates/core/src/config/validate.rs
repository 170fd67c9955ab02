use super::{types::Config, ConfigError};

/// Validate a loaded configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if !(config.pipeline.quality > 0.0 && config.pipeline.quality <= 1.0) {
        return Err(ConfigError::ValidationError(format!(
            "pipeline.quality must be in (0.0, 1.0], got {}",
            config.pipeline.quality
        )));
    }

    if config.pipeline.output_prefix.is_empty() {
        return Err(ConfigError::ValidationError(
            "pipeline.output_prefix must not be empty".to_string(),
        ));
    }

    if config.ads.retry_delay_ms == 0 {
        return Err(ConfigError::ValidationError(
            "ads.retry_delay_ms must be greater than zero".to_string(),
        ));
    }

    if config.gallery.album_name.is_empty() {
        return Err(ConfigError::ValidationError(
            "gallery.album_name must not be empty".to_string(),
        ));
    }

    Ok(())
}
