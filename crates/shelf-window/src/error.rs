use thiserror::Error;

pub type Result<T> = std::result::Result<T, WindowError>;

/// Errors raised by the windowing calculator and its configuration layer.
///
/// Scroll positions never produce an error; they are clamped. Only geometry
/// that would make the window undefined (zero, negative or non-finite
/// heights) is rejected.
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("invalid configuration: {field} must be a finite value > 0, got {value}")]
    InvalidConfiguration { field: &'static str, value: f64 },

    #[cfg(feature = "window-config")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "window-config")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "window-config")]
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[cfg(feature = "window-config")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WindowError {
    #[must_use]
    pub fn invalid(field: &'static str, value: f64) -> Self {
        Self::InvalidConfiguration { field, value }
    }

    /// Whether this error is a geometry misconfiguration rather than a
    /// failure to read or parse a config source.
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}

/// Reject heights that would turn the window arithmetic into NaN/Infinity.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WindowError::invalid(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::{WindowError, ensure_positive};

    #[test]
    fn invalid_configuration_message_names_the_field() {
        let error = WindowError::invalid("item_height", 0.0);
        assert!(error.is_invalid_configuration());
        assert_eq!(
            error.to_string(),
            "invalid configuration: item_height must be a finite value > 0, got 0"
        );
    }

    #[test]
    fn ensure_positive_rejects_zero_negative_and_non_finite() {
        assert!(ensure_positive("h", 0.0).is_err());
        assert!(ensure_positive("h", -1.5).is_err());
        assert!(ensure_positive("h", f64::NAN).is_err());
        assert!(ensure_positive("h", f64::INFINITY).is_err());
        assert_eq!(ensure_positive("h", 0.5).unwrap(), 0.5);
    }
}
