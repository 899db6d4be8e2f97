//! Error types for the theme_color library

use thiserror::Error;

/// Result type alias for theme_color operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for image sampling, color construction and configuration
///
/// The analysis components themselves never surface these to callers: a
/// sampler that cannot render returns an empty sequence, and the clusterer
/// returns `None` for empty input. Errors are reserved for loading images,
/// building values from untrusted input and validating configuration.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image cannot produce a pixel buffer
    #[error("Image is not readable: {reason}")]
    UnreadableImage { reason: String },

    /// Requested render or buffer size is unusable
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Crop rectangle does not fit inside the image
    #[error("Invalid region: {reason}")]
    InvalidRegion { reason: String },

    /// Color component outside the normalized range
    #[error("Color component {channel} = {value} is outside [0, 1]")]
    InvalidComponent { channel: char, value: f64 },

    /// Color cannot be represented as hue/saturation/brightness
    #[error("Unsupported color space: {message}")]
    UnsupportedColorSpace { message: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read, written or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error indicates a condition the analysis can absorb
    ///
    /// Recoverable errors are the ones the pipeline degrades on (no value,
    /// unchanged color) instead of failing.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::UnreadableImage { .. }
                | AnalysisError::InvalidDimensions { .. }
                | AnalysisError::InvalidRegion { .. }
                | AnalysisError::UnsupportedColorSpace { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            AnalysisError::UnreadableImage { .. } | AnalysisError::InvalidDimensions { .. } => {
                "The image could not be sampled.".to_string()
            }
            AnalysisError::InvalidComponent { channel, value } => {
                format!("Color channel '{}' must be between 0 and 1 (got {}).", channel, value)
            }
            AnalysisError::InvalidParameter { parameter, value } => {
                format!("Setting '{}' has an invalid value: {}.", parameter, value)
            }
            AnalysisError::ConfigError { .. } => {
                "Could not read the configuration file.".to_string()
            }
            _ => "Color analysis failed. Please try with a different image.".to_string(),
        }
    }
}
