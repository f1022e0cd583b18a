use thiserror::Error;

/// Errors raised while loading or validating a scene configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("scene config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("layer `{layer}`: {reason}")]
    InvalidLayer { layer: String, reason: String },
    #[error("ray overlay: {0}")]
    InvalidRays(String),
    #[error("`{0}` is not a #rrggbb color")]
    BadHexColor(String),
}

impl ConfigError {
    pub(crate) fn layer(layer: &str, reason: impl Into<String>) -> Self {
        Self::InvalidLayer {
            layer: layer.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FactError {
    #[error("fact list is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
