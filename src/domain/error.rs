use thiserror::Error;

/// Errors raised while building a field from external configuration.
///
/// The simulation step itself never fails; only config input can be rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Config parsed but a value is out of range.
    #[error("invalid field config: {0}")]
    InvalidConfig(String),

    /// Config JSON could not be parsed.
    #[error("malformed field config json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for FieldError {
    fn from(e: serde_json::Error) -> Self {
        FieldError::Json(e.to_string())
    }
}
