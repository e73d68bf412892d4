use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("invalid {field}: {message}")]
    Validation {
        field: String,
        message: String,
    },

    #[error("calculation error: {message}")]
    Computation {
        message: String,
    },

    #[error("scenario not found: {id}")]
    ScenarioNotFound {
        id: Uuid,
    },

    #[error("serialization error: {message}")]
    Serialization {
        message: String,
    },
}

impl CalculatorError {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        CalculatorError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn computation(message: impl Into<String>) -> Self {
        CalculatorError::Computation {
            message: message.into(),
        }
    }

    /// true when the caller supplied bad input
    pub fn is_validation(&self) -> bool {
        matches!(self, CalculatorError::Validation { .. })
    }

    /// true when valid-looking input produced a degenerate result
    pub fn is_computation(&self) -> bool {
        matches!(self, CalculatorError::Computation { .. })
    }

    /// name of the offending input field, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CalculatorError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CalculatorError {
    fn from(e: serde_json::Error) -> Self {
        CalculatorError::Serialization {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
