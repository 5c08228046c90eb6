//! Error types for the formula engine.
//!
//! None of these cross the formula boundary: [`crate::engine::Engine::evaluate_formula`]
//! collapses every variant into [`crate::engine::Value::Error`]. They exist so
//! callers that want diagnostics (and tests) can see which stage failed.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid cell address: {0}")]
    Address(String),

    #[error("Invalid range: {0}")]
    Range(String),

    #[error("Bad arguments to {function}: {message}")]
    FunctionArgument { function: String, message: String },

    #[error("Evaluation error: {0}")]
    Evaluation(String),
}

impl EngineError {
    pub(crate) fn argument(function: &str, message: impl Into<String>) -> Self {
        EngineError::FunctionArgument {
            function: function.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
