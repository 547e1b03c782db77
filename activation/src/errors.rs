use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ActivationError {
    #[error("UnknownActivation: no activation function is named {0:?}")]
    UnknownActivation(String),

    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),
}
