use thiserror::Error;

/// Failure taxonomy shared by the cipher cores and the mode engine.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("invalid data: {0}")]
    InvalidData(&'static str),

    #[error("input is shorter than one cipher block")]
    InputTooShort,

    #[error("cipher context used after close")]
    UseAfterClose,

    #[error("cipher has not been initialized with a key")]
    NotInitialized,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
