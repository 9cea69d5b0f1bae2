use thiserror::Error;

#[derive(Debug, Error)]
pub enum RsaError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("invalid data: {0}")]
    InvalidData(&'static str),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
