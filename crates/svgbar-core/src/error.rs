pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid data shape: {message}")]
    InvalidDataShape { message: String },

    #[error("invalid numeric value: {message}")]
    InvalidNumericValue { message: String },

    #[error("invalid option value: {message}")]
    InvalidOptionValue { message: String },
}

impl Error {
    pub(crate) fn shape(message: impl Into<String>) -> Self {
        Error::InvalidDataShape {
            message: message.into(),
        }
    }

    pub(crate) fn numeric(message: impl Into<String>) -> Self {
        Error::InvalidNumericValue {
            message: message.into(),
        }
    }

    pub(crate) fn option(message: impl Into<String>) -> Self {
        Error::InvalidOptionValue {
            message: message.into(),
        }
    }
}
