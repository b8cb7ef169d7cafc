use painel_api::{ApiError, ClientError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    ConfigError(String),
    ValidationError(String),
    ClientError(ClientError),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "{}", msg),
            AppError::ClientError(err) => write!(f, "{}", err),
            AppError::IoError(err) => write!(f, "I/O error: {}", err),
            AppError::JsonError(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        AppError::ClientError(err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonError(err)
    }
}

impl AppError {
    /// Código de saída do processo para cada categoria de erro
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ValidationError(_) => 2,
            AppError::ClientError(ClientError::Api(_)) => 3,
            AppError::ClientError(ClientError::Transport(_)) => 4,
            _ => 1,
        }
    }

    /// Registro `{message, status?, details?}` apresentado ao operador
    pub fn to_api_error(&self) -> ApiError {
        match self {
            AppError::ClientError(err) => err.to_api_error(),
            other => ApiError::new(other.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
