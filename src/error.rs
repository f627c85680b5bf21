use thiserror::Error;

#[derive(Error, Debug)]
pub enum RedmanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Sprint [{0}] does not exist. Please check the name.")]
    SprintNotFound(String),

    #[error("Sprint [{0}] was deleted but is still reported by the server")]
    StaleSprintPersists(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Notification error: {0}")]
    NotificationError(String),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type RedmanResult<T> = Result<T, RedmanError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> RedmanResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> RedmanResult<T> {
        self.map_err(|e| RedmanError::Unknown(format!("{}: {}", msg, e)))
    }
}

#[macro_export]
macro_rules! redman_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::RedmanError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::RedmanError::$error_type(format!($fmt, $($arg)*))
    };
}
