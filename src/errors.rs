use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    NotFound(String),
    Serde(serde_json::Error),
    Storage(String),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serde(err)
    }
}

// A poisoned writer lock means a mutation panicked mid-write.
// Surface it as a storage failure instead of panicking again.
impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::Storage("contact collection lock poisoned".to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Serde(e) => {
                write!(f, "Failed to read or write contact data: {}", e)
            }
            AppError::Storage(msg) => {
                write!(f, "Storage error: {}", msg)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}
