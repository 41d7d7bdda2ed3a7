use std::fmt;

#[derive(Debug, Clone)]
pub enum WrappedError {
    DocumentFetch(String),
    Serialization(String),
    FileOperation(String),
    Validation(String),
}

impl WrappedError {
    /// Stable error code, used in CLI output
    pub fn code(&self) -> &'static str {
        match self {
            WrappedError::DocumentFetch(_) => "E001",
            WrappedError::Serialization(_) => "E002",
            WrappedError::FileOperation(_) => "E003",
            WrappedError::Validation(_) => "E004",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            WrappedError::DocumentFetch(_) => "Document Fetch Error",
            WrappedError::Serialization(_) => "Serialization Error",
            WrappedError::FileOperation(_) => "File Operation Error",
            WrappedError::Validation(_) => "Validation Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            WrappedError::DocumentFetch(msg) => msg,
            WrappedError::Serialization(msg) => msg,
            WrappedError::FileOperation(msg) => msg,
            WrappedError::Validation(msg) => msg,
        }
    }

    /// Colored format for terminal output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for WrappedError {}

// Convenience constructors
impl WrappedError {
    pub fn document_fetch<T: Into<String>>(msg: T) -> Self {
        WrappedError::DocumentFetch(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        WrappedError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        WrappedError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        WrappedError::Validation(msg.into())
    }
}

impl From<std::io::Error> for WrappedError {
    fn from(err: std::io::Error) -> Self {
        WrappedError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for WrappedError {
    fn from(err: serde_json::Error) -> Self {
        WrappedError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for WrappedError {
    fn from(err: csv::Error) -> Self {
        WrappedError::FileOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WrappedError>;
