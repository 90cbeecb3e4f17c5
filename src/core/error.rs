use std::fmt;

/// Error types for empviz operations
#[derive(Debug)]
pub enum EmpvizError {
    /// IO error (output files, config reads)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error
    Serialization(serde_json::Error),

    /// Chart rendering error
    Chart(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for EmpvizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmpvizError::Io(err) => write!(f, "IO error: {err}"),
            EmpvizError::Config(msg) => write!(f, "Configuration error: {msg}"),
            EmpvizError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            EmpvizError::Serialization(err) => write!(f, "Serialization error: {err}"),
            EmpvizError::Chart(msg) => write!(f, "Chart rendering error: {msg}"),
            EmpvizError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for EmpvizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmpvizError::Io(err) => Some(err),
            EmpvizError::TomlParsing(err) => Some(err),
            EmpvizError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EmpvizError {
    fn from(err: std::io::Error) -> Self {
        EmpvizError::Io(err)
    }
}

impl From<toml::de::Error> for EmpvizError {
    fn from(err: toml::de::Error) -> Self {
        EmpvizError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for EmpvizError {
    fn from(err: serde_json::Error) -> Self {
        EmpvizError::Serialization(err)
    }
}

/// Type alias for Results using EmpvizError
pub type Result<T> = std::result::Result<T, EmpvizError>;
