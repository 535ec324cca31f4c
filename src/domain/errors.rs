//! Simplified error system - no over-engineering!

/// Faults a chart build can surface. Lookup failures propagate to the
/// caller; there is no fallback chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The selected field is not in the field catalog.
    UnknownField(String),
    /// `enable` was called with a theme name nobody registered.
    UnknownTheme(String),
    /// Chart spec could not be serialized to JSON.
    Serialization(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::UnknownField(name) => write!(f, "unknown field: {}", name),
            AppError::UnknownTheme(name) => write!(f, "unknown theme: {}", name),
            AppError::Serialization(msg) => write!(f, "spec serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type PlotResult<T> = Result<T, AppError>;
