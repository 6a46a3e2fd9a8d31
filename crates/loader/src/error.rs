use thiserror::Error;

/// Result type for loader operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while loading a package graph
#[derive(Error, Debug)]
pub enum LoadError {
    /// Root directory is missing or not a directory
    #[error("root directory not found: {0}")]
    RootNotFound(String),

    /// Nothing under the root (and selector) produced a package
    #[error("no loadable packages under {root} (pattern {pattern:?})")]
    NoPackages { root: String, pattern: String },

    /// Tree-sitter failed to initialize or to parse a file
    #[error("parse error: {0}")]
    ParseError(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoadError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}
