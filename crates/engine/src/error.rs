use thiserror::Error;

/// Result type for documentation queries
pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors a documentation query can surface to the caller.
///
/// "Not found" and "wrong kind" stay distinct so callers can tell a typo
/// from a category mistake; undocumented symbols are not errors at all.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("package not found: {path}")]
    PackageNotFound { path: String },

    #[error("struct not found: {name} in package {path}")]
    StructNotFound { path: String, name: String },

    #[error("not a struct: {name} in package {path}")]
    NotAStruct { path: String, name: String },

    #[error("function not found: {name} in package {path}")]
    FuncNotFound { path: String, name: String },

    #[error("not a function: {name} in package {path}")]
    NotAFunction { path: String, name: String },

    #[error("method not found: {receiver}.{name} in package {path}")]
    MethodNotFound {
        path: String,
        receiver: String,
        name: String,
    },
}
