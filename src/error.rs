use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by [`crate::graph::Graph`] construction and edge access
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid graph size: {size}")]
    #[diagnostic(
        code(ferris_loop::invalid_size),
        help("The vertex count must be zero or positive, and its adjacency matrix must fit in memory")
    )]
    InvalidSize { size: i64 },

    #[error("Edge {from} → {to} is out of range for a graph of {size} vertices")]
    #[diagnostic(
        code(ferris_loop::index_out_of_range),
        help("Vertex indices must be smaller than the vertex count")
    )]
    IndexOutOfRange { from: usize, to: usize, size: usize },
}

#[derive(Error, Debug, Diagnostic)]
pub enum FerrisLoopError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(ferris_loop::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(ferris_loop::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(ferris_loop::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(ferris_loop::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
