//! Glue error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while wiring the GUI library to the platform
#[derive(Error, Debug)]
pub enum GlueError {
    /// The GUI runtime refused to initialise
    #[error("GUI runtime failed to initialise")]
    RuntimeInit,

    /// The GUI runtime could not create a context
    #[error("failed to create GUI context '{0}'")]
    ContextCreation(String),

    /// A required GL entry point could not be resolved
    #[error("couldn't load GL function {name}")]
    MissingGlFunction {
        /// Name of the missing entry point
        name: &'static str,
    },

    /// The scripting runtime has no namespace for a document
    #[error("no script namespace for document {0}")]
    NoNamespace(u64),

    /// Texture decoding or upload failed
    #[error("texture error: {0}")]
    Texture(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for glue operations
pub type GlueResult<T> = Result<T, GlueError>;
