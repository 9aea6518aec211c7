//! Error types for genumerate-schema

use std::path::PathBuf;
use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Error type for reading and parsing a Prisma schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("failed to read schema {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The schema text is not valid Prisma schema syntax.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    /// A field refers to a type that is neither built-in nor declared.
    #[error(
        "type `{type_name}` of field `{container}.{field}` at {line}:{column} is neither a built-in type, nor refers to another model, composite type, or enum"
    )]
    UnknownType {
        container: String,
        field: String,
        type_name: String,
        line: usize,
        column: usize,
    },
    /// Two top-level blocks share a name.
    #[error("`{name}` is declared more than once (second declaration at {line}:{column})")]
    DuplicateDeclaration {
        name: String,
        line: usize,
        column: usize,
    },
}

impl SchemaError {
    /// Create a syntax error at a location.
    pub fn syntax(line: usize, column: usize, message: impl Into<String>) -> Self {
        SchemaError::Syntax {
            line,
            column,
            message: message.into(),
        }
    }
}
