//! genumerate-schema
//!
//! Reads Prisma schema files and reports the declarations prisma-genumerate
//! turns into TypeScript enums: models (with their `@@map` table name) and
//! enums (with their values in declaration order).
//!
//! # Example
//!
//! ```
//! use genumerate_schema::parse_schema;
//!
//! let schema = parse_schema(
//!     r#"
//! model ServiceAccount {
//!   id Int @id
//!   @@map("service_account")
//! }
//!
//! enum Status {
//!   ACTIVE
//!   DISABLED
//! }
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(schema.models[0].name, "ServiceAccount");
//! assert_eq!(schema.models[0].mapped_table_name.as_deref(), Some("service_account"));
//! assert_eq!(schema.enums[0].members, vec!["ACTIVE", "DISABLED"]);
//! ```

pub mod ast;
pub mod error;
pub mod parser;
mod validate;

pub use error::{SchemaError, SchemaResult};
pub use parser::parse_schema_ast;
pub use validate::SCALAR_TYPES;

use ast::{BlockKind, Top};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A `model` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
    /// Set only when the model carries `@@map("...")`.
    pub mapped_table_name: Option<String>,
}

/// An `enum` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    pub name: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub models: Vec<ModelDescriptor>,
    pub enums: Vec<EnumDescriptor>,
}

impl Schema {
    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.enums.is_empty()
    }
}

/// Parse and validate schema text.
pub fn parse_schema(input: &str) -> SchemaResult<Schema> {
    let ast = parse_schema_ast(input)?;
    validate::validate(&ast)?;

    let mut schema = Schema::default();
    for top in ast.tops {
        match top {
            Top::Block(block) if block.kind == BlockKind::Model => {
                let mapped_table_name = block.mapped_name().map(str::to_string);
                schema.models.push(ModelDescriptor {
                    name: block.name.name,
                    mapped_table_name,
                });
            }
            Top::Block(block) => {
                tracing::debug!(name = %block.name.name, kind = ?block.kind, "skipping non-model block");
            }
            Top::Enum(e) => schema.enums.push(EnumDescriptor {
                name: e.name.name,
                members: e.values.into_iter().map(|v| v.name.name).collect(),
            }),
            Top::Config(c) => {
                tracing::debug!(keyword = %c.keyword, name = %c.name.name, "skipping config block");
            }
        }
    }

    Ok(schema)
}

/// Read a schema file and parse it.
pub fn read_schema(path: impl AsRef<Path>) -> SchemaResult<Schema> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let schema = parse_schema(&raw)?;
    tracing::debug!(
        path = %path.display(),
        models = schema.models.len(),
        enums = schema.enums.len(),
        "parsed schema"
    );
    Ok(schema)
}
