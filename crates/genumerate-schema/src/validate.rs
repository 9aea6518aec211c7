use crate::ast::{SchemaAst, Top};
use crate::error::{SchemaError, SchemaResult};
use std::collections::HashSet;

/// Built-in scalar field types.
pub const SCALAR_TYPES: &[&str] = &[
    "String",
    "Boolean",
    "Int",
    "BigInt",
    "Float",
    "Decimal",
    "DateTime",
    "Json",
    "Bytes",
    "Unsupported",
];

/// Check top-level names are unique and every field type resolves.
///
/// A relation to a model that lives in another schema file fails here; the
/// usual fix is a stub model carrying only its `@id` field.
pub(crate) fn validate(ast: &SchemaAst) -> SchemaResult<()> {
    let mut declared: HashSet<&str> = HashSet::new();
    let mut config_names: HashSet<&str> = HashSet::new();

    for top in &ast.tops {
        let name = top.name();
        let seen = match top {
            Top::Config(_) => &mut config_names,
            _ => &mut declared,
        };
        if !seen.insert(name.name.as_str()) {
            return Err(SchemaError::DuplicateDeclaration {
                name: name.name.clone(),
                line: name.line,
                column: name.column,
            });
        }
    }

    for top in &ast.tops {
        let Top::Block(block) = top else {
            continue;
        };
        for field in &block.fields {
            let ty = field.field_type.name.as_str();
            if SCALAR_TYPES.contains(&ty) || declared.contains(ty) {
                continue;
            }
            return Err(SchemaError::UnknownType {
                container: block.name.name.clone(),
                field: field.name.name.clone(),
                type_name: ty.to_string(),
                line: field.field_type.line,
                column: field.field_type.column,
            });
        }
    }

    Ok(())
}
