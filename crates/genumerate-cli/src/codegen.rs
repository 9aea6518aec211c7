use crate::case::pascalize;
use crate::names::GenerationResult;
use std::collections::HashMap;
use thiserror::Error;

pub const BANNER: &str =
    "/* * Enumerates are ONLY allowed to modified by script, DO NOT MODIFY manually * */";

/// Which declarations end up in the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Category {
    /// `PrismaModel`: camelCased model names (Prisma client accessors).
    PrismaModel,
    /// `ModelName`: model names as declared.
    ModelName,
    /// `TableName`: `@@map` table names, or the model names when nothing is mapped.
    TableName,
    /// `<Name>Enum` for every schema enum.
    Enums,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::PrismaModel,
        Category::ModelName,
        Category::TableName,
        Category::Enums,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub identifier: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub members: Vec<Member>,
}

/// Everything the formatter needs to print one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumFile {
    pub declarations: Vec<Declaration>,
}

impl EnumFile {
    /// Names listed in the trailing `export { ... }`.
    pub fn export_names(&self) -> Vec<&str> {
        self.declarations.iter().map(|d| d.name.as_str()).collect()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodegenError {
    #[error(
        "enum `{declaration}`: '{first}' and '{second}' both become member `{identifier}`"
    )]
    DuplicateMember {
        declaration: String,
        identifier: String,
        first: String,
        second: String,
    },
    #[error("enum `{declaration}`: '{value}' does not produce a valid member name (got `{identifier}`)")]
    InvalidMember {
        declaration: String,
        value: String,
        identifier: String,
    },
}

fn declaration<'a>(
    name: impl Into<String>,
    values: impl IntoIterator<Item = &'a String>,
    identifier: impl Fn(&str) -> String,
) -> Result<Declaration, CodegenError> {
    let name = name.into();
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut members = Vec::new();

    for value in values {
        let ident = identifier(value);
        if !is_identifier(&ident) {
            return Err(CodegenError::InvalidMember {
                declaration: name,
                value: value.clone(),
                identifier: ident,
            });
        }
        if let Some(first) = seen.insert(ident.clone(), value) {
            return Err(CodegenError::DuplicateMember {
                declaration: name,
                identifier: ident,
                first: first.to_string(),
                second: value.clone(),
            });
        }
        members.push(Member {
            identifier: ident,
            value: value.clone(),
        });
    }

    Ok(Declaration { name, members })
}

/// ASCII subset of a TypeScript identifier.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Build the declarations for the selected categories, in fixed order.
pub fn build_enum_file(
    result: &GenerationResult,
    categories: &[Category],
) -> Result<EnumFile, CodegenError> {
    let wants = |c: Category| categories.contains(&c);
    let mut declarations = Vec::new();

    if wants(Category::PrismaModel) {
        declarations.push(declaration("PrismaModel", &result.prisma_models, pascalize)?);
    }

    let model_name = declaration("ModelName", &result.model_names, pascalize)?;
    if wants(Category::ModelName) {
        declarations.push(model_name.clone());
    }

    if wants(Category::TableName) {
        if result.table_names.is_empty() {
            declarations.push(Declaration {
                name: "TableName".to_string(),
                members: model_name.members,
            });
        } else {
            declarations.push(declaration("TableName", &result.table_names, pascalize)?);
        }
    }

    if wants(Category::Enums) {
        for (name, members) in &result.model_enums {
            declarations.push(declaration(format!("{name}Enum"), members, |m| {
                pascalize(&m.to_lowercase())
            })?);
        }
    }

    tracing::debug!(declarations = declarations.len(), "built enum declarations");
    Ok(EnumFile { declarations })
}
