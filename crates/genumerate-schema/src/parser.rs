//! Prisma schema parser.
//!
//! The grammar lives in `parser/datamodel.pest`; the `parse_*` modules turn
//! its pairs into the [`crate::ast`] types.

mod parse_attribute;
mod parse_config;
mod parse_enum;
mod parse_expression;
mod parse_model;
mod parse_schema;

pub use parse_schema::parse_schema_ast;

use crate::ast::Identifier;
use crate::error::SchemaError;

#[derive(pest_derive::Parser)]
#[grammar = "parser/datamodel.pest"]
pub(crate) struct PrismaDatamodelParser;

pub(crate) type Pair<'a> = pest::iterators::Pair<'a, Rule>;

impl From<Pair<'_>> for Identifier {
    fn from(pair: Pair<'_>) -> Self {
        let (line, column) = pair.as_span().start_pos().line_col();
        Identifier {
            name: pair.as_str().to_string(),
            line,
            column,
        }
    }
}

fn syntax_error(pair: &Pair<'_>, message: impl Into<String>) -> SchemaError {
    let (line, column) = pair.as_span().start_pos().line_col();
    SchemaError::syntax(line, column, message)
}

/// The grammar only produces the rules the callers match on.
fn parsing_catch_all(pair: &Pair<'_>, kind: &str) -> ! {
    unreachable!(
        "encountered impossible {kind} during parsing: {:?} {:?}",
        pair.as_rule(),
        pair.as_str()
    )
}
