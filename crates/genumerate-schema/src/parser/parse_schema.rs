use super::{
    PrismaDatamodelParser, Rule, parse_config::parse_config_block, parse_enum::parse_enum,
    parse_model::parse_model, parsing_catch_all, syntax_error,
};
use crate::ast::*;
use crate::error::{SchemaError, SchemaResult};
use pest::Parser;

/// Parse schema text into its syntax tree.
///
/// The first invalid line or block is reported; nothing after it is parsed.
pub fn parse_schema_ast(input: &str) -> SchemaResult<SchemaAst> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut datamodel_wrapped =
        PrismaDatamodelParser::parse(Rule::schema, input).map_err(pest_error)?;
    let Some(datamodel) = datamodel_wrapped.next() else {
        return Ok(SchemaAst::default());
    };

    let mut tops = Vec::new();
    for current in datamodel.into_inner() {
        match current.as_rule() {
            Rule::model_declaration => tops.push(Top::Block(parse_model(current)?)),
            Rule::enum_declaration => tops.push(Top::Enum(parse_enum(current)?)),
            Rule::config_block => tops.push(Top::Config(parse_config_block(current)?)),
            Rule::arbitrary_block => {
                let keyword = current
                    .clone()
                    .into_inner()
                    .next()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                return Err(syntax_error(
                    &current,
                    format!(
                        "This block is invalid. `{keyword}` is not a known Prisma schema keyword. Valid keywords include 'model', 'enum', 'type', 'view', 'datasource' and 'generator'."
                    ),
                ));
            }
            Rule::CATCH_ALL => {
                return Err(syntax_error(
                    &current,
                    "This line is invalid. It does not start with any known Prisma schema keyword.",
                ));
            }
            Rule::EOI => {}
            _ => parsing_catch_all(&current, "schema"),
        }
    }

    Ok(SchemaAst { tops })
}

fn pest_error(err: pest::error::Error<Rule>) -> SchemaError {
    let (line, column) = match err.line_col {
        pest::error::LineColLocation::Pos(pos) => pos,
        pest::error::LineColLocation::Span(start, _) => start,
    };
    SchemaError::syntax(line, column, err.variant.message())
}
