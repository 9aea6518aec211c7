use super::{Pair, Rule, parse_expression::parse_expression, parsing_catch_all};
use crate::ast::{Argument, Attribute, Expression};
use crate::error::SchemaResult;

/// Field (`@`) or block (`@@`) attribute.
pub(crate) fn parse_attribute(pair: Pair<'_>) -> SchemaResult<Attribute> {
    let mut name = String::new();
    let mut arguments = Vec::new();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::attribute_path => name = current.as_str().to_string(),
            Rule::arguments_list => arguments = parse_arguments_list(current)?,
            _ => parsing_catch_all(&current, "attribute"),
        }
    }

    Ok(Attribute { name, arguments })
}

pub(crate) fn parse_arguments_list(pair: Pair<'_>) -> SchemaResult<Vec<Argument>> {
    pair.into_inner().map(parse_argument).collect()
}

fn parse_argument(pair: Pair<'_>) -> SchemaResult<Argument> {
    let mut name: Option<String> = None;
    let mut value: Option<Expression> = None;

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::argument_name => name = Some(current.as_str().to_string()),
            Rule::expression => value = Some(parse_expression(current)?),
            _ => parsing_catch_all(&current, "argument"),
        }
    }

    match value {
        Some(value) => Ok(Argument { name, value }),
        None => unreachable!("argument without a value"),
    }
}
