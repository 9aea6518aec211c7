use super::{
    Pair, Rule, parse_expression::parse_expression, parsing_catch_all, syntax_error,
};
use crate::ast::{ConfigBlock, Expression, Identifier};
use crate::error::SchemaResult;

/// `datasource` and `generator` blocks: `key = value` lines.
pub(crate) fn parse_config_block(pair: Pair<'_>) -> SchemaResult<ConfigBlock> {
    let mut keyword = String::new();
    let mut name: Option<Identifier> = None;
    let mut properties: Vec<(Identifier, Expression)> = Vec::new();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::DATASOURCE_KEYWORD | Rule::GENERATOR_KEYWORD => {
                keyword = current.as_str().to_string();
            }
            Rule::BLOCK_OPEN | Rule::BLOCK_CLOSE => {}
            Rule::MISSING_BLOCK_CLOSE => return Err(syntax_error(&current, "missing closing `}`")),
            Rule::identifier => name = Some(current.into()),
            Rule::config_contents => {
                for item in current.into_inner() {
                    match item.as_rule() {
                        Rule::key_value => properties.push(parse_key_value(item)?),
                        Rule::BLOCK_LEVEL_CATCH_ALL => {
                            return Err(syntax_error(
                                &item,
                                format!("This line is not a valid definition within a {keyword}."),
                            ));
                        }
                        _ => parsing_catch_all(&item, "config block"),
                    }
                }
            }
            _ => parsing_catch_all(&current, "config block"),
        }
    }

    match name {
        Some(name) => Ok(ConfigBlock {
            keyword,
            name,
            properties,
        }),
        None => unreachable!("config block without a name"),
    }
}

fn parse_key_value(pair: Pair<'_>) -> SchemaResult<(Identifier, Expression)> {
    let mut key: Option<Identifier> = None;
    let mut value: Option<Expression> = None;

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::identifier => key = Some(current.into()),
            Rule::expression => value = Some(parse_expression(current)?),
            _ => parsing_catch_all(&current, "key value"),
        }
    }

    match (key, value) {
        (Some(key), Some(value)) => Ok((key, value)),
        _ => unreachable!("key value without key or value"),
    }
}
