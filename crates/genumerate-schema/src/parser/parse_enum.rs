use super::{
    Pair, Rule, parse_attribute::parse_attribute, parsing_catch_all, syntax_error,
};
use crate::ast::{Attribute, Enum, EnumValue, Identifier};
use crate::error::SchemaResult;

pub(crate) fn parse_enum(pair: Pair<'_>) -> SchemaResult<Enum> {
    let mut name: Option<Identifier> = None;
    let mut values: Vec<EnumValue> = Vec::new();
    let mut attributes: Vec<Attribute> = Vec::new();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::ENUM_KEYWORD | Rule::BLOCK_OPEN | Rule::BLOCK_CLOSE => {}
            Rule::MISSING_BLOCK_CLOSE => return Err(syntax_error(&current, "missing closing `}`")),
            Rule::identifier => name = Some(current.into()),
            Rule::enum_contents => {
                for item in current.into_inner() {
                    match item.as_rule() {
                        Rule::enum_value_declaration => values.push(parse_enum_value(item)?),
                        Rule::block_attribute => attributes.push(parse_attribute(item)?),
                        Rule::BLOCK_LEVEL_CATCH_ALL => {
                            return Err(syntax_error(
                                &item,
                                "This line is not an enum value definition.",
                            ));
                        }
                        _ => parsing_catch_all(&item, "enum"),
                    }
                }
            }
            _ => parsing_catch_all(&current, "enum"),
        }
    }

    match name {
        Some(name) => Ok(Enum {
            name,
            values,
            attributes,
        }),
        None => unreachable!("enum declaration without a name"),
    }
}

fn parse_enum_value(pair: Pair<'_>) -> SchemaResult<EnumValue> {
    let mut name: Option<Identifier> = None;
    let mut attributes: Vec<Attribute> = Vec::new();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::identifier => name = Some(current.into()),
            Rule::field_attribute => attributes.push(parse_attribute(current)?),
            _ => parsing_catch_all(&current, "enum value"),
        }
    }

    match name {
        Some(name) => Ok(EnumValue { name, attributes }),
        None => unreachable!("enum value without a name"),
    }
}
