use super::{
    Pair, Rule, parse_attribute::parse_attribute, parsing_catch_all, syntax_error,
};
use crate::ast::*;
use crate::error::SchemaResult;

/// `model`, `view` and `type` blocks share one grammar rule.
pub(crate) fn parse_model(pair: Pair<'_>) -> SchemaResult<Block> {
    let mut kind: Option<BlockKind> = None;
    let mut name: Option<Identifier> = None;
    let mut fields: Vec<Field> = Vec::new();
    let mut attributes: Vec<Attribute> = Vec::new();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::MODEL_KEYWORD => kind = Some(BlockKind::Model),
            Rule::VIEW_KEYWORD => kind = Some(BlockKind::View),
            Rule::TYPE_KEYWORD => kind = Some(BlockKind::CompositeType),
            Rule::BLOCK_OPEN | Rule::BLOCK_CLOSE => {}
            Rule::MISSING_BLOCK_CLOSE => return Err(syntax_error(&current, "missing closing `}`")),
            Rule::identifier => name = Some(current.into()),
            Rule::model_contents => {
                for item in current.into_inner() {
                    match item.as_rule() {
                        Rule::field_declaration => fields.push(parse_field(item)?),
                        Rule::block_attribute => attributes.push(parse_attribute(item)?),
                        Rule::BLOCK_LEVEL_CATCH_ALL => {
                            return Err(syntax_error(
                                &item,
                                "This line is not a valid field or attribute definition.",
                            ));
                        }
                        _ => parsing_catch_all(&item, "model"),
                    }
                }
            }
            _ => parsing_catch_all(&current, "model"),
        }
    }

    match (kind, name) {
        (Some(kind), Some(name)) => Ok(Block {
            kind,
            name,
            fields,
            attributes,
        }),
        _ => unreachable!("model declaration without keyword or name"),
    }
}

fn parse_field(pair: Pair<'_>) -> SchemaResult<Field> {
    let mut name: Option<Identifier> = None;
    let mut field_type: Option<Identifier> = None;
    let mut arity = Arity::Required;
    let mut attributes: Vec<Attribute> = Vec::new();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::identifier => name = Some(current.into()),
            Rule::field_type => {
                for part in current.into_inner() {
                    match part.as_rule() {
                        Rule::identifier => field_type = Some(part.into()),
                        // Unsupported("...") resolves as the `Unsupported` scalar
                        Rule::unsupported_type => {
                            let (line, column) = part.as_span().start_pos().line_col();
                            field_type = Some(Identifier {
                                name: "Unsupported".to_string(),
                                line,
                                column,
                            });
                        }
                        Rule::LIST_MARKER => arity = Arity::List,
                        Rule::OPTIONAL_MARKER => arity = Arity::Optional,
                        _ => parsing_catch_all(&part, "field type"),
                    }
                }
            }
            Rule::field_attribute => attributes.push(parse_attribute(current)?),
            _ => parsing_catch_all(&current, "field"),
        }
    }

    match (name, field_type) {
        (Some(name), Some(field_type)) => Ok(Field {
            name,
            field_type,
            arity,
            attributes,
        }),
        _ => unreachable!("field declaration without name or type"),
    }
}
