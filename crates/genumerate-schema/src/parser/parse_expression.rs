use super::{
    Pair, Rule, parse_attribute::parse_arguments_list, parsing_catch_all, syntax_error,
};
use crate::ast::Expression;
use crate::error::SchemaResult;

pub(crate) fn parse_expression(token: Pair<'_>) -> SchemaResult<Expression> {
    let Some(first_child) = token.into_inner().next() else {
        unreachable!("empty expression");
    };

    match first_child.as_rule() {
        Rule::numeric_literal => Ok(Expression::Number(first_child.as_str().to_string())),
        Rule::string_literal => parse_string_literal(first_child).map(Expression::String),
        Rule::path => Ok(Expression::Constant(first_child.as_str().to_string())),
        Rule::function_call => parse_function(first_child),
        Rule::array_expression => first_child
            .into_inner()
            .map(parse_expression)
            .collect::<SchemaResult<Vec<_>>>()
            .map(Expression::Array),
        _ => parsing_catch_all(&first_child, "expression"),
    }
}

fn parse_function(pair: Pair<'_>) -> SchemaResult<Expression> {
    let mut name: Option<String> = None;
    let mut arguments = Vec::new();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::path => name = Some(current.as_str().to_string()),
            Rule::arguments_list => arguments = parse_arguments_list(current)?,
            _ => parsing_catch_all(&current, "function"),
        }
    }

    match name {
        Some(name) => Ok(Expression::Function(name, arguments)),
        None => unreachable!("function call without a name"),
    }
}

/// Unescape the contents of a `"..."` literal (JSON escapes).
pub(crate) fn parse_string_literal(token: Pair<'_>) -> SchemaResult<String> {
    let Some(contents) = token.into_inner().next() else {
        unreachable!("string literal without contents");
    };
    let raw = contents.as_str();
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(ch) if hex.len() == 4 => out.push(ch),
                    _ => return Err(syntax_error(&contents, "invalid unicode escape sequence")),
                }
            }
            Some(other) => {
                return Err(syntax_error(
                    &contents,
                    format!("unknown escape sequence `\\{other}`"),
                ));
            }
            None => break,
        }
    }

    Ok(out)
}
