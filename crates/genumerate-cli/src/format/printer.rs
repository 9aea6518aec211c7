use super::FormatOptions;
use crate::codegen::{BANNER, Declaration, EnumFile};

/// Print the generated file the way Prettier prints TypeScript enums.
pub fn render(file: &EnumFile, opts: &FormatOptions) -> String {
    let mut lines: Vec<String> = vec![BANNER.to_string(), String::new()];

    for decl in &file.declarations {
        push_declaration(&mut lines, decl, opts);
        lines.push(String::new());
    }

    push_export(&mut lines, &file.export_names(), opts);

    let eol = opts.end_of_line.as_str();
    let mut out = lines.join(eol);
    out.push_str(eol);
    out
}

fn push_declaration(lines: &mut Vec<String>, decl: &Declaration, opts: &FormatOptions) {
    if decl.members.is_empty() {
        lines.push(format!("enum {} {{}}", decl.name));
        return;
    }

    let indent = opts.indent();
    lines.push(format!("enum {} {{", decl.name));
    let last = decl.members.len() - 1;
    for (i, m) in decl.members.iter().enumerate() {
        let comma = if i < last { "," } else { opts.trailing_comma() };
        lines.push(format!(
            "{indent}{} = {}{comma}",
            m.identifier,
            quote(&m.value, opts.single_quote)
        ));
    }
    lines.push("}".to_string());
}

fn push_export(lines: &mut Vec<String>, names: &[&str], opts: &FormatOptions) {
    let semi = if opts.semi { ";" } else { "" };
    if names.is_empty() {
        lines.push(format!("export {{}}{semi}"));
        return;
    }

    let pad = if opts.bracket_spacing { " " } else { "" };
    let single = format!("export {{{pad}{}{pad}}}{semi}", names.join(", "));
    if single.chars().count() <= opts.print_width {
        lines.push(single);
        return;
    }

    let indent = opts.indent();
    lines.push("export {".to_string());
    let last = names.len() - 1;
    for (i, name) in names.iter().enumerate() {
        let comma = if i < last { "," } else { opts.trailing_comma() };
        lines.push(format!("{indent}{name}{comma}"));
    }
    lines.push(format!("}}{semi}"));
}

/// Prefer the configured quote unless the value contains more of it than of the other one.
fn quote(value: &str, single_quote: bool) -> String {
    let singles = value.matches('\'').count();
    let doubles = value.matches('"').count();
    let q = match (single_quote, singles > doubles, doubles > singles) {
        (true, true, _) => '"',
        (true, false, _) => '\'',
        (false, _, true) => '\'',
        (false, _, false) => '"',
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(q);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(q);
    out
}
