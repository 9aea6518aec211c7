//! TypeScript output formatting.
//!
//! Options mirror the Prettier keys that affect enum and export
//! declarations. They are resolved once, at startup, by [`resolve_format_config`]
//! and then passed by reference to [`render`].

mod config;
mod printer;

pub use config::{FormatConfig, resolve_format_config};
pub use printer::render;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    #[default]
    All,
    Es5,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    #[default]
    Lf,
    Crlf,
    Cr,
    Auto,
}

impl EndOfLine {
    pub fn as_str(self) -> &'static str {
        match self {
            EndOfLine::Lf | EndOfLine::Auto => "\n",
            EndOfLine::Crlf => "\r\n",
            EndOfLine::Cr => "\r",
        }
    }
}

/// Prettier options; unknown keys in a config file are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub single_quote: bool,
    pub tab_width: usize,
    pub use_tabs: bool,
    pub semi: bool,
    pub trailing_comma: TrailingComma,
    pub bracket_spacing: bool,
    pub print_width: usize,
    pub end_of_line: EndOfLine,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            single_quote: false,
            tab_width: 2,
            use_tabs: false,
            semi: true,
            trailing_comma: TrailingComma::All,
            bracket_spacing: true,
            print_width: 80,
            end_of_line: EndOfLine::Lf,
        }
    }
}

impl FormatOptions {
    /// Used when no Prettier config file is found.
    pub fn fallback() -> Self {
        Self {
            single_quote: true,
            ..Self::default()
        }
    }

    pub(crate) fn indent(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.tab_width)
        }
    }

    pub(crate) fn trailing_comma(&self) -> &'static str {
        match self.trailing_comma {
            TrailingComma::All | TrailingComma::Es5 => ",",
            TrailingComma::None => "",
        }
    }
}
