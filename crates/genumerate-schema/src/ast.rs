//! Syntax tree for Prisma schema files.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    String(String),
    Number(String),
    Constant(String),
    Function(String, Vec<Argument>),
    Array(Vec<Expression>),
}

impl Expression {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expression::String(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: Option<String>,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Dotted path without the leading `@`/`@@`, e.g. `map` or `db.VarChar`.
    pub name: String,
    pub arguments: Vec<Argument>,
}

impl Attribute {
    /// The argument named `name`, else the first positional one.
    pub fn name_argument(&self) -> Option<&Expression> {
        self.arguments
            .iter()
            .find(|a| a.name.as_deref() == Some("name"))
            .or_else(|| self.arguments.iter().find(|a| a.name.is_none()))
            .map(|a| &a.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Required,
    Optional,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: Identifier,
    pub field_type: Identifier,
    pub arity: Arity,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Model,
    View,
    CompositeType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub name: Identifier,
    pub fields: Vec<Field>,
    pub attributes: Vec<Attribute>,
}

impl Block {
    /// Table name from `@@map("...")`, if any.
    pub fn mapped_name(&self) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == "map")
            .and_then(|a| a.name_argument())
            .and_then(|e| e.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: Identifier,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub name: Identifier,
    pub values: Vec<EnumValue>,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBlock {
    pub keyword: String,
    pub name: Identifier,
    pub properties: Vec<(Identifier, Expression)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Top {
    Block(Block),
    Enum(Enum),
    Config(ConfigBlock),
}

impl Top {
    pub fn name(&self) -> &Identifier {
        match self {
            Top::Block(b) => &b.name,
            Top::Enum(e) => &e.name,
            Top::Config(c) => &c.name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaAst {
    pub tops: Vec<Top>,
}
