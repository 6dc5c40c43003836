use crate::Span;

/// A top-level or block-level Fusion statement.
///
/// Statements are kept in raw encounter order; later definitions of the
/// same path are not merged or deduplicated here, that is an
/// evaluation-time concern.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Include(Include),
    Definition(Definition),
}

impl Statement {
    pub fn loc(&self) -> Option<&Span> {
        match self {
            Statement::Include(include) => include.loc.as_ref(),
            Statement::Definition(definition) => definition.loc.as_ref(),
        }
    }
}

/// An `include: <pattern>` directive. The pattern is taken verbatim from
/// the source, with quotes stripped when the pattern was quoted. File
/// resolution and globbing happen outside the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Include {
    pub pattern: String,
    pub loc: Option<Span>,
}

/// A `path [= value] [{ block }]` statement.
///
/// `path` always holds at least one segment. `value` and `block` are
/// independently optional: `renderer = Neos.Fusion:Value { ... }` has
/// both, while a bare path with neither is a legal no-op statement.
/// Block paths are local to the enclosing definition; the parser never
/// concatenates parent and child paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub path: Vec<PathSegment>,
    pub value: Option<Value>,
    pub block: Option<Vec<Statement>>,
    pub loc: Option<Span>,
}

/// One dot-separated element of a definition's address.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    Property(Property),
    Prototype(Prototype),
}

impl PathSegment {
    pub fn loc(&self) -> Option<&Span> {
        match self {
            PathSegment::Property(property) => property.loc.as_ref(),
            PathSegment::Prototype(prototype) => prototype.loc.as_ref(),
        }
    }
}

/// A plain, quoted or numeric property name. Meta-properties (`@cache`,
/// `@process`) are ordinary properties whose name begins with `@`.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub loc: Option<Span>,
}

/// A `prototype(<Name>)` path segment; `name` is the raw dotted and
/// colon-qualified identifier inside the parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub loc: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub kind: ValueKind,
    pub loc: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    /// A literal scalar.
    Simple(SimpleValue),
    /// A bare token referencing a prototype/object type,
    /// e.g. `Neos.Fusion:Value`.
    ObjectName(String),
    /// Raw text captured between `${` and its balanced closing `}`,
    /// never interpreted by the parser.
    Expression(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SimpleValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}
