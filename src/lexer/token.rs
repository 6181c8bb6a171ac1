use std::fmt;

use num::BigInt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    Bool,
    Float,
    Char,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Bool => "bool",
            DataType::Float => "float",
            DataType::Char => "char",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(BigInt),
    Float(f64),
    Boolean(bool),
    Char(char),
}

impl Literal {
    pub fn data_type(&self) -> DataType {
        match self {
            Literal::Integer(_) => DataType::Int,
            Literal::Float(_) => DataType::Float,
            Literal::Boolean(_) => DataType::Bool,
            Literal::Char(_) => DataType::Char,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(i) => write!(f, "{i}"),
            // `{:?}` keeps the fractional part on whole floats (`3.0`, not `3`)
            Literal::Float(x) => write!(f, "{x:?}"),
            Literal::Boolean(b) => write!(f, "{b}"),
            Literal::Char(c) => write!(f, "{c}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Keyword,
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    BooleanLiteral,
    CharLiteral,
    RelOp,
    EquOp,
    AddOp,
    MulOp,
    UnaryOp,
    Assignment,
    Delimiter,
}

impl TokenClass {
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenClass::IntegerLiteral
                | TokenClass::FloatLiteral
                | TokenClass::BooleanLiteral
                | TokenClass::CharLiteral
        )
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenClass::RelOp
                | TokenClass::EquOp
                | TokenClass::AddOp
                | TokenClass::MulOp
                | TokenClass::UnaryOp
                | TokenClass::Assignment
        )
    }

    pub fn symbol_type(&self) -> SymbolType {
        match self {
            TokenClass::Keyword => SymbolType::Keyword,
            TokenClass::Identifier => SymbolType::Variable,
            TokenClass::Delimiter => SymbolType::Symbol,
            c if c.is_literal() => SymbolType::Literal,
            _ => SymbolType::Operator,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenClass::Keyword => "Keyword",
            TokenClass::Identifier => "Identifier",
            TokenClass::IntegerLiteral => "IntegerLiteral",
            TokenClass::FloatLiteral => "FloatLiteral",
            TokenClass::BooleanLiteral => "BooleanLiteral",
            TokenClass::CharLiteral => "CharLiteral",
            TokenClass::RelOp => "RelOp",
            TokenClass::EquOp => "EquOp",
            TokenClass::AddOp => "AddOp",
            TokenClass::MulOp => "MulOp",
            TokenClass::UnaryOp => "UnaryOp",
            TokenClass::Assignment => "Assignment",
            TokenClass::Delimiter => "Delimiter",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse category of a symbol table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolType {
    Keyword,
    Variable,
    Literal,
    Operator,
    Symbol,
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SymbolType::Keyword => "Keyword",
            SymbolType::Variable => "Variable",
            SymbolType::Literal => "Literal",
            SymbolType::Operator => "Operator",
            SymbolType::Symbol => "Symbol",
        };
        f.write_str(s)
    }
}

/// Byte range `[start, end)` of a lexeme in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span(pub usize, pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub lexeme: String,
    pub class: TokenClass,
    pub data_type: Option<DataType>,
    pub value: Option<Literal>,
    pub span: Span,
    pub line: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}", self.class, self.lexeme)?;
        if let Some(ty) = self.data_type {
            write!(f, ", type={ty}")?;
        }
        if let Some(value) = &self.value {
            write!(f, ", value={value}")?;
        }
        write!(f, ")")
    }
}
