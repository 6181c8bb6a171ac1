pub mod token;


use lazy_static::lazy_static;
use num::BigInt;
use std::collections::HashMap;
use std::str::Chars;
use thiserror::Error;
use token::{DataType, Literal, Span, Token, TokenClass};

macro_rules! hash_map {
    ( $( $key: expr => $value: expr ),* $(,)? ) => {{
        let mut m = HashMap::new();
        $(
            m.insert($key, $value);
        )*
        m
    }}
}

macro_rules! two_char_tok {
    ( $self: ident, $orig: expr; $( $c: literal => $tc: expr ),+ $(,)? ) => {
        match $self.peek() {
            $(
                Some($c) => {
                    $self.advance();
                    Ok($self.make_token($tc))
                }
            )+
            _ => Ok($self.make_token($orig))
        }
    };
}

lazy_static! {
    /// Reserved words, mapped to the data type they introduce in a declaration.
    static ref KEYWORDS: HashMap<&'static str, Option<DataType>> = hash_map! {
        "bool"  => Some(DataType::Bool),
        "char"  => Some(DataType::Char),
        "else"  => None,
        "float" => Some(DataType::Float),
        "if"    => None,
        "int"   => Some(DataType::Int),
        "main"  => None,
        "while" => None,
    };
}

pub fn is_keyword(lexeme: &str) -> bool {
    KEYWORDS.contains_key(lexeme)
}

/// The data type named by a type keyword, `None` for anything else.
pub fn declared_type(lexeme: &str) -> Option<DataType> {
    KEYWORDS.get(lexeme).copied().flatten()
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexerErrorKind {
    #[error("expected start of token, found {0:?}")]
    UnexpectedChar(char),
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("lexical error at line {line}, position {position}: {kind}")]
pub struct LexerError {
    pub character: char,
    pub position: usize,
    pub line: usize,
    pub kind: LexerErrorKind,
}

pub type LexerResult = Result<Token, LexerError>;

/// Single-pass scanner. Each call to `next` skips whitespace and yields the
/// token starting at the cursor. On error the cursor has already moved past
/// the offending input, so iteration can simply continue.
pub struct Lexer<'a> {
    input_str: &'a str,
    input: Chars<'a>,
    line: usize,
    start: usize,
    current: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input_str: &'a str) -> Self {
        Self {
            input_str,
            input: input_str.chars(),
            line: 1,
            start: 0,
            current: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.clone().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.input.clone();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.input.next()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn get_lexeme(&self) -> &'a str {
        &self.input_str[self.start..self.current]
    }

    fn make_token(&self, class: TokenClass) -> Token {
        Token {
            lexeme: self.get_lexeme().to_string(),
            class,
            data_type: None,
            value: None,
            span: Span(self.start, self.current),
            line: self.line,
        }
    }

    fn make_literal(&self, class: TokenClass, literal: Literal) -> Token {
        Token {
            data_type: Some(literal.data_type()),
            value: Some(literal),
            ..self.make_token(class)
        }
    }

    fn make_error(&self, kind: LexerErrorKind) -> LexerError {
        let character = self.input_str[self.start..]
            .chars()
            .next()
            .unwrap_or_default();
        LexerError {
            character,
            position: self.start,
            line: self.line,
            kind,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }
    }

    fn number(&mut self) -> LexerResult {
        while let Some('0'..='9') = self.peek() {
            self.advance();
        }

        // `12.` without a fractional digit stays an integer; the dot is left
        // for the next token.
        if let (Some('.'), Some('0'..='9')) = (self.peek(), self.peek_next()) {
            self.advance();
            while let Some('0'..='9') = self.peek() {
                self.advance();
            }
            let float = self
                .get_lexeme()
                .parse::<f64>()
                .unwrap_or_else(|_| unreachable!());
            Ok(self.make_literal(TokenClass::FloatLiteral, Literal::Float(float)))
        } else {
            let int = self
                .get_lexeme()
                .parse::<BigInt>()
                .unwrap_or_else(|_| unreachable!());
            Ok(self.make_literal(TokenClass::IntegerLiteral, Literal::Integer(int)))
        }
    }

    fn char_literal(&mut self) -> LexerResult {
        match (self.peek(), self.peek_next()) {
            (Some(c), Some('\'')) if c != '\n' => {
                self.advance();
                self.advance();
                Ok(self.make_literal(TokenClass::CharLiteral, Literal::Char(c)))
            }
            _ => Err(self.make_error(LexerErrorKind::UnexpectedChar('\''))),
        }
    }

    fn identifier(&mut self) -> LexerResult {
        loop {
            match self.peek() {
                Some(c) if c == '_' || c.is_ascii_alphanumeric() => self.advance(),
                _ => break,
            };
        }

        match self.get_lexeme() {
            lexeme if is_keyword(lexeme) => Ok(self.make_token(TokenClass::Keyword)),
            "true" => Ok(self.make_literal(TokenClass::BooleanLiteral, Literal::Boolean(true))),
            "false" => Ok(self.make_literal(TokenClass::BooleanLiteral, Literal::Boolean(false))),
            _ => Ok(self.make_token(TokenClass::Identifier)),
        }
    }

    fn scan_token(&mut self, c: char) -> LexerResult {
        match c {
            '{' | '}' | '(' | ')' | ';' => Ok(self.make_token(TokenClass::Delimiter)),

            '<' => two_char_tok!(self, TokenClass::RelOp; '=' => TokenClass::RelOp),
            '>' => two_char_tok!(self, TokenClass::RelOp; '=' => TokenClass::RelOp),
            '=' => two_char_tok!(self, TokenClass::Assignment; '=' => TokenClass::EquOp),
            '!' => two_char_tok!(self, TokenClass::UnaryOp; '=' => TokenClass::EquOp),
            '+' | '-' => Ok(self.make_token(TokenClass::AddOp)),
            '*' | '/' | '%' => Ok(self.make_token(TokenClass::MulOp)),

            '\'' => self.char_literal(),

            c if c.is_ascii_digit() => self.number(),
            c if c == '_' || c.is_ascii_alphabetic() => self.identifier(),
            _ => Err(self.make_error(LexerErrorKind::UnexpectedChar(c))),
        }
    }
}

impl<'a> Lexer<'a> {
    /// Collects every token, stopping at the first lexical error.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexerError> {
        self.by_ref().collect()
    }

    pub fn next_token(&mut self) -> Option<LexerResult> {
        self.skip_whitespace();

        self.start = self.current;
        let c = self.advance()?;
        Some(self.scan_token(c))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexerResult;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
