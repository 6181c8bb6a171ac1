use std::fmt;

use ordermap::OrderMap;

use crate::lexer::token::{DataType, Literal, SymbolType, Token, TokenClass};

/// Every entry lives in the single flat table.
pub const GLOBAL_SCOPE: &str = "Global";

const HEADERS: [(&str, usize); 6] = [
    ("Lexeme", 15),
    ("Token Class", 15),
    ("Symbol Type", 15),
    ("Data Type", 10),
    ("Value", 10),
    ("Scope", 10),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTableEntry {
    pub lexeme: String,
    pub class: TokenClass,
    pub symbol_type: SymbolType,
    pub data_type: Option<DataType>,
    pub value: Option<Literal>,
    /// Line of the most recent occurrence.
    pub line: usize,
    pub occurrences: usize,
}

impl SymbolTableEntry {
    fn from_token(token: &Token) -> Self {
        Self {
            lexeme: token.lexeme.clone(),
            class: token.class,
            symbol_type: token.class.symbol_type(),
            data_type: token.data_type,
            value: token.value.clone(),
            line: token.line,
            occurrences: 1,
        }
    }

    pub fn scope(&self) -> &'static str {
        GLOBAL_SCOPE
    }
}

/// Lexeme-keyed table. Iteration and rendering follow first insertion; a
/// lexeme seen again keeps its position but takes the newer attributes.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    entries: OrderMap<String, SymbolTableEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, token: &Token) {
        match self.entries.get_mut(&token.lexeme) {
            Some(entry) => {
                let occurrences = entry.occurrences + 1;
                *entry = SymbolTableEntry {
                    occurrences,
                    ..SymbolTableEntry::from_token(token)
                };
            }
            None => {
                self.entries
                    .insert(token.lexeme.clone(), SymbolTableEntry::from_token(token));
            }
        }
    }

    pub fn lookup(&self, lexeme: &str) -> Option<&SymbolTableEntry> {
        self.entries.get(lexeme)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolTableEntry> {
        self.entries.values()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (header, width) in HEADERS {
            out.push_str(&format!("{header:<width$}"));
        }
        out.push('\n');
        out.push_str(&"-".repeat(HEADERS.iter().map(|(_, w)| w).sum()));
        out.push('\n');

        for entry in self.iter() {
            let data_type = entry.data_type.map(|t| t.to_string()).unwrap_or_default();
            let value = entry.value.as_ref().map(|v| v.to_string()).unwrap_or_default();
            let cells = [
                entry.lexeme.clone(),
                entry.class.to_string(),
                entry.symbol_type.to_string(),
                data_type,
                value,
                entry.scope().to_string(),
            ];
            for (cell, (_, width)) in cells.iter().zip(HEADERS) {
                out.push_str(&format!("{cell:<width$}"));
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
