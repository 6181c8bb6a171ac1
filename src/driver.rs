use log::{debug, info, warn};
use thiserror::Error;

use crate::lexer::token::{DataType, Token, TokenClass};
use crate::lexer::{declared_type, Lexer, LexerError};
use crate::symbol_table::SymbolTable;

/// What to do when the scanner meets input it cannot classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ErrorPolicy {
    /// Report the error and resume at the next character.
    #[default]
    Lenient,
    /// Stop at the first error.
    Strict,
}

/// Which tokens end up in the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recording {
    #[default]
    AllTokens,
    IdentifiersOnly,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LexerConfig {
    pub policy: ErrorPolicy,
    pub recording: Recording,
}

#[derive(Debug, Default, Clone)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    /// Errors skipped over in lenient mode.
    pub errors: Vec<LexerError>,
}

#[derive(Error, Debug)]
#[error("analysis aborted: {error}")]
pub struct AnalysisError {
    pub error: LexerError,
    /// Everything produced before the failing character.
    pub partial: Analysis,
}

/// Gives a freshly declared identifier the type of the type keyword before it.
///
/// Only identifiers consume the pending type; other tokens pass it through
/// untouched, so in `int main ( ) { x` it is `x` that ends up as `int`.
pub fn annotate(mut token: Token, pending: Option<DataType>) -> (Token, Option<DataType>) {
    match token.class {
        TokenClass::Keyword => {
            let pending = declared_type(&token.lexeme).or(pending);
            (token, pending)
        }
        TokenClass::Identifier => {
            token.data_type = pending;
            (token, None)
        }
        _ => (token, pending),
    }
}

pub struct Driver {
    config: LexerConfig,
}

impl Driver {
    pub fn new(config: LexerConfig) -> Self {
        Self { config }
    }

    fn should_record(&self, token: &Token) -> bool {
        match self.config.recording {
            Recording::AllTokens => true,
            Recording::IdentifiersOnly => token.class == TokenClass::Identifier,
        }
    }

    pub fn run(&self, input: &str) -> Result<Analysis, AnalysisError> {
        let mut analysis = Analysis::default();
        let mut pending = None;

        for result in Lexer::new(input) {
            match result {
                Ok(token) => {
                    let (token, next) = annotate(token, pending);
                    pending = next;
                    debug!("token {token} at {}..{}", token.span.0, token.span.1);
                    if self.should_record(&token) {
                        analysis.symbols.record(&token);
                    }
                    analysis.tokens.push(token);
                }
                Err(error) => match self.config.policy {
                    ErrorPolicy::Lenient => {
                        warn!("{error}");
                        analysis.errors.push(error);
                    }
                    ErrorPolicy::Strict => {
                        return Err(AnalysisError {
                            error,
                            partial: analysis,
                        });
                    }
                },
            }
        }

        info!(
            "scanned {} tokens, {} symbols, {} errors",
            analysis.tokens.len(),
            analysis.symbols.len(),
            analysis.errors.len()
        );
        Ok(analysis)
    }
}
