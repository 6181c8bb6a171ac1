pub mod driver;
pub mod lexer;
pub mod symbol_table;

pub use driver::{Analysis, AnalysisError, Driver, ErrorPolicy, LexerConfig, Recording};

/// Scans `input` once, producing its tokens and symbol table.
pub fn analyze(input: &str, config: &LexerConfig) -> Result<Analysis, AnalysisError> {
    Driver::new(*config).run(input)
}
