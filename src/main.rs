use clap::Parser;
use clexer::lexer::token::Token;
use clexer::lexer::LexerError;
use clexer::{analyze, Analysis, AnalysisError, ErrorPolicy, LexerConfig, Recording};
use colored::Colorize;
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path of input source file
    file: String,

    /// What to do on an unrecognized character
    #[arg(long, short, value_enum, default_value_t = ErrorPolicy::Lenient)]
    policy: ErrorPolicy,

    /// Only record identifiers in the symbol table
    #[arg(long)]
    identifiers_only: bool,

    /// Print the token stream before the symbol table
    #[arg(long, short)]
    tokens: bool,

    /// Do not print the symbol table
    #[arg(long)]
    no_table: bool,
}

fn report(text: &str, error: &LexerError) {
    let line_text = text.lines().nth(error.line - 1).unwrap_or_default();
    eprintln!(
        "{}",
        format!(
            "Error {}:{} (at {:?}):: {}\n    {}",
            error.line, error.position, error.character, error.kind, line_text
        )
        .red()
    );
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!(
            "{:>4}  {:<15} {}",
            token.line.to_string().dimmed(),
            token.class.to_string().blue(),
            token
        );
    }
}

fn print_analysis(cli: &Cli, analysis: &Analysis) {
    if cli.tokens {
        print_tokens(&analysis.tokens);
        println!();
    }
    if !cli.no_table {
        print!("{}", analysis.symbols.render());
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let path = Path::new(&cli.file);
    let text = fs::read_to_string(path)?;

    let config = LexerConfig {
        policy: cli.policy,
        recording: if cli.identifiers_only {
            Recording::IdentifiersOnly
        } else {
            Recording::AllTokens
        },
    };

    let result = analyze(&text, &config).map_err(anyhow::Error::from);

    let Ok(analysis) = result else {
        let err = result.unwrap_err().downcast::<AnalysisError>()?;
        print_analysis(&cli, &err.partial);
        report(&text, &err.error);
        std::process::exit(1);
    };

    for error in &analysis.errors {
        report(&text, error);
    }
    print_analysis(&cli, &analysis);

    Ok(())
}
