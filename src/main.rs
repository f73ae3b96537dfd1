use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use std::fs;
use std::io;
use std::path::PathBuf;

use monkeylang::lexer::{format_tokens, tokens_to_json, Lexer};
use monkeylang::{repl, LexSession};

#[derive(Parser)]
#[command(name = "monkeylang")]
#[command(author, version, about = "Lexer for the Monkey programming language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TokenFormat {
    /// One token per line with its position
    #[value(name = "text")]
    Text,
    /// JSON array of tokens with positions and spans
    #[value(name = "json")]
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive REPL that prints the tokens of each line (default)
    Repl,

    /// Print the token stream of a Monkey source file
    Tokens {
        /// The source file to tokenize
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: TokenFormat,
    },

    /// Report illegal characters in a Monkey source file
    Check {
        /// The source file to check
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still takes precedence over the flag
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.verbose)),
    )
    .init();

    let result = match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => run_repl(),
        Commands::Tokens { input, format } => dump_tokens(input, format),
        Commands::Check { input } => check(input),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Default log filter when `RUST_LOG` is unset.
fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn run_repl() -> Result<()> {
    println!("{}", "Monkey Language REPL".blue().bold());
    println!("Type ':quit' or ':q' to exit, ':help' for help\n");

    repl::start(io::stdin().lock(), io::stdout().lock()).context("REPL I/O failed")
}

fn dump_tokens(input: PathBuf, format: TokenFormat) -> Result<()> {
    log::info!("Tokenizing {:?}", input);

    let source = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read source file: {:?}", input))?;
    let tokens = Lexer::new(&source).collect_tokens();

    match format {
        TokenFormat::Text => println!("{}", format_tokens(&tokens)),
        TokenFormat::Json => println!("{}", tokens_to_json(&tokens)?),
    }

    Ok(())
}

fn check(input: PathBuf) -> Result<()> {
    log::info!("Checking {:?}", input);

    let mut session = LexSession::new(&input)?;
    let tokens = session.tokenize();
    log::debug!("{} tokens", tokens.len());

    if session.has_errors() {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        session.emit_diagnostics(&mut writer.lock())?;
        anyhow::bail!(
            "found {} illegal character(s) in {}",
            session.error_count(),
            session.source_file()
        );
    }

    println!("{}: {} is lexically valid", "ok".green().bold(), session.source_file());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_log_filter() {
        assert_eq!(log_filter(false), "info");
        assert_eq!(log_filter(true), "debug");
    }

    #[test]
    fn test_verbose_flag_is_global() {
        let cli = Cli::try_parse_from(["monkeylang", "check", "a.monkey", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Check { .. })));

        let cli = Cli::try_parse_from(["monkeylang"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }
}
