use std::{
    fs::{read_to_string, write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use stalex::{
    display_error,
    errors::errors::CliError,
    lexer::{
        lexer::tokenize_lines,
        tokens::{Severity, Token},
    },
    render_tokens,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

#[derive(Parser)]
#[command(name = "stalex")]
#[command(version = "0.1.0")]
#[command(about = "Lexical analyzer for .sta sources", long_about = None)]
struct Cli {
    /// Source file
    #[arg(value_name = "INPUT", default_value = "code.sta")]
    input: PathBuf,

    /// Token listing to write
    #[arg(short, long, value_name = "FILE", default_value = "code.lex")]
    output: PathBuf,

    /// Print without ANSI colours
    #[arg(long)]
    no_color: bool,

    /// Only print tokens, do not write the listing
    #[arg(long)]
    stdout_only: bool,

    /// Print every diagnostic with its source line
    #[arg(long)]
    report: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_token(token: &Token, color: bool) {
    match token.kind.severity() {
        Severity::Error if color => println!("{}{}{}", RED, token, RESET),
        _ => println!("{}", token),
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let start = Instant::now();

    let source = read_to_string(&cli.input).map_err(|source| CliError::Read {
        path: cli.input.clone(),
        source,
    })?;

    let tokens = tokenize_lines(source.lines());
    info!(
        file = %cli.input.display(),
        tokens = tokens.len(),
        elapsed = ?start.elapsed(),
        "tokenized"
    );

    for token in &tokens {
        print_token(token, !cli.no_color);
    }

    if cli.report {
        for report in tokens
            .iter()
            .filter_map(|token| display_error(token, &cli.input, &source))
        {
            eprint!("{}", report);
        }
    }

    if !cli.stdout_only {
        write(&cli.output, render_tokens(&tokens)).map_err(|source| CliError::Write {
            path: cli.output.clone(),
            source,
        })?;
        info!(file = %cli.output.display(), "wrote token listing");
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
