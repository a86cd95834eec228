use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use formula_syntax::lexer::Token;
use formula_syntax::{Formula, FormulaFormatError, FormulaLimits, FormulaOptions};
use serde::Serialize;

#[derive(Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(about = "Validate infix arithmetic formulas and print their canonical form.")]
struct Args {
    /// Formulas to check.
    formulas: Vec<String>,

    /// Read one formula per non-empty line from standard input.
    #[arg(long)]
    stdin: bool,

    /// Print the token listing of each accepted formula.
    #[arg(long)]
    tokens: bool,

    /// Print the variables referenced by each accepted formula.
    #[arg(long)]
    variables: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Maximum number of tokens per formula.
    #[arg(long)]
    max_tokens: Option<usize>,

    /// Maximum formula length in bytes.
    #[arg(long)]
    max_input_bytes: Option<usize>,
}

#[derive(Debug, Serialize)]
struct JsonError<'a> {
    message: String,
    rule: Option<&'static str>,
    index: Option<usize>,
    found: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    input: &'a str,
    canonical: Option<&'a str>,
    variables: Option<Vec<&'a str>>,
    tokens: Option<&'a [Token]>,
    error: Option<JsonError<'a>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let options = build_options(&args);

    let mut inputs = args.formulas.clone();
    if args.stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read formula from stdin")?;
            if !line.trim().is_empty() {
                inputs.push(line);
            }
        }
    }
    if inputs.is_empty() {
        bail!("no formulas given; pass them as arguments or use --stdin");
    }

    let mut failures = 0usize;
    for input in &inputs {
        let result = Formula::with_options(input, options);
        if result.is_err() {
            failures += 1;
        }
        match args.format {
            OutputFormat::Text => print_text(&args, input, &result),
            OutputFormat::Json => print_json(&args, input, &result)?,
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn build_options(args: &Args) -> FormulaOptions {
    let defaults = FormulaLimits::default();
    FormulaOptions {
        limits: FormulaLimits {
            max_input_bytes: args.max_input_bytes.unwrap_or(defaults.max_input_bytes),
            max_tokens: args.max_tokens.unwrap_or(defaults.max_tokens),
        },
    }
}

fn print_text(args: &Args, input: &str, result: &Result<Formula, FormulaFormatError>) {
    match result {
        Ok(formula) => {
            println!("ok    {input:?} => {formula}");
            if args.variables {
                let names: Vec<&str> = formula.variables().iter().map(String::as_str).collect();
                println!(
                    "  variables: {}",
                    if names.is_empty() {
                        "(none)".to_string()
                    } else {
                        names.join(", ")
                    }
                );
            }
            if args.tokens {
                for (index, token) in formula.tokens().iter().enumerate() {
                    println!(
                        "  {index:>3} {:<16} {:?} @{}..{}",
                        format!("{:?}", token.kind),
                        token.lexeme,
                        token.span.start.value(),
                        token.span.end.value()
                    );
                }
            }
        }
        Err(error) => println!("error {input:?}: {error}"),
    }
}

fn print_json(
    args: &Args,
    input: &str,
    result: &Result<Formula, FormulaFormatError>,
) -> Result<()> {
    let report = match result {
        Ok(formula) => JsonReport {
            input,
            canonical: Some(formula.canonical_string()),
            variables: args
                .variables
                .then(|| formula.variables().iter().map(String::as_str).collect()),
            tokens: args.tokens.then(|| formula.tokens()),
            error: None,
        },
        Err(error) => JsonReport {
            input,
            canonical: None,
            variables: None,
            tokens: None,
            error: Some(JsonError {
                message: error.to_string(),
                rule: error.rule().map(|rule| rule.name()),
                index: error.index(),
                found: error.found(),
            }),
        },
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
