//! A minimal front end showing the caller-driven contract: match tokens
//! against a known flag set, request parameters for the flags that take
//! one, and fall back to the rendered help message on user error.
//!
//! Run with: `cargo run --example frontend -- -v --output=out.txt input.txt`

use std::env;
use std::process::ExitCode;

use optargs::{Help, Lexer, Token};

fn help() -> Help<'static> {
    Help::new()
        .usage("frontend [OPTION]... [INPUT]...")
        .header("OPTIONS")
        .option("-h, --help", "Print this help message.")
        .option("-o, --output=FILE", "Write output to FILE.")
        .option("-v, --verbose", "Explain what is being done.")
}

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().skip(1).collect();
    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();

    let mut lexer = Lexer::new(&argv);

    let mut output = None;
    let mut verbose = false;
    let mut inputs = Vec::new();

    loop {
        let token = match lexer.next() {
            Ok(Some(token)) => token,
            Ok(None) => break,
            Err(error) => {
                eprintln!("frontend: {error}");
                return ExitCode::FAILURE;
            }
        };

        match token {
            Token::Short('h') | Token::Long("help") => {
                print!("{}", help());
                return ExitCode::SUCCESS;
            }
            Token::Short('o') | Token::Long("output") => match lexer.expect_parameter() {
                Ok(value) => output = Some(value),
                Err(error) => {
                    eprintln!("frontend: {error}");
                    eprint!("{}", help());
                    return ExitCode::FAILURE;
                }
            },
            Token::Short('v') | Token::Long("verbose") => verbose = true,
            Token::Positional(value) => inputs.push(value),
            other => {
                eprintln!("frontend: unrecognized option '{other}'");
                eprint!("{}", help());
                return ExitCode::FAILURE;
            }
        }
    }

    if verbose {
        eprintln!("frontend: writing {} input(s)", inputs.len());
    }

    println!("output = {output:?}");
    println!("inputs = {inputs:?}");

    ExitCode::SUCCESS
}
