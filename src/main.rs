use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use calclang::Interpreter;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// calclang evaluates integer arithmetic with variables, and can draw the
/// parse tree of any expression.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calclang to read lines from a file instead of taking a single
    /// expression.
    #[arg(short, long)]
    file: bool,

    /// Skip the banner when starting the interactive prompt.
    #[arg(short, long)]
    quiet: bool,

    /// The expression to evaluate, or a path when `--file` is given. Starts an
    /// interactive session when omitted.
    contents: Option<String>,
}

const PROMPT: &str = "calc> ";

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let mut interpreter = Interpreter::new();

    match (args.contents, args.file) {
        (Some(path), true) => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            run_script(&mut interpreter, &script)
        },
        (Some(expression), false) => match interpreter.interpret(&expression) {
            Ok(output) => {
                print_output(&output);
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        },
        (None, true) => {
            eprintln!("--file requires a path.");
            ExitCode::FAILURE
        },
        (None, false) => {
            if let Err(e) = run_repl(&mut interpreter, args.quiet) {
                eprintln!("I/O error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        },
    }
}

/// Installs a stderr log subscriber, but only when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

/// Interprets every non-empty line of `script` in one session and stops at
/// the first error.
fn run_script(interpreter: &mut Interpreter, script: &str) -> ExitCode {
    for (number, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match interpreter.interpret(line) {
            Ok(output) => print_output(&output),
            Err(e) => {
                eprintln!("Error on line {}: {e}", number + 1);
                return ExitCode::FAILURE;
            },
        }
    }
    ExitCode::SUCCESS
}

fn run_repl(interpreter: &mut Interpreter, quiet: bool) -> io::Result<()> {
    if !quiet {
        print_banner();
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        if input == ":clear" {
            interpreter.reset();
            println!("Variables cleared.");
            continue;
        }
        if input == ":vars" {
            for (name, value) in interpreter.environment().bindings() {
                println!("{name} = {value}");
            }
            continue;
        }

        match interpreter.interpret(input) {
            Ok(output) => print_output(&output),
            Err(e) => println!("Error: {e}"),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Rendered trees already end with a newline; plain values do not.
fn print_output(output: &str) {
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}

fn print_banner() {
    println!("Calculator Language REPL");
    println!("========================");
    println!("Enter arithmetic expressions using integers and operators (+, -, *, /, %, ^)");
    println!("Supports parentheses for grouping");
    println!("Supports prefix factorial (!n) - e.g., !3 = 6");
    println!("Supports variables: assign with 'x = 5', use with 'x + 3'");
    println!("Use 'render <expression>' to see the AST structure");
    println!("Use ':vars' to list variables and ':clear' to forget them");
    println!("Type 'exit' or 'quit' to end the session");
    println!();
}
