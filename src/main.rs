use anise::cli::{self, CliError, EvalOptions, EvalOutcome};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "anise")]
#[command(about = "anise - evaluate infix expressions over named numeric data arrays")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile and evaluate an expression against a JSON map of arrays
    Eval {
        /// The infix expression to evaluate
        expression: String,

        /// JSON object of arrays (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Treat trigonometric angles as degrees instead of radians
        #[arg(long)]
        degrees: bool,

        /// Expected tuple count of the output array
        #[arg(long)]
        tuples: Option<usize>,

        /// Only validate the expression, don't evaluate
        #[arg(long)]
        check_only: bool,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval {
            expression,
            input,
            degrees,
            tuples,
            check_only,
            pretty,
        } => run_eval(expression, input, degrees, tuples, check_only, pretty),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_eval(
    expression: String,
    input: Option<String>,
    degrees: bool,
    tuples: Option<usize>,
    check_only: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    let options = EvalOptions {
        expression,
        input,
        degrees,
        tuples,
        check_only,
    };

    match cli::execute_eval(&options)? {
        EvalOutcome::Checked { warnings } => {
            print_warnings(&warnings);
            println!("Expression is valid");
        }
        EvalOutcome::Evaluated { value, warnings } => {
            print_warnings(&warnings);
            let json = cli::value_to_json(&value);
            let rendered = if pretty {
                serde_json::to_string_pretty(&json)
            } else {
                serde_json::to_string(&json)
            }
            .map_err(CliError::Json)?;
            println!("{}", rendered);
        }
    }
    Ok(())
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("warning: {}", warning);
    }
}
