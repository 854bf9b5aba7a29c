use std::fs;

use calctree::{
    ast::print_tree, ast_build, build_stages, evaluate_expression,
    interpreter::evaluator::core::evaluate,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calctree evaluates arithmetic expressions and shows the syntax tree as it
/// is built, one token at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calctree to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints the syntax tree of the expression.
    #[arg(short, long)]
    tree: bool,

    /// Prints the syntax tree obtained after each token.
    #[arg(short, long)]
    stages: bool,

    /// Logs parser activity to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn print_stages(expression: &str) {
    let stages = build_stages(expression);
    println!("{} tokens, {} stages", stages.token_count(), stages.len());

    for (index, stage) in stages.iter().enumerate() {
        println!("stage {index}:");
        print!("{}", print_tree(stage, 1));
        if let Ok(value) = evaluate(stage) {
            println!("  = {value}");
        }
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };
    let expression = script.trim();

    if args.stages {
        print_stages(expression);
    }

    if args.tree {
        match ast_build(expression) {
            Ok(ast) => print!("{}", print_tree(Some(&ast), 0)),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }

    match evaluate_expression(expression) {
        Ok(value) => println!("{expression} = {value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
