use std::{env, fs::File, process};

use minicc::lexer::scanner::tokenize;
use minicc::parser::grammar::parse;
use minicc::tree::printer;

/// Expression parsed when no input file is given.
const SAMPLE_EXPRESSION: &str = "(1+2+(3+4))+5";

fn main() {
    let args: Vec<String> = env::args().collect();

    let tokens = match args.get(1) {
        Some(path) => {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(error) => {
                    // Input-stream failures report on stdout, not stderr.
                    println!("Failed to open {path}: {error}");
                    process::exit(1);
                }
            };
            tokenize(file)
        }
        None => tokenize(SAMPLE_EXPRESSION.as_bytes()),
    };

    let tokens = match tokens {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("Lex error: {error}");
            process::exit(1);
        }
    };

    let tree = match parse(tokens) {
        Ok(tree) => tree,
        Err(error) => {
            eprintln!("Parse error: {error}");
            process::exit(1);
        }
    };

    printer::print(&tree);
}
