use std::{env, fs::File, process};

use minicc::lexer::scanner::tokenize;

/// C-like sample mixing ASCII and full-width punctuation.
const SAMPLE_PROGRAM: &str = "\
int main(){
int count=5;
int count_ = 5；
if （count == 5）｛
count_ = 0;
｝
else {
count_ = 1+2+(3+4)+5;
}
while (count_+count) {
count = count-1;
｝
}";

fn main() {
    let args: Vec<String> = env::args().collect();

    let tokens = match args.get(1) {
        Some(path) => {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(error) => {
                    println!("Failed to open {path}: {error}");
                    process::exit(1);
                }
            };
            tokenize(file)
        }
        None => tokenize(SAMPLE_PROGRAM.as_bytes()),
    };

    let tokens = match tokens {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("Lex error: {error}");
            process::exit(1);
        }
    };

    for token in &tokens {
        println!("{token}");
    }
}
