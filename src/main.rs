use std::{env, fs::read_to_string, process::exit, time::Instant};

use fusion_parser::{display_error, lexer::lexer::tokenize, parse, ParseOptions};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: fusion <file> [--tokens | --locations]");
        exit(1);
    }

    let file_path: &str = &args[1];
    let source = read_to_string(file_path).expect("Failed to read file!");

    if args.get(2).map(String::as_str) == Some("--tokens") {
        let start = Instant::now();

        match tokenize(&source) {
            Ok(tokens) => {
                for token in &tokens {
                    token.debug();
                }
                println!("Tokenized in {:?}", start.elapsed());
            }
            Err(error) => {
                display_error(&error, &source);
                exit(1);
            }
        }

        return;
    }

    let options = ParseOptions {
        add_location: args.get(2).map(String::as_str) == Some("--locations"),
    };

    let start = Instant::now();
    let tree = parse(&source, options);

    match tree {
        Ok(tree) => {
            println!("Parsed in {:?}", start.elapsed());
            println!("{}", pretty_print(format!("{:?}", tree)));
        }
        Err(error) => {
            display_error(&error, &source);
            exit(1);
        }
    }
}

fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent = 0;
    let mut ignore_next_space = false;

    for c in string.chars() {
        match c {
            '{' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
            }
            '}' | ')' | ']' => {
                indent -= 1;
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => result.push(c),
        }
    }

    result
}
