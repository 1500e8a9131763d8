use std::{env, fs::read_to_string, path::Path, process, time::Instant};

use log::{error, info};
use tran::{lexer::lexer::tokenize, parser::parser::parse, render_diagnostic};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <file.tran>", args.first().map_or("tran", String::as_str));
        process::exit(2);
    }

    let file_path = &args[1];
    let file_name = Path::new(file_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file_path.as_str());

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            error!("Failed to read {}: {}", file_path, err);
            process::exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(diagnostic) => {
            eprint!("{}", render_diagnostic(&diagnostic, &source, file_name));
            process::exit(1);
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(diagnostic) => {
            eprint!("{}", render_diagnostic(&diagnostic, &source, file_name));
            process::exit(1);
        }
    };

    info!("Parsed in {:?}", parse_start.elapsed());
    info!("Total time: {:?}", start.elapsed());

    print!("{}", program);
}
