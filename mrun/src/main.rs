#[macro_use]
extern crate clap;

use clap::Arg;
use std::io::{self, BufRead};
use std::process;

use mrun::{launch, load_lines, Mode};

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the program file to simulate")
                .index(1),
        )
        .arg(
            Arg::with_name("mode")
                .short("m")
                .long("mode")
                .takes_value(true)
                .value_name("MODE")
                .help("Execution mode: 1 = step by step, 2 = run to end"),
        )
        .get_matches();

    let (path, mode_token) = match (matches.value_of("INPUT"), matches.value_of("mode")) {
        (Some(path), Some(mode)) => (path.to_string(), mode.to_string()),
        _ => match prompt() {
            Ok(values) => values,
            Err(_) => {
                println!("Error: Invalid Mode.\nExiting...");
                process::exit(1);
            }
        },
    };

    let mode = match mode_token.parse::<i32>().ok().and_then(Mode::from_number) {
        Some(mode) => mode,
        None => {
            println!("Error: Invalid Mode.\nExiting...");
            process::exit(1);
        }
    };

    let lines = match load_lines(&path) {
        Ok(lines) => lines,
        Err(error) => {
            println!("Error: {}", error);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = launch(lines, mode, &mut stdin.lock(), &mut stdout.lock());

    process::exit(if result.is_ok() { 0 } else { 1 });
}

/// Interactive fallback: the banner plus a combined path-and-mode prompt,
/// read as two whitespace-separated tokens.
fn prompt() -> io::Result<(String, String)> {
    println!("\nMIPS Simulator\n");
    println!("Program to simulate execution in MIPS Assembly language!");
    println!("Two modes are available:\n");
    println!("1. Step by Step Mode - View state after each instruction");
    println!("2. Execution Mode - View state after end of execution\n");
    println!("Enter the relative path of the input file and the mode number:");

    let stdin = io::stdin();
    let mut tokens: Vec<String> = Vec::new();
    let mut line = String::new();
    while tokens.len() < 2 {
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            ));
        }
        tokens.extend(line.split_whitespace().map(str::to_string));
    }

    Ok((tokens.remove(0), tokens.remove(0)))
}
