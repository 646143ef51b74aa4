// ukr-words: Print the cardinal and ordinal wording of numbers.
//
// Reads one non-negative integer per line from stdin and prints
// `N<TAB>cardinal<TAB>ordinal`.
//
// Usage:
//   ukr-words

use std::io::{self, BufRead, Write};
use std::process;

use ukr_numbers::{Numbers, NumbersOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if ukr_numbers_cli::wants_help(&args) {
        println!("ukr-words: Print the cardinal and ordinal wording of numbers.");
        println!();
        println!("Usage: ukr-words");
        println!();
        println!("Reads one non-negative integer per line from stdin.");
        return;
    }

    let numbers = Numbers::new(NumbersOptions::default());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failed = false;

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                failed = true;
                break;
            }
        };
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<u64>() {
            Ok(n) => {
                let _ = writeln!(out, "{n}\t{}\t{}", numbers.to_number(n), numbers.to_ordinal(n));
            }
            Err(e) => {
                eprintln!("line {}: invalid number {token:?}: {e}", index + 1);
                failed = true;
            }
        }
    }

    let _ = out.flush();
    if failed {
        process::exit(1);
    }
}
