// ukr-inflect: Render numbers as Ukrainian words agreeing with a sample.
//
// Reads lines of the form `N SAMPLE [GRAMMEME...]` from stdin and prints one
// word per line. Cardinal "last" (`-1` with a cardinal sample) prints `-`.
// Failed lines are reported on stderr with their line number; the exit code
// is 1 if any line failed.
//
// Usage:
//   ukr-inflect [--graceful] [--no-last] [--config PATH]
//
// Options:
//   -g, --graceful        Print the digits instead of failing on bad samples
//       --no-last         Reject -1 instead of treating it as "last"
//   -c, --config PATH     JSON file with engine options
//   -h, --help            Print help

use std::io::{self, BufRead, Write};
use std::process;

use ukr_numbers::Numbers;
use ukr_numbers_cli::{fatal, format_result, init_logging, parse_options, parse_request};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if ukr_numbers_cli::wants_help(&args) {
        println!("ukr-inflect: Render numbers as Ukrainian words agreeing with a sample.");
        println!();
        println!("Usage: ukr-inflect [--graceful] [--no-last] [--config PATH]");
        println!();
        println!("Reads `N SAMPLE [GRAMMEME...]` lines from stdin, e.g.");
        println!("  3 тридцятому");
        println!("  5 третій femn datv");
        println!();
        println!("Options:");
        println!("  -g, --graceful        Print the digits instead of failing on bad samples");
        println!("      --no-last         Reject -1 instead of treating it as \"last\"");
        println!("  -c, --config PATH     JSON file with engine options");
        println!("  -h, --help            Print this help");
        return;
    }

    init_logging();

    let (options, rest) = parse_options(&args).unwrap_or_else(|e| fatal(&e));
    if let Some(arg) = rest.first() {
        fatal(&format!("unexpected argument: {arg}"));
    }

    let numbers = Numbers::new(options);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failed = false;

    for (index, line) in stdin.lock().lines().enumerate() {
        let line_no = index + 1;
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                failed = true;
                break;
            }
        };

        let request = match parse_request(&line) {
            Ok(Some(request)) => request,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("line {line_no}: {e}");
                failed = true;
                continue;
            }
        };

        let known = request.known();
        let result = numbers.convert_to_auto(request.n, &request.sample, known.as_deref());
        match format_result(&result) {
            Ok(word) => {
                let _ = writeln!(out, "{word}");
            }
            Err(e) => {
                eprintln!("line {line_no}: {e}");
                failed = true;
            }
        }
    }

    let _ = out.flush();
    if failed {
        process::exit(1);
    }
}
