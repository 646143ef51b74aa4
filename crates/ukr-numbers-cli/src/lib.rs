// ukr-numbers-cli: shared utilities for CLI tools.

use std::process;

use tracing::debug;
use ukr_numbers::{InflectError, NumbersOptions};

/// One request line: a number, a sample word and optional grammeme hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub n: i64,
    pub sample: String,
    pub known: Vec<String>,
}

impl Request {
    /// Hints in the shape `convert_to_auto` takes; `None` when there are none.
    pub fn known(&self) -> Option<Vec<&str>> {
        if self.known.is_empty() {
            None
        } else {
            Some(self.known.iter().map(String::as_str).collect())
        }
    }
}

/// Parse `N SAMPLE [GRAMMEME...]`. Returns `Ok(None)` for blank lines and
/// `#` comments.
pub fn parse_request(line: &str) -> Result<Option<Request>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    let number = fields.next().unwrap_or_default();
    let n = number
        .parse::<i64>()
        .map_err(|e| format!("invalid number {number:?}: {e}"))?;
    let sample = fields
        .next()
        .ok_or_else(|| "missing sample word".to_string())?
        .to_string();
    let known = fields.map(str::to_string).collect();

    Ok(Some(Request { n, sample, known }))
}

/// Render a conversion result: the word, or `-` for "no such word".
pub fn format_result(result: &Result<Option<String>, InflectError>) -> Result<String, String> {
    match result {
        Ok(Some(word)) => Ok(word.clone()),
        Ok(None) => Ok("-".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Read options from a JSON file. Missing fields keep their defaults.
pub fn load_options(path: &str) -> Result<NumbersOptions, String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    let options: NumbersOptions =
        serde_json::from_str(&text).map_err(|e| format!("invalid config {path}: {e}"))?;
    debug!(path, ?options, "loaded options");
    Ok(options)
}

/// Parse `--config PATH`, `--graceful` and `--no-last` from command line
/// args. Flags override the config file.
///
/// Returns `(options, remaining_args)`.
pub fn parse_options(args: &[String]) -> Result<(NumbersOptions, Vec<String>), String> {
    let mut config = None;
    let mut graceful = false;
    let mut no_last = false;
    let mut remaining = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--config=") {
            config = Some(val.to_string());
        } else if arg == "--config" || arg == "-c" {
            let val = iter
                .next()
                .ok_or_else(|| format!("{arg} requires a value"))?;
            config = Some(val.clone());
        } else if arg == "--graceful" || arg == "-g" {
            graceful = true;
        } else if arg == "--no-last" {
            no_last = true;
        } else {
            remaining.push(arg.clone());
        }
    }

    let mut options = match config {
        Some(path) => load_options(&path)?,
        None => NumbersOptions::default(),
    };
    if graceful {
        options.graceful_failure = true;
    }
    if no_last {
        options.negative_one_is_last = false;
    }
    Ok((options, remaining))
}

/// Install a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
