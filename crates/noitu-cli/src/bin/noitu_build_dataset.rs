// noitu-build-dataset: Build the word-chain dataset from a plain word list.
//
// Reads a word list (one word per line, e.g. Viet74K.txt), keeps the
// two-syllable words, drops duplicates and writes the JSON records
// {"word", "first_syllable", "last_syllable"} used by the engine.
//
// Usage:
//   noitu-build-dataset [OPTIONS] [INPUT]
//
// Options:
//   -o, --output PATH    Write the dataset to PATH instead of stdout
//   -h, --help           Print help
//
// With no INPUT the word list is read from stdin.

use std::io::{self, Read, Write};

use noitu_engine::dataset::{DatasetBuilder, to_json};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if noitu_cli::wants_help(&args) {
        println!("noitu-build-dataset: Build the word-chain dataset from a word list.");
        println!();
        println!("Usage: noitu-build-dataset [OPTIONS] [INPUT]");
        println!();
        println!("Reads one word per line from INPUT (or stdin) and writes JSON records.");
        println!();
        println!("Options:");
        println!("  -o, --output PATH    Write the dataset to PATH instead of stdout");
        println!("  -h, --help           Print this help");
        return;
    }

    let mut output: Option<String> = None;
    let mut input: Option<String> = None;
    let mut skip_next = false;
    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--output=") {
            output = Some(val.to_string());
        } else if arg == "-o" || arg == "--output" {
            if i + 1 < args.len() {
                output = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                noitu_cli::fatal(&format!("{arg} requires a value"));
            }
        } else if !arg.starts_with('-') {
            input = Some(arg.clone());
        }
    }

    noitu_cli::init_logging();

    let text = match &input {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| noitu_cli::fatal(&format!("failed to read {path}: {e}"))),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| noitu_cli::fatal(&format!("error reading stdin: {e}")));
            buf
        }
    };

    let mut builder = DatasetBuilder::new();
    builder.extend_lines(&text);
    let (entries, stats) = builder.finish();

    tracing::info!(
        lines = stats.lines,
        kept = stats.kept,
        wrong_length = stats.wrong_length,
        duplicates = stats.duplicates,
        blank = stats.blank,
        "dataset built"
    );
    eprintln!(
        "{} lines read, {} two-syllable words kept ({} wrong length, {} duplicates)",
        stats.lines, stats.kept, stats.wrong_length, stats.duplicates
    );

    let json = to_json(&entries)
        .unwrap_or_else(|e| noitu_cli::fatal(&format!("failed to encode dataset: {e}")));

    match &output {
        Some(path) => {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                        noitu_cli::fatal(&format!("failed to create {}: {e}", parent.display()))
                    });
                }
            }
            std::fs::write(path, json)
                .unwrap_or_else(|e| noitu_cli::fatal(&format!("failed to write {path}: {e}")));
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let _ = writeln!(out, "{json}");
        }
    }
}
