// noitu-check: Check whether words are in the word-chain lexicon.
//
// Reads words from the command line, or from stdin (one per line), and
// reports whether each is a playable word. Output format:
//   C: word    (in the lexicon)
//   W: word    (not in the lexicon)
//
// Usage:
//   noitu-check [-d DATASET] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dataset PATH   Word-chain dataset (JSON)
//   -r, --replies        Also list the legal engine replies for correct words
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use noitu_core::normalize::normalize;
use noitu_engine::selector::MoveSelector;
use noitu_engine::{ChainHistory, WordChainEngine};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dataset, args) = noitu_cli::parse_dataset_path(&args)
        .unwrap_or_else(|e| noitu_cli::fatal(&e.to_string()));

    if noitu_cli::wants_help(&args) {
        println!("noitu-check: Check words against the word-chain lexicon.");
        println!();
        println!("Usage: noitu-check [-d DATASET] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, checks each word.");
        println!("Otherwise reads words from stdin (one per line). Prints:");
        println!("  C: word    (in the lexicon)");
        println!("  W: word    (not in the lexicon)");
        println!();
        println!("Options:");
        println!("  -d, --dataset PATH   Word-chain dataset (JSON)");
        println!("  -r, --replies        Also list legal engine replies");
        println!("  -h, --help           Print this help");
        return;
    }

    let show_replies = args.iter().any(|a| a == "-r" || a == "--replies");
    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    noitu_cli::init_logging();
    let engine = noitu_cli::load_engine(dataset.as_deref());
    if engine.is_degraded() {
        noitu_cli::fatal("no words loaded, nothing to check against");
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            check_word(word, &engine, show_replies, &mut out);
        }
    } else {
        for word in &words {
            check_word(word, &engine, show_replies, &mut out);
        }
    }
}

fn check_word(word: &str, engine: &WordChainEngine, show_replies: bool, out: &mut impl Write) {
    let normalized = normalize(word);
    if !engine.is_valid_word(&normalized) {
        let _ = writeln!(out, "W: {word}");
        return;
    }
    let _ = writeln!(out, "C: {word}");
    if show_replies {
        let lexicon = engine.snapshot();
        let history = ChainHistory::new();
        let mut replies: Vec<&str> = MoveSelector::new(&lexicon)
            .legal_replies(&normalized, &history)
            .into_iter()
            .map(|e| e.word.as_str())
            .collect();
        replies.sort_unstable();
        for reply in replies {
            let _ = writeln!(out, "R: {reply}");
        }
    }
}
