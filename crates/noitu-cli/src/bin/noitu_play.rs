// noitu-play: Play the word-chain game against the engine on the terminal.
//
// Each line read from stdin is one move. The engine answers with a word that
// starts with the last syllable of yours; your next word must start with the
// last syllable of its answer. A broken chain or a rejected word costs a
// life. Typing `/skip` swaps the engine's word for a fresh one, up to three
// times. The game ends when the engine concedes or you run out of lives.
//
// Output lines:
//   > word      engine word to continue from
//   ! message   your move was not accepted
//   * message   game over
//
// With --json every turn prints one `{valid, next_word, message}` object
// instead, and nothing else is written to stdout.
//
// Usage:
//   noitu-play [-d DATASET] [OPTIONS]
//
// Options:
//   -d, --dataset PATH   Word-chain dataset (JSON)
//   -l, --lives N        Number of lives (default: 3)
//   --json               Print each engine outcome as a JSON response object
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use noitu_cli::session::{DEFAULT_LIVES, GameEnd, GameSession, Turn};
use noitu_core::outcome::{CONCEDE_MESSAGE, MoveResponse};

/// Input line that asks for a fresh word.
const SKIP_COMMAND: &str = "/skip";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dataset, args) = noitu_cli::parse_dataset_path(&args)
        .unwrap_or_else(|e| noitu_cli::fatal(&e.to_string()));

    if noitu_cli::wants_help(&args) {
        println!("noitu-play: Play the Vietnamese word-chain game.");
        println!();
        println!("Usage: noitu-play [-d DATASET] [OPTIONS]");
        println!();
        println!("Type one word per line, or {SKIP_COMMAND} for a fresh word.");
        println!("Empty line or EOF quits.");
        println!();
        println!("Options:");
        println!("  -d, --dataset PATH   Word-chain dataset (JSON)");
        println!("  -l, --lives N        Number of lives (default: {DEFAULT_LIVES})");
        println!("  --json               Print each engine outcome as a JSON response object");
        println!("  -h, --help           Print this help");
        return;
    }

    let mut lives = DEFAULT_LIVES;
    let mut json_output = false;
    let mut skip_next = false;
    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-l" || arg == "--lives" {
            if i + 1 < args.len() {
                lives = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| noitu_cli::fatal("invalid number for --lives"));
                skip_next = true;
            } else {
                noitu_cli::fatal("--lives requires a value");
            }
        } else if arg == "--json" {
            json_output = true;
        }
    }

    noitu_cli::init_logging();
    let engine = noitu_cli::load_engine(dataset.as_deref());
    if engine.is_degraded() {
        eprintln!("warning: no words loaded, every move will be rejected");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = GameSession::new(lives);

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
            break;
        }

        let turn = if word == SKIP_COMMAND {
            session.skip(&engine)
        } else {
            session.play(&engine, word)
        };

        if json_output {
            if let Some(response) = turn.response() {
                print_json(&mut out, &response);
            }
        } else {
            print_turn(&mut out, &turn);
        }

        match session.end() {
            Some(_) if json_output => break,
            Some(GameEnd::EngineConceded) => {
                let _ = writeln!(out, "* {CONCEDE_MESSAGE} Điểm: {}", session.score());
                break;
            }
            Some(GameEnd::OutOfLives) => {
                let _ = writeln!(out, "* Hết lượt! Điểm: {}", session.score());
                break;
            }
            None => {}
        }
        let _ = out.flush();
    }
}

fn print_turn(out: &mut impl Write, turn: &Turn) {
    let _ = match turn {
        Turn::Replied(reply) => writeln!(out, "> {reply}"),
        Turn::Skipped(Some(word)) => writeln!(out, "> {word}"),
        Turn::EngineConceded | Turn::Finished => Ok(()),
        other => {
            let message = other
                .response()
                .and_then(|r| r.message)
                .unwrap_or_default();
            let marker = if matches!(other, Turn::Skipped(None)) { '>' } else { '!' };
            writeln!(out, "{marker} {message}")
        }
    };
}

fn print_json(out: &mut impl Write, response: &MoveResponse) {
    match serde_json::to_string(response) {
        Ok(text) => {
            let _ = writeln!(out, "{text}");
        }
        Err(e) => noitu_cli::fatal(&format!("failed to encode response: {e}")),
    }
}
