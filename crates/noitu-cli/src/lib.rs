// noitu-cli: shared utilities for CLI tools.

pub mod session;

use std::path::PathBuf;
use std::process;

use noitu_engine::{DatasetSource, WordChainEngine};
use tracing_subscriber::EnvFilter;

/// Dataset file name looked up in every search directory.
const DATASET_FILE: &str = "word_chain_dataset.json";

/// Environment variable pointing at a dataset file or its directory.
const DATASET_ENV: &str = "NOITU_DATASET";

/// Install the stderr log subscriber.
///
/// Verbosity follows `RUST_LOG` and defaults to `warn`, so stdout carries
/// only tool output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Find the word-chain dataset and create an engine over it.
///
/// Search order:
/// 1. `dataset_path` argument (if provided)
/// 2. `NOITU_DATASET` environment variable (file, or directory containing it)
/// 3. `~/.noitu/word_chain_dataset.json`
/// 4. `/usr/share/noitu/word_chain_dataset.json`
/// 5. `./data/word_chain_dataset.json`
///
/// If no file is found the engine starts with an empty lexicon and a warning
/// is logged; every move is then rejected as degraded.
pub fn load_engine(dataset_path: Option<&str>) -> WordChainEngine {
    let candidates = build_search_paths(dataset_path);

    match candidates.iter().find(|p| p.is_file()) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading word-chain dataset");
            WordChainEngine::from_source(DatasetSource::File(path.clone()))
        }
        None => {
            tracing::warn!(
                "could not find {} in any of the search paths:\n{}",
                DATASET_FILE,
                candidates
                    .iter()
                    .map(|p| format!("  - {}", p.display()))
                    .collect::<Vec<_>>()
                    .join("\n")
            );
            WordChainEngine::empty()
        }
    }
}

/// Build the list of dataset files to try, most specific first.
fn build_search_paths(dataset_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dataset_path {
        paths.push(PathBuf::from(p));
    }

    // 2. NOITU_DATASET environment variable
    if let Ok(env_path) = std::env::var(DATASET_ENV) {
        paths.push(PathBuf::from(&env_path));
        paths.push(PathBuf::from(&env_path).join(DATASET_FILE));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".noitu").join(DATASET_FILE));
    }

    // 4. System path
    paths.push(PathBuf::from("/usr/share/noitu").join(DATASET_FILE));

    // 5. Local development checkout
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("data").join(DATASET_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Problems with the shared command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    #[error("{flag} needs the path of a word-chain dataset (JSON)")]
    MissingDatasetPath { flag: String },
}

/// Split a `-d PATH`, `--dataset PATH` or `--dataset=PATH` flag out of `args`.
///
/// Returns the dataset path (the last one wins) and the remaining arguments.
pub fn parse_dataset_path(args: &[String]) -> Result<(Option<String>, Vec<String>), ArgError> {
    let mut dataset_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--dataset=") {
            if val.is_empty() {
                return Err(ArgError::MissingDatasetPath {
                    flag: "--dataset=".to_string(),
                });
            }
            dataset_path = Some(val.to_string());
        } else if arg == "--dataset" || arg == "-d" {
            let val = iter.next().ok_or_else(|| ArgError::MissingDatasetPath {
                flag: arg.clone(),
            })?;
            dataset_path = Some(val.clone());
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((dataset_path, remaining))
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
