//! Diceware Passphrase Generator CLI
//!
//! Command-line front end over the generation library: pick a word
//! count and an entropy source, get a passphrase and its brute-force
//! time estimate. Manual die rolls are passed on the command line; the
//! binary never prompts.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};

use diceware::{
    DieValue, GenerationOutcome, GenerationRequest, GeneratorConfig, GeneratorSession,
    SourceSpec, WordList, DICE_PER_WORD,
};

#[derive(Parser)]
#[command(
    name = "diceware",
    version,
    about = "Generate Diceware passphrases from a choice of entropy sources"
)]
struct Args {
    /// Number of words in the passphrase (defaults to the configured value).
    #[arg(short, long)]
    words: Option<usize>,

    /// Where the die rolls come from.
    #[arg(short, long, value_enum, default_value_t = SourceArg::Secure)]
    source: SourceArg,

    /// Physical die rolls for --source dice, comma or space separated,
    /// five per word, in the order thrown.
    #[arg(short, long)]
    rolls: Option<String>,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SourceArg {
    /// Local OS-seeded CSPRNG.
    Secure,
    /// Remote true-random service.
    Remote,
    /// Manually entered physical die rolls.
    Dice,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging; diagnostics go to stderr so the passphrase on
    // stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match GeneratorConfig::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("invalid configuration: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => GeneratorConfig::default(),
    };

    let wordlist = match WordList::load() {
        Ok(list) => Arc::new(list),
        Err(err) => {
            eprintln!("word list is unusable: {err}");
            return ExitCode::FAILURE;
        }
    };

    let word_count = args.words.unwrap_or(config.passphrase.default_words);
    if word_count == 0 {
        eprintln!("word count must be at least 1");
        return ExitCode::FAILURE;
    }

    let source = match args.source {
        SourceArg::Secure => SourceSpec::Secure,
        SourceArg::Remote => SourceSpec::Remote,
        SourceArg::Dice => {
            let Some(raw) = args.rolls.as_deref() else {
                eprintln!(
                    "--source dice requires --rolls with {} values",
                    word_count * DICE_PER_WORD
                );
                return ExitCode::FAILURE;
            };
            match parse_rolls(raw) {
                Ok(rolls) => SourceSpec::Manual(rolls),
                Err(message) => {
                    eprintln!("{message}");
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    let mut session = GeneratorSession::new(wordlist, &config);
    let handle = session.start(GenerationRequest { word_count, source });

    // Ctrl-C requests cooperative cancellation of the in-flight
    // generation instead of tearing the process down mid-request.
    let canceller = handle.canceller();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            canceller.cancel();
        }
    });

    match handle.outcome().await {
        GenerationOutcome::Complete {
            passphrase,
            strength,
        } => {
            println!("{passphrase}");
            eprintln!("time to try every passphrase: {strength}");
            ExitCode::SUCCESS
        }
        GenerationOutcome::Failed(err) => {
            eprintln!("passphrase generation failed: {err}");
            ExitCode::FAILURE
        }
        // Cancellation is not a failure; exit with the conventional
        // interrupted status and no message.
        GenerationOutcome::Cancelled => ExitCode::from(130),
    }
}

/// Parses comma or whitespace separated die rolls.
fn parse_rolls(raw: &str) -> Result<Vec<DieValue>, String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let value: u8 = token
                .parse()
                .map_err(|_| format!("not a die value: {token:?}"))?;
            DieValue::new(value).ok_or_else(|| format!("die value {value} is not in 1..=6"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rolls_accepts_mixed_separators() {
        let rolls = parse_rolls("1,2 3\t4,5 6").unwrap();
        let faces: Vec<u8> = rolls.iter().map(|v| v.get()).collect();
        assert_eq!(faces, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_parse_rolls_rejects_out_of_range() {
        assert!(parse_rolls("1,2,9").is_err());
    }

    #[test]
    fn test_parse_rolls_rejects_garbage() {
        assert!(parse_rolls("1,two,3").is_err());
    }
}
