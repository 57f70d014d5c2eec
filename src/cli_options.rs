//! Process command-line options.
//!
//! Everything here is settled once, before the terminal is switched to the game screen.
//! When no difficulty is given on the command line, the player is asked for one on stdin.

use clap::Parser;
use log::{debug, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::{Difficulty, GameConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Sokoban in the terminal, on freshly generated levels")]
pub struct Cli {
    /// Difficulty: 1/easy (60s), 2/normal (30s) or 3/hard (15s). Asked interactively if omitted
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Level width, walls included
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i32).range(3..=40))]
    pub width: i32,

    /// Level height, walls included
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i32).range(3..=40))]
    pub height: i32,

    /// Number of goals, and boxes, per level
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..))]
    pub goals: u16,

    /// Seed for reproducible levels
    #[arg(long)]
    pub seed: Option<u64>,

    /// File receiving the log output
    #[arg(long, default_value = "sokogen.log")]
    pub log_file: PathBuf,

    /// Print one generated level as JSON and exit
    #[arg(long)]
    pub dump_level: bool,
}

impl Cli {
    pub fn to_config(&self, difficulty: Difficulty) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            goals: self.goals as usize,
            difficulty,
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

/// Uses `--difficulty` when given, otherwise prompts on `input`.
pub fn resolve_difficulty<R: BufRead, W: Write>(
    arg: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> io::Result<Difficulty> {
    if let Some(choice) = arg {
        return choose_difficulty(choice, output);
    }

    writeln!(output, "Choose difficulty: Easy (1), Normal (2), Hard (3)")?;
    write!(output, "Enter your choice (1-3): ")?;
    output.flush()?;

    let mut choice = String::new();
    input.read_line(&mut choice)?;
    choose_difficulty(&choice, output)
}

fn choose_difficulty<W: Write>(choice: &str, output: &mut W) -> io::Result<Difficulty> {
    match Difficulty::from_choice(choice) {
        Ok(difficulty) => {
            debug!("difficulty {:?}", difficulty);
            Ok(difficulty)
        }
        Err(err) => {
            warn!("{}, defaulting to Easy", err);
            writeln!(output, "Invalid choice, defaulting to Easy.")?;
            Ok(Difficulty::Easy)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    fn prompt(stdin: &str) -> (Difficulty, String) {
        let mut input = stdin.as_bytes();
        let mut output = Vec::new();
        let difficulty = resolve_difficulty(None, &mut input, &mut output).unwrap();
        (difficulty, String::from_utf8(output).unwrap())
    }

    #[test]
    fn prompt_choice_three_is_hard() {
        let (difficulty, output) = prompt("3\n");

        assert_eq!(difficulty, Difficulty::Hard);
        assert_eq!(difficulty.time_budget(), Duration::from_secs(15));
        assert!(output.starts_with("Choose difficulty"));
        assert!(!output.contains("Invalid"));
    }

    #[test]
    fn prompt_bad_choice_defaults_to_easy_with_warning() {
        let (difficulty, output) = prompt("9\n");

        assert_eq!(difficulty, Difficulty::Easy);
        assert_eq!(difficulty.time_budget(), Duration::from_secs(60));
        assert!(output.contains("Invalid choice, defaulting to Easy."));
    }

    #[test]
    fn empty_stdin_defaults_to_easy() {
        let (difficulty, _) = prompt("");
        assert_eq!(difficulty, Difficulty::Easy);
    }

    #[test]
    fn flag_skips_the_prompt() {
        let mut input = "3\n".as_bytes();
        let mut output = Vec::new();

        let difficulty = resolve_difficulty(Some("normal"), &mut input, &mut output).unwrap();

        assert_eq!(difficulty, Difficulty::Normal);
        assert!(output.is_empty());
    }

    #[test]
    fn cli_values_flow_into_config() {
        let cli = Cli::parse_from(["sokogen", "--width", "12", "--goals", "4", "--seed", "7"]);
        let config = cli.to_config(Difficulty::Hard);

        assert_eq!(config.width, 12);
        assert_eq!(config.height, 10);
        assert_eq!(config.goals, 4);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.tick_rate, 60);
    }

    #[test]
    fn zero_goals_are_refused() {
        assert!(Cli::try_parse_from(["sokogen", "--goals", "0"]).is_err());
    }
}
