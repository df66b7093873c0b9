use std::path::PathBuf;
use clap::Parser;
use algo::rule::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use algo::Error;

/// Game of Life with aging cells and a central killzone, run until no cell
/// is left alive.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "killzone-life", version)]
pub struct Config {
  /// Side length of the square board, 7 to 1024.
  #[arg(short = 'b', long = "board-size", alias = "b", default_value_t = 15)]
  pub board_size: usize,

  /// Seed of the random initial board. Drawn from entropy when omitted.
  #[arg(long)]
  pub seed: Option<u64>,

  /// Give up after this many generations even if cells are still alive.
  #[arg(long)]
  pub max_generations: Option<u64>,

  /// Print the board after every generation.
  #[arg(long)]
  pub show_generations: bool,

  /// Text pattern to start from, `X` marks a living cell. A random board is
  /// generated when omitted.
  pub pattern: Option<PathBuf>,
}

impl Config {
  /// Checked before any board is built or read.
  pub fn validate(&self) -> algo::Result<()> {
    if self.board_size < MIN_BOARD_SIZE || self.board_size > MAX_BOARD_SIZE {
      return Err(Error::BoardSize { size: self.board_size });
    }
    Ok(())
  }
}
