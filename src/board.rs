use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use algo::{pattern, Grid};
use crate::config::Config;
use crate::seed;

/// Builds the first generation: the pattern file if one was given, a random
/// board otherwise.
pub fn initial(config: &Config) -> Result<Grid> {
  config.validate()?;

  match &config.pattern {
    Some(path) => load(path, config.board_size),
    None => {
      let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
      };
      let grid = seed::generate(config.board_size, &mut rng)?;
      info!(seed = ?config.seed, living = grid.living_count(), "generated random board");
      Ok(grid)
    }
  }
}

pub fn load(path: &Path, size: usize) -> Result<Grid> {
  let src = fs::read_to_string(path)
    .with_context(|| format!("failed to read pattern {}", path.display()))?;
  let grid = pattern::read(src, size)?;
  info!(path = %path.display(), living = grid.living_count(), "loaded pattern");
  Ok(grid)
}
