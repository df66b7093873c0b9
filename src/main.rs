use std::io::{self, Write};
use anyhow::Result;
use clap::Parser;
use tracing::info;
use algo::rule::GAME_OF_LIFE;
use algo::Universe;
use killzone_life::config::Config;
use killzone_life::{board, report};

fn main() -> Result<()> {
  init_tracing();

  let config = Config::parse();
  let grid = board::initial(&config)?;
  info!(size = grid.size(), living = grid.living_count(), rule = %GAME_OF_LIFE, "starting run");

  let stdout = io::stdout();
  let mut out = stdout.lock();
  write!(out, "{}", grid)?;

  let mut uni = Universe::new(grid);
  let state = killzone_life::run(&mut uni, &config, &mut out)?;

  let stats = uni.report();
  info!(generations = stats.generations, kills = stats.killzone_kills, "run finished");
  write!(out, "{}", report::summary(&stats, state, uni.grid().living_count()))?;
  out.flush()?;
  Ok(())
}

fn init_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();
}
