use std::io::{self, Write};
use algo::{State, Universe};
use crate::config::Config;

pub mod board;
pub mod config;
pub mod report;
pub mod seed;

/// Drives `uni` to extinction, or to `config.max_generations` when set,
/// printing every generation to `out` if asked to.
pub fn run(uni: &mut Universe, config: &Config, out: &mut impl Write) -> io::Result<State> {
  while uni.state() == State::Running {
    if config.max_generations.map_or(false, |max| uni.generations() >= max) {
      break;
    }

    uni.step();
    if config.show_generations {
      write!(out, "{}", uni.grid())?;
    }
  }

  Ok(uni.state())
}
