use std::mem;
use tracing::{debug, trace};
use crate::generation::advance_into;
use crate::grid::Grid;
use crate::histogram::KillHistogram;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum State {
  Running,
  /// No living cells remain. Terminal.
  Stopped,
}

/// Statistics of a run, as handed to the reporting side.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Report {
  pub start_population: usize,
  pub killzone_kills: u64,
  pub generations: u64,
  pub histogram: KillHistogram,
}

/// Drives a board generation by generation until extinction.
///
/// Two boards are kept and swapped after every pass; the back one only ever
/// holds scratch data.
pub struct Universe {
  grid: Grid,
  back: Grid,
  state: State,
  start_population: usize,
  killzone_kills: u64,
  generations: u64,
  histogram: KillHistogram,
}

impl Universe {
  pub fn new(grid: Grid) -> Self {
    let back = grid.clone();
    Self {
      start_population: grid.living_count(),
      grid,
      back,
      state: State::Running,
      killzone_kills: 0,
      generations: 0,
      histogram: KillHistogram::new(),
    }
  }

  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  pub fn state(&self) -> State {
    self.state
  }

  pub fn generations(&self) -> u64 {
    self.generations
  }

  /// Advances one generation and returns the number of cells killed in the
  /// killzone during it, or `None` if the run has already stopped.
  ///
  /// Extinction is only checked after advancing, so a board that starts
  /// empty still runs one generation.
  pub fn step(&mut self) -> Option<usize> {
    if self.state == State::Stopped {
      return None;
    }

    let killed = advance_into(&self.grid, &mut self.back);
    mem::swap(&mut self.grid, &mut self.back);

    self.histogram.merge(&killed);
    self.killzone_kills += killed.len() as u64;
    self.generations += 1;

    let living = self.grid.living_count();
    trace!(generation = self.generations, living, killed = killed.len(), "advanced");

    if living == 0 {
      debug!(generations = self.generations, kills = self.killzone_kills, "no cells are live");
      self.state = State::Stopped;
    }

    Some(killed.len())
  }

  /// `num_gen` is the maximum number of generations; stops early on
  /// extinction.
  pub fn simulate(&mut self, num_gen: u64) -> State {
    for _ in 0..num_gen {
      if self.step().is_none() {
        break;
      }
    }

    if self.state == State::Running {
      debug!(generations = self.generations, "generation cap reached");
    }
    self.state
  }

  /// Runs until no living cells remain.
  ///
  /// Never returns for a board that settles into a still life or oscillator
  /// outside of the killzone; use `simulate` to bound the run.
  pub fn run_to_extinction(&mut self) -> Report {
    while self.step().is_some() {}
    self.report()
  }

  pub fn report(&self) -> Report {
    Report {
      start_population: self.start_population,
      killzone_kills: self.killzone_kills,
      generations: self.generations,
      histogram: self.histogram.clone(),
    }
  }
}
