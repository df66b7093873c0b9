use crate::cell::Cell;
use crate::grid::Grid;
use crate::rule::{DEATH_AGE, GAME_OF_LIFE};

/// Living cells around a position, excluding the position itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Neighborhood {
  pub count: u32,
  /// Oldest age among the living neighbors, 0 if there are none.
  pub max_age: u32,
}

/// Result of advancing a board by one generation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Generation {
  pub grid: Grid,
  /// Ages of the cells killed in the killzone, in row-major order.
  pub killed: Vec<u32>,
}

/// Counts the living cells in the 3x3 block around `(x, y)`.
///
/// The board does not wrap: positions outside of it are absent.
pub fn neighbor_info(grid: &Grid, x: usize, y: usize) -> Neighborhood {
  let last = grid.size() - 1;
  let mut hood = Neighborhood::default();

  for ny in y.saturating_sub(1)..=(y + 1).min(last) {
    for nx in x.saturating_sub(1)..=(x + 1).min(last) {
      if nx == x && ny == y {
        continue;
      }
      if let Cell::Alive { age } = grid.get(nx, ny) {
        hood.count += 1;
        hood.max_age = hood.max_age.max(age);
      }
    }
  }

  hood
}

/// Computes the next generation of `current` into a fresh board.
pub fn advance(current: &Grid) -> Generation {
  let mut grid = current.clone();
  let killed = advance_into(current, &mut grid);
  Generation { grid, killed }
}

/// Computes the next generation of `current` into `next`, overwriting every
/// cell of it, and returns the ages of the cells killed in the killzone.
///
/// Every decision reads `current` only, so `next` must be a separate buffer.
pub(crate) fn advance_into(current: &Grid, next: &mut Grid) -> Vec<u32> {
  assert_eq!(current.size(), next.size(), "generation buffers differ in size");

  let killzone = current.killzone();
  let mut killed = vec![];

  for (x, y, cell) in current.cells() {
    let Neighborhood { count, max_age } = neighbor_info(current, x, y);

    let next_cell = match cell {
      Cell::Alive { age } => {
        if killzone.contains(x, y) {
          killed.push(age);
          Cell::Dead
        } else if GAME_OF_LIFE.survives(count) && age < DEATH_AGE {
          Cell::alive(age + 1)
        } else {
          Cell::Dead
        }
      }
      // births land in `next`, so the killzone only sees them a generation later
      Cell::Dead if GAME_OF_LIFE.births(count) => Cell::alive(max_age + 1),
      Cell::Dead => Cell::Dead,
    };

    next.set(x, y, next_cell);
  }

  killed
}
