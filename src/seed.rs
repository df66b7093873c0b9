use rand::Rng;
use algo::{Cell, Grid};

/// Fills a new board with a random population of age 0 cells.
///
/// Between 40% and 55% of the area is drawn as placements, uniformly over
/// all cells, so repeated placements make the living count somewhat lower.
/// The killzone starts empty.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> algo::Result<Grid> {
  let mut grid = Grid::new(size)?;

  let area = size * size;
  let count = rng.gen_range(area * 40 / 100..=area * 55 / 100);
  for _ in 0..count {
    let loc = rng.gen_range(0..area);
    grid.set(loc % size, loc / size, Cell::alive(0));
  }

  for (x, y) in grid.killzone().coords() {
    grid.set(x, y, Cell::Dead);
  }

  Ok(grid)
}
