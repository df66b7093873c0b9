use std::fs;
use algo::{pattern, Cell, Grid, State, Universe};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn r_pentomino(size: usize, ox: usize, oy: usize) -> Grid {
  let src = fs::read_to_string("tests/fixtures/r_pentomino.txt").unwrap();
  let shape = pattern::read(src, 7).unwrap();
  let mut grid = Grid::new(size).unwrap();
  for (x, y, cell) in shape.cells().filter(|(_, _, c)| c.is_alive()) {
    grid.set(x + ox, y + oy, cell);
  }
  grid
}

#[test]
fn r_pentomino_into_killzone() {
  let report = Universe::new(r_pentomino(32, 14, 14)).run_to_extinction();

  assert_eq!(report.start_population, 5);
  assert_eq!(report.generations, 61);
  assert_eq!(report.killzone_kills, 3);
  assert_eq!(report.histogram.iter().collect::<Vec<_>>(), vec![(0, 2), (3, 1)]);
}

#[test]
fn r_pentomino_in_corner() {
  let report = Universe::new(r_pentomino(15, 0, 0)).run_to_extinction();

  assert_eq!(report.start_population, 5);
  assert_eq!(report.generations, 5);
  assert_eq!(report.killzone_kills, 0);
  assert!(report.histogram.is_empty());
}

#[test]
fn random_runs_conserve_kills() {
  let mut rng = StdRng::seed_from_u64(42);

  for &size in &[7, 9, 15, 24] {
    for _ in 0..10 {
      let mut grid = Grid::new(size).unwrap();
      for y in 0..size {
        for x in 0..size {
          if rng.gen_bool(0.5) {
            grid.set(x, y, Cell::alive(0));
          }
        }
      }
      let start = grid.living_count();

      let mut uni = Universe::new(grid);
      let mut kills = 0;
      while uni.generations() < 500 {
        let before = uni.grid().clone();
        let zone = before.killzone();
        let occupied = zone.coords().filter(|&(x, y)| before.get(x, y).is_alive()).count();

        match uni.step() {
          Some(n) => {
            assert_eq!(n, occupied);
            kills += n as u64;
          }
          None => break,
        }

        // occupants are killed; anything alive there now was just born
        for (x, y) in zone.coords() {
          let after = uni.grid().get(x, y);
          if before.get(x, y).is_alive() {
            assert_eq!(after, Cell::Dead);
          } else if let Some(age) = after.age() {
            assert!(age >= 1);
          }
        }
      }
      assert_eq!(uni.state(), State::Stopped);

      let report = uni.report();
      assert_eq!(report.start_population, start);
      assert_eq!(report.killzone_kills, kills);
      assert_eq!(report.histogram.total(), report.killzone_kills);
    }
  }
}
