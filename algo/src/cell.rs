/// State of one board position.
///
/// The age only exists while the cell is alive, so a dead cell can never be
/// asked for a stale one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
  Dead,
  Alive {
    /// Number of generations survived, or inherited at birth.
    age: u32,
  },
}

impl Default for Cell {
  fn default() -> Self {
    Cell::Dead
  }
}

impl Cell {
  pub fn alive(age: u32) -> Self {
    Cell::Alive { age }
  }

  pub fn is_alive(&self) -> bool {
    matches!(self, Cell::Alive { .. })
  }

  /// `None` for a dead cell.
  pub fn age(&self) -> Option<u32> {
    match *self {
      Cell::Alive { age } => Some(age),
      Cell::Dead => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dead_cell_has_no_age() {
    assert_eq!(Cell::default(), Cell::Dead);
    assert!(!Cell::Dead.is_alive());
    assert_eq!(Cell::Dead.age(), None);
  }

  #[test]
  fn living_cell_keeps_age() {
    let cell = Cell::alive(7);
    assert!(cell.is_alive());
    assert_eq!(cell.age(), Some(7));
  }
}
