use std::fmt::{self, Display};
use itertools::Itertools;

/// Cells at or above this age die regardless of their neighbors.
pub const DEATH_AGE: u32 = 60;

/// Side length of the central killzone.
pub const KILLZONE_SIZE: usize = 3;

pub const MIN_BOARD_SIZE: usize = 7;
pub const MAX_BOARD_SIZE: usize = 1024;

/// Neighbor counts that cause a birth or allow survival, one bit per count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
  birth: NeighborMask,
  survival: NeighborMask,
}

pub(crate) type NeighborMask = u16;

/// The classic B3/S23 rule, the only one the engine runs.
pub const GAME_OF_LIFE: Rule = Rule {
  birth: 1 << 3,
  survival: 1 << 2 | 1 << 3,
};

fn in_mask(mask: NeighborMask, neighbors: u32) -> bool {
  neighbors < 9 && mask >> neighbors & 1 != 0
}

impl Rule {
  /// Whether a dead cell with `neighbors` living neighbors is born.
  pub fn births(&self, neighbors: u32) -> bool {
    in_mask(self.birth, neighbors)
  }

  /// Whether a living cell with `neighbors` living neighbors survives.
  pub fn survives(&self, neighbors: u32) -> bool {
    in_mask(self.survival, neighbors)
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let counts = |mask| (0..9).filter(|&n| in_mask(mask, n)).join("");
    write!(f, "B{}/S{}", counts(self.birth), counts(self.survival))
  }
}
