use std::fmt::{self, Display};
use std::ops::RangeInclusive;
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::rule::{KILLZONE_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Square board of cells, stored row-major.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
  size: usize,
  cells: Vec<Cell>,
}

impl Grid {
  /// Creates an all-dead `size x size` board.
  pub fn new(size: usize) -> Result<Self> {
    if size < MIN_BOARD_SIZE || size > MAX_BOARD_SIZE {
      return Err(Error::BoardSize { size });
    }

    Ok(Self {
      size,
      cells: vec![Cell::Dead; size * size],
    })
  }

  pub fn size(&self) -> usize {
    self.size
  }

  pub fn get(&self, x: usize, y: usize) -> Cell {
    self.cells[self.index(x, y)]
  }

  pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
    let i = self.index(x, y);
    self.cells[i] = cell;
  }

  pub fn living_count(&self) -> usize {
    self.cells.iter().filter(|cell| cell.is_alive()).count()
  }

  pub fn is_extinct(&self) -> bool {
    !self.cells.iter().any(Cell::is_alive)
  }

  pub fn killzone(&self) -> Killzone {
    Killzone::for_size(self.size)
  }

  /// Rows from top to bottom.
  pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
    self.cells.chunks(self.size)
  }

  /// Every cell with its `(x, y)` coordinate, in row-major order.
  pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
    let size = self.size;
    self.cells.iter().enumerate().map(move |(i, &cell)| (i % size, i / size, cell))
  }

  fn index(&self, x: usize, y: usize) -> usize {
    assert!(
      x < self.size && y < self.size,
      "cell ({}, {}) outside of {}x{} board", x, y, self.size, self.size
    );
    y * self.size + x
  }
}

impl Display for Grid {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&crate::export::render(self))
  }
}

/// The central square where every living cell is killed each generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Killzone {
  /// Inclusive bounds, identical on both axes.
  lo: usize,
  hi: usize,
}

impl Killzone {
  pub fn for_size(size: usize) -> Self {
    let lo = size / 2 - KILLZONE_SIZE / 2;
    Self {
      lo,
      hi: lo + KILLZONE_SIZE - 1,
    }
  }

  pub fn contains(&self, x: usize, y: usize) -> bool {
    self.span().contains(&x) && self.span().contains(&y)
  }

  /// Coordinate range covered on each axis.
  pub fn span(&self) -> RangeInclusive<usize> {
    self.lo..=self.hi
  }

  pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> {
    let span = self.span();
    span.clone().flat_map(move |y| span.clone().map(move |x| (x, y)))
  }
}
