use std::sync::OnceLock;
use regex::Regex;
use crate::cell::Cell;
use crate::error::Result;
use crate::grid::Grid;

const ALIVE: char = 'X';
const DEAD: char = '.';

fn line_break() -> &'static Regex {
  static LINE_BREAK: OnceLock<Regex> = OnceLock::new();
  LINE_BREAK.get_or_init(|| Regex::new(r"\r?\n").unwrap())
}

/// Read a board from a plain text pattern.
///
/// Each `X` is a living cell of age 0; any other character is a dead cell.
/// Rows and columns that do not fit on a `size x size` board are dropped,
/// and a short pattern leaves the rest of the board dead.
pub fn read(src: impl AsRef<str>, size: usize) -> Result<Grid> {
  let mut grid = Grid::new(size)?;

  for (y, line) in line_break().split(src.as_ref()).take(size).enumerate() {
    for (x, c) in line.chars().take(size).enumerate() {
      if c == ALIVE {
        grid.set(x, y, Cell::alive(0));
      }
    }
  }

  Ok(grid)
}

/// Write a board as a plain text pattern readable by [`read`].
///
/// Ages are not kept. Trailing dead cells of each row and trailing empty
/// rows are left out.
pub fn write(grid: &Grid) -> String {
  let mut lines = grid
    .rows()
    .map(|row| {
      let len = row.iter().rposition(Cell::is_alive).map_or(0, |i| i + 1);
      row[..len]
        .iter()
        .map(|cell| if cell.is_alive() { ALIVE } else { DEAD })
        .collect::<String>()
    })
    .collect::<Vec<_>>();

  while lines.last().map_or(false, String::is_empty) {
    lines.pop();
  }

  let mut output = String::new();
  for line in lines {
    output.push_str(&line);
    output.push('\n');
  }
  output
}
