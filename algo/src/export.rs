use itertools::Itertools;
use crate::grid::Grid;

const BORDER: char = '+';

/// Render a board as text, `X` for living cells and a space for dead ones,
/// surrounded by a border.
pub fn render(grid: &Grid) -> String {
  let edge = border(grid.size() + 2);

  let rows = grid.rows().map(|row| {
    let cells = row.iter().map(|cell| if cell.is_alive() { 'X' } else { ' ' }).collect::<String>();
    format!("{}{}{}", BORDER, cells, BORDER)
  });

  let mut output = std::iter::once(edge.clone())
    .chain(rows)
    .chain(std::iter::once(edge))
    .join("\n");
  output.push('\n');
  output
}

fn border(width: usize) -> String {
  std::iter::repeat(BORDER).take(width).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cell::Cell;
  use pretty_assertions::assert_eq;

  #[test]
  fn render_with_border() {
    let mut grid = Grid::new(7).unwrap();
    grid.set(0, 0, Cell::alive(0));
    grid.set(6, 6, Cell::alive(12));
    grid.set(3, 2, Cell::alive(1));

    assert_eq!(render(&grid), "
+++++++++
+X      +
+       +
+   X   +
+       +
+       +
+       +
+      X+
+++++++++
".trim_start());
    assert_eq!(grid.to_string(), render(&grid));
  }
}
