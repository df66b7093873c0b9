pub mod cell;
pub mod error;
pub mod export;
pub mod generation;
pub mod grid;
pub mod histogram;
pub mod pattern;
pub mod rule;
pub mod universe;

pub use crate::cell::Cell;
pub use crate::error::{Error, Result};
pub use crate::grid::{Grid, Killzone};
pub use crate::histogram::KillHistogram;
pub use crate::universe::{Report, State, Universe};
