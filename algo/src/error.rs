use thiserror::Error;
use crate::rule::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
  #[error(
    "board size must be within bounds of {min}-{max}, got {size}",
    min = MIN_BOARD_SIZE,
    max = MAX_BOARD_SIZE
  )]
  BoardSize { size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
