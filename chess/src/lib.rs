//! Board coordinates and the static HTML board markup built from them.

pub mod board_markup;
pub mod types;

pub use board_markup::{generate, write_board, BoardMarkup};
pub use types::{File, Rank, Shade, Square, SquareError};
