//! Core board mechanics: disk identities, cells, and the gravity board with
//! its single mutating operation.

mod board;
mod disk;

pub use board::{Board, BoardError, MoveError, MAX_CELLS, STANDARD_HEIGHT, STANDARD_WIDTH};
pub use disk::{Cell, Disk, EMPTY_RAW};
