//! # Gravity Four
//!
//! Move-application core for a gravity-drop board game in the style of
//! Connect Four: disks dropped into a column fall to the lowest free cell.
//!
//! ## Modules
//!
//! - [`game`]: Disk identities, cells and the [`Board`](game::Board) with its
//!   single mutating operation, [`drop_disk`](game::Board::drop_disk)
//! - [`boundary`]: Adapter that applies a drop without ever unwinding,
//!   reporting a [`MoveOutcome`](boundary::MoveOutcome) or a plain `bool`
//! - [`ffi`]: C ABI over an opaque board handle
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//!
//! Turn order and win detection are left to whatever game layer sits on top.

pub mod boundary;
pub mod config;
pub mod error;
pub mod ffi;
pub mod game;
