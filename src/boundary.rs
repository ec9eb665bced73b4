//! Boundary adapter around [`Board::drop_disk`].
//!
//! Callers on the far side of a language boundary cannot receive a Rust
//! unwind. Everything here runs the drop under [`catch_unwind`] and reports
//! the result as a value: a [`MoveOutcome`] for Rust callers that want the
//! reason, or a plain `bool` from [`apply_safely`].

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::game::{Board, Disk, MoveError};

/// Why a move did not happen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("unexpected fault while applying move: {message}")]
    UnexpectedFault { message: String },
}

/// Result of one drop attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied { row: usize },
    Rejected(Rejection),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }

    /// Landing row of an applied move
    pub fn row(&self) -> Option<usize> {
        match self {
            MoveOutcome::Applied { row } => Some(*row),
            MoveOutcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            MoveOutcome::Applied { .. } => None,
            MoveOutcome::Rejected(reason) => Some(reason),
        }
    }
}

impl From<Result<usize, MoveError>> for MoveOutcome {
    fn from(result: Result<usize, MoveError>) -> Self {
        match result {
            Ok(row) => MoveOutcome::Applied { row },
            Err(err) => MoveOutcome::Rejected(err.into()),
        }
    }
}

/// Apply a drop and report the full outcome. Never unwinds.
pub fn apply_with_outcome(board: &mut Board, disk: Disk, column: isize) -> MoveOutcome {
    contain(|| board.drop_disk(disk, column))
}

/// Apply a drop, returning `true` only if the disk was placed.
///
/// The reason for a rejection is dropped here; query the board when it is
/// needed. A rejected move leaves the board unchanged.
pub fn apply_safely(board: &mut Board, disk: Disk, column: isize) -> bool {
    apply_with_outcome(board, disk, column).is_applied()
}

fn contain<F>(op: F) -> MoveOutcome
where
    F: FnOnce() -> Result<usize, MoveError>,
{
    let outcome = match catch_unwind(AssertUnwindSafe(op)) {
        Ok(result) => MoveOutcome::from(result),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            discard_payload(payload);
            MoveOutcome::Rejected(Rejection::UnexpectedFault { message })
        }
    };

    match &outcome {
        MoveOutcome::Applied { row } => tracing::trace!(row, "move applied"),
        MoveOutcome::Rejected(reason @ Rejection::Move(_)) => {
            tracing::debug!(%reason, "move rejected")
        }
        MoveOutcome::Rejected(reason) => tracing::warn!(%reason, "move faulted"),
    }
    outcome
}

/// Drop a panic payload without letting a panicking `Drop` escape.
fn discard_payload(payload: Box<dyn Any + Send>) {
    if let Err(nested) = catch_unwind(AssertUnwindSafe(move || drop(payload))) {
        std::mem::forget(nested);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
