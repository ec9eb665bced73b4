//! # C ABI
//!
//! C-compatible entry points over an opaque [`Board`] handle.
//!
//! ## Lifecycle
//!
//! 1.  **Instantiation**: `gravity_board_new` returns an owned handle, or `NULL`
//!     when the dimensions are rejected.
//! 2.  **Moves**: `gravity_board_drop_disk_succeeded` applies one drop and reports
//!     `true`/`false`. It is the only function that mutates the board.
//! 3.  **Inspection**: width, height, column heights and raw cell bytes.
//! 4.  **Cleanup**: `gravity_board_free` releases the handle.
//!
//! ## Safety
//!
//! Unlike a fail-fast binding, nothing here panics across the boundary: a
//! `NULL` handle, an unknown disk byte or an out-of-range index produces the
//! documented sentinel instead. Callers **must** still ensure that non-null
//! pointers were returned by `gravity_board_new`, have not been freed, and are
//! not used from two threads at once.
//!
//! ## Exported API
//!
//! * `gravity_board_new`
//! * `gravity_board_free`
//! * `gravity_board_width`
//! * `gravity_board_height`
//! * `gravity_board_column_height`
//! * `gravity_board_cell`
//! * `gravity_board_drop_disk_succeeded`

use std::os::raw::c_int;

use crate::boundary::apply_safely;
use crate::game::{Board, Disk};

/// Creates a new empty board. Returns `NULL` if the dimensions are invalid.
#[no_mangle]
pub extern "C" fn gravity_board_new(width: usize, height: usize) -> *mut Board {
    match Board::new(width, height) {
        Ok(board) => Box::into_raw(Box::new(board)),
        Err(err) => {
            tracing::debug!(%err, "refusing to create board");
            std::ptr::null_mut()
        }
    }
}

/// Frees a board created by `gravity_board_new`.
///
/// # Safety
///
/// The caller must ensure that the pointer is null or was allocated by
/// `gravity_board_new` and has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn gravity_board_free(ptr: *mut Board) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Returns the board width, or `0` for a null handle.
///
/// # Safety
///
/// The caller must ensure that the pointer is null or valid.
#[no_mangle]
pub unsafe extern "C" fn gravity_board_width(ptr: *const Board) -> usize {
    ptr.as_ref().map_or(0, Board::width)
}

/// Returns the board height, or `0` for a null handle.
///
/// # Safety
///
/// The caller must ensure that the pointer is null or valid.
#[no_mangle]
pub unsafe extern "C" fn gravity_board_height(ptr: *const Board) -> usize {
    ptr.as_ref().map_or(0, Board::height)
}

/// Returns the number of disks in `column`, or `-1` for a null handle or a
/// column outside the board.
///
/// # Safety
///
/// The caller must ensure that the pointer is null or valid.
#[no_mangle]
pub unsafe extern "C" fn gravity_board_column_height(ptr: *const Board, column: c_int) -> c_int {
    let Some(board) = ptr.as_ref() else {
        return -1;
    };
    usize::try_from(column)
        .ok()
        .and_then(|col| board.column_height(col))
        .and_then(|filled| c_int::try_from(filled).ok())
        .unwrap_or(-1)
}

/// Returns the raw byte for the cell at (`column`, `row`), row 0 being the
/// bottom. Empty cells are `' '`; `0` means a null handle or a position
/// outside the board.
///
/// # Safety
///
/// The caller must ensure that the pointer is null or valid.
#[no_mangle]
pub unsafe extern "C" fn gravity_board_cell(ptr: *const Board, column: c_int, row: c_int) -> u8 {
    let Some(board) = ptr.as_ref() else {
        return 0;
    };
    match (usize::try_from(column), usize::try_from(row)) {
        (Ok(col), Ok(row)) => board.cell(col, row).map_or(0, |cell| cell.to_raw()),
        _ => 0,
    }
}

/// Drops `disk` into `column`. Returns `true` if the disk was placed and
/// `false` otherwise, leaving the board unchanged.
///
/// `disk` is the raw byte of a disk (`'R'` or `'B'`); any other byte is
/// rejected. A null handle is rejected.
///
/// # Safety
///
/// The caller must ensure that the pointer is null or valid, and that no
/// other thread is using the same board.
#[no_mangle]
pub unsafe extern "C" fn gravity_board_drop_disk_succeeded(
    ptr: *mut Board,
    disk: u8,
    column: c_int,
) -> bool {
    let Some(board) = ptr.as_mut() else {
        tracing::debug!("drop requested on a null board");
        return false;
    };
    let Some(disk) = Disk::from_raw(disk) else {
        tracing::debug!(disk, "drop requested with an unknown disk byte");
        return false;
    };
    apply_safely(board, disk, column as isize)
}
