//! Cursor movement for keyboard navigation.

use crate::games::tictactoe::Cell;
use crossterm::event::KeyCode;

/// Moves the cursor one cell in the direction of an arrow key.
///
/// The cursor stays put at board edges and for non-arrow keys. The
/// digit layout makes the arithmetic direct: left and right step by
/// one within a row, up and down step by three.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let digit = cursor.digit();
    let next = match key {
        KeyCode::Left if digit % 3 != 1 => digit - 1,
        KeyCode::Right if digit % 3 != 0 => digit + 1,
        KeyCode::Up if digit > 3 => digit - 3,
        KeyCode::Down if digit < 7 => digit + 3,
        _ => digit,
    };
    Cell::from_digit(next).unwrap_or(cursor)
}
