//! Packed integer form of cells, used only when a board crosses a storage or wire boundary.
//!
//! A cell is stored as two decimal digits:
//!
//! ```text
//!     XY
//!      ^- ones: 0-8 adjacent mines, or 9 when the cell is a mine
//!     ^-- tens: 0 hidden, 1 revealed, 2 flagged
//! ```

use ndarray::Array2;

use crate::*;

const MINE_UNIT: u8 = 9;

/// Packs a cell. A hand-built cell with an impossible count still encodes, to a code `decode` rejects.
pub fn encode(cell: Cell) -> u16 {
    let unit = if cell.has_mine {
        MINE_UNIT
    } else {
        cell.adjacent_count
    };
    10 * u16::from(cell.visibility.ordinal()) + u16::from(unit)
}

pub fn decode(code: i64) -> Result<Cell> {
    let invalid = GameError::DecodeError { code };
    let packed = u8::try_from(code).map_err(|_| invalid)?;
    let visibility = Visibility::from_ordinal(packed / 10).ok_or(invalid)?;
    let unit = packed % 10;

    let cell = if unit == MINE_UNIT {
        Cell::mine()
    } else {
        Cell::safe(unit)
    };
    Ok(cell.with_visibility(visibility))
}

/// Packs a board into rows of codes, top row first.
pub fn encode_board(board: &Board) -> Vec<Vec<u16>> {
    board
        .cells()
        .rows()
        .into_iter()
        .map(|row| row.iter().copied().map(encode).collect())
        .collect()
}

/// Rebuilds a board from rows of codes, checking them against the declared dimensions and mine count.
pub fn decode_board<R: AsRef<[i64]>>(
    width: Coord,
    height: Coord,
    mine_count: CellCount,
    rows: &[R],
) -> Result<Board> {
    if rows.len() != usize::from(height)
        || rows.iter().any(|row| row.as_ref().len() != usize::from(width))
    {
        return Err(GameError::InvalidBoardShape);
    }

    let cells = rows
        .iter()
        .flat_map(|row| row.as_ref().iter().copied())
        .map(decode)
        .collect::<Result<Vec<_>>>()?;
    let cells = Array2::from_shape_vec((usize::from(height), usize::from(width)), cells)
        .map_err(|_| GameError::InvalidBoardShape)?;

    Board::from_cells(cells, mine_count)
}
