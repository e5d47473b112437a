use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Rectangular grid of cells, `height` rows by `width` columns, plus its declared mine count.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Lays mines at the given coordinates and fills in adjacent counts. Duplicate coordinates count once.
    pub fn from_mine_coords(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default((height, width).to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= height || coords.1 >= width {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let mines = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        let mines = CellCount::try_from(mines).unwrap_or(CellCount::MAX);
        let config = GameConfig::new(width, height, mines)?;

        Ok(Self::from_mine_mask(config, &mine_mask))
    }

    /// Builds the board for `config` from a mask already holding exactly `config.mines` mines.
    pub(crate) fn from_mine_mask(config: GameConfig, mine_mask: &Array2<bool>) -> Self {
        let mut cells: Array2<Cell> = Array2::default(mine_mask.raw_dim());

        for ((row, col), &is_mine) in mine_mask.indexed_iter() {
            if !is_mine {
                continue;
            }
            cells[[row, col]].has_mine = true;
            // dimensions fit in `Coord`, checked by `GameConfig`
            let coords = (row as Coord, col as Coord);
            for pos in mine_mask.iter_neighbors(coords) {
                if !mine_mask[pos.to_nd_index()] {
                    cells[pos.to_nd_index()].adjacent_count += 1;
                }
            }
        }

        Self {
            cells,
            mine_count: config.mines,
        }
    }

    /// Adopts an already decoded grid, rejecting it when the mines do not add up.
    pub fn from_cells(cells: Array2<Cell>, mine_count: CellCount) -> Result<Self> {
        let (rows, cols) = cells.dim();
        let height = Coord::try_from(rows).map_err(|_| GameError::InvalidBoardShape)?;
        let width = Coord::try_from(cols).map_err(|_| GameError::InvalidBoardShape)?;
        GameConfig::new(width, height, mine_count)?;

        let actual = cells.iter().filter(|cell| cell.has_mine).count();
        let actual = CellCount::try_from(actual).unwrap_or(CellCount::MAX);
        if actual != mine_count {
            return Err(GameError::MineCountMismatch {
                expected: mine_count,
                actual,
            });
        }

        Ok(Self { cells, mine_count })
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.width(), self.height(), self.mine_count)
    }

    pub fn width(&self) -> Coord {
        self.cells.ncols() as Coord
    }

    pub fn height(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn size(&self) -> Coord2 {
        (self.height(), self.width())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.width(), self.height())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        let revealed = self
            .cells
            .iter()
            .filter(|cell| !cell.has_mine && cell.is_revealed())
            .count();
        CellCount::try_from(revealed).unwrap_or(CellCount::MAX)
    }

    pub fn has_revealed_mine(&self) -> bool {
        self.cells.iter().any(|cell| cell.has_mine && cell.is_revealed())
    }

    pub fn flagged_count(&self) -> CellCount {
        let flagged = self.cells.iter().filter(|cell| cell.is_flagged()).count();
        CellCount::try_from(flagged).unwrap_or(CellCount::MAX)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (height, width) = self.size();
        if coords.0 < height && coords.1 < width {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        neighbors(coords.0, coords.1, self.height(), self.width())
    }

    /// Coordinates of every mine, row-major.
    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.has_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub(crate) fn set_visibility(&mut self, coords: Coord2, visibility: Visibility) {
        self.cells[coords.to_nd_index()].visibility = visibility;
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
