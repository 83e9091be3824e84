use crate::games::RandomSource;
use crate::log_warn;
use super::grid::GridBounds;
use super::occupancy::Occupancy;
use super::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementError {
    NoFreeCell,
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::NoFreeCell => write!(f, "no free cell left for food"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Picks uniformly among the cells inside `bounds` that are not `occupied`.
pub fn place_food<R: RandomSource + ?Sized>(
    bounds: &GridBounds,
    occupied: &Occupancy,
    rng: &mut R,
) -> Result<Cell, PlacementError> {
    let free_cells: Vec<Cell> = bounds
        .cells()
        .filter(|cell| !occupied.contains(*cell))
        .collect();

    if free_cells.is_empty() {
        log_warn!("Every cell of the {}x{} grid is occupied, food cannot be placed", bounds.side(), bounds.side());
        return Err(PlacementError::NoFreeCell);
    }

    Ok(free_cells[rng.pick_index(free_cells.len())])
}
