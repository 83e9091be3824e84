use super::types::Cell;

/// The playable square `[-grid_size/2, grid_size/2]` on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    grid_size: u32,
}

impl GridBounds {
    pub fn new(grid_size: u32) -> Self {
        Self { grid_size }
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn half_extent(&self) -> i32 {
        (self.grid_size / 2) as i32
    }

    pub fn side(&self) -> usize {
        2 * self.half_extent() as usize + 1
    }

    pub fn cell_count(&self) -> usize {
        self.side() * self.side()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        let half = self.half_extent();
        cell.x.abs() <= half && cell.y.abs() <= half
    }

    /// Every cell, column by column from the left edge, bottom to top within a
    /// column.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let half = self.half_extent();
        (-half..=half).flat_map(move |x| (-half..=half).map(move |y| Cell::new(x, y)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Maps cells to world positions for whoever draws the board. The simulation
/// itself never needs it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    cell_size: f32,
    origin: WorldPos,
}

impl GridLayout {
    pub fn new(cell_size: f32, origin: WorldPos) -> Self {
        Self { cell_size, origin }
    }

    /// Centre of the cell.
    pub fn cell_to_world(&self, cell: Cell) -> WorldPos {
        let half = self.cell_size / 2.0;
        WorldPos::new(
            self.origin.x + cell.x as f32 * self.cell_size + half,
            self.origin.y + cell.y as f32 * self.cell_size + half,
        )
    }

    pub fn world_to_cell(&self, pos: WorldPos) -> Cell {
        Cell::new(
            ((pos.x - self.origin.x) / self.cell_size).floor() as i32,
            ((pos.y - self.origin.y) / self.cell_size).floor() as i32,
        )
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(1.0, WorldPos::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_centre_symmetric() {
        let bounds = GridBounds::new(6);
        assert_eq!(bounds.half_extent(), 3);
        assert_eq!(bounds.cell_count(), 49);
        assert!(bounds.contains(Cell::new(3, -3)));
        assert!(!bounds.contains(Cell::new(4, 0)));
        assert!(!bounds.contains(Cell::new(0, -4)));
    }

    #[test]
    fn test_odd_grid_size_rounds_down() {
        let bounds = GridBounds::new(7);
        assert_eq!(bounds.half_extent(), 3);
        assert_eq!(bounds.cell_count(), 49);
    }

    #[test]
    fn test_cells_enumerates_every_cell_once() {
        let bounds = GridBounds::new(2);
        let cells: Vec<Cell> = bounds.cells().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], Cell::new(-1, -1));
        assert_eq!(cells[1], Cell::new(-1, 0));
        assert_eq!(cells[8], Cell::new(1, 1));
        assert!(cells.iter().all(|c| bounds.contains(*c)));
    }

    #[test]
    fn test_cell_to_world_round_trips() {
        let layout = GridLayout::new(0.64, WorldPos::new(-1.5, 2.25));
        for cell in GridBounds::new(10).cells() {
            assert_eq!(layout.world_to_cell(layout.cell_to_world(cell)), cell);
        }
    }

    #[test]
    fn test_world_to_cell_is_idempotent_on_cell_axis() {
        let layout = GridLayout::new(1.0, WorldPos::default());
        let samples = [
            WorldPos::new(0.0, 0.0),
            WorldPos::new(0.99, -0.01),
            WorldPos::new(-2.5, 3.75),
            WorldPos::new(4.2, -4.2),
        ];
        for pos in samples {
            let cell = layout.world_to_cell(pos);
            assert_eq!(layout.world_to_cell(layout.cell_to_world(cell)), cell);
        }
        assert_eq!(layout.world_to_cell(WorldPos::new(-0.01, 0.5)), Cell::new(-1, 0));
    }

    #[test]
    fn test_cell_to_world_returns_centre() {
        let layout = GridLayout::new(2.0, WorldPos::default());
        assert_eq!(layout.cell_to_world(Cell::new(0, 0)), WorldPos::new(1.0, 1.0));
        assert_eq!(layout.cell_to_world(Cell::new(-1, 2)), WorldPos::new(-1.0, 5.0));
    }
}
