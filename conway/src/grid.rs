// grid.rs - Grid types and the Game of Life rule on a wrapping board

pub const GRID_SIZE: usize = 30;                      // Board is GRID_SIZE x GRID_SIZE
const BACK: usize = GRID_SIZE - 1;                    // -1 modulo GRID_SIZE

pub type TRow = [bool; GRID_SIZE];
pub type TGrid = [TRow; GRID_SIZE];

pub const EMPTY: TGrid = [[false; GRID_SIZE]; GRID_SIZE];

// Neighbour offsets, already reduced modulo GRID_SIZE so edges wrap
const NEIGHBOURS: [(usize, usize); 8] = [
    (BACK, BACK), (BACK, 0), (BACK, 1),
    (0, BACK),               (0, 1),
    (1, BACK),    (1, 0),    (1, 1),
];

/// Number of live cells among the eight neighbours of `(row, col)`.
/// Edges wrap around, so row 0 sees the last row and column 0 the last column.
pub fn live_neighbours(grid: &TGrid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOURS {
        if grid[(row + dr) % GRID_SIZE][(col + dc) % GRID_SIZE] { count += 1; }
    }
    count
}

pub fn next_state(alive: bool, count: u8) -> bool {
    match (alive, count) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Next generation of a single row, read from the `grid` snapshot.
pub fn next_row(grid: &TGrid, row: usize) -> TRow {
    let mut row_result = [false; GRID_SIZE];
    for (col, cell) in row_result.iter_mut().enumerate() {
        *cell = next_state(grid[row][col], live_neighbours(grid, row, col));
    }
    row_result
}

/// Computes the next generation. Every cell reads the same prior snapshot.
pub fn step(grid: &TGrid) -> TGrid {
    let mut next = EMPTY;
    for (row, next_row_cells) in next.iter_mut().enumerate() {
        *next_row_cells = next_row(grid, row);
    }
    next
}

/// Flips the cell at `(row, col)`. Returns `false` and leaves the grid
/// untouched when the coordinate is off the board.
pub fn toggle(grid: &mut TGrid, row: usize, col: usize) -> bool {
    match grid.get_mut(row).and_then(|cells| cells.get_mut(col)) {
        Some(cell) => { *cell = !*cell; true }
        None       => false,
    }
}

pub fn live_cells(grid: &TGrid) -> usize {
    grid.iter().map(|row| row.iter().filter(|&&alive| alive).count()).sum()
}

/// Coordinates of every live cell in row-major order.
pub fn alive(grid: &TGrid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (row, cells_in_row) in grid.iter().enumerate() {
        for (col, &is_alive) in cells_in_row.iter().enumerate() {
            if is_alive { cells.push((row, col)); }
        }
    }
    cells
}

/// Builds a grid with the listed cells alive. Off-board coordinates are skipped.
pub fn from_cells(cells: &[(usize, usize)]) -> TGrid {
    let mut grid = EMPTY;
    for &(row, col) in cells {
        if row < GRID_SIZE && col < GRID_SIZE { grid[row][col] = true; }
    }
    grid
}

/// Maps a fractional board position to `(row, col)` with `floor(coordinate * N)`.
/// `x` runs left to right and picks the column, `y` runs top to bottom and picks
/// the row. Positions outside `[0, 1)` map to nothing.
pub fn cell_at(x: f32, y: f32) -> Option<(usize, usize)> {
    let index = |coordinate: f32| {
        if !(0.0..1.0).contains(&coordinate) { return None; }
        let scaled = (coordinate * GRID_SIZE as f32).floor() as usize;
        Some(scaled.min(GRID_SIZE - 1))
    };
    Some((index(y)?, index(x)?))
}
