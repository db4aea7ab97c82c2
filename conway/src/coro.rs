// coro.rs - Step evaluation with one cooperative task per row
//
// Every row task reads the same shared snapshot, so results do not depend on
// the order in which the scheduler interleaves them.

use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::ConwayError;
use crate::grid::{self, TGrid, TRow, EMPTY, GRID_SIZE};

/// How a [`crate::Session`] computes the next generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluatorKind {
    /// Plain loop over the board via [`grid::step`].
    #[default]
    Sequential,
    /// One task per row on a current-thread runtime, see [`RowEvaluator`].
    RowTasks,
}

impl FromStr for EvaluatorKind {
    type Err = ConwayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "row-tasks"  => Ok(Self::RowTasks),
            other        => Err(ConwayError::UnknownEvaluator(other.to_owned())),
        }
    }
}

/// Row coroutine: computes one row and yields between cells.
async fn process_row(row_index: usize, snapshot: Arc<TGrid>) -> (usize, TRow) {
    let mut row_result = [false; GRID_SIZE];
    for (col, cell) in row_result.iter_mut().enumerate() {
        let count = grid::live_neighbours(&snapshot, row_index, col);
        *cell = grid::next_state(snapshot[row_index][col], count);

        tokio::task::yield_now().await;  // Cooperative yielding
    }
    (row_index, row_result)  // Return (row_id, completed_row)
}

/// Spawns every row task at once and assembles the rows by index.
pub async fn step_rows(grid: &TGrid) -> Result<TGrid, ConwayError> {
    let snapshot = Arc::new(*grid);

    let handles: Vec<_> = (0..GRID_SIZE)
        .map(|row| tokio::spawn(process_row(row, Arc::clone(&snapshot))))
        .collect();

    let mut next = EMPTY;
    for handle in handles {
        let (row_index, completed_row) = handle.await?;
        next[row_index] = completed_row;
    }
    Ok(next)
}

/// Owns the single-threaded runtime the row tasks run on.
#[derive(Debug)]
pub struct RowEvaluator {
    runtime: tokio::runtime::Runtime,
}

impl RowEvaluator {
    pub fn new() -> Result<Self, ConwayError> {
        let runtime = tokio::runtime::Builder::new_current_thread().build()?;
        Ok(Self { runtime })
    }

    /// Blocks until every row of the next generation is ready.
    /// Must not be called from inside another tokio runtime.
    pub fn step(&self, grid: &TGrid) -> Result<TGrid, ConwayError> {
        self.runtime.block_on(step_rows(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    #[tokio::test]
    async fn row_tasks_agree_with_the_sequential_step() {
        let mut board = EMPTY;
        patterns::apply_random_pattern(&mut board, 7);

        let from_tasks = step_rows(&board).await.unwrap();

        assert_eq!(from_tasks, grid::step(&board));
    }

    #[test]
    fn the_blocking_evaluator_runs_a_blinker() {
        let evaluator = RowEvaluator::new().unwrap();
        let vertical = grid::from_cells(&[(0, 1), (1, 1), (2, 1)]);

        let horizontal = evaluator.step(&vertical).unwrap();

        assert_eq!(grid::alive(&horizontal), vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!(evaluator.step(&horizontal).unwrap(), vertical);
    }

    #[test]
    fn evaluator_names_parse() {
        assert_eq!("sequential".parse::<EvaluatorKind>().unwrap(), EvaluatorKind::Sequential);
        assert_eq!(" Row-Tasks ".parse::<EvaluatorKind>().unwrap(), EvaluatorKind::RowTasks);
        assert!(matches!(
            "threads".parse::<EvaluatorKind>(),
            Err(ConwayError::UnknownEvaluator(name)) if name == "threads"
        ));
    }
}
