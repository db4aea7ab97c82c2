// session.rs - One interactive Game of Life session and its command dispatch
//
// The host forwards every trigger (click, button, frame tick) as a `Command`.
// Each command runs exactly one operation and reports what happened, after
// which the host re-renders from `Session::grid`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};

use crate::coro::{EvaluatorKind, RowEvaluator};
use crate::grid::{self, TGrid, EMPTY};
use crate::patterns;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);
const HISTORY_LEN: usize = 10;

/// Everything the host can ask of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pointer click at a fractional board position, see [`grid::cell_at`].
    Click { x: f32, y: f32 },
    Toggle { row: usize, col: usize },
    Start,
    Pause,
    Reset,
    /// Timer check; steps once if the interval has elapsed while running.
    Tick(Instant),
    /// Index into [`patterns::PATTERNS`].
    LoadPattern(usize),
    Randomize(u64),
    SetInterval(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command changed the session.
    Applied,
    /// A tick advanced the grid by one generation.
    Stepped,
    /// A tick that was not due, or arrived while editing.
    Idle,
    Ignored(Ignored),
}

/// Why a command left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    OutOfBounds,
    /// Edits are only accepted while editing.
    Running,
    UnknownPattern,
    ZeroInterval,
}

#[derive(Debug)]
pub struct Session {
    grid: TGrid,
    generation: u64,
    running: bool,
    last_step: Instant,
    interval: Duration,

    row_tasks: Option<RowEvaluator>,

    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
    cycle: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL, EvaluatorKind::Sequential)
    }
}

impl Session {
    /// Creates an editing session with an all-dead grid.
    ///
    /// If the row-task runtime cannot be built the session logs a warning and
    /// steps sequentially instead. A zero `interval` falls back to
    /// [`DEFAULT_INTERVAL`].
    pub fn new(interval: Duration, evaluator: EvaluatorKind) -> Self {
        let row_tasks = match evaluator {
            EvaluatorKind::Sequential => None,
            EvaluatorKind::RowTasks => match RowEvaluator::new() {
                Ok(rows) => Some(rows),
                Err(error) => {
                    warn!(%error, "row-task evaluator unavailable, stepping sequentially");
                    None
                }
            },
        };

        Self {
            grid: EMPTY,
            generation: 0,
            running: false,
            last_step: Instant::now(),
            interval: if interval.is_zero() { DEFAULT_INTERVAL } else { interval },
            row_tasks,
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
            cycle: false,
        }
    }

    pub fn grid(&self) -> &TGrid { &self.grid }
    pub fn generation(&self) -> u64 { self.generation }
    pub fn is_running(&self) -> bool { self.running }
    pub fn interval(&self) -> Duration { self.interval }

    /// Whether the current grid repeats one of the last ten generations.
    /// Purely informational: it never pauses the session.
    pub fn cycle_detected(&self) -> bool { self.cycle }

    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::Click { x, y } => match grid::cell_at(x, y) {
                Some((row, col)) => self.toggle(row, col),
                None             => Outcome::Ignored(Ignored::OutOfBounds),
            },
            Command::Toggle { row, col } => self.toggle(row, col),
            Command::Start               => self.start(Instant::now()),
            Command::Pause               => self.pause(),
            Command::Reset               => self.reset(),
            Command::Tick(now)           => self.tick(now),
            Command::LoadPattern(index)  => self.load_pattern(index),
            Command::Randomize(seed)     => self.randomize(seed),
            Command::SetInterval(every)  => self.set_interval(every),
        };
        if let Outcome::Ignored(reason) = outcome {
            debug!(?command, ?reason, "command ignored");
        }
        outcome
    }

    /// Advances one generation regardless of the running flag.
    pub fn step(&mut self) {
        self.grid = match &self.row_tasks {
            Some(rows) => rows.step(&self.grid).unwrap_or_else(|error| {
                warn!(%error, "row-task step failed, stepping sequentially");
                grid::step(&self.grid)
            }),
            None => grid::step(&self.grid),
        };
        self.generation += 1;
        self.cycle = self.check_for_cycle();
        trace!(generation = self.generation, cycle = self.cycle, "stepped");
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> Outcome {
        if self.running { return Outcome::Ignored(Ignored::Running); }
        if !grid::toggle(&mut self.grid, row, col) { return Outcome::Ignored(Ignored::OutOfBounds); }
        self.forget_history();
        Outcome::Applied
    }

    /// Enters the simulating state. `now` becomes the pacing origin, so the
    /// first automatic step comes one interval later.
    pub fn start(&mut self, now: Instant) -> Outcome {
        if !self.running { info!(generation = self.generation, "simulation started"); }
        self.running = true;
        self.last_step = now;
        Outcome::Applied
    }

    pub fn pause(&mut self) -> Outcome {
        if self.running { info!(generation = self.generation, "simulation paused"); }
        self.running = false;
        Outcome::Applied
    }

    pub fn reset(&mut self) -> Outcome {
        self.grid = EMPTY;
        self.generation = 0;
        self.running = false;
        self.forget_history();
        info!("grid reset");
        Outcome::Applied
    }

    /// Steps once if running and more than one interval has passed since the
    /// last step. At most one step per call, so late ticks do not catch up.
    pub fn tick(&mut self, now: Instant) -> Outcome {
        if !self.running { return Outcome::Idle; }
        if now.saturating_duration_since(self.last_step) <= self.interval { return Outcome::Idle; }

        self.step();
        self.last_step = now;
        Outcome::Stepped
    }

    pub fn load_pattern(&mut self, index: usize) -> Outcome {
        if self.running { return Outcome::Ignored(Ignored::Running); }
        let Some(pattern) = patterns::PATTERNS.get(index) else {
            return Outcome::Ignored(Ignored::UnknownPattern);
        };
        patterns::apply_pattern(&mut self.grid, pattern);
        self.generation = 0;
        self.forget_history();
        info!(pattern = pattern.name, "pattern loaded");
        Outcome::Applied
    }

    pub fn randomize(&mut self, seed: u64) -> Outcome {
        if self.running { return Outcome::Ignored(Ignored::Running); }
        patterns::apply_random_pattern(&mut self.grid, seed);
        self.generation = 0;
        self.forget_history();
        info!(seed, "random grid");
        Outcome::Applied
    }

    pub fn set_interval(&mut self, interval: Duration) -> Outcome {
        if interval.is_zero() { return Outcome::Ignored(Ignored::ZeroInterval); }
        self.interval = interval;
        Outcome::Applied
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.grid.hash(&mut hasher);
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        let seen = self.grid_history[..self.history_count.min(HISTORY_LEN)].contains(&current_hash);
        self.grid_history[self.history_count % HISTORY_LEN] = current_hash;
        self.history_count += 1;
        seen
    }

    fn forget_history(&mut self) {
        self.grid_history = [0; HISTORY_LEN];
        self.history_count = 0;
        self.cycle = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Session {
        let mut session = Session::default();
        for (row, col) in [(0, 1), (1, 1), (2, 1)] {
            assert_eq!(session.toggle(row, col), Outcome::Applied);
        }
        session
    }

    #[test]
    fn a_new_session_is_editing_an_empty_grid() {
        let session = Session::default();

        assert_eq!(session.grid(), &EMPTY);
        assert_eq!(session.generation(), 0);
        assert!(!session.is_running());
        assert_eq!(session.interval(), DEFAULT_INTERVAL);
    }

    #[test]
    fn each_step_advances_the_generation_by_one() {
        let mut session = blinker();

        session.step();
        assert_eq!(grid::alive(session.grid()), vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!(session.generation(), 1);

        session.step();
        assert_eq!(grid::alive(session.grid()), vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn reset_clears_everything_and_steps_stay_empty() {
        let mut session = blinker();
        session.start(Instant::now());
        session.step();

        assert_eq!(session.reset(), Outcome::Applied);
        assert!(!session.is_running());
        assert_eq!(session.generation(), 0);

        for expected in 1..=5 {
            session.step();
            assert_eq!(session.grid(), &EMPTY);
            assert_eq!(session.generation(), expected);
        }
    }

    #[test]
    fn toggles_are_rejected_while_simulating() {
        let mut session = Session::default();
        session.dispatch(Command::Start);

        assert_eq!(session.dispatch(Command::Toggle { row: 1, col: 1 }), Outcome::Ignored(Ignored::Running));
        assert_eq!(session.dispatch(Command::Click { x: 0.5, y: 0.5 }), Outcome::Ignored(Ignored::Running));
        assert_eq!(session.grid(), &EMPTY);

        session.dispatch(Command::Pause);
        assert_eq!(session.dispatch(Command::Toggle { row: 1, col: 1 }), Outcome::Applied);
        assert!(session.grid()[1][1]);
    }

    #[test]
    fn clicks_map_to_cells_and_off_board_clicks_are_ignored() {
        let mut session = Session::default();

        assert_eq!(session.dispatch(Command::Click { x: 0.25, y: 0.75 }), Outcome::Applied);
        assert_eq!(grid::alive(session.grid()), vec![(22, 7)]);

        assert_eq!(session.dispatch(Command::Click { x: 1.2, y: 0.5 }), Outcome::Ignored(Ignored::OutOfBounds));
        assert_eq!(session.dispatch(Command::Toggle { row: 30, col: 0 }), Outcome::Ignored(Ignored::OutOfBounds));
        assert_eq!(grid::alive(session.grid()), vec![(22, 7)]);
    }

    #[test]
    fn start_and_pause_only_flip_the_running_flag() {
        let mut session = blinker();
        let before = *session.grid();

        session.dispatch(Command::Start);
        assert!(session.is_running());
        session.dispatch(Command::Pause);
        assert!(!session.is_running());

        assert_eq!(session.grid(), &before);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn ticks_step_only_after_the_interval_has_passed() {
        let mut session = blinker();
        let origin = Instant::now();

        assert_eq!(session.tick(origin + Duration::from_secs(1)), Outcome::Idle);

        session.start(origin);
        assert_eq!(session.tick(origin + Duration::from_millis(100)), Outcome::Idle);
        assert_eq!(session.tick(origin + DEFAULT_INTERVAL), Outcome::Idle);
        assert_eq!(session.tick(origin + Duration::from_millis(250)), Outcome::Stepped);
        assert_eq!(session.generation(), 1);

        // Pacing restarts from the last step, and a long gap still yields one step
        assert_eq!(session.tick(origin + Duration::from_millis(300)), Outcome::Idle);
        assert_eq!(session.tick(origin + Duration::from_secs(5)), Outcome::Stepped);
        assert_eq!(session.generation(), 2);

        session.pause();
        assert_eq!(session.tick(origin + Duration::from_secs(10)), Outcome::Idle);
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn patterns_load_only_while_editing() {
        let mut session = Session::default();
        session.step();

        assert_eq!(session.dispatch(Command::LoadPattern(1)), Outcome::Applied);
        assert_eq!(session.generation(), 0);
        assert_eq!(grid::live_cells(session.grid()), 3);

        assert_eq!(session.dispatch(Command::LoadPattern(99)), Outcome::Ignored(Ignored::UnknownPattern));

        session.dispatch(Command::Start);
        assert_eq!(session.dispatch(Command::LoadPattern(0)), Outcome::Ignored(Ignored::Running));
        assert_eq!(session.dispatch(Command::Randomize(3)), Outcome::Ignored(Ignored::Running));
    }

    #[test]
    fn a_zero_interval_is_rejected() {
        let mut session = Session::default();

        assert_eq!(session.dispatch(Command::SetInterval(Duration::ZERO)), Outcome::Ignored(Ignored::ZeroInterval));
        assert_eq!(session.dispatch(Command::SetInterval(Duration::from_millis(50))), Outcome::Applied);
        assert_eq!(session.interval(), Duration::from_millis(50));
    }

    #[test]
    fn repeating_grids_are_reported_without_pausing() {
        let mut session = blinker();
        session.start(Instant::now());

        session.step();
        session.step();
        assert!(!session.cycle_detected());
        session.step();
        assert!(session.cycle_detected());
        assert!(session.is_running());

        session.pause();
        session.toggle(10, 10);
        assert!(!session.cycle_detected());
    }

    #[test]
    fn the_row_task_session_matches_the_sequential_one() {
        let mut sequential = Session::default();
        let mut row_tasks = Session::new(DEFAULT_INTERVAL, EvaluatorKind::RowTasks);
        sequential.randomize(11);
        row_tasks.randomize(11);

        for _ in 0..5 {
            sequential.step();
            row_tasks.step();
            assert_eq!(sequential.grid(), row_tasks.grid());
        }
    }
}
