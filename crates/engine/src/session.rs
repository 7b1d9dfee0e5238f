//! Session module - drives one play-through
//!
//! The session owns the only live grid, the score, the undo history and the
//! countdown. Every mutation goes through it:
//!
//! ```text
//!   Active --move------------> Active | Over
//!   Active <--toggle pause--> Paused
//!   Active | Paused --time up--> Over
//!   any   --undo (history)--> Active, unless time is up or the board is stuck
//! ```
//!
//! Time is passed in as `now` on every call; the session never reads a clock.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::{is_terminal, shift, spawn_tile, Grid, SimpleRng, Spawn};
use crate::countdown::Countdown;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, Status, START_TILES};

/// State captured before a move is attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    pub grid: Grid,
    pub score: u64,
}

/// What a directional move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub direction: Direction,
    pub changed: bool,
    pub score_delta: u64,
    pub spawned: Option<Spawn>,
    /// The move left the board without any further move
    pub game_over: bool,
}

/// Result of [`Session::apply_action`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Moved(MoveOutcome),
    /// Directional input while paused or over
    MoveRejected,
    Undone,
    NothingToUndo,
    Paused,
    Resumed,
    Restarted,
    /// Pause toggle while over
    PauseIgnored,
    /// Served outside the session (persistence, theming)
    Ignored,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    score: u64,
    /// Best score from earlier sessions (high-score file and restarts)
    best: u64,
    history: Vec<HistoryEntry>,
    rng: SimpleRng,
    countdown: Countdown,
    status: Status,
    moves: u32,
}

impl Session {
    /// Start a new session with two spawned tiles and a running countdown
    pub fn new(seed: u32, time_limit: Duration, best: u64, now: Instant) -> Self {
        let mut session = Self::from_grid(Grid::new(), seed, time_limit, now);
        session.best = best;
        session.spawn_start_tiles();
        info!(seed, limit_secs = time_limit.as_secs(), best, "session started");
        session
    }

    /// Start from an explicit grid without spawning anything
    pub fn from_grid(grid: Grid, seed: u32, time_limit: Duration, now: Instant) -> Self {
        let mut session = Self {
            grid,
            score: 0,
            best: 0,
            history: Vec::new(),
            rng: SimpleRng::new(seed),
            countdown: Countdown::started(time_limit, now),
            status: Status::Active,
            moves: 0,
        };
        if is_terminal(&session.grid) {
            session.finish(now);
        }
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Best of the stored high score and the current score
    pub fn high_score(&self) -> u64 {
        self.best.max(self.score)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn remaining_secs(&self, now: Instant) -> u64 {
        self.countdown.remaining_secs(now)
    }

    /// Dispatch one input event
    pub fn apply_action(&mut self, action: GameAction, now: Instant) -> ActionOutcome {
        match action {
            GameAction::Move(direction) => match self.apply_move(direction, now) {
                Some(outcome) => ActionOutcome::Moved(outcome),
                None => ActionOutcome::MoveRejected,
            },
            GameAction::Undo => {
                if self.undo(now) {
                    ActionOutcome::Undone
                } else {
                    ActionOutcome::NothingToUndo
                }
            }
            GameAction::TogglePause => match self.toggle_pause(now) {
                Some(Status::Paused) => ActionOutcome::Paused,
                Some(_) => ActionOutcome::Resumed,
                None => ActionOutcome::PauseIgnored,
            },
            GameAction::Restart => {
                self.restart(now);
                ActionOutcome::Restarted
            }
            GameAction::Save | GameAction::Load | GameAction::ToggleTheme => ActionOutcome::Ignored,
        }
    }

    /// Shift the board toward `direction`
    ///
    /// Returns `None` unless the session is active. The pre-move state is
    /// pushed to the history even when the move turns out to change nothing.
    pub fn apply_move(&mut self, direction: Direction, now: Instant) -> Option<MoveOutcome> {
        self.tick(now);
        if !self.status.playable() {
            return None;
        }

        self.push_history();

        let shifted = shift(&self.grid, direction);
        let mut spawned = None;
        if shifted.changed {
            self.grid = shifted.grid;
            self.score = self.score.saturating_add(shifted.score);
            self.moves = self.moves.wrapping_add(1);
            spawned = spawn_tile(&mut self.grid, &mut self.rng);
        }

        let game_over = is_terminal(&self.grid);
        if game_over {
            self.finish(now);
        }

        debug!(
            direction = direction.as_str(),
            changed = shifted.changed,
            score_delta = shifted.score,
            score = self.score,
            "move applied"
        );

        Some(MoveOutcome {
            direction,
            changed: shifted.changed,
            score_delta: shifted.score,
            spawned,
            game_over,
        })
    }

    /// Restore the state captured before the latest move
    ///
    /// Returns false when there is nothing to undo. Undo is honoured in every
    /// status and brings the session back to Active unless time has run out
    /// or the restored board is itself stuck.
    pub fn undo(&mut self, now: Instant) -> bool {
        let Some(entry) = self.history.pop() else {
            return false;
        };
        self.grid = entry.grid;
        self.score = entry.score;
        self.rederive_status(now, true);
        debug!(score = self.score, depth = self.history.len(), "undo");
        true
    }

    /// Flip between Active and Paused
    ///
    /// Returns the new status, or `None` when the session is over.
    pub fn toggle_pause(&mut self, now: Instant) -> Option<Status> {
        self.tick(now);
        match self.status {
            Status::Active => {
                self.countdown.pause(now);
                self.status = Status::Paused;
            }
            Status::Paused => {
                self.countdown.resume(now);
                self.status = Status::Active;
            }
            Status::Over => return None,
        }
        Some(self.status)
    }

    /// Sample the countdown; moves to Over once time is up
    pub fn tick(&mut self, now: Instant) {
        if self.status != Status::Over && self.countdown.expired(now) {
            info!(score = self.score, "time is up");
            self.finish(now);
        }
    }

    /// Begin a new session in place
    pub fn restart(&mut self, now: Instant) {
        self.best = self.high_score();
        self.grid.clear();
        self.score = 0;
        self.moves = 0;
        self.history.clear();
        self.countdown.restart(now);
        self.status = Status::Active;
        self.spawn_start_tiles();
        info!(best = self.best, "session restarted");
    }

    /// Replace the live grid and score (e.g. from a save-file)
    ///
    /// History, countdown and pause state are kept.
    pub fn load(&mut self, grid: Grid, score: u64, now: Instant) {
        self.grid = grid;
        self.score = score;
        self.rederive_status(now, false);
        info!(score, status = self.status.as_str(), "state loaded");
    }

    pub fn snapshot_into(&self, now: Instant, out: &mut GameSnapshot) {
        out.grid = *self.grid.rows();
        out.score = self.score;
        out.high_score = self.high_score();
        out.remaining_secs = self.countdown.remaining_secs(now);
        out.status = self.status;
        out.max_tile = self.grid.max_tile();
        out.moves = self.moves;
        out.undo_depth = self.history.len();
    }

    pub fn snapshot(&self, now: Instant) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(now, &mut s);
        s
    }

    fn push_history(&mut self) {
        self.history.push(HistoryEntry {
            grid: self.grid,
            score: self.score,
        });
    }

    fn spawn_start_tiles(&mut self) {
        for _ in 0..START_TILES {
            spawn_tile(&mut self.grid, &mut self.rng);
        }
    }

    fn finish(&mut self, now: Instant) {
        if self.status != Status::Over {
            info!(score = self.score, max_tile = self.grid.max_tile(), "game over");
        }
        self.countdown.pause(now);
        self.status = Status::Over;
    }

    /// Recompute status after the grid was replaced from outside a move.
    fn rederive_status(&mut self, now: Instant, leave_pause: bool) {
        if self.countdown.expired(now) || is_terminal(&self.grid) {
            self.finish(now);
            return;
        }
        let resume = match self.status {
            Status::Over => true,
            Status::Paused => leave_pause,
            Status::Active => false,
        };
        if resume {
            self.countdown.resume(now);
            self.status = Status::Active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: Duration = Duration::from_secs(180);

    fn session_with(rows: [[u32; 4]; 4], now: Instant) -> Session {
        Session::from_grid(Grid::from_rows(rows), 42, LIMIT, now)
    }

    #[test]
    fn new_session_has_two_tiles() {
        let s = Session::new(7, LIMIT, 100, Instant::now());
        assert_eq!(s.grid().empty_count(), 14);
        assert_eq!(s.score(), 0);
        assert_eq!(s.high_score(), 100);
        assert_eq!(s.status(), Status::Active);
        assert!(s.history().is_empty());
    }

    #[test]
    fn changing_move_scores_and_spawns_once() {
        let t0 = Instant::now();
        let mut s = session_with([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]], t0);

        let out = s.apply_move(Direction::Left, t0).unwrap();
        assert!(out.changed);
        assert_eq!(out.score_delta, 4);
        assert!(out.spawned.is_some());
        assert_eq!(s.score(), 4);
        assert_eq!(s.grid().rows()[0][0], 4);
        assert_eq!(s.grid().empty_count(), 16 - 3);
        assert_eq!(s.moves(), 1);
    }

    #[test]
    fn noop_move_pushes_history_without_spawning() {
        let t0 = Instant::now();
        let mut s = session_with([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]], t0);
        let before = *s.grid();

        let out = s.apply_move(Direction::Left, t0).unwrap();
        assert!(!out.changed);
        assert_eq!(out.spawned, None);
        assert_eq!(*s.grid(), before);
        assert_eq!(s.score(), 0);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.moves(), 0);
    }

    #[test]
    fn undo_restores_pre_move_state() {
        let t0 = Instant::now();
        let mut s = session_with([[2, 2, 0, 0], [0, 0, 4, 4], [0; 4], [0; 4]], t0);
        let before = *s.grid();

        s.apply_move(Direction::Left, t0);
        assert_eq!(s.score(), 12);
        assert!(s.undo(t0));
        assert_eq!(*s.grid(), before);
        assert_eq!(s.score(), 0);
        assert!(!s.undo(t0));
    }

    #[test]
    fn moves_are_ignored_while_paused() {
        let t0 = Instant::now();
        let mut s = session_with([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], t0);

        assert_eq!(s.toggle_pause(t0), Some(Status::Paused));
        assert_eq!(s.apply_move(Direction::Left, t0), None);
        assert!(s.history().is_empty());

        assert_eq!(s.toggle_pause(t0), Some(Status::Active));
        assert!(s.apply_move(Direction::Left, t0).is_some());
    }

    #[test]
    fn timer_expiry_ends_session_and_freezes_clock() {
        let t0 = Instant::now();
        let mut s = session_with([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]], t0);

        s.tick(t0 + Duration::from_secs(179));
        assert_eq!(s.status(), Status::Active);
        s.tick(t0 + LIMIT);
        assert_eq!(s.status(), Status::Over);
        assert_eq!(s.remaining_secs(t0 + Duration::from_secs(500)), 0);
        assert_eq!(s.apply_move(Direction::Right, t0 + LIMIT), None);
    }

    #[test]
    fn paused_time_does_not_count() {
        let t0 = Instant::now();
        let mut s = session_with([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]], t0);

        s.toggle_pause(t0 + Duration::from_secs(100));
        s.tick(t0 + Duration::from_secs(1000));
        assert_eq!(s.status(), Status::Paused);
        assert_eq!(s.remaining_secs(t0 + Duration::from_secs(1000)), 80);
    }

    #[test]
    fn restart_folds_score_into_best() {
        let t0 = Instant::now();
        let mut s = session_with([[8, 8, 0, 0], [0; 4], [0; 4], [0; 4]], t0);
        s.apply_move(Direction::Left, t0);
        assert_eq!(s.score(), 16);

        s.restart(t0);
        assert_eq!(s.score(), 0);
        assert_eq!(s.high_score(), 16);
        assert!(s.history().is_empty());
        assert_eq!(s.grid().empty_count(), 14);
        assert_eq!(s.status(), Status::Active);
    }

    #[test]
    fn save_theme_and_load_are_not_session_actions() {
        let t0 = Instant::now();
        let mut s = session_with([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]], t0);
        assert_eq!(s.apply_action(GameAction::Save, t0), ActionOutcome::Ignored);
        assert_eq!(s.apply_action(GameAction::Load, t0), ActionOutcome::Ignored);
        assert_eq!(
            s.apply_action(GameAction::ToggleTheme, t0),
            ActionOutcome::Ignored
        );
        assert_eq!(s.apply_action(GameAction::Undo, t0), ActionOutcome::NothingToUndo);
    }
}
