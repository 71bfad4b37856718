//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, shapes, RNG, and scoring.
//! It owns the piece lifecycle: spawn, fall, lock, clear, respawn, and game over.
//!
//! Every command is a complete read-modify-write on `&mut self`, so a caller can
//! never observe a half-applied transition. Commands issued while paused or after
//! game over are ignored rather than reported as errors.

use crate::board::Board;
use crate::config::GameConfig;
use crate::pieces::{find_rotation, Shape};
use crate::rng::{random_piece, SimpleRng};
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_points};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Column of the shape matrix's left edge
    pub x: i8,
    /// Row of the shape matrix's top edge; negative while partly above the board
    pub y: i8,
    /// Current rotation, owned by this piece
    pub shape: Shape,
}

impl Tetromino {
    /// Create a piece of `kind` at (x, y) with a fresh copy of its canonical shape
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            x,
            y,
            shape: Shape::of(kind),
        }
    }

    /// Check if the piece fits on the board at its current position
    pub fn fits(&self, board: &Board) -> bool {
        !board.collides(self.x, self.y, &self.shape)
    }

    /// Absolute coordinates of every mino
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape
            .minos()
            .into_iter()
            .map(move |(dx, dy)| (self.x as i16 + dx as i16, self.y as i16 + dy as i16))
    }
}

/// Spawn column for a board of `width` columns (3 on the standard board).
pub fn spawn_x(width: u8) -> i8 {
    (width as i8 / 2 - 2).max(0)
}

/// Place a new piece of `kind` at the spawn anchor.
///
/// Returns `None` when the spawn position is already blocked, which the
/// caller treats as game over.
pub fn spawn(board: &Board, kind: PieceKind) -> Option<Tetromino> {
    let piece = Tetromino::new(kind, spawn_x(board.width()), 0);
    piece.fits(board).then_some(piece)
}

/// Result of a move command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Paused, game over, or no active piece
    Ignored,
    /// The piece moved
    Moved,
    /// A sideways or upward move hit something; nothing changed
    Blocked,
    /// A downward move hit something and the piece locked
    Locked { lines_cleared: usize, points: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    next: PieceKind,
    rng: SimpleRng,
    score: u32,
    level: u32,
    lines: u32,
    drop_timer_ms: u32,
    paused: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game and spawn its first piece
    pub fn new(config: GameConfig) -> Self {
        Self::with_board(Board::with_size(config.width(), config.height()), config.seed())
    }

    /// Start a game on a pre-filled board.
    pub fn with_board(board: Board, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = random_piece(&mut rng);
        let mut state = Self {
            board,
            active: None,
            next,
            rng,
            score: 0,
            level: 1,
            lines: 0,
            drop_timer_ms: 0,
            paused: false,
            game_over: false,
        };
        state.spawn_next();
        state
    }

    /// Discard everything and start over on an empty board of the same size
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_timer_ms = 0;
        self.paused = false;
        self.game_over = false;
        self.next = random_piece(&mut self.rng);
        self.spawn_next();
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Board with the active piece merged in, for display
    pub fn display_board(&self) -> Board {
        let mut board = self.board.clone();
        if let Some(active) = self.active {
            board.stamp(active.x, active.y, &active.shape, active.kind);
        }
        board
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.display_board(),
            active: self.active,
            next: self.next,
            score: self.score,
            level: self.level,
            lines: self.lines,
            paused: self.paused,
            game_over: self.game_over,
        }
    }

    fn accepts_commands(&self) -> bool {
        !self.game_over && !self.paused && self.active.is_some()
    }

    /// Promote the queued kind to the active piece and queue a new one.
    fn spawn_next(&mut self) {
        let kind = self.next;
        self.next = random_piece(&mut self.rng);
        self.active = spawn(&self.board, kind);
        if self.active.is_none() {
            self.game_over = true;
        }
    }

    /// Move the active piece by (dx, dy).
    ///
    /// A blocked downward move locks the piece, clears lines, scores, and
    /// spawns the next piece. This is the only place a piece ever locks.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> MoveOutcome {
        if !self.accepts_commands() {
            return MoveOutcome::Ignored;
        }
        let Some(active) = self.active else {
            return MoveOutcome::Ignored;
        };

        let (nx, ny) = (active.x.saturating_add(dx), active.y.saturating_add(dy));
        if !self.board.collides(nx, ny, &active.shape) {
            self.active = Some(Tetromino {
                x: nx,
                y: ny,
                ..active
            });
            return MoveOutcome::Moved;
        }

        if dy > 0 {
            self.lock_piece()
        } else {
            MoveOutcome::Blocked
        }
    }

    /// Lock the active piece, clear lines, update score and level, spawn the next piece
    fn lock_piece(&mut self) -> MoveOutcome {
        let Some(active) = self.active.take() else {
            return MoveOutcome::Ignored;
        };

        self.board
            .stamp(active.x, active.y, &active.shape, active.kind);

        let lines_cleared = self.board.clear_full_rows();
        let points = line_clear_points(lines_cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines_cleared as u32);
        self.level = level_for_lines(self.lines);

        self.spawn_next();

        MoveOutcome::Locked {
            lines_cleared,
            points,
        }
    }

    /// Rotate the active piece clockwise, kicking it if needed.
    ///
    /// Returns false (leaving the piece untouched) when every kick position collides.
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_commands() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match find_rotation(&self.board, active.x, active.y, &active.shape) {
            Some((x, y, shape)) => {
                self.active = Some(Tetromino {
                    x,
                    y,
                    shape,
                    ..active
                });
                true
            }
            None => false,
        }
    }

    /// Distance the active piece can fall before it rests on something
    pub fn drop_distance(&self) -> i8 {
        let Some(active) = self.active else {
            return 0;
        };

        let mut distance: i8 = 0;
        while !self
            .board
            .collides(active.x, active.y + distance + 1, &active.shape)
        {
            distance += 1;
        }
        distance
    }

    /// Drop the active piece to its resting row and lock it there
    pub fn hard_drop(&mut self) -> MoveOutcome {
        if !self.accepts_commands() {
            return MoveOutcome::Ignored;
        }
        let distance = self.drop_distance();
        if let Some(active) = self.active.as_mut() {
            active.y += distance;
        }
        self.move_piece(0, 1)
    }

    /// Flip the paused flag. Ignored once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Advance the gravity clock by `elapsed_ms`.
    ///
    /// Once the accumulated time exceeds the drop interval the piece moves
    /// down one row and the clock restarts from zero, so a long frame never
    /// produces more than one step. Returns true when a step was taken.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms > self.drop_interval_ms() {
            self.drop_timer_ms = 0;
            self.move_piece(0, 1);
            return true;
        }

        false
    }

    /// Apply a game action. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let moved = |outcome: MoveOutcome| {
            matches!(outcome, MoveOutcome::Moved | MoveOutcome::Locked { .. })
        };
        match action {
            GameAction::MoveLeft => moved(self.move_piece(-1, 0)),
            GameAction::MoveRight => moved(self.move_piece(1, 0)),
            GameAction::SoftDrop => moved(self.move_piece(0, 1)),
            GameAction::HardDrop => moved(self.hard_drop()),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::KICK_OFFSETS_X;

    /// Game on `board` with a chosen active piece at (x, y).
    fn state_with(board: Board, kind: PieceKind, x: i8, y: i8) -> GameState {
        let mut state = GameState::with_board(board, 12345);
        state.active = Some(Tetromino::new(kind, x, y));
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(GameConfig::with_seed(12345));

        assert!(!state.game_over);
        assert!(!state.paused);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert_eq!(state.drop_timer_ms, 0);
        assert_eq!(state.board.filled_count(), 0);

        let active = state.active.unwrap();
        assert_eq!((active.x, active.y), (3, 0));
        assert_eq!(active.shape, Shape::of(active.kind));
    }

    #[test]
    fn test_spawn_x_is_centered() {
        assert_eq!(spawn_x(10), 3);
        assert_eq!(spawn_x(12), 4);
        assert_eq!(spawn_x(2), 0);
        assert_eq!(spawn_x(1), 0);
    }

    #[test]
    fn test_spawn_blocked_returns_none() {
        let mut board = Board::new();
        board.set(4, 1, Some(PieceKind::Z));
        assert!(spawn(&board, PieceKind::T).is_none());
        assert!(spawn(&board, PieceKind::O).is_none());
        // S occupies (4,0),(5,0),(3,1),(4,1).
        assert!(spawn(&board, PieceKind::S).is_none());
        // Z occupies (3,0),(4,0),(4,1),(5,1).
        assert!(spawn(&Board::new(), PieceKind::Z).is_some());
    }

    #[test]
    fn test_move_commits_position() {
        let mut state = state_with(Board::new(), PieceKind::T, 3, 0);
        assert_eq!(state.move_piece(1, 0), MoveOutcome::Moved);
        assert_eq!(state.active.unwrap().x, 4);
        assert_eq!(state.move_piece(0, 1), MoveOutcome::Moved);
        assert_eq!(state.active.unwrap().y, 1);
    }

    #[test]
    fn test_blocked_sideways_move_is_noop() {
        let mut state = state_with(Board::new(), PieceKind::T, 0, 5);
        let before = state.active;
        assert_eq!(state.move_piece(-1, 0), MoveOutcome::Blocked);
        assert_eq!(state.active, before);
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_blocked_upward_move_is_noop() {
        let mut board = Board::new();
        board.set(4, 4, Some(PieceKind::I));
        let mut state = state_with(board, PieceKind::T, 3, 5);
        let before = state.active;
        assert_eq!(state.move_piece(0, -1), MoveOutcome::Blocked);
        assert_eq!(state.active, before);
    }

    #[test]
    fn test_blocked_downward_move_locks() {
        // T resting on the floor: shape rows 0-1 at board rows 18-19.
        let mut state = state_with(Board::new(), PieceKind::T, 3, 18);
        let next = state.next;
        let outcome = state.move_piece(0, 1);
        assert_eq!(
            outcome,
            MoveOutcome::Locked {
                lines_cleared: 0,
                points: 0
            }
        );
        assert_eq!(state.board.get(4, 18), Some(Some(PieceKind::T)));
        assert_eq!(state.board.get(3, 19), Some(Some(PieceKind::T)));
        assert_eq!(state.board.get(5, 19), Some(Some(PieceKind::T)));
        assert_eq!(state.board.filled_count(), 4);

        // The queued kind became the active piece at the spawn anchor.
        let active = state.active.unwrap();
        assert_eq!(active.kind, next);
        assert_eq!((active.x, active.y), (3, 0));
    }

    #[test]
    fn test_lock_above_top_drops_cells() {
        // I piece whose filled row sits at board row -1 can't fall onto the full column.
        let mut board = Board::with_size(10, 4);
        for y in 0..4 {
            board.set(3, y, Some(PieceKind::J));
        }
        let mut state = GameState::with_board(board, 5);
        state.game_over = false;
        state.active = Some(Tetromino::new(PieceKind::I, 3, -2));

        let outcome = state.move_piece(0, 1);
        assert!(matches!(outcome, MoveOutcome::Locked { .. }));
        // Only the original column remains; nothing was written above row 0.
        assert_eq!(state.board.filled_count(), 4);
    }

    #[test]
    fn test_lock_scores_single_line() {
        let board = Board::from_rows(&[
            "..........",
            "..........",
            "..........",
            "ZZZ.ZZZZZZ",
        ]);
        // Vertical I (column 2 of its matrix) dropped into the gap at column 3.
        let mut state = GameState::with_board(board, 7);
        state.active = Some(Tetromino {
            kind: PieceKind::I,
            x: 1,
            y: 0,
            shape: Shape::of(PieceKind::I).rotated_cw(),
        });

        let outcome = state.move_piece(0, 1);
        assert_eq!(
            outcome,
            MoveOutcome::Locked {
                lines_cleared: 1,
                points: 40
            }
        );
        assert_eq!(state.score, 40);
        assert_eq!(state.lines, 1);
        assert_eq!(state.level, 1);
        // The three upper I cells shifted down one row.
        assert_eq!(
            state.board,
            Board::from_rows(&[
                "..........",
                "...I......",
                "...I......",
                "...I......",
            ])
        );
    }

    #[test]
    fn test_four_lines_at_level_three() {
        let mut board = Board::new();
        for y in 16..20 {
            for x in 0..9 {
                board.set(x, y, Some(PieceKind::O));
            }
        }
        let mut state = GameState::with_board(board, 7);
        state.lines = 20;
        state.level = level_for_lines(20);
        assert_eq!(state.level, 3);

        state.active = Some(Tetromino {
            kind: PieceKind::I,
            x: 7,
            y: 0,
            shape: Shape::of(PieceKind::I).rotated_cw(),
        });
        let outcome = state.hard_drop();
        assert_eq!(
            outcome,
            MoveOutcome::Locked {
                lines_cleared: 4,
                points: 3600
            }
        );
        assert_eq!(state.score, 3600);
        assert_eq!(state.lines, 24);
        assert_eq!(state.level, 3);
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_level_uses_pre_clear_value_for_points() {
        // Clearing the 10th line scores at level 1, then the level rises.
        let board = Board::from_rows(&["..........", "..........", "OOOO..OOOO"]);
        let mut state = GameState::with_board(board, 1);
        state.lines = 9;
        state.active = Some(Tetromino::new(PieceKind::O, 4, 1));

        let outcome = state.move_piece(0, 1);
        assert_eq!(
            outcome,
            MoveOutcome::Locked {
                lines_cleared: 1,
                points: 40
            }
        );
        assert_eq!(state.lines, 10);
        assert_eq!(state.level, 2);
    }

    #[test]
    fn test_rotation_against_wall_kicks() {
        // Vertical I in matrix column 1, flush against the left wall.
        let vertical = Shape::of(PieceKind::I).rotated_cw().rotated_cw().rotated_cw();
        let mut state = GameState::with_board(Board::new(), 3);
        state.active = Some(Tetromino {
            kind: PieceKind::I,
            x: -1,
            y: 5,
            shape: vertical,
        });

        assert!(state.rotate());
        let active = state.active.unwrap();
        assert_eq!((active.x, active.y), (0, 5));
        assert_eq!(active.shape, Shape::of(PieceKind::I));
    }

    #[test]
    fn test_rotation_uses_vertical_kick_up_first() {
        // Flat T at the floor can't turn in place or sideways, but one row up works.
        let board = Board::from_rows(&["....", "....", "....", "...Z"]);
        let mut state = GameState::with_board(board, 3);
        // T occupying (1,2),(0,3),(1,3),(2,3): flat on the floor of a 4-wide board.
        state.active = Some(Tetromino::new(PieceKind::T, 0, 2));
        assert!(state.active.unwrap().fits(&state.board));
        let rotated = Shape::of(PieceKind::T).rotated_cw();
        for dx in KICK_OFFSETS_X {
            assert!(state.board.collides(dx, 2, &rotated));
        }

        assert!(state.rotate());
        let active = state.active.unwrap();
        assert_eq!((active.x, active.y), (0, 1));
        assert_eq!(active.shape, rotated);
    }

    #[test]
    fn test_rotation_rejected_leaves_state_unchanged() {
        let board = Board::from_rows(&[
            "ZZZ.ZZ",
            "ZZZ.ZZ",
            "ZZZ.ZZ",
            "ZZZ.ZZ",
            "ZZZ.ZZ",
            "ZZZ.ZZ",
        ]);
        let vertical = Shape::of(PieceKind::I).rotated_cw();
        let mut state = GameState::with_board(board, 3);
        state.game_over = false;
        state.active = Some(Tetromino {
            kind: PieceKind::I,
            x: 1,
            y: 1,
            shape: vertical,
        });
        let before = state.active;

        assert!(!state.rotate());
        assert_eq!(state.active, before);
    }

    #[test]
    fn test_o_piece_rotation_never_needs_kick() {
        let mut state = state_with(Board::new(), PieceKind::O, 0, 10);
        assert!(state.rotate());
        let active = state.active.unwrap();
        assert_eq!((active.x, active.y), (0, 10));
        assert_eq!(active.shape, Shape::of(PieceKind::O));
    }

    #[test]
    fn test_hard_drop_matches_repeated_soft_drops() {
        let mut board = Board::new();
        board.set(4, 12, Some(PieceKind::L));
        board.set(0, 19, Some(PieceKind::L));

        let mut a = state_with(board.clone(), PieceKind::T, 3, 0);
        let mut b = state_with(board, PieceKind::T, 3, 0);
        a.next = PieceKind::S;
        b.next = PieceKind::S;

        let hard = a.hard_drop();
        let mut soft = b.move_piece(0, 1);
        while soft == MoveOutcome::Moved {
            soft = b.move_piece(0, 1);
        }

        assert_eq!(hard, soft);
        assert_eq!(a.board, b.board);
        assert_eq!(a.score, b.score);
        assert_eq!(a.active, b.active);
        // T rests on the block at (4, 12): its stem row lands on row 11.
        assert_eq!(a.board.get(4, 10), Some(Some(PieceKind::T)));
        assert_eq!(a.board.get(4, 11), Some(Some(PieceKind::T)));
    }

    #[test]
    fn test_hard_drop_locks_when_already_resting() {
        let mut state = state_with(Board::new(), PieceKind::O, 4, 18);
        assert_eq!(state.drop_distance(), 0);
        assert!(matches!(state.hard_drop(), MoveOutcome::Locked { .. }));
        assert_eq!(state.board.filled_count(), 4);
    }

    #[test]
    fn test_commands_ignored_while_paused() {
        let mut state = state_with(Board::new(), PieceKind::T, 3, 0);
        assert!(state.toggle_pause());
        let before = state.active;

        assert_eq!(state.move_piece(1, 0), MoveOutcome::Ignored);
        assert_eq!(state.move_piece(0, 1), MoveOutcome::Ignored);
        assert!(!state.rotate());
        assert_eq!(state.hard_drop(), MoveOutcome::Ignored);
        assert_eq!(state.active, before);
        assert_eq!(state.board.filled_count(), 0);

        assert!(state.toggle_pause());
        assert_eq!(state.move_piece(1, 0), MoveOutcome::Moved);
    }

    #[test]
    fn test_commands_ignored_after_game_over() {
        let mut state = GameState::new(GameConfig::new(10, 1, 9).unwrap());
        assert!(state.game_over);
        assert!(state.active.is_none());
        assert_eq!(state.move_piece(0, 1), MoveOutcome::Ignored);
        assert_eq!(state.hard_drop(), MoveOutcome::Ignored);
        assert!(!state.rotate());
        assert!(!state.toggle_pause());
        assert!(!state.paused);
    }

    #[test]
    fn test_spawn_collision_sets_game_over() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 1, Some(PieceKind::Z));
        }
        board.set(0, 1, None);
        let mut state = state_with(board, PieceKind::O, 0, 5);
        state.game_over = false;
        // Any kind spawned at (3, 0) needs row 1 free under columns 3..=6.
        let outcome = state.hard_drop();
        assert!(matches!(outcome, MoveOutcome::Locked { .. }));
        assert!(state.game_over);
        assert!(state.active.is_none());
    }

    #[test]
    fn test_tick_accumulates_until_interval_exceeded() {
        let mut state = state_with(Board::new(), PieceKind::T, 3, 0);
        assert_eq!(state.drop_interval_ms(), 1000);

        assert!(!state.tick(600));
        assert!(!state.tick(400)); // exactly 1000 is not enough
        assert_eq!(state.active.unwrap().y, 0);
        assert!(state.tick(1));
        assert_eq!(state.active.unwrap().y, 1);
        assert_eq!(state.drop_timer_ms, 0);
    }

    #[test]
    fn test_tick_caps_at_one_step_per_call() {
        let mut state = state_with(Board::new(), PieceKind::T, 3, 0);
        assert!(state.tick(10_000));
        assert_eq!(state.active.unwrap().y, 1);
    }

    #[test]
    fn test_tick_speeds_up_with_level() {
        let mut state = state_with(Board::new(), PieceKind::T, 3, 0);
        state.level = 4;
        assert_eq!(state.drop_interval_ms(), 700);
        assert!(!state.tick(700));
        assert!(state.tick(1));
    }

    #[test]
    fn test_pause_suspends_gravity() {
        let mut state = state_with(Board::new(), PieceKind::T, 3, 0);
        state.toggle_pause();
        for _ in 0..1000 {
            assert!(!state.tick(16));
        }
        assert_eq!(state.active.unwrap().y, 0);
        assert_eq!(state.drop_timer_ms, 0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = state_with(Board::new(), PieceKind::T, 3, 0);
        state.board.set(0, 19, Some(PieceKind::S));
        state.score = 500;
        state.lines = 12;
        state.level = 2;
        state.paused = true;
        state.drop_timer_ms = 300;

        state.reset();

        assert_eq!(state.board.filled_count(), 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.level, 1);
        assert!(!state.paused);
        assert!(!state.game_over);
        assert_eq!(state.drop_timer_ms, 0);
        assert!(state.active.is_some());
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut state = GameState::new(GameConfig::new(10, 1, 2).unwrap());
        assert!(state.game_over);
        state.reset();
        // Still degenerate: every piece is two rows tall.
        assert!(state.game_over);

        let mut state = state_with(Board::new(), PieceKind::T, 3, 0);
        state.game_over = true;
        state.active = None;
        state.reset();
        assert!(!state.game_over);
        assert!(state.active.is_some());
    }

    #[test]
    fn test_display_board_merges_active_piece() {
        let state = state_with(Board::new(), PieceKind::O, 4, 18);
        let display = state.display_board();
        assert_eq!(display.filled_count(), 4);
        assert_eq!(display.get(4, 18), Some(Some(PieceKind::O)));
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_display_board_skips_cells_above_top() {
        let state = state_with(Board::new(), PieceKind::O, 4, -1);
        assert_eq!(state.display_board().filled_count(), 2);
    }

    #[test]
    fn test_apply_action_maps_commands() {
        let mut state = state_with(Board::new(), PieceKind::T, 3, 0);
        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.active.unwrap().x, 4);
        assert!(state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.active.unwrap().x, 3);
        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.active.unwrap().y, 1);
        assert!(state.apply_action(GameAction::Rotate));
        assert!(state.apply_action(GameAction::Pause));
        assert!(state.paused);
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(state.apply_action(GameAction::Pause));
        assert!(state.apply_action(GameAction::HardDrop));
        assert_eq!(state.board.filled_count(), 4);
        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = state_with(Board::new(), PieceKind::L, 3, 0);
        state.score = 140;
        let snap = state.snapshot();
        assert_eq!(snap.score, 140);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.next, state.next);
        assert_eq!(snap.active, state.active);
        assert_eq!(snap.board, state.display_board());
        assert!(snap.playable());
    }
}
