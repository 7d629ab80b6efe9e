use alloc::vec::Vec;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::*;

/// Cumulative results over all games of a session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub x: u32,
    pub o: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub const fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    pub const fn games_played(&self) -> u32 {
        self.x
            .saturating_add(self.o)
            .saturating_add(self.draws)
    }

    /// Counts one finished game; `None` is a draw.
    fn record(&mut self, winner: Option<Mark>) {
        let counter = match winner {
            Some(Mark::X) => &mut self.x,
            Some(Mark::O) => &mut self.o,
            None => &mut self.draws,
        };
        *counter = counter.saturating_add(1);
    }
}

/// A completed game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    winner: Option<Mark>,
    board: Board,
    finished_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Winning mark, `None` for a draw.
    pub const fn winner(&self) -> Option<Mark> {
        self.winner
    }

    pub const fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Final position of the game.
    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }
}

/// State machine for one browser session: the game in progress plus the
/// score and history accumulated over previous games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    next_mark: Mark,
    status: GameStatus,
    win: Option<WinResult>,
    scores: Scoreboard,
    history: Vec<HistoryEntry>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(),
            next_mark: config.starting_mark,
            status: GameStatus::Playing,
            win: None,
            scores: Scoreboard::default(),
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.win.map(|win| win.line)
    }

    pub fn winner(&self) -> Option<Mark> {
        self.win.map(|win| win.winner)
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Finished games, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn move_count(&self) -> u8 {
        self.board.occupied_count()
    }

    pub fn can_play_at(&self, index: CellIndex) -> bool {
        self.status.is_playing() && self.board.is_empty_at(index)
    }

    /// Places the next mark at `index`; rejected moves change nothing and
    /// report [`MoveOutcome::NoChange`].
    pub fn apply_move(&mut self, index: CellIndex, now: DateTime<Utc>) -> MoveOutcome {
        self.try_apply_move(index, now).unwrap_or_else(|err| {
            log::debug!("move at {} rejected: {}", index, err);
            MoveOutcome::NoChange
        })
    }

    pub fn try_apply_move(&mut self, index: CellIndex, now: DateTime<Utc>) -> Result<MoveOutcome> {
        let index = self.board.validate_index(index)?;
        self.check_playing()?;

        let mark = self.next_mark;
        self.board.place(index, mark)?;
        self.next_mark = mark.opponent();
        log::trace!("{} placed at {}", mark, index);

        Ok(self.on_move_applied(now))
    }

    /// Starts a new game; score and history are kept.
    pub fn reset_game(&mut self) {
        self.board = Board::new();
        self.next_mark = self.config.starting_mark;
        self.status = GameStatus::Playing;
        self.win = None;
    }

    /// Starts a new game and forgets every previous one.
    pub fn reset_stats(&mut self) {
        self.reset_game();
        self.scores = Scoreboard::default();
        self.history.clear();
    }

    fn on_move_applied(&mut self, now: DateTime<Utc>) -> MoveOutcome {
        if let Some(win) = evaluate(&self.board) {
            self.status = GameStatus::Won;
            self.win = Some(win);
            self.finish_game(Some(win.winner), now);
            MoveOutcome::Won(win.winner)
        } else if is_draw(&self.board) {
            self.status = GameStatus::Draw;
            self.finish_game(None, now);
            MoveOutcome::Draw
        } else {
            MoveOutcome::Placed
        }
    }

    fn finish_game(&mut self, winner: Option<Mark>, now: DateTime<Utc>) {
        self.scores.record(winner);
        self.history.push(HistoryEntry {
            winner,
            board: self.board,
            finished_at: now,
        });
        log::debug!(
            "game {} finished: {:?} on {}",
            self.history.len(),
            winner,
            self.board
        );
    }

    fn check_playing(&self) -> Result<()> {
        if self.status.is_playing() {
            Ok(())
        } else {
            Err(GameError::AlreadyEnded)
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
