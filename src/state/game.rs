//! Game engine and game manager.
//!
//! [`GameEngine`] owns one [`GameState`] and is its only mutator. Every move goes
//! through [`GameEngine::drop_piece`], which either commits exactly one piece and
//! reports a [`MoveOutcome`], or fails with a [`MoveError`] and leaves the state
//! untouched.
//!
//! # State Diagram
//!
//! ```text
//!                 drop_piece (no win, board not full)
//!                ┌──────────┐
//!                ▼          │
//!          ┌────────────┐───┘  drop_piece (win)   ┌────────────┐
//! reset ──▶│ InProgress │─────────────────────────▶│  Won(P)    │
//!          └────────────┘                          └────────────┘
//!                │ drop_piece (board full)
//!                ▼
//!          ┌────────────┐
//!          │   Tied     │
//!          └────────────┘
//! ```
//!
//! Terminal states only leave through `reset`.

use std::collections::HashMap;
use std::fmt;

use log::{debug, info};

use super::board::{Board, Position, CONNECT};
use super::player::{Cell, Player};
use crate::config::EngineConfig;
use crate::error::{ConfigError, ManagerError, MoveError};

/// Game state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum GameStatus {
    /// Moves are accepted
    #[default]
    InProgress,
    /// A player connected four
    Won(Player),
    /// Board filled with no winner
    Tied,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Won(_) => "won",
            Self::Tied => "tied",
        }
    }

    /// Check if game is terminal (cannot change until reset).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Self::Won(player) => Some(*player),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won(player) => write!(f, "won by {}", player),
            Self::Tied => write!(f, "tied"),
        }
    }
}

/// Result of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MoveOutcome {
    /// The mover connected four.
    Win(Player),
    /// The move filled the board without a winner.
    Tie,
    /// Play continues; carries the player to move next.
    Continue(Player),
}

impl MoveOutcome {
    /// End-of-game announcement, or `None` while play continues.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Win(player) => Some(format!("{} won!", player)),
            Self::Tie => Some("Tie!".to_string()),
            Self::Continue(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continue(_))
    }
}

/// Where the most recent piece landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

impl Placement {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }
}

/// Board, turn marker, and status of one game.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    last_placement: Option<Placement>,

    /// When this game was started (construction or reset)
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// When the game reached a terminal status
    pub ended_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl GameState {
    /// Fresh state: empty board, player one to move.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            board: Board::from_config(config),
            current_player: Player::FIRST,
            status: GameStatus::InProgress,
            last_placement: None,
            started_at: chrono::Utc::now(),
            ended_at: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_placement(&self) -> Option<Placement> {
        self.last_placement
    }
}

/// Connect Four rules engine for a single game.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    state: GameState,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an engine on the standard 6x7 board.
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self {
            state: GameState::new(&config),
            config,
        }
    }

    /// Create an engine with explicit board dimensions.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(&config),
            config,
        })
    }

    /// Start a new game with the current dimensions.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config);
        info!(
            "new {}x{} game started",
            self.config.height, self.config.width
        );
    }

    /// Start a new game with new dimensions.
    ///
    /// An invalid config leaves the current game untouched.
    pub fn reset_with(&mut self, config: EngineConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_terminal(&self) -> bool {
        self.state.status.is_terminal()
    }

    pub fn last_placement(&self) -> Option<Placement> {
        self.state.last_placement
    }

    /// Columns with at least one empty cell, ascending.
    pub fn legal_columns(&self) -> Vec<usize> {
        self.state.board.open_columns()
    }

    /// Row a piece dropped in `column` would land on, or `None` if the column
    /// is full. Does not modify the board.
    pub fn find_drop_row<C: TryInto<usize>>(&self, column: C) -> Result<Option<usize>, MoveError> {
        let column = self.check_column(column)?;
        Ok(self.state.board.find_drop_row(column))
    }

    /// Drop the current player's piece into `column`.
    ///
    /// After placing, the whole board is scanned for a line of four owned by
    /// the mover; only the mover can have completed one.
    pub fn drop_piece<C: TryInto<usize>>(&mut self, column: C) -> Result<MoveOutcome, MoveError> {
        let column = self.check_column(column)?;

        if self.state.status.is_terminal() {
            debug!("rejected move in column {column}: game {}", self.state.status);
            return Err(MoveError::GameAlreadyOver {
                status: self.state.status,
            });
        }

        let Some(row) = self.state.board.find_drop_row(column) else {
            debug!("rejected move in column {column}: column full");
            return Err(MoveError::ColumnFull { column });
        };

        let player = self.state.current_player;
        let state = &mut self.state;
        state.board.set(Position::new(row, column), Cell::from(player));
        state.last_placement = Some(Placement {
            row,
            column,
            player,
        });
        debug!("{player} dropped into column {column}, landed on row {row}");

        let outcome = if state.board.has_win(player) {
            state.status = GameStatus::Won(player);
            MoveOutcome::Win(player)
        } else if state.board.is_full() {
            state.status = GameStatus::Tied;
            MoveOutcome::Tie
        } else {
            state.current_player = player.other();
            MoveOutcome::Continue(state.current_player)
        };

        if outcome.is_terminal() {
            state.ended_at = Some(chrono::Utc::now());
            info!(
                "game over after {} pieces: {}",
                state.board.piece_count(),
                state.status
            );
        }

        Ok(outcome)
    }

    /// The positions of the winning line, once the game is won.
    pub fn winning_run(&self) -> Option<[Position; CONNECT]> {
        let winner = self.state.status.winner()?;
        self.state.board.winning_run(winner)
    }

    fn check_column<C: TryInto<usize>>(&self, column: C) -> Result<usize, MoveError> {
        match column.try_into() {
            Ok(col) if col < self.config.width => Ok(col),
            _ => Err(MoveError::InvalidColumn {
                width: self.config.width,
            }),
        }
    }

    /// Convert full game state to JSON snapshot.
    pub fn to_json(&self) -> serde_json::Value {
        let state = &self.state;
        serde_json::json!({
            "height": self.config.height,
            "width": self.config.width,
            "board": state.board.to_json(),
            "current_player": state.current_player.number(),
            "current_color": state.current_player.color(),
            "status": state.status.as_str(),
            "winner": state.status.winner().map(Player::number),
            "winning_run": self
                .winning_run()
                .map(|run| run.iter().map(Position::to_json).collect::<Vec<_>>()),
            "last_placement": state.last_placement.map(|p| serde_json::json!({
                "row": p.row,
                "col": p.column,
                "player": p.player.number()
            })),
            "legal_columns": self.legal_columns(),
            "started_at": state.started_at.to_rfc3339(),
            "ended_at": state.ended_at.map(|t| t.to_rfc3339())
        })
    }
}

/// Game manager - tracks independent games by ID.
#[derive(Debug, Default)]
pub struct GameManager {
    games: HashMap<String, GameEngine>,
}

impl GameManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game with the given dimensions.
    pub fn create(
        &mut self,
        game_id: impl Into<String>,
        config: EngineConfig,
    ) -> Result<&mut GameEngine, ManagerError> {
        let game_id = game_id.into();
        if self.games.contains_key(&game_id) {
            return Err(ManagerError::DuplicateGame(game_id));
        }
        let engine = GameEngine::with_config(config)?;
        info!("created game {game_id}");
        Ok(self.games.entry(game_id).or_insert(engine))
    }

    /// Add an existing engine under an ID.
    pub fn add(
        &mut self,
        game_id: impl Into<String>,
        engine: GameEngine,
    ) -> Result<(), ManagerError> {
        let game_id = game_id.into();
        if self.games.contains_key(&game_id) {
            return Err(ManagerError::DuplicateGame(game_id));
        }
        self.games.insert(game_id, engine);
        Ok(())
    }

    /// Get a game.
    pub fn get(&self, game_id: &str) -> Option<&GameEngine> {
        self.games.get(game_id)
    }

    /// Get a mutable game.
    pub fn get_mut(&mut self, game_id: &str) -> Option<&mut GameEngine> {
        self.games.get_mut(game_id)
    }

    /// Make a move in one game.
    pub fn drop_piece<C: TryInto<usize>>(
        &mut self,
        game_id: &str,
        column: C,
    ) -> Result<MoveOutcome, ManagerError> {
        let engine = self
            .games
            .get_mut(game_id)
            .ok_or_else(|| ManagerError::UnknownGame(game_id.to_string()))?;
        Ok(engine.drop_piece(column)?)
    }

    /// Remove a game.
    pub fn remove(&mut self, game_id: &str) -> Option<GameEngine> {
        self.games.remove(game_id)
    }

    /// Remove games that reached a terminal status, returning their IDs.
    pub fn cleanup_finished(&mut self) -> Vec<String> {
        let mut finished: Vec<String> = self
            .games
            .iter()
            .filter(|(_, g)| g.is_terminal())
            .map(|(id, _)| id.clone())
            .collect();
        finished.sort();

        for id in &finished {
            self.games.remove(id);
        }

        finished
    }

    /// Count games still in progress.
    pub fn active_count(&self) -> usize {
        self.games.values().filter(|g| !g.is_terminal()).count()
    }

    /// Total game count.
    pub fn count(&self) -> usize {
        self.games.len()
    }
}
