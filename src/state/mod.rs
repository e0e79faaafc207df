//! Game state module.
//!
//! - `player` - the two players and cell contents
//! - `board` - grid, drop-row lookup, win detection
//! - `game` - the engine state machine and the multi-game manager
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                 GameManager                   │
//! │      game_id → GameEngine                     │
//! │                                               │
//! │  ┌─────────────────────────────────────────┐  │
//! │  │ GameEngine                              │  │
//! │  │   config: EngineConfig (height, width)  │  │
//! │  │   state:  GameState                     │  │
//! │  │             board, current player,      │  │
//! │  │             status, last placement      │  │
//! │  └─────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! A presentation layer calls [`GameEngine::drop_piece`] with a column taken from
//! user input and redraws from the returned [`MoveOutcome`]; it never touches the
//! board directly.

pub mod board;
pub mod game;
pub mod player;

pub use board::{Board, Position, CONNECT};
pub use game::{GameEngine, GameManager, GameState, GameStatus, MoveOutcome, Placement};
pub use player::{Cell, Player};
