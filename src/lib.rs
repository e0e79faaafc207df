//! Connect Four State Library
//!
//! Rules engine and turn sequencing for Connect Four: two players alternately
//! drop pieces into a grid (6 rows by 7 columns by default), and the first to line
//! up four of their own pieces horizontally, vertically, or diagonally wins. A
//! full board with no winner is a tie.
//!
//! # Design Principles
//!
//! 1. **One mutator** - only [`GameEngine::drop_piece`](state::GameEngine::drop_piece)
//!    and `reset` change a game. Rejected moves leave it untouched.
//!
//! 2. **No globals** - every game is its own [`GameEngine`](state::GameEngine);
//!    [`GameManager`](state::GameManager) indexes many of them by ID.
//!
//! 3. **No rendering** - the engine returns structured outcomes and JSON
//!    snapshots. Drawing, animation, and input handling belong to the caller.
//!
//! 4. **Single actor** - no internal locking. Hosts that share a game across
//!    threads must serialize calls themselves.
//!
//! # Example
//!
//! ```rust
//! use connect_four_state::state::{GameEngine, GameStatus, MoveOutcome, Player};
//!
//! let mut game = GameEngine::new();
//!
//! // Player 1 stacks column 0, player 2 stacks column 1
//! for _ in 0..3 {
//!     game.drop_piece(0).unwrap();
//!     game.drop_piece(1).unwrap();
//! }
//! assert_eq!(game.find_drop_row(0).unwrap(), Some(2));
//!
//! let outcome = game.drop_piece(0).unwrap();
//! assert_eq!(outcome, MoveOutcome::Win(Player::One));
//! assert_eq!(outcome.message().as_deref(), Some("Player 1 won!"));
//! assert_eq!(game.status(), GameStatus::Won(Player::One));
//!
//! // No more moves until reset
//! assert!(game.drop_piece(3).is_err());
//! game.reset();
//! assert_eq!(game.current_player(), Player::One);
//! ```

pub mod config;
pub mod error;
pub mod state;

pub use config::EngineConfig;
pub use error::{ConfigError, ManagerError, MoveError};
