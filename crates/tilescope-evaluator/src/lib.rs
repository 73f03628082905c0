//! Move enumeration and ranking for a classified board.
//!
//! Evaluation runs in three layers, each built on the previous one:
//!
//! 1. **Picks** ([`pick`]) - Every way to take all tiles of one color from one
//!    display or from the center.
//! 2. **Plays** ([`play`]) - Every pick paired with a pattern row that may legally
//!    receive it.
//! 3. **Ranking** ([`move_ranker`]) - Every play scored by a [`PlayEvaluator`] and
//!    sorted best first.
//!
//! # Architecture
//!
//! ```text
//! MoveRanker (sort plays by score)
//!     ↓ uses
//! PlayEvaluator (score a single play)
//!     ↓ uses
//! PlayAnalysis (row capacity, fit, overflow of a single play)
//! ```
//!
//! # Placement Rules
//!
//! A pick may go to row `N` only if
//!
//! - the square zone of row `N` does not already hold that color, and
//! - row `N` is empty or holds only that color.
//!
//! # Example
//!
//! ```
//! use tilescope_engine::{GameState, ZoneCatalog};
//! use tilescope_evaluator::move_ranker::MoveRanker;
//!
//! let catalog = ZoneCatalog::standard();
//! let state = GameState::from_contents(&catalog, [("disp1", ["red", "red", "red"])]).unwrap();
//!
//! let ranker = MoveRanker::default();
//! let ranking = ranker.rank(&state);
//!
//! // Three red tiles fill row 3 exactly.
//! assert_eq!(ranking[0].play().target_row().get(), 3);
//! assert_eq!(ranking[0].score(), 9);
//! ```
//!
//! [`PlayEvaluator`]: play_evaluator::PlayEvaluator

pub mod move_ranker;
pub mod pick;
pub mod play;
pub mod play_analysis;
pub mod play_evaluator;
