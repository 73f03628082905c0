//! Play evaluation: scoring a single play.
//!
//! The [`HeuristicPlayEvaluator`] rewards plays that put tiles on the row and leave it
//! close to complete, and penalizes plays that leave it sparse or spill tiles:
//!
//! ```text
//! score = w_fit · fitting
//!       + w_final · final_tile_count
//!       - w_empty · empty_spaces_after
//!       - w_overflow · overflow_tiles
//! ```
//!
//! with weights `(1, 2, 3, 5)` ([`ScoreWeights::DEFAULT`]).

use std::fmt;

use crate::play_analysis::PlayAnalysis;

/// Assigns a score to a play (higher is better).
pub trait PlayEvaluator: fmt::Debug + Send + Sync {
    fn evaluate_play(&self, analysis: &PlayAnalysis) -> i32;
}

/// Weights of the heuristic score terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Reward per tile that fits on the row.
    pub fitting_tile: i32,
    /// Reward per tile on the row after the play.
    pub final_tile: i32,
    /// Penalty per space left open after the play.
    pub empty_space: i32,
    /// Penalty per tile that does not fit.
    pub overflow_tile: i32,
}

impl ScoreWeights {
    pub const DEFAULT: Self = Self {
        fitting_tile: 1,
        final_tile: 2,
        empty_space: 3,
        overflow_tile: 5,
    };
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Linear score over the row arithmetic of [`PlayAnalysis`].
#[derive(Debug, Clone, Default)]
pub struct HeuristicPlayEvaluator {
    weights: ScoreWeights,
}

impl HeuristicPlayEvaluator {
    #[must_use]
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn boxed() -> Box<dyn PlayEvaluator> {
        Box::new(Self::default())
    }

    #[must_use]
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }
}

impl PlayEvaluator for HeuristicPlayEvaluator {
    #[inline]
    fn evaluate_play(&self, analysis: &PlayAnalysis) -> i32 {
        let w = &self.weights;
        let mut score = 0;
        score += analysis.fitting_tiles() * w.fitting_tile;
        score += analysis.final_tile_count() * w.final_tile;
        score -= analysis.empty_spaces_after() * w.empty_space;
        score -= analysis.overflow_tiles() * w.overflow_tile;
        score
    }
}
