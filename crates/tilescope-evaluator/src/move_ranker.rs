//! Move ranking: ordering every legal play of a game state.
//!
//! # How It Works
//!
//! 1. **Enumerate Plays** - [`list_plays`] yields every legal (pick, row) pair
//! 2. **Score Each Play** - the play evaluator scores the row arithmetic of each play
//! 3. **Sort** - plays are stably sorted by descending score, so plays with equal
//!    scores keep their enumeration order
//!
//! The ranking covers every legal play; cutting it down to the first few entries
//! ([`MoveRanker::top`]) is a plain truncation.
//!
//! # Design: Greedy One-Step Lookahead
//!
//! Only the immediate play is scored. Wall adjacency bonuses, end-of-round floor
//! penalties and what opponents can take next are not considered.

use serde::Serialize;
use tilescope_engine::GameState;

use crate::{
    play::{Play, list_plays},
    play_analysis::PlayAnalysis,
    play_evaluator::{HeuristicPlayEvaluator, PlayEvaluator},
};

/// A play with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredPlay {
    #[serde(flatten)]
    play: Play,
    score: i32,
}

impl ScoredPlay {
    #[must_use]
    pub fn play(&self) -> &Play {
        &self.play
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }
}

/// Scores and orders the legal plays of a game state.
#[derive(Debug)]
pub struct MoveRanker {
    play_evaluator: Box<dyn PlayEvaluator>,
}

impl Default for MoveRanker {
    fn default() -> Self {
        Self::new(HeuristicPlayEvaluator::boxed())
    }
}

impl MoveRanker {
    #[must_use]
    pub fn new(play_evaluator: Box<dyn PlayEvaluator>) -> Self {
        Self { play_evaluator }
    }

    fn score(&self, state: &GameState, play: Play) -> ScoredPlay {
        let analysis = PlayAnalysis::from_state(state, &play);
        let score = self.play_evaluator.evaluate_play(&analysis);
        ScoredPlay { play, score }
    }

    /// All legal plays, best first. Ties keep enumeration order.
    #[must_use]
    pub fn rank(&self, state: &GameState) -> Vec<ScoredPlay> {
        let mut ranking: Vec<ScoredPlay> = list_plays(state)
            .into_iter()
            .map(|play| self.score(state, play))
            .collect();
        ranking.sort_by(|a, b| b.score.cmp(&a.score));
        tracing::trace!(plays = ranking.len(), "ranked plays");
        ranking
    }

    /// The first `k` entries of [`MoveRanker::rank`].
    #[must_use]
    pub fn top(&self, state: &GameState, k: usize) -> Vec<ScoredPlay> {
        let mut ranking = self.rank(state);
        ranking.truncate(k);
        ranking
    }

    /// The highest-scoring play, earliest in enumeration order on ties.
    ///
    /// Returns `None` when no play is legal.
    #[must_use]
    pub fn best(&self, state: &GameState) -> Option<ScoredPlay> {
        let mut best: Option<ScoredPlay> = None;
        for play in list_plays(state) {
            let scored = self.score(state, play);
            if best.as_ref().is_none_or(|b| scored.score > b.score) {
                best = Some(scored);
            }
        }
        best
    }
}
