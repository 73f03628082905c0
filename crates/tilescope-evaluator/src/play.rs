//! Plays: a pick sent to a pattern row.
//!
//! A row may receive a pick only when both placement rules hold:
//!
//! - **Not completed** - the row's square zone does not already hold the pick's color.
//!   Once a color is completed for a row, that row is closed to it for good.
//! - **Single color** - the row is empty or holds only the pick's color.
//!
//! Capacity is not a legality rule; tiles that do not fit are overflow, which the
//! [`play_evaluator`](crate::play_evaluator) penalizes.

use arrayvec::ArrayVec;
use serde::Serialize;
use tilescope_engine::{GameState, RowIndex};

use crate::pick::{Pick, list_picks};

/// A pick placed on pattern row `target_row`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Play {
    pick: Pick,
    #[serde(rename = "row")]
    target_row: RowIndex,
}

impl Play {
    #[must_use]
    pub fn new(pick: Pick, target_row: RowIndex) -> Self {
        Self { pick, target_row }
    }

    #[must_use]
    pub fn pick(&self) -> &Pick {
        &self.pick
    }

    #[must_use]
    pub fn target_row(&self) -> RowIndex {
        self.target_row
    }
}

/// Returns whether `pick` may be placed on `row` in `state`.
#[must_use]
pub fn is_legal(state: &GameState, pick: &Pick, row: RowIndex) -> bool {
    let color = pick.color();
    let completed = state.square(row).contains(color);
    let single_color = state.row(row).iter().all(|c| c == color);
    !completed && single_color
}

/// Rows that may legally receive `pick`, ascending.
#[must_use]
pub fn legal_rows(state: &GameState, pick: &Pick) -> ArrayVec<RowIndex, { RowIndex::COUNT }> {
    RowIndex::ALL
        .into_iter()
        .filter(|row| is_legal(state, pick, *row))
        .collect()
}

/// Lists every legal play in `state`: picks in [`list_picks`] order, rows 1..=5 within
/// each pick.
#[must_use]
pub fn list_plays(state: &GameState) -> Vec<Play> {
    list_picks(state)
        .into_iter()
        .flat_map(|pick| {
            legal_rows(state, &pick)
                .into_iter()
                .map(move |row| Play::new(pick.clone(), row))
        })
        .collect()
}
