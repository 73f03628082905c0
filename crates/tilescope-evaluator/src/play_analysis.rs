//! Row arithmetic for a single play.
//!
//! All quantities are signed. A noisy frame can show more tiles on a row than it
//! holds, making the remaining capacity negative; the formulas are applied as-is
//! in that case rather than clamped.

use tilescope_engine::GameState;

use crate::play::Play;

/// What happens to the target row if a play is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayAnalysis {
    capacity: i32,
    current_tiles: i32,
    picked_tiles: i32,
}

fn to_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

impl PlayAnalysis {
    #[must_use]
    pub fn new(capacity: i32, current_tiles: i32, picked_tiles: i32) -> Self {
        Self {
            capacity,
            current_tiles,
            picked_tiles,
        }
    }

    /// Analyzes `play` against the current contents of its target row.
    #[must_use]
    pub fn from_state(state: &GameState, play: &Play) -> Self {
        let row = play.target_row();
        Self::new(
            to_i32(row.capacity()),
            to_i32(state.row(row).len()),
            to_i32(play.pick().count()),
        )
    }

    /// Tiles the row holds when complete (equal to the row number).
    #[must_use]
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    #[must_use]
    pub fn current_tiles(&self) -> i32 {
        self.current_tiles
    }

    #[must_use]
    pub fn picked_tiles(&self) -> i32 {
        self.picked_tiles
    }

    #[must_use]
    pub fn remaining_capacity(&self) -> i32 {
        self.capacity - self.current_tiles
    }

    /// Picked tiles that find a place on the row.
    #[must_use]
    pub fn fitting_tiles(&self) -> i32 {
        self.remaining_capacity().min(self.picked_tiles)
    }

    /// Row length after the play.
    #[must_use]
    pub fn final_tile_count(&self) -> i32 {
        self.current_tiles + self.fitting_tiles()
    }

    /// Spaces still open on the row after the play.
    #[must_use]
    pub fn empty_spaces_after(&self) -> i32 {
        (self.remaining_capacity() - self.picked_tiles).max(0)
    }

    /// Picked tiles that do not fit.
    #[must_use]
    pub fn overflow_tiles(&self) -> i32 {
        (self.picked_tiles - self.remaining_capacity()).max(0)
    }

    /// Whether the row is complete after the play.
    #[must_use]
    pub fn completes_row(&self) -> bool {
        self.final_tile_count() >= self.capacity
    }
}
