//! Picks: taking every tile of one color from one source zone.
//!
//! Source zones are the displays and the shared center. Picks are listed zone by zone
//! in catalog order, and within a zone in the order each color was first detected.

use serde::Serialize;
use tilescope_engine::{ColorClass, GameState, ZoneTiles};

/// Take all `count` tiles of `color` from `source_zone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Pick {
    source_zone: String,
    color: ColorClass,
    count: usize,
}

impl Pick {
    #[must_use]
    pub fn new(source_zone: impl Into<String>, color: impl Into<ColorClass>, count: usize) -> Self {
        Self {
            source_zone: source_zone.into(),
            color: color.into(),
            count,
        }
    }

    #[must_use]
    pub fn source_zone(&self) -> &str {
        &self.source_zone
    }

    #[must_use]
    pub fn color(&self) -> &ColorClass {
        &self.color
    }

    /// Number of tiles taken.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Lists every pick available in `state`.
#[must_use]
pub fn list_picks(state: &GameState) -> Vec<Pick> {
    state.source_zones().flat_map(zone_picks).collect()
}

fn zone_picks(zone: &ZoneTiles) -> impl Iterator<Item = Pick> + '_ {
    let mut groups: Vec<(&ColorClass, usize)> = vec![];
    for color in zone.tiles() {
        match groups.iter_mut().find(|(c, _)| *c == color) {
            Some((_, count)) => *count += 1,
            None => groups.push((color, 1)),
        }
    }
    groups
        .into_iter()
        .map(|(color, count)| Pick::new(zone.name(), color.clone(), count))
}
