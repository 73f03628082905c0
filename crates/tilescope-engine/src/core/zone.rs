use serde::{Deserialize, Serialize};

use super::{
    color::RowIndex,
    geometry::{Point, polygon_contains},
};

/// Role a zone plays in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    /// Factory display; tiles are picked from here.
    Display,
    /// Shared center (floor) area; tiles are picked from here too.
    Center,
    /// Pattern row receiving picked tiles.
    Row(RowIndex),
    /// Completed-color area paired with a pattern row.
    Square(RowIndex),
}

impl ZoneKind {
    /// Whether tiles can be picked from zones of this kind.
    #[must_use]
    pub const fn is_source(self) -> bool {
        matches!(self, Self::Display | Self::Center)
    }
}

/// A named quadrilateral region of the board.
///
/// Boundary vertices are in normalized coordinates and their order is significant
/// for the containment test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    name: String,
    kind: ZoneKind,
    boundary: [Point; 4],
}

impl Zone {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ZoneKind, boundary: [Point; 4]) -> Self {
        Self {
            name: name.into(),
            kind,
            boundary,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    #[must_use]
    pub fn boundary(&self) -> &[Point; 4] {
        &self.boundary
    }

    /// Returns whether `point` falls inside this zone (even-odd rule).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        polygon_contains(&self.boundary, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(n: u8) -> RowIndex {
        RowIndex::new(n).unwrap()
    }

    #[test]
    fn test_source_kinds() {
        assert!(ZoneKind::Display.is_source());
        assert!(ZoneKind::Center.is_source());
        assert!(!ZoneKind::Row(row(1)).is_source());
        assert!(!ZoneKind::Square(row(5)).is_source());
    }

    #[test]
    fn test_zone_kind_json_shape() {
        assert_eq!(
            serde_json::to_string(&ZoneKind::Display).unwrap(),
            "\"display\""
        );
        assert_eq!(
            serde_json::to_string(&ZoneKind::Row(row(3))).unwrap(),
            "{\"row\":3}"
        );
        let kind: ZoneKind = serde_json::from_str("{\"square\":2}").unwrap();
        assert_eq!(kind, ZoneKind::Square(row(2)));
        assert!(serde_json::from_str::<ZoneKind>("{\"row\":0}").is_err());
    }

    #[test]
    fn test_zone_contains_follows_vertex_order() {
        let boundary = [
            Point::new(0.2, 0.2),
            Point::new(0.4, 0.2),
            Point::new(0.4, 0.4),
            Point::new(0.2, 0.4),
        ];
        let zone = Zone::new("disp1", ZoneKind::Display, boundary);
        assert!(zone.contains(Point::new(0.3, 0.3)));
        assert!(!zone.contains(Point::new(0.5, 0.3)));

        // Swapping two vertices turns the square into a bow tie.
        let twisted = Zone::new(
            "disp1",
            ZoneKind::Display,
            [boundary[0], boundary[2], boundary[1], boundary[3]],
        );
        assert!(!twisted.contains(Point::new(0.3, 0.22)));
        assert!(zone.contains(Point::new(0.3, 0.22)));
    }
}
