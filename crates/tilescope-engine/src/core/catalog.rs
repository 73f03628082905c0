use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

use super::{
    color::RowIndex,
    geometry::Point,
    zone::{Zone, ZoneKind},
};

const fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

const R1: RowIndex = RowIndex::ALL[0];
const R2: RowIndex = RowIndex::ALL[1];
const R3: RowIndex = RowIndex::ALL[2];
const R4: RowIndex = RowIndex::ALL[3];
const R5: RowIndex = RowIndex::ALL[4];

/// Guide polygons for a 640x480 top-down-ish camera placed in front of one player board.
///
/// The completed-color area is a single quad on the board; it is cut into five strips
/// parallel to the pattern rows, row 1 on top.
const STANDARD_LAYOUT: [(&str, ZoneKind, [Point; 4]); 16] = [
    ("disp1", ZoneKind::Display, [pt(0.03, 0.44), pt(0.2, 0.38), pt(0.24, 0.5), pt(0.08, 0.56)]),
    ("disp2", ZoneKind::Display, [pt(0.22, 0.37), pt(0.35, 0.32), pt(0.41, 0.41), pt(0.27, 0.47)]),
    ("disp3", ZoneKind::Display, [pt(0.38, 0.32), pt(0.49, 0.28), pt(0.55, 0.35), pt(0.44, 0.4)]),
    ("disp4", ZoneKind::Display, [pt(0.51, 0.28), pt(0.61, 0.24), pt(0.66, 0.3), pt(0.56, 0.34)]),
    ("disp5", ZoneKind::Display, [pt(0.62, 0.24), pt(0.7, 0.21), pt(0.76, 0.27), pt(0.68, 0.3)]),
    ("middle", ZoneKind::Center, [pt(0.02, 0.3), pt(0.56, 0.14), pt(0.63, 0.23), pt(0.07, 0.41)]),
    ("row1", ZoneKind::Row(R1), [pt(0.57, 0.5), pt(0.61, 0.49), pt(0.63, 0.5), pt(0.6, 0.53)]),
    ("row2", ZoneKind::Row(R2), [pt(0.57, 0.55), pt(0.63, 0.51), pt(0.66, 0.53), pt(0.59, 0.57)]),
    ("row3", ZoneKind::Row(R3), [pt(0.56, 0.6), pt(0.66, 0.53), pt(0.69, 0.57), pt(0.59, 0.63)]),
    ("row4", ZoneKind::Row(R4), [pt(0.55, 0.66), pt(0.69, 0.57), pt(0.72, 0.61), pt(0.59, 0.7)]),
    ("row5", ZoneKind::Row(R5), [pt(0.55, 0.73), pt(0.73, 0.61), pt(0.76, 0.64), pt(0.58, 0.77)]),
    ("sqr1", ZoneKind::Square(R1), [pt(0.62, 0.48), pt(0.75, 0.41), pt(0.78, 0.434), pt(0.652, 0.51)]),
    ("sqr2", ZoneKind::Square(R2), [pt(0.652, 0.51), pt(0.78, 0.434), pt(0.81, 0.458), pt(0.684, 0.54)]),
    ("sqr3", ZoneKind::Square(R3), [pt(0.684, 0.54), pt(0.81, 0.458), pt(0.84, 0.482), pt(0.716, 0.57)]),
    ("sqr4", ZoneKind::Square(R4), [pt(0.716, 0.57), pt(0.84, 0.482), pt(0.87, 0.506), pt(0.748, 0.6)]),
    ("sqr5", ZoneKind::Square(R5), [pt(0.748, 0.6), pt(0.87, 0.506), pt(0.9, 0.53), pt(0.78, 0.63)]),
];

/// The fixed, ordered set of zones frames are classified against.
///
/// Declaration order drives every downstream ordering (game state layout, pick order).
/// Each row 1..=5 is guaranteed to have exactly one row zone and one square zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Zone>", into = "Vec<Zone>")]
pub struct ZoneCatalog {
    zones: Vec<Zone>,
    rows: [usize; RowIndex::COUNT],
    squares: [usize; RowIndex::COUNT],
}

impl Default for ZoneCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl ZoneCatalog {
    /// Builds a catalog, checking names are unique and every row has its row and square zones.
    pub fn new(zones: Vec<Zone>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        let mut rows = [None; RowIndex::COUNT];
        let mut squares = [None; RowIndex::COUNT];

        for (i, zone) in zones.iter().enumerate() {
            if !names.insert(zone.name()) {
                return Err(CatalogError::DuplicateZone(zone.name().to_owned()));
            }
            match zone.kind() {
                ZoneKind::Display | ZoneKind::Center => {}
                ZoneKind::Row(row) => {
                    if rows[row.offset()].replace(i).is_some() {
                        return Err(CatalogError::DuplicateRow(row));
                    }
                }
                ZoneKind::Square(row) => {
                    if squares[row.offset()].replace(i).is_some() {
                        return Err(CatalogError::DuplicateSquare(row));
                    }
                }
            }
        }

        let mut row_positions = [0; RowIndex::COUNT];
        let mut square_positions = [0; RowIndex::COUNT];
        for row in RowIndex::ALL {
            row_positions[row.offset()] =
                rows[row.offset()].ok_or(CatalogError::MissingRow(row))?;
            square_positions[row.offset()] =
                squares[row.offset()].ok_or(CatalogError::MissingSquare(row))?;
        }

        Ok(Self {
            zones,
            rows: row_positions,
            squares: square_positions,
        })
    }

    /// The built-in layout: `disp1`..`disp5`, `middle`, `row1`..`row5`, `sqr1`..`sqr5`.
    #[must_use]
    pub fn standard() -> Self {
        let zones = STANDARD_LAYOUT
            .iter()
            .map(|(name, kind, boundary)| Zone::new(*name, *kind, *boundary))
            .collect();
        Self::new(zones).expect("standard layout covers every row exactly once")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.iter()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Zone> {
        self.position(name).map(|i| &self.zones[i])
    }

    /// Position of the named zone in declaration order.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.zones.iter().position(|zone| zone.name() == name)
    }

    #[must_use]
    pub fn row_zone(&self, row: RowIndex) -> &Zone {
        &self.zones[self.rows[row.offset()]]
    }

    #[must_use]
    pub fn square_zone(&self, row: RowIndex) -> &Zone {
        &self.zones[self.squares[row.offset()]]
    }

    pub(crate) fn row_position(&self, row: RowIndex) -> usize {
        self.rows[row.offset()]
    }

    pub(crate) fn square_position(&self, row: RowIndex) -> usize {
        self.squares[row.offset()]
    }

    /// Every zone containing `point`, in declaration order. Zones may overlap.
    pub fn zones_containing(&self, point: Point) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.iter().filter(move |zone| zone.contains(point))
    }
}

impl TryFrom<Vec<Zone>> for ZoneCatalog {
    type Error = CatalogError;

    fn try_from(zones: Vec<Zone>) -> Result<Self, Self::Error> {
        Self::new(zones)
    }
}

impl From<ZoneCatalog> for Vec<Zone> {
    fn from(catalog: ZoneCatalog) -> Self {
        catalog.zones
    }
}
