use serde::{Serialize, ser::SerializeMap as _};

use crate::{
    UnknownZoneError,
    core::{ColorClass, RowIndex, ZoneCatalog, ZoneKind},
};

use super::frame::Detection;

/// Tiles observed in a single zone, in detection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTiles {
    name: String,
    kind: ZoneKind,
    tiles: Vec<ColorClass>,
}

impl ZoneTiles {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    #[must_use]
    pub fn tiles(&self) -> &[ColorClass] {
        &self.tiles
    }

    /// Number of tiles of `color` in this zone.
    #[must_use]
    pub fn count_of(&self, color: &ColorClass) -> usize {
        self.tiles.iter().filter(|c| *c == color).count()
    }
}

/// Snapshot of the board built from one frame.
///
/// Holds an entry for every zone of the catalog it was built against (possibly
/// empty) and nothing else. A snapshot is never modified once built; the next frame
/// produces a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    zones: Vec<ZoneTiles>,
    rows: [usize; RowIndex::COUNT],
    squares: [usize; RowIndex::COUNT],
}

impl GameState {
    /// State with every zone of `catalog` empty.
    #[must_use]
    pub fn empty(catalog: &ZoneCatalog) -> Self {
        let zones = catalog
            .iter()
            .map(|zone| ZoneTiles {
                name: zone.name().to_owned(),
                kind: zone.kind(),
                tiles: vec![],
            })
            .collect();
        let rows = RowIndex::ALL.map(|row| catalog.row_position(row));
        let squares = RowIndex::ALL.map(|row| catalog.square_position(row));
        Self {
            zones,
            rows,
            squares,
        }
    }

    /// Classifies one frame's detections into zones.
    ///
    /// Each detection is tested against every zone and appended to all zones that
    /// contain its center: overlapping zones each receive the tile, and a detection
    /// outside every zone is dropped.
    #[must_use]
    pub fn classify(detections: &[Detection], catalog: &ZoneCatalog) -> Self {
        let mut state = Self::empty(catalog);
        for detection in detections {
            let mut matched = 0;
            for (zone, tiles) in catalog.iter().zip(&mut state.zones) {
                if zone.contains(detection.center) {
                    tiles.tiles.push(detection.color.clone());
                    matched += 1;
                }
            }
            if matched == 0 {
                tracing::trace!(
                    color = %detection.color,
                    x = detection.center.x,
                    y = detection.center.y,
                    "detection outside every zone",
                );
            } else if matched > 1 {
                tracing::trace!(
                    color = %detection.color,
                    zones = matched,
                    "detection inside overlapping zones",
                );
            }
        }
        state
    }

    /// Builds a state from explicit zone contents.
    ///
    /// Zones not mentioned stay empty; a zone mentioned twice gets both lists appended.
    pub fn from_contents<I, N, C>(catalog: &ZoneCatalog, contents: I) -> Result<Self, UnknownZoneError>
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: IntoIterator,
        C::Item: Into<ColorClass>,
    {
        let mut state = Self::empty(catalog);
        for (name, colors) in contents {
            let name = name.as_ref();
            let position = catalog.position(name).ok_or_else(|| UnknownZoneError {
                name: name.to_owned(),
            })?;
            state.zones[position]
                .tiles
                .extend(colors.into_iter().map(Into::into));
        }
        Ok(state)
    }

    /// All zones in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ZoneTiles> + '_ {
        self.zones.iter()
    }

    /// Zones tiles can be picked from (displays and the center), in catalog order.
    pub fn source_zones(&self) -> impl Iterator<Item = &ZoneTiles> + '_ {
        self.zones.iter().filter(|zone| zone.kind.is_source())
    }

    #[must_use]
    pub fn zone(&self, name: &str) -> Option<&[ColorClass]> {
        self.zones
            .iter()
            .find(|zone| zone.name == name)
            .map(|zone| zone.tiles.as_slice())
    }

    /// Tiles currently placed on pattern row `row`.
    #[must_use]
    pub fn row(&self, row: RowIndex) -> &[ColorClass] {
        &self.zones[self.rows[row.offset()]].tiles
    }

    /// Colors already completed for `row`.
    #[must_use]
    pub fn square(&self, row: RowIndex) -> &[ColorClass] {
        &self.zones[self.squares[row.offset()]].tiles
    }

    #[must_use]
    pub fn total_tiles(&self) -> usize {
        self.zones.iter().map(|zone| zone.tiles.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.iter().all(|zone| zone.tiles.is_empty())
    }
}

/// Flat object of zone name to color list, in catalog order.
impl Serialize for GameState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.zones.len()))?;
        for zone in &self.zones {
            map.serialize_entry(&zone.name, &zone.tiles)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::core::{Point, Zone};

    // Points well inside the standard guides.
    const IN_DISP1: Point = Point::new(0.14, 0.47);
    const IN_DISP3: Point = Point::new(0.46, 0.34);
    const IN_MIDDLE: Point = Point::new(0.3, 0.28);
    const IN_ROW3: Point = Point::new(0.62, 0.58);
    const OUTSIDE: Point = Point::new(0.95, 0.95);

    fn det(color: &str, center: Point) -> Detection {
        Detection::new(color, center)
    }

    fn row(n: u8) -> RowIndex {
        RowIndex::new(n).unwrap()
    }

    #[test]
    fn test_empty_frame_gives_all_empty_state() {
        let catalog = ZoneCatalog::standard();
        let state = GameState::classify(&[], &catalog);
        assert!(state.is_empty());
        assert_eq!(state.total_tiles(), 0);
        assert_eq!(state.iter().count(), catalog.len());
        for zone in catalog.iter() {
            assert_eq!(state.zone(zone.name()), Some(&[][..]));
        }
        assert_eq!(state, GameState::empty(&catalog));
    }

    #[test]
    fn test_classify_appends_in_detection_order() {
        let catalog = ZoneCatalog::standard();
        let detections = [
            det("red", IN_DISP1),
            det("black", IN_ROW3),
            det("yellow", IN_DISP1),
            det("red", IN_DISP1),
            det("dark_blue", IN_MIDDLE),
        ];
        let state = GameState::classify(&detections, &catalog);

        let disp1: Vec<&str> = state.zone("disp1").unwrap().iter().map(ColorClass::as_str).collect();
        assert_eq!(disp1, ["red", "yellow", "red"]);
        assert_eq!(state.row(row(3)), &[ColorClass::from("black")]);
        assert_eq!(state.zone("middle").unwrap(), &[ColorClass::from("dark_blue")]);
        assert_eq!(state.total_tiles(), 5);
    }

    #[test]
    fn test_detection_outside_every_zone_is_dropped() {
        let catalog = ZoneCatalog::standard();
        let state = GameState::classify(&[det("red", OUTSIDE), det("red", IN_DISP3)], &catalog);
        assert_eq!(state.total_tiles(), 1);
        assert_eq!(state.zone("disp3").unwrap(), &[ColorClass::from("red")]);
    }

    #[test]
    fn test_overlapping_zones_each_receive_the_tile() {
        let mut zones: Vec<Zone> = ZoneCatalog::standard().zones().to_vec();
        // A second display covering the same area as disp1.
        let disp1 = *zones[0].boundary();
        zones.insert(1, Zone::new("disp1_shadow", ZoneKind::Display, disp1));
        let catalog = ZoneCatalog::new(zones).unwrap();

        let state = GameState::classify(&[det("yellow", IN_DISP1)], &catalog);
        assert_eq!(state.zone("disp1").unwrap(), &[ColorClass::from("yellow")]);
        assert_eq!(state.zone("disp1_shadow").unwrap(), &[ColorClass::from("yellow")]);
        assert_eq!(state.total_tiles(), 2);
    }

    #[test]
    fn test_from_contents() {
        let catalog = ZoneCatalog::standard();
        let state = GameState::from_contents(
            &catalog,
            [("disp1", vec!["red", "red"]), ("sqr2", vec!["red"])],
        )
        .unwrap();
        assert_eq!(state.zone("disp1").unwrap().len(), 2);
        assert_eq!(state.square(row(2)), &[ColorClass::from("red")]);
        assert!(state.row(row(2)).is_empty());

        let err = GameState::from_contents(&catalog, [("floor", vec!["red"])]).unwrap_err();
        assert_eq!(err.name, "floor");
        assert_eq!(err.to_string(), "unknown zone: floor");
    }

    #[test]
    fn test_source_zones_are_displays_and_center() {
        let state = GameState::empty(&ZoneCatalog::standard());
        let names: Vec<&str> = state.source_zones().map(ZoneTiles::name).collect();
        assert_eq!(names, ["disp1", "disp2", "disp3", "disp4", "disp5", "middle"]);
    }

    #[test]
    fn test_serializes_as_flat_object_in_catalog_order() {
        let catalog = ZoneCatalog::standard();
        let state = GameState::from_contents(&catalog, [("row1", ["black"])]).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.starts_with(r#"{"disp1":[],"disp2":[]"#), "{json}");
        assert!(json.contains(r#""row1":["black"]"#), "{json}");
        assert!(json.ends_with(r#""sqr5":[]}"#), "{json}");
    }

    #[test]
    fn test_reclassifying_same_frame_is_identical() {
        let catalog = ZoneCatalog::standard();
        let mut rng = Pcg64Mcg::seed_from_u64(0x5eed);
        let palette = ["black", "red", "yellow", "dark_blue", "light_blue"];
        let detections: Vec<Detection> = (0..200)
            .map(|_| {
                let color = palette[rng.random_range(0..palette.len())];
                det(color, Point::new(rng.random(), rng.random()))
            })
            .collect();

        let first = GameState::classify(&detections, &catalog);
        let second = GameState::classify(&detections, &catalog);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_no_state_carried_between_frames() {
        let catalog = ZoneCatalog::standard();
        let before = GameState::classify(&[det("red", IN_DISP1)], &catalog);
        let after = GameState::classify(&[det("red", IN_DISP3)], &catalog);
        assert_eq!(before.zone("disp1").unwrap().len(), 1);
        assert!(after.zone("disp1").unwrap().is_empty());
        assert_eq!(after.zone("disp3").unwrap().len(), 1);
    }

    #[test]
    fn test_count_of() {
        let catalog = ZoneCatalog::standard();
        let state =
            GameState::from_contents(&catalog, [("disp2", ["red", "black", "red"])]).unwrap();
        let disp2 = state.iter().find(|z| z.name() == "disp2").unwrap();
        assert_eq!(disp2.count_of(&ColorClass::from("red")), 2);
        assert_eq!(disp2.count_of(&ColorClass::from("yellow")), 0);
    }
}
