//! Board model for the tile-drafting board observed through a camera.
//!
//! The crate is split the same way the data flows:
//!
//! - [`core`] - Static board description: normalized [`Point`]s, tile [`ColorClass`]es,
//!   [`RowIndex`]es and the [`ZoneCatalog`] of named quadrilateral zones.
//! - [`engine`] - Per-frame logic: normalizing detector output ([`Frame`]) into
//!   [`Detection`]s and classifying them into a [`GameState`] snapshot.
//!
//! # Example
//!
//! ```
//! use tilescope_engine::{ColorClass, Detection, GameState, Point, ZoneCatalog};
//!
//! let catalog = ZoneCatalog::standard();
//! let detections = [Detection::new("red", Point::new(0.14, 0.47))];
//!
//! let state = GameState::classify(&detections, &catalog);
//! assert_eq!(state.zone("disp1"), Some(&[ColorClass::from("red")][..]));
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A zone name that does not exist in the catalog the state was built for.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown zone: {name}")]
pub struct UnknownZoneError {
    #[error(not(source))]
    pub name: String,
}

/// Structural problems in a zone catalog.
///
/// Only names and row coverage are checked; zone geometry is taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CatalogError {
    #[display("duplicate zone name: {_0}")]
    DuplicateZone(#[error(not(source))] String),
    #[display("no row zone for row {_0}")]
    MissingRow(#[error(not(source))] RowIndex),
    #[display("more than one row zone for row {_0}")]
    DuplicateRow(#[error(not(source))] RowIndex),
    #[display("no square zone for row {_0}")]
    MissingSquare(#[error(not(source))] RowIndex),
    #[display("more than one square zone for row {_0}")]
    DuplicateSquare(#[error(not(source))] RowIndex),
}
