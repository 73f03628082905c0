//! Static description of the observed board.
//!
//! - [`Point`] - Position in normalized (0..1) frame coordinates
//! - [`ColorClass`] - Tile color label as reported by the detector
//! - [`RowIndex`] - Pattern row number (1..=5), which is also the row capacity
//! - [`Zone`] / [`ZoneKind`] - Named quadrilateral region of the board and its role
//! - [`ZoneCatalog`] - The fixed set of zones a frame is classified against

pub use self::{catalog::*, color::*, geometry::*, zone::*};

pub(crate) mod catalog;
pub(crate) mod color;
pub(crate) mod geometry;
pub(crate) mod zone;
