//! Frame-by-frame driver tying detection, classification and ranking together.
//!
//! A [`FramePipeline`] pulls [`Frame`](tilescope_engine::Frame)s from a
//! [`FrameSource`] at the pace of a [`FrameCadence`], turns each frame into a
//! [`Snapshot`] (game state + ranked plays) and hands it to a [`SnapshotSink`].
//!
//! Frames are handled strictly one at a time. Every frame is classified into a
//! fresh game state, and the snapshot built from it replaces the previously
//! published one in a single step, so readers only ever see complete snapshots.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use tilescope_runtime::{FrameCadence, FramePipeline, JsonLinesFrameSource, Snapshot};
//!
//! let input = r#"{"width": 640, "height": 480, "predictions": [
//!     {"class": "red", "bbox": {"x": 90, "y": 225, "width": 20, "height": 20}}
//! ]}"#;
//!
//! let mut pipeline = FramePipeline::default();
//! let mut source = JsonLinesFrameSource::new(Cursor::new(input.replace('\n', "")));
//! let mut published: Vec<Snapshot> = vec![];
//!
//! let frames = pipeline
//!     .run(&mut source, &mut published, &mut FrameCadence::unpaced())
//!     .unwrap();
//! assert_eq!(frames, 1);
//! assert_eq!(published[0].ranking()[0].score(), 3);
//! ```

pub use self::{cadence::*, pipeline::*, sink::*, source::*};

mod cadence;
mod pipeline;
mod sink;
mod source;
