use serde::{Deserialize, Serialize};

use crate::core::{ColorClass, Point};

/// Detector bounding box in pixels. `x`/`y` is the box center.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One raw object detection as reported by the detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "class")]
    pub color: ColorClass,
    pub bbox: BoundingBox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Everything the detector reported for a single video frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Frame width in pixels.
    pub width: f64,
    /// Frame height in pixels.
    pub height: f64,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

impl Frame {
    /// Normalizes every prediction into board coordinates.
    ///
    /// Dimensions and coordinates are not validated; a zero-sized frame yields
    /// non-finite centers that no zone contains.
    #[must_use]
    pub fn detections(&self) -> Vec<Detection> {
        self.predictions
            .iter()
            .map(|p| self.normalize(p))
            .collect()
    }

    /// Like [`Frame::detections`], dropping predictions whose confidence is below
    /// `min_confidence`. Predictions without a confidence are kept.
    #[must_use]
    pub fn detections_above(&self, min_confidence: f64) -> Vec<Detection> {
        self.predictions
            .iter()
            .filter(|p| p.confidence.is_none_or(|c| c >= min_confidence))
            .map(|p| self.normalize(p))
            .collect()
    }

    fn normalize(&self, prediction: &Prediction) -> Detection {
        Detection {
            color: prediction.color.clone(),
            center: Point::new(
                prediction.bbox.x / self.width,
                prediction.bbox.y / self.height,
            ),
        }
    }
}

/// A detected tile: its color and the normalized center of its bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub color: ColorClass,
    pub center: Point,
}

impl Detection {
    #[must_use]
    pub fn new(color: impl Into<ColorClass>, center: Point) -> Self {
        Self {
            color: color.into(),
            center,
        }
    }
}
