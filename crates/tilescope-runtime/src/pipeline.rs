use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tilescope_engine::{Frame, GameState, ZoneCatalog};
use tilescope_evaluator::move_ranker::{MoveRanker, ScoredPlay};

use crate::{
    cadence::FrameCadence,
    sink::SnapshotSink,
    source::{FrameSource, FrameSourceError},
};

/// Tunables of the frame pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Predictions with a known confidence below this are ignored.
    pub min_confidence: f64,
    /// Number of ranked plays kept in each snapshot.
    pub top_k: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.0,
            top_k: 5,
        }
    }
}

/// Everything derived from one frame. Immutable once published.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    frame_index: u64,
    published_at: DateTime<Utc>,
    state: GameState,
    ranking: Vec<ScoredPlay>,
}

impl Snapshot {
    /// Zero-based index of the frame within the run.
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    #[must_use]
    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Best plays first, at most `top_k` of them.
    #[must_use]
    pub fn ranking(&self) -> &[ScoredPlay] {
        &self.ranking
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PipelineError {
    #[display("frame source failed: {_0}")]
    Source(#[error(source)] FrameSourceError),
    #[display("failed to publish snapshot: {_0}")]
    Sink(#[error(source)] std::io::Error),
}

/// Runs classification and ranking once per frame.
#[derive(Debug)]
pub struct FramePipeline {
    catalog: ZoneCatalog,
    ranker: MoveRanker,
    config: PipelineConfig,
    latest: Option<Arc<Snapshot>>,
    frames_processed: u64,
}

impl Default for FramePipeline {
    fn default() -> Self {
        Self::new(
            ZoneCatalog::standard(),
            MoveRanker::default(),
            PipelineConfig::default(),
        )
    }
}

impl FramePipeline {
    #[must_use]
    pub fn new(catalog: ZoneCatalog, ranker: MoveRanker, config: PipelineConfig) -> Self {
        Self {
            catalog,
            ranker,
            config,
            latest: None,
            frames_processed: 0,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The most recently published snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<Arc<Snapshot>> {
        self.latest.clone()
    }

    #[must_use]
    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Classifies and ranks `frame`, then publishes the result as the latest snapshot.
    pub fn process_frame(&mut self, frame: &Frame) -> Arc<Snapshot> {
        let detections = frame.detections_above(self.config.min_confidence);
        let state = GameState::classify(&detections, &self.catalog);
        let ranking = self.ranker.top(&state, self.config.top_k);

        tracing::debug!(
            frame = self.frames_processed,
            predictions = frame.predictions.len(),
            detections = detections.len(),
            classified = state.total_tiles(),
            plays = ranking.len(),
            best_score = ranking.first().map(ScoredPlay::score),
            "processed frame",
        );

        let snapshot = Arc::new(Snapshot {
            frame_index: self.frames_processed,
            published_at: Utc::now(),
            state,
            ranking,
        });
        self.latest = Some(Arc::clone(&snapshot));
        self.frames_processed += 1;
        snapshot
    }

    /// Processes frames from `source` until it ends, publishing each snapshot to `sink`.
    ///
    /// Returns the number of frames processed by this call.
    pub fn run<S, K>(
        &mut self,
        source: &mut S,
        sink: &mut K,
        cadence: &mut FrameCadence,
    ) -> Result<u64, PipelineError>
    where
        S: FrameSource + ?Sized,
        K: SnapshotSink + ?Sized,
    {
        tracing::info!(
            interval_ms = cadence.interval().as_secs_f64() * 1000.0,
            top_k = self.config.top_k,
            min_confidence = self.config.min_confidence,
            "frame pipeline started",
        );
        let mut count = 0;
        loop {
            cadence.wait();
            let Some(frame) = source.next_frame()? else {
                break;
            };
            let snapshot = self.process_frame(&frame);
            sink.publish(&snapshot)?;
            count += 1;
        }
        tracing::info!(frames = count, "frame pipeline stopped");
        Ok(count)
    }
}
