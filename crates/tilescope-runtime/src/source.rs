use std::{
    io::{self, BufRead},
    sync::mpsc::{self, Receiver, Sender, TryRecvError},
};

use tilescope_engine::Frame;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum FrameSourceError {
    #[display("failed to read frame: {_0}")]
    Io(#[error(source)] io::Error),
    #[display("invalid frame on line {line}: {source}")]
    Parse { line: usize, source: serde_json::Error },
}

/// Supplier of detector frames.
pub trait FrameSource {
    /// Returns the next frame, or `None` once the stream has ended.
    fn next_frame(&mut self) -> Result<Option<Frame>, FrameSourceError>;
}

/// Reads one JSON-encoded [`Frame`] per line. Blank lines are skipped.
#[derive(Debug)]
pub struct JsonLinesFrameSource<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R> JsonLinesFrameSource<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }
}

impl<R> FrameSource for JsonLinesFrameSource<R>
where
    R: BufRead,
{
    fn next_frame(&mut self) -> Result<Option<Frame>, FrameSourceError> {
        loop {
            self.buf.clear();
            if self
                .reader
                .read_line(&mut self.buf)
                .map_err(FrameSourceError::Io)?
                == 0
            {
                return Ok(None);
            }
            self.line += 1;
            let text = self.buf.trim();
            if text.is_empty() {
                continue;
            }
            return serde_json::from_str(text)
                .map(Some)
                .map_err(|source| FrameSourceError::Parse {
                    line: self.line,
                    source,
                });
        }
    }
}

/// Frames pushed by a detector running on another thread.
///
/// Each call waits for one frame and then drains whatever else is queued, handing out
/// only the newest frame. Older queued frames are superseded and dropped.
#[derive(Debug)]
pub struct LatestFrameSource {
    receiver: Receiver<Frame>,
    superseded: u64,
}

impl LatestFrameSource {
    #[must_use]
    pub fn new(receiver: Receiver<Frame>) -> Self {
        Self {
            receiver,
            superseded: 0,
        }
    }

    /// Creates a source together with the sender the detector pushes frames into.
    #[must_use]
    pub fn channel() -> (Sender<Frame>, Self) {
        let (sender, receiver) = mpsc::channel();
        (sender, Self::new(receiver))
    }

    /// Total number of frames dropped in favor of a newer one.
    #[must_use]
    pub fn superseded(&self) -> u64 {
        self.superseded
    }
}

impl FrameSource for LatestFrameSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, FrameSourceError> {
        let Ok(mut frame) = self.receiver.recv() else {
            return Ok(None);
        };
        let mut dropped = 0;
        loop {
            match self.receiver.try_recv() {
                Ok(newer) => {
                    frame = newer;
                    dropped += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        if dropped > 0 {
            self.superseded += dropped;
            tracing::warn!(dropped, "skipped stale frames");
        }
        Ok(Some(frame))
    }
}
