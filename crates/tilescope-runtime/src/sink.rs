use std::{
    io::{self, Write},
    sync::Arc,
};

use crate::pipeline::Snapshot;

/// Receiver of published snapshots (presentation layer, log file, ...).
pub trait SnapshotSink {
    fn publish(&mut self, snapshot: &Arc<Snapshot>) -> io::Result<()>;
}

/// Collects snapshots in memory.
impl SnapshotSink for Vec<Snapshot> {
    fn publish(&mut self, snapshot: &Arc<Snapshot>) -> io::Result<()> {
        self.push(Snapshot::clone(snapshot));
        Ok(())
    }
}

/// Keeps the shared snapshots themselves.
impl SnapshotSink for Vec<Arc<Snapshot>> {
    fn publish(&mut self, snapshot: &Arc<Snapshot>) -> io::Result<()> {
        self.push(Arc::clone(snapshot));
        Ok(())
    }
}

/// Writes each snapshot as one line of JSON and flushes it.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W> JsonLinesSink<W>
where
    W: Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> SnapshotSink for JsonLinesSink<W>
where
    W: Write,
{
    fn publish(&mut self, snapshot: &Arc<Snapshot>) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, snapshot.as_ref())?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}
