//! Record sinks: where finished role records go.
//!
//! Persistence itself (database tables, durability) is a collaborator's
//! concern; the sinks here are thin adapters over it.

use crate::roles::RoleRecord;
use crate::{Error, Result};
use std::io::Write;

/// Consumer of finished role records.
///
/// Records arrive in whatever order the producer emits them and are
/// owned by the sink thereafter. A sink error is cross-cutting: it
/// aborts the run that produced the record.
pub trait RecordSink {
    /// Accept one finished record.
    fn accept(&mut self, record: RoleRecord) -> Result<()>;
}

impl RecordSink for Vec<RoleRecord> {
    fn accept(&mut self, record: RoleRecord) -> Result<()> {
        self.push(record);
        Ok(())
    }
}

/// Sink writing one JSON object per line to any [`Write`] target.
///
/// The line shape matches the serde form of [`RoleRecord`]: a `sentence`
/// field plus one array per role, which is what downstream bulk loaders
/// ingest.
#[derive(Debug)]
pub struct JsonlSink<W> {
    writer: W,
}

impl<W: Write> JsonlSink<W> {
    /// Create a sink over a writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> RecordSink for JsonlSink<W> {
    fn accept(&mut self, record: RoleRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &record)
            .map_err(|e| Error::sink(e.to_string()))?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
