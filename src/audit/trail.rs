//! In-memory audit trail
//!
//! Collects audit entries for the lifetime of the process. Entries can be
//! written out as line-delimited JSON (JSONL) to any writer.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};

use super::entry::AuditEntry;

/// Append-only list of audit entries, oldest first
#[derive(Debug, Clone, Default)]
pub struct AuditTrail {
    entries: Vec<AuditEntry>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn record(&mut self, entry: AuditEntry) {
        self.entries.push(entry);
    }

    /// All entries in chronological order (oldest first)
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every entry as one JSON line and flush once at the end
    pub fn write_jsonl<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        for entry in &self.entries {
            let json = serde_json::to_string(entry).map_err(|e| {
                LedgerError::Json(format!("Failed to serialize audit entry: {}", e))
            })?;

            writeln!(writer, "{}", json)
                .map_err(|e| LedgerError::Io(format!("Failed to write audit entry: {}", e)))?;
        }

        writer
            .flush()
            .map_err(|e| LedgerError::Io(format!("Failed to flush audit trail: {}", e)))?;

        Ok(())
    }
}
