//! Audit entry data structures
//!
//! Defines the operations that can be audited and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ExpenseId, ExpenseRecord};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Record was added to the ledger
    Create,
    /// Record was removed from the ledger
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit entry
///
/// Records one ledger mutation together with a JSON snapshot of the record
/// as it was before (deletes) or after (creates) the operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Full UUID of the affected record
    pub entity_id: String,

    /// Description of the affected record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create an audit entry for a record that was just added
    pub fn create(record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_id: record.id.as_uuid().to_string(),
            entity_name: Some(record.description.clone()),
            before: None,
            after: serde_json::to_value(record).ok(),
        }
    }

    /// Create an audit entry for a record that was just removed
    pub fn delete(record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_id: record.id.as_uuid().to_string(),
            entity_name: Some(record.description.clone()),
            before: serde_json::to_value(record).ok(),
            after: None,
        }
    }

    /// Format the entry for human-readable output, with the short id
    pub fn format_human_readable(&self) -> String {
        let id = match ExpenseId::parse(&self.entity_id) {
            Ok(id) => id.to_string(),
            Err(_) => self.entity_id.clone(),
        };
        let mut output = format!(
            "[{}] {} Expense {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        output
    }
}
