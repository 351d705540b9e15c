//! Compliance audit trail for the data merge resolver.
//!
//! Every merge rule that fires appends a structured entry. The entry kind
//! is a tag set at creation time; consumers render by `kind` and must never
//! pattern-match the message text. Insertion order is the explanation order
//! (log order = merge-rule order) and is preserved.
//!
//! # Example
//!
//! ```rust
//! use eurostudy_core_rs::{AuditEntry, AuditKind, AuditLog};
//!
//! let mut log = AuditLog::new();
//! log.push(AuditEntry::info("Applied international tuition rate"));
//! log.push(AuditEntry::warning("Real costs exceed the visa minimum"));
//!
//! assert_eq!(log.len(), 2);
//! assert_eq!(log.warnings().count(), 1);
//! assert_eq!(log.entries()[0].kind, AuditKind::Info);
//! ```

use serde::{Deserialize, Serialize};

/// Kind of an audit entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditKind {
    /// A rule was applied as expected
    Info,
    /// A data inconsistency worth the user's attention
    Warning,
}

/// One structured entry in the compliance audit trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub kind: AuditKind,
    pub message: String,
}

impl AuditEntry {
    /// Create an Info entry
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: AuditKind::Info,
            message: message.into(),
        }
    }

    /// Create a Warning entry
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: AuditKind::Warning,
            message: message.into(),
        }
    }
}

/// Ordered audit trail produced by one resolve call.
///
/// A thin wrapper around `Vec<AuditEntry>` with query helpers; ordering is
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    /// Create a new empty audit log
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, preserving insertion order
    pub fn push(&mut self, entry: AuditEntry) {
        self.entries.push(entry);
    }

    /// Number of entries logged
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in insertion order
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// Entries tagged as warnings
    pub fn warnings(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries
            .iter()
            .filter(|e| e.kind == AuditKind::Warning)
    }

    /// Entries tagged as info
    pub fn infos(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter().filter(|e| e.kind == AuditKind::Info)
    }

    /// True if any entry is a warning
    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_constructors() {
        let info = AuditEntry::info("applied rate");
        assert_eq!(info.kind, AuditKind::Info);
        assert_eq!(info.message, "applied rate");

        let warn = AuditEntry::warning("costs exceed minimum");
        assert_eq!(warn.kind, AuditKind::Warning);
    }

    #[test]
    fn test_log_preserves_insertion_order() {
        let mut log = AuditLog::new();
        log.push(AuditEntry::info("first"));
        log.push(AuditEntry::warning("second"));
        log.push(AuditEntry::info("third"));

        let messages: Vec<&str> = log.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_log_filters_by_kind() {
        let mut log = AuditLog::new();
        assert!(log.is_empty());
        assert!(!log.has_warnings());

        log.push(AuditEntry::info("a"));
        log.push(AuditEntry::warning("b"));

        assert_eq!(log.infos().count(), 1);
        assert_eq!(log.warnings().count(), 1);
        assert!(log.has_warnings());
        assert_eq!(log.len(), 2);
    }
}
